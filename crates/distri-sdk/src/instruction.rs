//! Instruction arguments. Each type serializes as its 8-byte Anchor
//! discriminator (`sha256("global:<name>")[..8]`) followed by the borsh
//! encoding of its fields.

use anchor_lang::{
    prelude::{borsh, AnchorSerialize},
    Discriminator, InstructionData,
};

#[derive(Debug, Clone, PartialEq, Eq, AnchorSerialize)]
pub struct MakeOffer {
    pub price: u64,
    pub duration: u64,
    pub disk: u64,
}

impl Discriminator for MakeOffer {
    const DISCRIMINATOR: &'static [u8] = &[0xd6, 0x62, 0x61, 0x23, 0x3b, 0x0c, 0x2c, 0xb2];
}

impl InstructionData for MakeOffer {}

#[derive(Debug, Clone, PartialEq, Eq, AnchorSerialize)]
pub struct CancelOffer {}

impl Discriminator for CancelOffer {
    const DISCRIMINATOR: &'static [u8] = &[0x5c, 0xcb, 0xdf, 0x28, 0x5c, 0x59, 0x35, 0x77];
}

impl InstructionData for CancelOffer {}

#[derive(Debug, Clone, PartialEq, Eq, AnchorSerialize)]
pub struct PlaceOrder {
    pub order_uuid: [u8; 16],
    pub duration: u64,
    pub metadata: String,
}

impl Discriminator for PlaceOrder {
    const DISCRIMINATOR: &'static [u8] = &[0x33, 0xc2, 0x9b, 0xaf, 0x6d, 0x82, 0x60, 0x6a];
}

impl InstructionData for PlaceOrder {}

#[derive(Debug, Clone, PartialEq, Eq, AnchorSerialize)]
pub struct RenewOrder {
    pub duration: u64,
}

impl Discriminator for RenewOrder {
    const DISCRIMINATOR: &'static [u8] = &[0xd8, 0xb4, 0x0c, 0x4c, 0x47, 0x2c, 0xa5, 0x97];
}

impl InstructionData for RenewOrder {}

#[derive(Debug, Clone, PartialEq, Eq, AnchorSerialize)]
pub struct RefundOrder {}

impl Discriminator for RefundOrder {
    const DISCRIMINATOR: &'static [u8] = &[0xa4, 0xa8, 0x2f, 0x90, 0x9a, 0x01, 0xf1, 0xff];
}

impl InstructionData for RefundOrder {}

#[derive(Debug, Clone, PartialEq, Eq, AnchorSerialize)]
pub struct Claim {
    pub period: u32,
}

impl Discriminator for Claim {
    const DISCRIMINATOR: &'static [u8] = &[0x3e, 0xc6, 0xd6, 0xc1, 0xd5, 0x9f, 0x6c, 0xd2];
}

impl InstructionData for Claim {}
