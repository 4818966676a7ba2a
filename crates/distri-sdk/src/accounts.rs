//! Account lists for every marketplace instruction, in the exact order the
//! program expects them.

use anchor_lang::{solana_program::instruction::AccountMeta, ToAccountMetas};
use solana_sdk::pubkey::Pubkey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MakeOffer {
    pub machine: Pubkey,
    pub owner: Pubkey,
}

impl ToAccountMetas for MakeOffer {
    fn to_account_metas(&self, is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.machine, false),
            AccountMeta::new(self.owner, is_signer.unwrap_or(true)),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelOffer {
    pub machine: Pubkey,
    pub owner: Pubkey,
}

impl ToAccountMetas for CancelOffer {
    fn to_account_metas(&self, is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.machine, false),
            AccountMeta::new(self.owner, is_signer.unwrap_or(true)),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceOrder {
    pub machine: Pubkey,
    pub order: Pubkey,
    pub buyer: Pubkey,
    pub buyer_token_account: Pubkey,
    pub vault: Pubkey,
    pub mint: Pubkey,
    pub token_program: Pubkey,
    pub associated_token_program: Pubkey,
}

impl ToAccountMetas for PlaceOrder {
    fn to_account_metas(&self, is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.machine, false),
            AccountMeta::new(self.order, false),
            AccountMeta::new(self.buyer, is_signer.unwrap_or(true)),
            AccountMeta::new(self.buyer_token_account, false),
            AccountMeta::new(self.vault, false),
            AccountMeta::new_readonly(self.mint, false),
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new_readonly(self.associated_token_program, false),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenewOrder {
    pub machine: Pubkey,
    pub order: Pubkey,
    pub buyer: Pubkey,
    pub buyer_token_account: Pubkey,
    pub vault: Pubkey,
    pub mint: Pubkey,
    pub token_program: Pubkey,
    pub associated_token_program: Pubkey,
}

impl ToAccountMetas for RenewOrder {
    fn to_account_metas(&self, is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.machine, false),
            AccountMeta::new(self.order, false),
            AccountMeta::new(self.buyer, is_signer.unwrap_or(true)),
            AccountMeta::new(self.buyer_token_account, false),
            AccountMeta::new(self.vault, false),
            AccountMeta::new_readonly(self.mint, false),
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new_readonly(self.associated_token_program, false),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefundOrder {
    pub machine: Pubkey,
    pub order: Pubkey,
    pub buyer: Pubkey,
    pub buyer_token_account: Pubkey,
    pub seller_token_account: Pubkey,
    pub vault: Pubkey,
    pub mint: Pubkey,
    pub token_program: Pubkey,
    pub associated_token_program: Pubkey,
    pub system_program: Pubkey,
}

impl ToAccountMetas for RefundOrder {
    fn to_account_metas(&self, is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.machine, false),
            AccountMeta::new(self.order, false),
            AccountMeta::new(self.buyer, is_signer.unwrap_or(true)),
            AccountMeta::new(self.buyer_token_account, false),
            AccountMeta::new(self.seller_token_account, false),
            AccountMeta::new(self.vault, false),
            AccountMeta::new_readonly(self.mint, false),
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new_readonly(self.associated_token_program, false),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}

/// `owner` is not a signer here: the fee payer's signature covers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Claim {
    pub machine: Pubkey,
    pub reward: Pubkey,
    pub reward_machine: Pubkey,
    pub owner: Pubkey,
    pub owner_token_account: Pubkey,
    pub reward_pool: Pubkey,
    pub mint: Pubkey,
    pub token_program: Pubkey,
    pub associated_token_program: Pubkey,
    pub system_program: Pubkey,
}

impl ToAccountMetas for Claim {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.machine, false),
            AccountMeta::new(self.reward, false),
            AccountMeta::new(self.reward_machine, false),
            AccountMeta::new(self.owner, false),
            AccountMeta::new(self.owner_token_account, false),
            AccountMeta::new(self.reward_pool, false),
            AccountMeta::new_readonly(self.mint, false),
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new_readonly(self.associated_token_program, false),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}
