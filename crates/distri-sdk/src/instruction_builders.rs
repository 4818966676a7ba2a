use crate::{
    accounts, constants::MAX_METADATA_LEN, instruction, AddressFinder, MachineUuid, OrderUuid,
    RewardClaim, SdkError, SdkResult,
};
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{InstructionData, ToAccountMetas};
use solana_sdk::pubkey::Pubkey;

/// Wraps already-derived accounts and already-scaled arguments into an
/// instruction for `program_id`. Performs no validation of its own.
pub fn encode_instruction<A, D>(program_id: Pubkey, ix_accounts: &A, ix_data: &D) -> Instruction
where
    A: ToAccountMetas,
    D: InstructionData,
{
    Instruction {
        program_id,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    }
}

pub fn build_make_offer_ix(
    address_finder: &AddressFinder,
    owner: Pubkey,
    machine_uuid: &MachineUuid,
    price: u64,
    duration: u64,
    disk: u64,
) -> SdkResult<(Instruction, accounts::MakeOffer, instruction::MakeOffer)> {
    let (machine, _) = address_finder.find_machine_address(&owner, machine_uuid)?;

    let ix_accounts = accounts::MakeOffer { machine, owner };

    let ix_data = instruction::MakeOffer {
        price,
        duration,
        disk,
    };

    let ix = encode_instruction(address_finder.program_id, &ix_accounts, &ix_data);

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_cancel_offer_ix(
    address_finder: &AddressFinder,
    owner: Pubkey,
    machine_uuid: &MachineUuid,
) -> SdkResult<(Instruction, accounts::CancelOffer, instruction::CancelOffer)> {
    let (machine, _) = address_finder.find_machine_address(&owner, machine_uuid)?;

    let ix_accounts = accounts::CancelOffer { machine, owner };

    let ix_data = instruction::CancelOffer {};

    let ix = encode_instruction(address_finder.program_id, &ix_accounts, &ix_data);

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_place_order_ix(
    address_finder: &AddressFinder,
    buyer: Pubkey,
    machine: Pubkey,
    order_uuid: &OrderUuid,
    duration: u64,
    metadata: String,
) -> SdkResult<(Instruction, accounts::PlaceOrder, instruction::PlaceOrder)> {
    if metadata.len() > MAX_METADATA_LEN {
        return Err(SdkError::Encoding(format!(
            "order metadata is {} bytes, limit is {}",
            metadata.len(),
            MAX_METADATA_LEN
        )));
    }

    let (order, _) = address_finder.find_order_address(&buyer, order_uuid)?;
    let (buyer_token_account, _) = address_finder.find_token_account_address(&buyer)?;
    let (vault, _) = address_finder.find_vault_address()?;

    let ix_accounts = accounts::PlaceOrder {
        machine,
        order,
        buyer,
        buyer_token_account,
        vault,
        mint: address_finder.mint,
        token_program: address_finder.token_program_id,
        associated_token_program: address_finder.associated_token_program_id,
    };

    let ix_data = instruction::PlaceOrder {
        order_uuid: order_uuid.to_bytes(),
        duration,
        metadata,
    };

    let ix = encode_instruction(address_finder.program_id, &ix_accounts, &ix_data);

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_renew_order_ix(
    address_finder: &AddressFinder,
    buyer: Pubkey,
    machine: Pubkey,
    order_uuid: &OrderUuid,
    duration: u64,
) -> SdkResult<(Instruction, accounts::RenewOrder, instruction::RenewOrder)> {
    let (order, _) = address_finder.find_order_address(&buyer, order_uuid)?;
    let (buyer_token_account, _) = address_finder.find_token_account_address(&buyer)?;
    let (vault, _) = address_finder.find_vault_address()?;

    let ix_accounts = accounts::RenewOrder {
        machine,
        order,
        buyer,
        buyer_token_account,
        vault,
        mint: address_finder.mint,
        token_program: address_finder.token_program_id,
        associated_token_program: address_finder.associated_token_program_id,
    };

    let ix_data = instruction::RenewOrder { duration };

    let ix = encode_instruction(address_finder.program_id, &ix_accounts, &ix_data);

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_refund_order_ix(
    address_finder: &AddressFinder,
    buyer: Pubkey,
    machine: Pubkey,
    order_uuid: &OrderUuid,
    seller: Pubkey,
) -> SdkResult<(Instruction, accounts::RefundOrder, instruction::RefundOrder)> {
    let (order, _) = address_finder.find_order_address(&buyer, order_uuid)?;
    let (buyer_token_account, _) = address_finder.find_token_account_address(&buyer)?;
    let (seller_token_account, _) = address_finder.find_token_account_address(&seller)?;
    let (vault, _) = address_finder.find_vault_address()?;

    let ix_accounts = accounts::RefundOrder {
        machine,
        order,
        buyer,
        buyer_token_account,
        seller_token_account,
        vault,
        mint: address_finder.mint,
        token_program: address_finder.token_program_id,
        associated_token_program: address_finder.associated_token_program_id,
        system_program: address_finder.system_program_id,
    };

    let ix_data = instruction::RefundOrder {};

    let ix = encode_instruction(address_finder.program_id, &ix_accounts, &ix_data);

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_claim_ix(
    address_finder: &AddressFinder,
    claim: &RewardClaim,
) -> SdkResult<(Instruction, accounts::Claim, instruction::Claim)> {
    let (machine, _) = address_finder.find_machine_address(&claim.owner, &claim.machine_uuid)?;
    let (reward, _) = address_finder.find_reward_address(claim.period)?;
    let (reward_machine, _) = address_finder.find_reward_machine_address(
        claim.period,
        &claim.owner,
        &claim.machine_uuid,
    )?;
    let (owner_token_account, _) = address_finder.find_token_account_address(&claim.owner)?;
    let (reward_pool, _) = address_finder.find_reward_pool_address()?;

    let ix_accounts = accounts::Claim {
        machine,
        reward,
        reward_machine,
        owner: claim.owner,
        owner_token_account,
        reward_pool,
        mint: address_finder.mint,
        token_program: address_finder.token_program_id,
        associated_token_program: address_finder.associated_token_program_id,
        system_program: address_finder.system_program_id,
    };

    let ix_data = instruction::Claim {
        period: claim.period,
    };

    let ix = encode_instruction(address_finder.program_id, &ix_accounts, &ix_data);

    Ok((ix, ix_accounts, ix_data))
}
