/*!
# Transaction Builders

Unsigned transaction envelopes for marketplace instructions.

- **Unsigned**: callers obtain signatures from their signer
- **RPC independent**: the caller supplies the recent blockhash
*/

use crate::{build_claim_ix, AddressFinder, RewardClaim, SdkError, SdkResult};
use solana_sdk::{
    hash::Hash, instruction::Instruction, message::Message, pubkey::Pubkey,
    transaction::Transaction,
};

/// Stamps `instructions` with `payer` and `recent_blockhash`. The
/// signature slots are left empty.
pub fn build_transaction(
    instructions: &[Instruction],
    payer: &Pubkey,
    recent_blockhash: Hash,
) -> SdkResult<Transaction> {
    if instructions.is_empty() {
        return Err(SdkError::Encoding(
            "Cannot create transaction with no instructions".to_string(),
        ));
    }

    let message = Message::new_with_blockhash(instructions, Some(payer), &recent_blockhash);
    Ok(Transaction::new_unsigned(message))
}

/// One `claim` instruction in its own transaction.
pub fn build_claim_tx(
    address_finder: &AddressFinder,
    claim: &RewardClaim,
    payer: &Pubkey,
    recent_blockhash: Hash,
) -> SdkResult<Transaction> {
    let (claim_ix, _, _) = build_claim_ix(address_finder, claim)?;
    build_transaction(&[claim_ix], payer, recent_blockhash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MachineUuid;

    #[test]
    fn test_build_transaction_empty_fails() {
        let result = build_transaction(&[], &Pubkey::new_unique(), Hash::default());

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("no instructions"));
    }

    #[test]
    fn test_build_claim_tx() {
        let finder = AddressFinder::new(Pubkey::new_unique(), Pubkey::new_unique());
        let owner = Pubkey::new_unique();
        let claim = RewardClaim::new(3, MachineUuid::new([2u8; 16]), owner);
        let recent_blockhash = Hash::new_unique();

        let tx = build_claim_tx(&finder, &claim, &owner, recent_blockhash).unwrap();

        assert_eq!(tx.message.instructions.len(), 1);
        assert_eq!(tx.message.recent_blockhash, recent_blockhash);
        assert_eq!(tx.message.header.num_required_signatures, 1);
        assert_eq!(tx.message.account_keys[0], owner);
        assert!(!tx.is_signed());
    }
}
