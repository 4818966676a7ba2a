use crate::{ClientError, ClientResult, LedgerRpc};
use distri_sdk::{amount::base_units_to_ui_amount, AddressFinder};
use rust_decimal::Decimal;
use solana_sdk::pubkey::Pubkey;
use std::sync::Arc;
use tracing::debug;

/// Reads an owner's marketplace-token balance from their associated token
/// account.
pub struct BalanceReader {
    rpc: Arc<dyn LedgerRpc>,
    address_finder: AddressFinder,
}

impl BalanceReader {
    pub fn new(rpc: Arc<dyn LedgerRpc>, address_finder: AddressFinder) -> Self {
        Self {
            rpc,
            address_finder,
        }
    }

    /// Balance in whole tokens. `AccountNotFound` when the owner has never
    /// held the token.
    pub async fn get_balance(&self, owner: &Pubkey) -> ClientResult<Decimal> {
        let (token_account, _) = self.address_finder.find_token_account_address(owner)?;

        let raw = self
            .rpc
            .get_token_account_balance(&token_account)
            .await?
            .ok_or(ClientError::AccountNotFound(token_account))?;

        debug!(
            "Token balance of {} ({}): {} base units",
            owner, token_account, raw
        );
        Ok(base_units_to_ui_amount(raw))
    }

    /// Same as [`get_balance`](Self::get_balance) with a missing token
    /// account read as zero.
    pub async fn get_balance_or_zero(&self, owner: &Pubkey) -> ClientResult<Decimal> {
        match self.get_balance(owner).await {
            Err(ClientError::AccountNotFound(_)) => Ok(Decimal::ZERO),
            other => other,
        }
    }
}
