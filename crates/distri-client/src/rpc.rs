/*!
# Ledger RPC

The four network round-trips the marketplace client needs, behind a trait
so the orchestration logic can run against any ledger connection.
*/

use async_trait::async_trait;
use solana_client::{
    client_error::{ClientError as RpcClientError, ClientErrorKind},
    nonblocking::rpc_client::RpcClient,
    rpc_request::RpcError,
};
use solana_sdk::{
    commitment_config::CommitmentConfig, hash::Hash, pubkey::Pubkey, signature::Signature,
    transaction::{self, Transaction},
};

#[async_trait]
pub trait LedgerRpc: Send + Sync {
    /// Recent blockhash and the last block height at which it is valid.
    async fn get_latest_blockhash(
        &self,
        commitment: CommitmentConfig,
    ) -> Result<(Hash, u64), RpcClientError>;

    /// Submits a signed transaction. Returns as soon as the node accepts
    /// it; says nothing about finality.
    async fn send_transaction(&self, transaction: &Transaction)
        -> Result<Signature, RpcClientError>;

    /// `None` while the transaction has not reached `commitment`.
    async fn get_signature_status(
        &self,
        signature: &Signature,
        commitment: CommitmentConfig,
    ) -> Result<Option<transaction::Result<()>>, RpcClientError>;

    async fn get_block_height(&self, commitment: CommitmentConfig)
        -> Result<u64, RpcClientError>;

    /// Raw base-unit balance, or `None` when the token account does not
    /// exist.
    async fn get_token_account_balance(
        &self,
        address: &Pubkey,
    ) -> Result<Option<u64>, RpcClientError>;
}

#[async_trait]
impl LedgerRpc for RpcClient {
    async fn get_latest_blockhash(
        &self,
        commitment: CommitmentConfig,
    ) -> Result<(Hash, u64), RpcClientError> {
        self.get_latest_blockhash_with_commitment(commitment).await
    }

    async fn send_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<Signature, RpcClientError> {
        RpcClient::send_transaction(self, transaction).await
    }

    async fn get_signature_status(
        &self,
        signature: &Signature,
        commitment: CommitmentConfig,
    ) -> Result<Option<transaction::Result<()>>, RpcClientError> {
        self.get_signature_status_with_commitment(signature, commitment)
            .await
    }

    async fn get_block_height(
        &self,
        commitment: CommitmentConfig,
    ) -> Result<u64, RpcClientError> {
        self.get_block_height_with_commitment(commitment).await
    }

    async fn get_token_account_balance(
        &self,
        address: &Pubkey,
    ) -> Result<Option<u64>, RpcClientError> {
        let balance = match RpcClient::get_token_account_balance(self, address).await {
            Ok(balance) => balance,
            Err(e) if is_missing_account(&e) => return Ok(None),
            Err(e) => return Err(e),
        };

        balance.amount.parse::<u64>().map(Some).map_err(|e| {
            ClientErrorKind::Custom(format!(
                "Invalid token amount {:?} for {}: {}",
                balance.amount, address, e
            ))
            .into()
        })
    }
}

/// JSON-RPC "invalid params", which the node also uses for a missing account.
const JSON_RPC_INVALID_PARAMS: i64 = -32602;

/// Only the node's "could not find account" answer counts as a missing
/// account. Every other response error is a real failure.
fn is_missing_account(error: &RpcClientError) -> bool {
    matches!(
        error.kind(),
        ClientErrorKind::RpcError(RpcError::RpcResponseError { code, message, .. })
            if *code == JSON_RPC_INVALID_PARAMS && message.contains("could not find account")
    )
}
