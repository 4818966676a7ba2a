use distri_sdk::SdkError;
use solana_sdk::{pubkey::Pubkey, signature::Signature, transaction::TransactionError};
use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Sdk(#[from] SdkError),

    #[error("RPC error: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),

    #[error("Signing rejected: {0}")]
    SigningRejected(String),

    #[error("Transaction submission failed: {0}")]
    Submission(#[source] solana_client::client_error::ClientError),

    #[error("Transaction {signature} failed on-chain: {error}")]
    ConfirmationFailed {
        signature: Signature,
        error: TransactionError,
        code: Option<u32>,
    },

    #[error("Transaction {signature} was not finalized within its blockhash validity window")]
    ConfirmationTimedOut { signature: Signature },

    #[error("Account not found: {0}")]
    AccountNotFound(Pubkey),

    #[error("Invalid account data: {0}")]
    InvalidAccountData(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// Network-stage failures a caller may retry with a fresh blockhash.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Rpc(_) | Self::SigningRejected(_) | Self::Submission(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdk_errors_pass_through() {
        let err: ClientError = SdkError::Encoding("bad width".to_string()).into();
        assert_eq!(err.to_string(), "Encoding error: bad width");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_signing_rejected_is_recoverable() {
        let err = ClientError::SigningRejected("user declined".to_string());
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "Signing rejected: user declined");
    }
}
