use distri_client::ClientError;
use distri_sdk::SdkError;
use thiserror::Error;

/// Errors that can occur during batch claim operations
#[derive(Error, Debug)]
pub enum TxBatchError {
    /// Failure before anything was signed: a claim could not be encoded or
    /// the blockhash could not be fetched.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The signer declined the batch. Nothing was sent.
    #[error("Batch signing rejected: {0}")]
    SigningRejected(String),

    /// The node rejected one item of the batch.
    #[error("Claim {index} submission failed: {source}")]
    Submission {
        index: usize,
        #[source]
        source: solana_client::client_error::ClientError,
    },
}

impl From<SdkError> for TxBatchError {
    fn from(error: SdkError) -> Self {
        Self::Client(ClientError::Sdk(error))
    }
}
