use distri_batch_tx::TxBatchError;
use distri_client::ClientError;
use distri_sdk::SdkError;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Sdk(#[from] SdkError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Batch(#[from] TxBatchError),

    #[error("Invalid pubkey {value}: {reason}")]
    InvalidPubkey { value: String, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{failed} of {total} claims were not sent")]
    ClaimsNotSent { failed: usize, total: usize },
}
