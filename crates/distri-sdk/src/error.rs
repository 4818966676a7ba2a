use solana_sdk::pubkey::PubkeyError;
use thiserror::Error;

pub type SdkResult<T> = Result<T, SdkError>;

/// Local, synchronous failures. None of these ever involve the network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SdkError {
    #[error("No off-curve bump found for seed tag {tag:?}")]
    DerivationExhausted { tag: String },

    #[error("Invalid seeds: {0}")]
    InvalidSeeds(#[from] PubkeyError),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Invalid uuid {value:?}: {reason}")]
    InvalidUuid { value: String, reason: String },

    #[error("Amount out of range: {0}")]
    AmountOutOfRange(String),
}
