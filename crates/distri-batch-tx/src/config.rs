use solana_sdk::commitment_config::CommitmentConfig;

/// Batches larger than this still go out as one batch; they only log a
/// warning that later items may outlive the shared blockhash.
pub const DEFAULT_LARGE_BATCH_WARNING_THRESHOLD: usize = 50;

/// Configuration for batch claim operations
#[derive(Debug, Clone)]
pub struct TxBatchConfig {
    /// Commitment level for the one blockhash shared by the whole batch
    pub blockhash_commitment: CommitmentConfig,

    /// Batch size above which a blockhash-expiry warning is logged
    pub large_batch_warning_threshold: usize,
}

impl Default for TxBatchConfig {
    fn default() -> Self {
        Self {
            blockhash_commitment: CommitmentConfig::finalized(),
            large_batch_warning_threshold: DEFAULT_LARGE_BATCH_WARNING_THRESHOLD,
        }
    }
}

impl TxBatchConfig {
    pub fn with_large_batch_warning_threshold(mut self, threshold: usize) -> Self {
        self.large_batch_warning_threshold = threshold;
        self
    }
}
