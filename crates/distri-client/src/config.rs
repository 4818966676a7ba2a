use solana_sdk::commitment_config::{CommitmentConfig, CommitmentLevel};
use std::time::Duration;

/// How long to wait after sending before the first status poll, so the
/// transaction has propagated.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(3);

/// Wait between status polls while the transaction is still pending.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Strictness at which a transaction counts as confirmed.
pub const CONFIRMATION_COMMITMENT: CommitmentConfig = CommitmentConfig {
    commitment: CommitmentLevel::Finalized,
};

/// Configuration for single-transaction submission
#[derive(Debug, Clone)]
pub struct SubmitterConfig {
    /// Delay between send and the first status poll
    pub settle_delay: Duration,

    /// Delay between consecutive status polls
    pub poll_interval: Duration,

    /// Commitment level for transaction confirmation
    pub confirmation_commitment: CommitmentConfig,

    /// Commitment level for fetching the recent blockhash
    pub blockhash_commitment: CommitmentConfig,
}

impl Default for SubmitterConfig {
    fn default() -> Self {
        Self {
            settle_delay: DEFAULT_SETTLE_DELAY,
            poll_interval: DEFAULT_POLL_INTERVAL,
            confirmation_commitment: CONFIRMATION_COMMITMENT,
            blockhash_commitment: CONFIRMATION_COMMITMENT,
        }
    }
}

impl SubmitterConfig {
    pub fn with_settle_delay(mut self, settle_delay: Duration) -> Self {
        self.settle_delay = settle_delay;
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SubmitterConfig::default();
        assert_eq!(config.settle_delay, Duration::from_secs(3));
        assert_eq!(config.poll_interval, Duration::from_secs(2));
        assert_eq!(config.confirmation_commitment, CommitmentConfig::finalized());
        assert_eq!(config.blockhash_commitment, CommitmentConfig::finalized());
    }

    #[test]
    fn test_config_builder() {
        let config = SubmitterConfig::default()
            .with_settle_delay(Duration::ZERO)
            .with_poll_interval(Duration::from_millis(10));

        assert_eq!(config.settle_delay, Duration::ZERO);
        assert_eq!(config.poll_interval, Duration::from_millis(10));
    }
}
