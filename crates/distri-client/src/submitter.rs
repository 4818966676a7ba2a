use crate::{
    ClientError, ClientResult, LedgerRpc, SignerSession, SubmitterConfig, TransactionResult,
};
use distri_sdk::build_transaction;
use solana_sdk::{
    hash::Hash, instruction::Instruction, pubkey::Pubkey, signature::Signature,
};
use std::sync::Arc;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// Sends one transaction at a time and follows it to a terminal state.
///
/// Nothing is retried: a failed or timed-out transaction is reported and
/// the caller decides whether to build a new one.
pub struct TransactionSubmitter {
    rpc: Arc<dyn LedgerRpc>,
    signer: Arc<SignerSession>,
    config: SubmitterConfig,
}

impl TransactionSubmitter {
    pub fn new(rpc: Arc<dyn LedgerRpc>, signer: Arc<SignerSession>) -> Self {
        Self::with_config(rpc, signer, SubmitterConfig::default())
    }

    pub fn with_config(
        rpc: Arc<dyn LedgerRpc>,
        signer: Arc<SignerSession>,
        config: SubmitterConfig,
    ) -> Self {
        Self {
            rpc,
            signer,
            config,
        }
    }

    pub fn config(&self) -> &SubmitterConfig {
        &self.config
    }

    /// Build, sign, send and confirm.
    ///
    /// `Err` means the transaction never reached the network (bad
    /// instructions, blockhash fetch failed, signer declined, send
    /// rejected). Once sent, the outcome is always an `Ok` terminal state.
    pub async fn submit(
        &self,
        instructions: &[Instruction],
        payer: &Pubkey,
    ) -> ClientResult<TransactionResult> {
        // Envelope first, so malformed input fails before any network call
        let mut transaction = build_transaction(instructions, payer, Hash::default())?;

        let (recent_blockhash, last_valid_block_height) = self
            .rpc
            .get_latest_blockhash(self.config.blockhash_commitment)
            .await?;
        transaction.message.recent_blockhash = recent_blockhash;
        debug!(
            "Built transaction with {} instruction(s) for {} on blockhash {}",
            instructions.len(),
            payer,
            recent_blockhash
        );

        self.signer.sign(&mut transaction).await?;

        let signature = self
            .rpc
            .send_transaction(&transaction)
            .await
            .map_err(ClientError::Submission)?;
        info!("Transaction sent: {}", signature);

        let result = self
            .wait_for_confirmation(&signature, last_valid_block_height)
            .await;
        match &result {
            TransactionResult::Confirmed { .. } => info!("Transaction confirmed: {}", signature),
            TransactionResult::Failed { error, code, .. } => {
                warn!(
                    "Transaction {} failed: {} (program error code {:?})",
                    signature, error, code
                )
            }
            TransactionResult::TimedOut { .. } => {
                warn!("Transaction {} not finalized, outcome unknown", signature)
            }
        }
        Ok(result)
    }

    /// One status read for an already-sent transaction. `None` while it
    /// has not reached the confirmation commitment.
    pub async fn query_confirmation(
        &self,
        signature: &Signature,
    ) -> ClientResult<Option<TransactionResult>> {
        let status = self
            .rpc
            .get_signature_status(signature, self.config.confirmation_commitment)
            .await?;

        Ok(status.map(|status| match status {
            Ok(()) => TransactionResult::Confirmed {
                signature: *signature,
            },
            Err(error) => TransactionResult::failed(*signature, error),
        }))
    }

    async fn wait_for_confirmation(
        &self,
        signature: &Signature,
        last_valid_block_height: u64,
    ) -> TransactionResult {
        let commitment = self.config.confirmation_commitment;
        sleep(self.config.settle_delay).await;

        loop {
            match self.query_confirmation(signature).await {
                Ok(Some(result)) => return result,
                Ok(None) => {}
                Err(e) => {
                    warn!("Status poll for {} failed: {}", signature, e);
                    return TransactionResult::TimedOut {
                        signature: *signature,
                    };
                }
            }

            match self.rpc.get_block_height(commitment).await {
                Ok(height) if height > last_valid_block_height => {
                    debug!(
                        "Blockhash for {} expired at height {} (valid through {})",
                        signature, height, last_valid_block_height
                    );
                    return TransactionResult::TimedOut {
                        signature: *signature,
                    };
                }
                Ok(height) => {
                    debug!(
                        "Transaction {} still pending at height {} (valid through {})",
                        signature, height, last_valid_block_height
                    );
                }
                Err(e) => {
                    warn!("Block height query for {} failed: {}", signature, e);
                    return TransactionResult::TimedOut {
                        signature: *signature,
                    };
                }
            }

            sleep(self.config.poll_interval).await;
        }
    }
}
