use crate::{TxBatchConfig, TxBatchError};
use distri_client::{ClientError, LedgerRpc, SignerSession};
use distri_sdk::{build_claim_tx, AddressFinder, RewardClaim, SdkResult};
use solana_sdk::{hash::Hash, pubkey::Pubkey, signature::Signature, transaction::Transaction};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Outcome of one claim in a batch: the network-assigned signature, or why
/// the node refused it.
pub type ClaimSubmission = Result<Signature, TxBatchError>;

/// Claims many reward periods with one blockhash and one signer approval
pub struct BatchClaimClient {
    address_finder: AddressFinder,
    rpc: Arc<dyn LedgerRpc>,
    signer: Arc<SignerSession>,
    config: TxBatchConfig,
}

impl BatchClaimClient {
    /// Create a new client with default configuration
    pub fn new(
        address_finder: AddressFinder,
        rpc: Arc<dyn LedgerRpc>,
        signer: Arc<SignerSession>,
    ) -> Self {
        Self::with_config(address_finder, rpc, signer, TxBatchConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(
        address_finder: AddressFinder,
        rpc: Arc<dyn LedgerRpc>,
        signer: Arc<SignerSession>,
        config: TxBatchConfig,
    ) -> Self {
        Self {
            address_finder,
            rpc,
            signer,
            config,
        }
    }

    pub fn payer_pubkey(&self) -> Pubkey {
        self.signer.pubkey()
    }

    /// Send one `claim` transaction per entry of `claims`.
    ///
    /// All transactions share a single blockhash and are signed in a single
    /// signer call; if that call fails nothing is sent. They are then sent
    /// one at a time in input order. A rejected item does not stop the
    /// items after it. Confirmation is not awaited.
    ///
    /// The returned outcomes line up with `claims`.
    pub async fn claim_batch(
        &self,
        claims: &[RewardClaim],
        payer: &Pubkey,
    ) -> Result<Vec<ClaimSubmission>, TxBatchError> {
        if claims.is_empty() {
            return Ok(vec![]);
        }

        if claims.len() > self.config.large_batch_warning_threshold {
            warn!(
                "Claim batch of {} exceeds {}; later claims may be sent after the shared blockhash expires",
                claims.len(),
                self.config.large_batch_warning_threshold
            );
        }

        // 1. Derive and encode every claim before touching the network
        let mut transactions = self.build_claim_transactions(claims, payer)?;

        // 2. One blockhash for the whole batch
        let (recent_blockhash, last_valid_block_height) = self
            .rpc
            .get_latest_blockhash(self.config.blockhash_commitment)
            .await
            .map_err(ClientError::from)?;
        for transaction in &mut transactions {
            transaction.message.recent_blockhash = recent_blockhash;
        }
        debug!(
            "Built {} claim transactions on blockhash {} (valid through block {})",
            transactions.len(),
            recent_blockhash,
            last_valid_block_height
        );

        // 3. One signer round-trip
        self.signer
            .sign_all(&mut transactions)
            .await
            .map_err(|e| match e {
                ClientError::SigningRejected(reason) => TxBatchError::SigningRejected(reason),
                other => TxBatchError::Client(other),
            })?;

        // 4. Sequential sends, in order
        let results = self.send_sequentially(&transactions).await;

        let failed = results.iter().filter(|result| result.is_err()).count();
        info!(
            "Sent {} of {} claim transactions ({} rejected)",
            results.len() - failed,
            results.len(),
            failed
        );
        Ok(results)
    }

    fn build_claim_transactions(
        &self,
        claims: &[RewardClaim],
        payer: &Pubkey,
    ) -> SdkResult<Vec<Transaction>> {
        claims
            .iter()
            .map(|claim| build_claim_tx(&self.address_finder, claim, payer, Hash::default()))
            .collect()
    }

    async fn send_sequentially(&self, transactions: &[Transaction]) -> Vec<ClaimSubmission> {
        let mut results = Vec::with_capacity(transactions.len());

        for (index, transaction) in transactions.iter().enumerate() {
            match self.rpc.send_transaction(transaction).await {
                Ok(signature) => {
                    debug!("Claim {} sent: {}", index, signature);
                    results.push(Ok(signature));
                }
                Err(source) => {
                    warn!("Claim {} rejected: {}", index, source);
                    results.push(Err(TxBatchError::Submission { index, source }));
                }
            }
        }

        results
    }
}
