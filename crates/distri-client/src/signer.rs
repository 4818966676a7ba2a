use crate::{ClientError, ClientResult};
use async_trait::async_trait;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair, Signature},
    signer::Signer,
    transaction::Transaction,
};
use std::{path::Path, sync::Arc};
use tokio::sync::Mutex;
use tracing::debug;

/// Abstraction over whatever holds the wallet's private key:
/// 1. Local keypairs (CLI, services)
/// 2. External wallets that approve transactions interactively
///
/// Signing one transaction and signing a batch are separate operations so
/// a wallet can present a batch as a single approval.
#[async_trait]
pub trait MarketSigner: Send + Sync {
    fn pubkey(&self) -> Pubkey;

    /// Signature over `transaction.message_data()`.
    async fn sign_transaction(&self, transaction: &Transaction) -> Result<Signature, String>;

    /// One signature per transaction, in the same order.
    async fn sign_all_transactions(
        &self,
        transactions: &[Transaction],
    ) -> Result<Vec<Signature>, String>;
}

pub struct KeypairSigner {
    keypair: Keypair,
}

impl KeypairSigner {
    pub fn new(keypair: Keypair) -> Self {
        Self { keypair }
    }

    pub fn from_file(path: impl AsRef<Path>) -> ClientResult<Self> {
        let path = path.as_ref();
        let keypair = read_keypair_file(path).map_err(|e| {
            ClientError::InvalidConfig(format!(
                "Failed to read keypair {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Self::new(keypair))
    }
}

#[async_trait]
impl MarketSigner for KeypairSigner {
    fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    async fn sign_transaction(&self, transaction: &Transaction) -> Result<Signature, String> {
        self.keypair
            .try_sign_message(&transaction.message_data())
            .map_err(|e| e.to_string())
    }

    async fn sign_all_transactions(
        &self,
        transactions: &[Transaction],
    ) -> Result<Vec<Signature>, String> {
        transactions
            .iter()
            .map(|transaction| {
                self.keypair
                    .try_sign_message(&transaction.message_data())
                    .map_err(|e| e.to_string())
            })
            .collect()
    }
}

/// The one signer of a session. Calls into the signer are serialized, and
/// returned signatures are written into the transactions' signer slots.
pub struct SignerSession {
    signer: Arc<dyn MarketSigner>,
    lock: Mutex<()>,
}

impl SignerSession {
    pub fn new(signer: Arc<dyn MarketSigner>) -> Self {
        Self {
            signer,
            lock: Mutex::new(()),
        }
    }

    pub fn pubkey(&self) -> Pubkey {
        self.signer.pubkey()
    }

    pub async fn sign(&self, transaction: &mut Transaction) -> ClientResult<()> {
        let pubkey = self.pubkey();
        let slot = signer_slot(transaction, &pubkey)?;

        let signature = {
            let _guard = self.lock.lock().await;
            self.signer
                .sign_transaction(transaction)
                .await
                .map_err(ClientError::SigningRejected)?
        };

        place_signature(transaction, slot, signature)?;
        debug!("Transaction signed by {}", pubkey);
        Ok(())
    }

    /// Signs every transaction with a single signer call. Either all
    /// transactions end up signed or none are touched.
    pub async fn sign_all(&self, transactions: &mut [Transaction]) -> ClientResult<()> {
        let pubkey = self.pubkey();
        let slots = transactions
            .iter()
            .map(|transaction| signer_slot(transaction, &pubkey))
            .collect::<ClientResult<Vec<_>>>()?;

        let signatures = {
            let _guard = self.lock.lock().await;
            self.signer
                .sign_all_transactions(transactions)
                .await
                .map_err(ClientError::SigningRejected)?
        };

        if signatures.len() != transactions.len() {
            return Err(ClientError::SigningRejected(format!(
                "signer returned {} signatures for {} transactions",
                signatures.len(),
                transactions.len()
            )));
        }

        let mut signed: Vec<Transaction> = transactions.to_vec();
        for ((transaction, slot), signature) in signed.iter_mut().zip(slots).zip(signatures) {
            place_signature(transaction, slot, signature)?;
        }
        transactions.clone_from_slice(&signed);

        debug!("{} transactions signed by {}", transactions.len(), pubkey);
        Ok(())
    }
}

fn signer_slot(transaction: &Transaction, pubkey: &Pubkey) -> ClientResult<usize> {
    let required = usize::from(transaction.message.header.num_required_signatures);
    if required != 1 {
        return Err(ClientError::SigningRejected(format!(
            "transaction requires {} signatures, session holds one key",
            required
        )));
    }

    transaction
        .message
        .account_keys
        .iter()
        .take(required)
        .position(|key| key == pubkey)
        .ok_or_else(|| {
            ClientError::SigningRejected(format!("{} is not a required signer", pubkey))
        })
}

fn place_signature(
    transaction: &mut Transaction,
    slot: usize,
    signature: Signature,
) -> ClientResult<()> {
    match transaction.signatures.get_mut(slot) {
        Some(existing) => *existing = signature,
        None => {
            return Err(ClientError::SigningRejected(format!(
                "transaction has no signature slot {}",
                slot
            )))
        }
    }

    transaction.verify().map_err(|e| {
        ClientError::SigningRejected(format!("signature does not verify: {}", e))
    })
}
