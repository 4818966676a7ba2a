use async_trait::async_trait;
use distri_client::MarketSigner;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    transaction::Transaction,
};
use std::{
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Mutex,
    },
    time::Duration,
};

/// Wallet double that signs with a real keypair, so signatures verify.
///
/// Can be told to decline, to return too few signatures, or to hold each
/// request for a while. Counts calls and records the highest number of
/// requests it saw in flight at once.
pub struct MockSigner {
    keypair: Keypair,
    reject: AtomicBool,
    drop_last_signature: AtomicBool,
    delay: Mutex<Duration>,
    sign_calls: AtomicUsize,
    sign_all_calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockSigner {
    pub fn new(keypair: Keypair) -> Self {
        Self {
            keypair,
            reject: AtomicBool::new(false),
            drop_last_signature: AtomicBool::new(false),
            delay: Mutex::new(Duration::ZERO),
            sign_calls: AtomicUsize::new(0),
            sign_all_calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn reject_all(&self) {
        self.reject.store(true, Ordering::SeqCst);
    }

    pub fn drop_last_signature(&self) {
        self.drop_last_signature.store(true, Ordering::SeqCst);
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = delay;
    }

    pub fn sign_calls(&self) -> usize {
        self.sign_calls.load(Ordering::SeqCst)
    }

    pub fn sign_all_calls(&self) -> usize {
        self.sign_all_calls.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    async fn enter(&self) -> Result<(), String> {
        let in_flight = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(in_flight, Ordering::SeqCst);

        let delay = *self.delay.lock().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        if self.reject.load(Ordering::SeqCst) {
            return Err("User rejected the request".to_string());
        }
        Ok(())
    }

    fn sign_message(&self, transaction: &Transaction) -> Signature {
        self.keypair.sign_message(&transaction.message_data())
    }
}

#[async_trait]
impl MarketSigner for MockSigner {
    fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    async fn sign_transaction(&self, transaction: &Transaction) -> Result<Signature, String> {
        self.sign_calls.fetch_add(1, Ordering::SeqCst);
        self.enter().await?;
        Ok(self.sign_message(transaction))
    }

    async fn sign_all_transactions(
        &self,
        transactions: &[Transaction],
    ) -> Result<Vec<Signature>, String> {
        self.sign_all_calls.fetch_add(1, Ordering::SeqCst);
        self.enter().await?;

        let mut signatures: Vec<Signature> = transactions
            .iter()
            .map(|transaction| self.sign_message(transaction))
            .collect();
        if self.drop_last_signature.load(Ordering::SeqCst) {
            signatures.pop();
        }
        Ok(signatures)
    }
}
