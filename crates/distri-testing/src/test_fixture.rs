use crate::{MockLedger, MockSigner};
use distri_client::{
    DistriClient, LedgerRpc, MarketSigner, SignerSession, SubmitterConfig, TransactionSubmitter,
};
use distri_sdk::{AddressFinder, MachineUuid, RewardClaim};
use sha2::{Digest, Sha256};
use solana_sdk::{
    pubkey::Pubkey,
    signature::{keypair_from_seed, Keypair},
    signer::Signer,
};
use std::{sync::Arc, time::Duration};

/// Same name, same keypair, across runs.
pub fn deterministic_keypair(identifier: &str) -> Keypair {
    let seed = Sha256::digest(identifier.as_bytes());
    keypair_from_seed(&seed).expect("SHA256 output should always be valid seed")
}

/// Confirmation waits disabled so polling tests run instantly.
pub fn instant_submitter_config() -> SubmitterConfig {
    SubmitterConfig::default()
        .with_settle_delay(Duration::ZERO)
        .with_poll_interval(Duration::ZERO)
}

/// Shared setup: a mock ledger, a mock wallet and an address finder for a
/// throwaway program id.
pub struct TestFixture {
    pub ledger: Arc<MockLedger>,
    pub signer: Arc<MockSigner>,
    pub address_finder: AddressFinder,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            ledger: Arc::new(MockLedger::new()),
            signer: Arc::new(MockSigner::new(deterministic_keypair("wallet"))),
            address_finder: AddressFinder::with_default_mint(
                deterministic_keypair("program").pubkey(),
            ),
        }
    }

    pub fn wallet(&self) -> Pubkey {
        self.signer.pubkey()
    }

    pub fn rpc(&self) -> Arc<dyn LedgerRpc> {
        self.ledger.clone()
    }

    pub fn market_signer(&self) -> Arc<dyn MarketSigner> {
        self.signer.clone()
    }

    pub fn session(&self) -> Arc<SignerSession> {
        Arc::new(SignerSession::new(self.market_signer()))
    }

    pub fn submitter(&self) -> TransactionSubmitter {
        TransactionSubmitter::with_config(self.rpc(), self.session(), instant_submitter_config())
    }

    pub fn client(&self) -> DistriClient {
        DistriClient::with_config(
            self.address_finder,
            self.rpc(),
            self.market_signer(),
            instant_submitter_config(),
        )
    }

    /// A reward claim for one of the wallet's machines.
    pub fn claim(&self, period: u32, machine: u8) -> RewardClaim {
        RewardClaim::new(period, MachineUuid::new([machine; 16]), self.wallet())
    }
}
