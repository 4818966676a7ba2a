use async_trait::async_trait;
use distri_client::LedgerRpc;
use solana_client::client_error::{ClientError as RpcClientError, ClientErrorKind};
use solana_sdk::{
    commitment_config::CommitmentConfig,
    hash::Hash,
    pubkey::Pubkey,
    signature::Signature,
    transaction::{self, Transaction, TransactionError},
};
use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

/// One request received by the [`MockLedger`], in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpcCall {
    GetLatestBlockhash(CommitmentConfig),
    SendTransaction(Signature),
    GetSignatureStatus(Signature, CommitmentConfig),
    GetBlockHeight(CommitmentConfig),
    GetTokenAccountBalance(Pubkey),
}

/// What a status poll reports for a sent transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockStatus {
    Finalized,
    Failed(TransactionError),
    /// Never reaches finality.
    Pending,
    /// The poll itself errors.
    Unreachable,
}

struct LedgerState {
    calls: Vec<RpcCall>,
    blockhash: Hash,
    last_valid_block_height: u64,
    block_height: u64,
    block_height_step: u64,
    blockhash_unavailable: bool,
    blockhash_expires_after: Option<usize>,
    failing_sends: HashSet<usize>,
    sent: Vec<Transaction>,
    status: MockStatus,
    statuses: HashMap<Signature, MockStatus>,
    pending_polls: usize,
    balances: HashMap<Pubkey, u64>,
    balance_unavailable: bool,
}

/// In-memory ledger. Records every call and answers from scripted state.
///
/// Defaults: a fixed blockhash valid up to height 250, current height 100,
/// every send accepted, every status poll finalized.
pub struct MockLedger {
    state: Mutex<LedgerState>,
}

impl Default for MockLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl MockLedger {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(LedgerState {
                calls: Vec::new(),
                blockhash: Hash::new_unique(),
                last_valid_block_height: 250,
                block_height: 100,
                block_height_step: 0,
                blockhash_unavailable: false,
                blockhash_expires_after: None,
                failing_sends: HashSet::new(),
                sent: Vec::new(),
                status: MockStatus::Finalized,
                statuses: HashMap::new(),
                pending_polls: 0,
                balances: HashMap::new(),
                balance_unavailable: false,
            }),
        }
    }

    // ================================================================================================
    // Scripting
    // ================================================================================================

    pub fn blockhash(&self) -> Hash {
        self.state.lock().unwrap().blockhash
    }

    pub fn set_blockhash_unavailable(&self) {
        self.state.lock().unwrap().blockhash_unavailable = true;
    }

    /// Current block height and the last height at which the served
    /// blockhash is valid. Every height query advances by `step`.
    pub fn set_block_heights(&self, current: u64, last_valid: u64, step: u64) {
        let mut state = self.state.lock().unwrap();
        state.block_height = current;
        state.last_valid_block_height = last_valid;
        state.block_height_step = step;
    }

    /// Status reported for every sent transaction without its own entry.
    pub fn set_status(&self, status: MockStatus) {
        self.state.lock().unwrap().status = status;
    }

    pub fn set_status_for(&self, signature: Signature, status: MockStatus) {
        self.state.lock().unwrap().statuses.insert(signature, status);
    }

    /// The first `polls` status polls report "not yet finalized".
    pub fn set_pending_polls(&self, polls: usize) {
        self.state.lock().unwrap().pending_polls = polls;
    }

    /// After `accepted` transactions have landed, the served blockhash is
    /// no longer accepted.
    pub fn expire_blockhash_after_sends(&self, accepted: usize) {
        self.state.lock().unwrap().blockhash_expires_after = Some(accepted);
    }

    /// The send with this zero-based index is rejected by the node.
    pub fn fail_send(&self, index: usize) {
        self.state.lock().unwrap().failing_sends.insert(index);
    }

    pub fn set_token_balance(&self, token_account: Pubkey, amount: u64) {
        self.state
            .lock()
            .unwrap()
            .balances
            .insert(token_account, amount);
    }

    /// Every balance query errors, as an unhealthy node would.
    pub fn set_balance_unavailable(&self) {
        self.state.lock().unwrap().balance_unavailable = true;
    }

    // ================================================================================================
    // Inspection
    // ================================================================================================

    pub fn calls(&self) -> Vec<RpcCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }

    pub fn blockhash_requests(&self) -> usize {
        self.count(|call| matches!(call, RpcCall::GetLatestBlockhash(_)))
    }

    pub fn send_requests(&self) -> usize {
        self.count(|call| matches!(call, RpcCall::SendTransaction(_)))
    }

    pub fn status_requests(&self) -> usize {
        self.count(|call| matches!(call, RpcCall::GetSignatureStatus(..)))
    }

    /// Transactions the node accepted, in order.
    pub fn sent_transactions(&self) -> Vec<Transaction> {
        self.state.lock().unwrap().sent.clone()
    }

    fn count(&self, predicate: impl Fn(&RpcCall) -> bool) -> usize {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|call| predicate(call))
            .count()
    }
}

fn rpc_error(message: &str) -> RpcClientError {
    ClientErrorKind::Custom(message.to_string()).into()
}

#[async_trait]
impl LedgerRpc for MockLedger {
    async fn get_latest_blockhash(
        &self,
        commitment: CommitmentConfig,
    ) -> Result<(Hash, u64), RpcClientError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(RpcCall::GetLatestBlockhash(commitment));

        if state.blockhash_unavailable {
            return Err(rpc_error("blockhash unavailable"));
        }
        Ok((state.blockhash, state.last_valid_block_height))
    }

    async fn send_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<Signature, RpcClientError> {
        let mut state = self.state.lock().unwrap();
        let signature = transaction.signatures.first().copied().unwrap_or_default();
        let index = state
            .calls
            .iter()
            .filter(|call| matches!(call, RpcCall::SendTransaction(_)))
            .count();
        state.calls.push(RpcCall::SendTransaction(signature));

        if state.failing_sends.contains(&index) {
            return Err(rpc_error("transaction rejected by node"));
        }
        if transaction.verify().is_err() {
            return Err(rpc_error("signature verification failed"));
        }
        let expired = state
            .blockhash_expires_after
            .is_some_and(|accepted| state.sent.len() >= accepted);
        if expired || transaction.message.recent_blockhash != state.blockhash {
            return Err(rpc_error("Blockhash not found"));
        }

        state.sent.push(transaction.clone());
        Ok(signature)
    }

    async fn get_signature_status(
        &self,
        signature: &Signature,
        commitment: CommitmentConfig,
    ) -> Result<Option<transaction::Result<()>>, RpcClientError> {
        let mut state = self.state.lock().unwrap();
        state
            .calls
            .push(RpcCall::GetSignatureStatus(*signature, commitment));

        let known = state
            .sent
            .iter()
            .any(|tx| tx.signatures.first() == Some(signature));
        if !known {
            return Ok(None);
        }

        let status = state
            .statuses
            .get(signature)
            .cloned()
            .unwrap_or_else(|| state.status.clone());
        if status == MockStatus::Unreachable {
            return Err(rpc_error("connection refused"));
        }
        if state.pending_polls > 0 {
            state.pending_polls -= 1;
            return Ok(None);
        }

        Ok(match status {
            MockStatus::Finalized => Some(Ok(())),
            MockStatus::Failed(error) => Some(Err(error)),
            MockStatus::Pending | MockStatus::Unreachable => None,
        })
    }

    async fn get_block_height(&self, commitment: CommitmentConfig) -> Result<u64, RpcClientError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(RpcCall::GetBlockHeight(commitment));

        let height = state.block_height;
        state.block_height += state.block_height_step;
        Ok(height)
    }

    async fn get_token_account_balance(
        &self,
        address: &Pubkey,
    ) -> Result<Option<u64>, RpcClientError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(RpcCall::GetTokenAccountBalance(*address));

        if state.balance_unavailable {
            return Err(rpc_error("node is unhealthy"));
        }
        Ok(state.balances.get(address).copied())
    }
}
