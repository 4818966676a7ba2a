/*!
# Distri Client Implementation

Marketplace operations for the wallet held by the session's signer. Every
operation derives its own accounts, encodes one instruction and submits it
through the [`TransactionSubmitter`].
*/

use crate::{
    BalanceReader, ClientResult, LedgerRpc, MarketSigner, SignerSession, SubmitterConfig,
    TransactionResult, TransactionSubmitter,
};
use distri_sdk::{
    build_cancel_offer_ix, build_make_offer_ix, build_place_order_ix, build_refund_order_ix,
    build_renew_order_ix, AddressFinder, MachineUuid, OrderMetadata, OrderUuid,
};
use rust_decimal::Decimal;
use solana_sdk::{pubkey::Pubkey, signature::Signature};
use std::sync::Arc;

/// Unified client for Distri marketplace operations
pub struct DistriClient {
    address_finder: AddressFinder,
    rpc: Arc<dyn LedgerRpc>,
    signer: Arc<SignerSession>,
    submitter: TransactionSubmitter,
    balances: BalanceReader,
}

impl DistriClient {
    pub fn new(
        address_finder: AddressFinder,
        rpc: Arc<dyn LedgerRpc>,
        signer: Arc<dyn MarketSigner>,
    ) -> Self {
        Self::with_config(address_finder, rpc, signer, SubmitterConfig::default())
    }

    pub fn with_config(
        address_finder: AddressFinder,
        rpc: Arc<dyn LedgerRpc>,
        signer: Arc<dyn MarketSigner>,
        config: SubmitterConfig,
    ) -> Self {
        let signer = Arc::new(SignerSession::new(signer));
        let submitter = TransactionSubmitter::with_config(rpc.clone(), signer.clone(), config);
        let balances = BalanceReader::new(rpc.clone(), address_finder);

        Self {
            address_finder,
            rpc,
            signer,
            submitter,
            balances,
        }
    }

    /// The signer's address; pays for and signs every transaction.
    pub fn wallet(&self) -> Pubkey {
        self.signer.pubkey()
    }

    /// Shared with batch clients so the signer is never called
    /// concurrently.
    pub fn signer_session(&self) -> Arc<SignerSession> {
        self.signer.clone()
    }

    pub fn rpc(&self) -> Arc<dyn LedgerRpc> {
        self.rpc.clone()
    }

    pub fn address_finder(&self) -> &AddressFinder {
        &self.address_finder
    }

    pub fn submitter(&self) -> &TransactionSubmitter {
        &self.submitter
    }

    // ================================================================================================
    // Address Lookups
    // ================================================================================================

    /// Machine account for `uuid`, owned by `owner` or by the wallet.
    pub fn machine_address(
        &self,
        machine_uuid: &MachineUuid,
        owner: Option<&Pubkey>,
    ) -> ClientResult<Pubkey> {
        let owner = owner.copied().unwrap_or_else(|| self.wallet());
        let (machine, _) = self
            .address_finder
            .find_machine_address(&owner, machine_uuid)?;
        Ok(machine)
    }

    // ================================================================================================
    // Seller Operations
    // ================================================================================================

    /// List one of the wallet's machines. `price` is in base units per
    /// hour.
    pub async fn make_offer(
        &self,
        machine_uuid: &MachineUuid,
        price: u64,
        duration: u64,
        disk: u64,
    ) -> ClientResult<TransactionResult> {
        let owner = self.wallet();
        let (ix, _, _) = build_make_offer_ix(
            &self.address_finder,
            owner,
            machine_uuid,
            price,
            duration,
            disk,
        )?;
        self.submitter.submit(&[ix], &owner).await
    }

    pub async fn cancel_offer(&self, machine_uuid: &MachineUuid) -> ClientResult<TransactionResult> {
        let owner = self.wallet();
        let (ix, _, _) = build_cancel_offer_ix(&self.address_finder, owner, machine_uuid)?;
        self.submitter.submit(&[ix], &owner).await
    }

    // ================================================================================================
    // Buyer Operations
    // ================================================================================================

    pub async fn place_order(
        &self,
        machine: Pubkey,
        order_uuid: &OrderUuid,
        duration: u64,
        metadata: &OrderMetadata,
    ) -> ClientResult<TransactionResult> {
        let buyer = self.wallet();
        let (ix, _, _) = build_place_order_ix(
            &self.address_finder,
            buyer,
            machine,
            order_uuid,
            duration,
            metadata.to_json()?,
        )?;
        self.submitter.submit(&[ix], &buyer).await
    }

    pub async fn renew_order(
        &self,
        machine: Pubkey,
        order_uuid: &OrderUuid,
        duration: u64,
    ) -> ClientResult<TransactionResult> {
        let buyer = self.wallet();
        let (ix, _, _) =
            build_renew_order_ix(&self.address_finder, buyer, machine, order_uuid, duration)?;
        self.submitter.submit(&[ix], &buyer).await
    }

    pub async fn refund_order(
        &self,
        machine: Pubkey,
        order_uuid: &OrderUuid,
        seller: Pubkey,
    ) -> ClientResult<TransactionResult> {
        let buyer = self.wallet();
        let (ix, _, _) =
            build_refund_order_ix(&self.address_finder, buyer, machine, order_uuid, seller)?;
        self.submitter.submit(&[ix], &buyer).await
    }

    // ================================================================================================
    // Reads
    // ================================================================================================

    /// Token balance of `owner`, or of the wallet. Fails with
    /// `AccountNotFound` if the owner has no token account.
    pub async fn get_token_balance(&self, owner: Option<&Pubkey>) -> ClientResult<Decimal> {
        let owner = owner.copied().unwrap_or_else(|| self.wallet());
        self.balances.get_balance(&owner).await
    }

    pub fn balance_reader(&self) -> &BalanceReader {
        &self.balances
    }

    pub async fn query_confirmation(
        &self,
        signature: &Signature,
    ) -> ClientResult<Option<TransactionResult>> {
        self.submitter.query_confirmation(signature).await
    }
}
