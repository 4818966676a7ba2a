pub mod balance;
pub mod cancel_offer;
pub mod claim_rewards;
pub mod machine_address;
pub mod make_offer;
pub mod place_order;
pub mod refund_order;
pub mod renew_order;

use crate::{config::MarketConfig, error::CliResult};
use distri_client::{
    DistriClient, KeypairSigner, LedgerRpc, MarketSigner, SubmitterConfig, TransactionResult,
};
use distri_sdk::AddressFinder;
use solana_client::nonblocking::rpc_client::RpcClient;
use std::sync::Arc;
use tracing::debug;

pub fn address_finder(config: &MarketConfig) -> AddressFinder {
    AddressFinder::new(config.program_id, config.mint)
}

pub fn rpc(config: &MarketConfig) -> Arc<dyn LedgerRpc> {
    debug!("Using RPC endpoint {}", config.rpc_url);
    Arc::new(RpcClient::new(config.rpc_url.to_string()))
}

/// Client for the configured wallet.
pub fn connect(config: &MarketConfig) -> CliResult<DistriClient> {
    let signer = Arc::new(KeypairSigner::from_file(&config.keypair_path)?);
    println!("🔑 Wallet: {}", signer.pubkey());

    Ok(DistriClient::with_config(
        address_finder(config),
        rpc(config),
        signer,
        SubmitterConfig::default().with_settle_delay(config.settle_delay),
    ))
}

/// Print the outcome, then fail unless it was confirmed.
pub fn report(result: TransactionResult) -> CliResult<()> {
    match &result {
        TransactionResult::Confirmed { signature } => {
            println!("✅ Confirmed: {}", signature);
        }
        TransactionResult::Failed {
            signature, code, ..
        } => {
            println!("❌ Failed: {}", signature);
            if let Some(code) = code {
                println!("   Program error code: {}", code);
            }
        }
        TransactionResult::TimedOut { signature } => {
            println!("⏳ Not finalized in time: {}", signature);
            println!("   It may still land; check it before sending again.");
        }
    }

    result.into_result()?;
    Ok(())
}
