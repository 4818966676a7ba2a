/*!
# Distri Client

Network side of the Distri compute marketplace: sending transactions,
following them to finality, and reading token balances.

## Architecture

- [`LedgerRpc`] and [`MarketSigner`] are the two external seams. The
  production implementations are solana's non-blocking `RpcClient` and
  [`KeypairSigner`]; tests swap in in-memory doubles.
- [`SignerSession`] owns the one signer of a session and never calls it
  concurrently.
- [`TransactionSubmitter`] walks a transaction through
  built → signed → sent → confirmed / failed / timed out.
- [`BalanceReader`] turns a token account's raw amount into whole tokens.
- [`DistriClient`] ties these together into the marketplace operations.

No operation retries on its own. A timed-out transaction may still land,
so callers should re-query before submitting it again.

## Usage

```rust,no_run
use distri_client::{ClientResult, DistriClient, KeypairSigner, TransactionResult};
use distri_sdk::{AddressFinder, MachineUuid};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::pubkey::Pubkey;
use std::sync::Arc;

async fn example(program_id: Pubkey) -> ClientResult<()> {
    let rpc = Arc::new(RpcClient::new("https://api.devnet.solana.com".to_string()));
    let signer = Arc::new(KeypairSigner::from_file("~/.config/solana/id.json")?);
    let client = DistriClient::new(AddressFinder::with_default_mint(program_id), rpc, signer);

    let machine_uuid = MachineUuid::from_hex("00112233445566778899aabbccddeeff")?;
    match client.make_offer(&machine_uuid, 1_500_000_000, 24, 100).await? {
        TransactionResult::Confirmed { signature } => println!("listed: {}", signature),
        other => println!("not listed: {:?}", other),
    }
    Ok(())
}
```
*/

mod balance;
mod client;
mod submitter;

pub mod config;
pub mod errors;
pub mod rpc;
pub mod signer;
pub mod types;

pub use balance::BalanceReader;
pub use client::DistriClient;
pub use config::SubmitterConfig;
pub use errors::{ClientError, ClientResult};
pub use rpc::LedgerRpc;
pub use signer::{KeypairSigner, MarketSigner, SignerSession};
pub use submitter::TransactionSubmitter;
pub use types::TransactionResult;
