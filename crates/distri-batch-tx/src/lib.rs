/*!
# Distri Batch Claim Client

Claims rewards for many (period, machine) pairs at once. Each claim gets
its own single-instruction transaction; the batch shares one blockhash
and one signer approval, and is sent sequentially in input order.

The whole batch lives inside one blockhash validity window. A slow batch
can see its later items rejected as expired while earlier ones landed;
this is reported per item, never retried.

## Quick Start

```rust,no_run
use distri_batch_tx::BatchClaimClient;
use distri_client::{KeypairSigner, SignerSession};
use distri_sdk::{AddressFinder, MachineUuid, RewardClaim};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::pubkey::Pubkey;
use std::sync::Arc;

# async fn example(program_id: Pubkey) -> Result<(), Box<dyn std::error::Error>> {
let rpc = Arc::new(RpcClient::new("https://api.devnet.solana.com".to_string()));
let signer = Arc::new(SignerSession::new(Arc::new(KeypairSigner::from_file(
    "~/.config/solana/id.json",
)?)));
let owner = signer.pubkey();
let client = BatchClaimClient::new(AddressFinder::with_default_mint(program_id), rpc, signer);

let claims = vec![
    RewardClaim::new(1, MachineUuid::new([1; 16]), owner),
    RewardClaim::new(2, MachineUuid::new([1; 16]), owner),
];

for (claim, outcome) in claims.iter().zip(client.claim_batch(&claims, &owner).await?) {
    match outcome {
        Ok(signature) => println!("period {}: {}", claim.period, signature),
        Err(e) => println!("period {}: {}", claim.period, e),
    }
}
# Ok(())
# }
```
*/

mod client;
mod config;
mod error;

pub use client::{BatchClaimClient, ClaimSubmission};
pub use config::{TxBatchConfig, DEFAULT_LARGE_BATCH_WARNING_THRESHOLD};
pub use error::TxBatchError;
