/*!
# Distri Testing

In-memory doubles for the two external seams of `distri-client`:

- [`MockLedger`] implements `LedgerRpc`, records every call and answers
  from scripted state (blockhash, send failures, statuses, block heights,
  token balances)
- [`MockSigner`] implements `MarketSigner` with a real keypair and can
  decline, short-change a batch, or stall
- [`TestFixture`] wires both into submitters and clients with
  confirmation delays turned off
*/

mod mock_ledger;
mod mock_signer;
mod test_fixture;

pub use mock_ledger::{MockLedger, MockStatus, RpcCall};
pub use mock_signer::MockSigner;
pub use test_fixture::{deterministic_keypair, instant_submitter_config, TestFixture};
