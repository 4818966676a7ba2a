/*!
# Distri SDK

Everything needed to talk to the Distri compute marketplace program that
does not touch the network:

- [`AddressFinder`] derives program addresses (machines, orders, vault,
  reward records, associated token accounts)
- `build_*_ix` encode the six marketplace instructions
- [`build_transaction`] wraps instructions in an unsigned envelope
- [`amount`] converts between decimal token amounts and base units

All failures are local [`SdkError`]s.
*/

mod address_finder;
mod instruction_builders;
mod metadata;
mod transaction_builders;
mod types;

pub mod accounts;
pub mod amount;
pub mod constants;
pub mod error;
pub mod instruction;

pub use address_finder::{derive_program_address, AddressFinder};
pub use error::{SdkError, SdkResult};
pub use instruction_builders::*;
pub use metadata::{MachineInfo, OrderFormData, OrderInfo, OrderIntent, OrderMetadata};
pub use transaction_builders::*;
pub use types::{MachineUuid, OrderUuid, RewardClaim, UUID_LEN};
