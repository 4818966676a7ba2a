use solana_sdk::{pubkey, pubkey::Pubkey};

/// Seed prefixes for PDA derivation
pub const VAULT_SEED_PREFIX: &[u8] = b"vault";
pub const MACHINE_SEED_PREFIX: &[u8] = b"machine";
pub const ORDER_SEED_PREFIX: &[u8] = b"order";
pub const REWARD_POOL_SEED_PREFIX: &[u8] = b"reward-pool";
pub const REWARD_SEED_PREFIX: &[u8] = b"reward";
pub const REWARD_MACHINE_SEED_PREFIX: &[u8] = b"reward-machine";

/// The marketplace token mint.
pub const DEFAULT_MINT: Pubkey = pubkey!("896KfVVY6VRGQs1d9CKLnKUEgXXCCJcEEg7LwSK84vWE");

/// Decimal places of the marketplace token. Amounts cross the program
/// boundary as integers scaled by `10^TOKEN_DECIMALS`.
pub const TOKEN_DECIMALS: u32 = 9;

/// Largest metadata string accepted by `place_order`. Larger payloads
/// would not fit a single transaction next to the eight order accounts.
pub const MAX_METADATA_LEN: usize = 768;
