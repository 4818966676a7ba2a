use crate::{
    constants::{
        DEFAULT_MINT, MACHINE_SEED_PREFIX, ORDER_SEED_PREFIX, REWARD_MACHINE_SEED_PREFIX,
        REWARD_POOL_SEED_PREFIX, REWARD_SEED_PREFIX, VAULT_SEED_PREFIX,
    },
    MachineUuid, OrderUuid, SdkError, SdkResult,
};
use anchor_lang::solana_program::system_program::ID as SYSTEM_PROGRAM_ID;
use anchor_spl::{
    associated_token::ID as ASSOCIATED_TOKEN_PROGRAM_ID, token::ID as TOKEN_PROGRAM_ID,
};
use solana_sdk::pubkey::{Pubkey, PubkeyError};

/// Searches bumps from 255 down to 1 for the first off-curve address of
/// `seeds ++ [bump]` under `program_id`.
///
/// Equivalent to `Pubkey::find_program_address`, but exhaustion is an
/// explicit error instead of a panic.
pub fn derive_program_address(seeds: &[&[u8]], program_id: &Pubkey) -> SdkResult<(Pubkey, u8)> {
    for bump in (1..=u8::MAX).rev() {
        let bump_seed = [bump];
        let mut seeds_with_bump = seeds.to_vec();
        seeds_with_bump.push(&bump_seed);

        match Pubkey::create_program_address(&seeds_with_bump, program_id) {
            Ok(address) => return Ok((address, bump)),
            Err(PubkeyError::InvalidSeeds) => continue,
            Err(err) => return Err(err.into()),
        }
    }

    Err(SdkError::DerivationExhausted {
        tag: String::from_utf8_lossy(seeds.first().copied().unwrap_or_default()).into_owned(),
    })
}

/// Derives every account address the marketplace program expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressFinder {
    pub program_id: Pubkey,
    pub mint: Pubkey,

    pub associated_token_program_id: Pubkey,
    pub system_program_id: Pubkey,
    pub token_program_id: Pubkey,
}

impl AddressFinder {
    pub fn new(program_id: Pubkey, mint: Pubkey) -> Self {
        Self::with_program_ids(
            program_id,
            mint,
            ASSOCIATED_TOKEN_PROGRAM_ID,
            SYSTEM_PROGRAM_ID,
            TOKEN_PROGRAM_ID,
        )
    }

    /// Uses the marketplace's production mint.
    pub fn with_default_mint(program_id: Pubkey) -> Self {
        Self::new(program_id, DEFAULT_MINT)
    }

    pub fn with_program_ids(
        program_id: Pubkey,
        mint: Pubkey,
        associated_token_program_id: Pubkey,
        system_program_id: Pubkey,
        token_program_id: Pubkey,
    ) -> Self {
        Self {
            program_id,
            mint,
            associated_token_program_id,
            system_program_id,
            token_program_id,
        }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    /// `tag ++ parts`, derived under the marketplace program.
    pub fn derive(&self, tag: &[u8], parts: &[&[u8]]) -> SdkResult<(Pubkey, u8)> {
        let mut seeds = Vec::with_capacity(parts.len() + 1);
        seeds.push(tag);
        seeds.extend_from_slice(parts);
        derive_program_address(&seeds, &self.program_id)
    }

    pub fn find_vault_address(&self) -> SdkResult<(Pubkey, u8)> {
        self.derive(VAULT_SEED_PREFIX, &[self.mint.as_ref()])
    }

    pub fn find_machine_address(
        &self,
        owner: &Pubkey,
        machine_uuid: &MachineUuid,
    ) -> SdkResult<(Pubkey, u8)> {
        self.derive(
            MACHINE_SEED_PREFIX,
            &[owner.as_ref(), machine_uuid.as_ref()],
        )
    }

    pub fn find_order_address(
        &self,
        buyer: &Pubkey,
        order_uuid: &OrderUuid,
    ) -> SdkResult<(Pubkey, u8)> {
        self.derive(ORDER_SEED_PREFIX, &[buyer.as_ref(), order_uuid.as_ref()])
    }

    /// Associated token account of `owner` for the marketplace mint.
    pub fn find_token_account_address(&self, owner: &Pubkey) -> SdkResult<(Pubkey, u8)> {
        derive_program_address(
            &[
                owner.as_ref(),
                self.token_program_id.as_ref(),
                self.mint.as_ref(),
            ],
            &self.associated_token_program_id,
        )
    }

    pub fn find_reward_pool_address(&self) -> SdkResult<(Pubkey, u8)> {
        self.derive(REWARD_POOL_SEED_PREFIX, &[self.mint.as_ref()])
    }

    pub fn find_reward_address(&self, period: u32) -> SdkResult<(Pubkey, u8)> {
        self.derive(REWARD_SEED_PREFIX, &[&period.to_le_bytes()])
    }

    pub fn find_reward_machine_address(
        &self,
        period: u32,
        owner: &Pubkey,
        machine_uuid: &MachineUuid,
    ) -> SdkResult<(Pubkey, u8)> {
        self.derive(
            REWARD_MACHINE_SEED_PREFIX,
            &[&period.to_le_bytes(), owner.as_ref(), machine_uuid.as_ref()],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_finder() -> AddressFinder {
        AddressFinder::new(Pubkey::new_unique(), Pubkey::new_unique())
    }

    #[test]
    fn test_derive_matches_find_program_address() {
        let program_id = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let seeds: &[&[u8]] = &[b"machine", owner.as_ref(), &[7u8; 16]];

        let derived = derive_program_address(seeds, &program_id).unwrap();
        assert_eq!(derived, Pubkey::find_program_address(seeds, &program_id));
    }

    #[test]
    fn test_derive_is_deterministic() {
        let finder = test_finder();
        let owner = Pubkey::new_unique();
        let uuid = MachineUuid::new([3u8; 16]);

        let first = finder.find_machine_address(&owner, &uuid).unwrap();
        let second = finder.find_machine_address(&owner, &uuid).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_distinct_inputs_yield_distinct_addresses() {
        let finder = test_finder();
        let owner = Pubkey::new_unique();
        let other_owner = Pubkey::new_unique();
        let uuid = MachineUuid::new([1u8; 16]);
        let other_uuid = MachineUuid::new([2u8; 16]);

        let (machine, _) = finder.find_machine_address(&owner, &uuid).unwrap();
        let (by_uuid, _) = finder.find_machine_address(&owner, &other_uuid).unwrap();
        let (by_owner, _) = finder.find_machine_address(&other_owner, &uuid).unwrap();

        assert_ne!(machine, by_uuid);
        assert_ne!(machine, by_owner);
    }

    #[test]
    fn test_derived_address_is_off_curve() {
        let finder = test_finder();
        let (vault, _) = finder.find_vault_address().unwrap();
        assert!(!vault.is_on_curve());
    }

    #[test]
    fn test_program_id_changes_address() {
        let mint = Pubkey::new_unique();
        let a = AddressFinder::new(Pubkey::new_unique(), mint);
        let b = AddressFinder::new(Pubkey::new_unique(), mint);
        assert_ne!(
            a.find_vault_address().unwrap().0,
            b.find_vault_address().unwrap().0
        );
    }

    #[test]
    fn test_seed_layouts() {
        let finder = test_finder();
        let owner = Pubkey::new_unique();
        let machine_uuid = MachineUuid::new([9u8; 16]);
        let order_uuid = OrderUuid::from_timestamp_millis(1_700_000_000_000);
        let period = 42u32;

        assert_eq!(
            finder.find_vault_address().unwrap(),
            Pubkey::find_program_address(&[b"vault", finder.mint.as_ref()], &finder.program_id)
        );
        assert_eq!(
            finder.find_order_address(&owner, &order_uuid).unwrap(),
            Pubkey::find_program_address(
                &[b"order", owner.as_ref(), order_uuid.as_ref()],
                &finder.program_id
            )
        );
        assert_eq!(
            finder.find_reward_pool_address().unwrap(),
            Pubkey::find_program_address(
                &[b"reward-pool", finder.mint.as_ref()],
                &finder.program_id
            )
        );
        assert_eq!(
            finder.find_reward_address(period).unwrap(),
            Pubkey::find_program_address(&[b"reward", &[42, 0, 0, 0]], &finder.program_id)
        );
        assert_eq!(
            finder
                .find_reward_machine_address(period, &owner, &machine_uuid)
                .unwrap(),
            Pubkey::find_program_address(
                &[
                    b"reward-machine",
                    &[42, 0, 0, 0],
                    owner.as_ref(),
                    machine_uuid.as_ref()
                ],
                &finder.program_id
            )
        );
    }

    #[test]
    fn test_token_account_matches_associated_token_address() {
        let finder = test_finder();
        let owner = Pubkey::new_unique();

        let (token_account, _) = finder.find_token_account_address(&owner).unwrap();
        assert_eq!(
            token_account,
            spl_associated_token_account::get_associated_token_address(&owner, &finder.mint)
        );
    }

    #[test]
    fn test_oversized_seed_is_rejected() {
        let finder = test_finder();
        let oversized = [0u8; 33];

        let result = finder.derive(b"machine", &[&oversized]);
        assert_eq!(
            result,
            Err(SdkError::InvalidSeeds(PubkeyError::MaxSeedLengthExceeded))
        );
    }
}
