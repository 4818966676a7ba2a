use crate::{
    commands::address_finder,
    config::{parse_pubkey, MarketConfig},
    error::CliResult,
};
use distri_client::{KeypairSigner, MarketSigner};
use distri_sdk::MachineUuid;

pub fn execute(config: &MarketConfig, machine_uuid: String, owner: Option<String>) -> CliResult<()> {
    let machine_uuid = MachineUuid::from_hex(&machine_uuid)?;
    let owner = match owner {
        Some(owner) => parse_pubkey(&owner)?,
        None => KeypairSigner::from_file(&config.keypair_path)?.pubkey(),
    };

    let (machine, bump) = address_finder(config).find_machine_address(&owner, &machine_uuid)?;

    println!("{} (bump {})", machine, bump);
    Ok(())
}
