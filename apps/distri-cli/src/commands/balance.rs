use crate::{
    commands::{address_finder, rpc},
    config::{parse_pubkey, MarketConfig},
    error::CliResult,
};
use distri_client::{BalanceReader, KeypairSigner, MarketSigner};

pub async fn execute(config: &MarketConfig, owner: Option<String>) -> CliResult<()> {
    let owner = match owner {
        Some(owner) => parse_pubkey(&owner)?,
        None => KeypairSigner::from_file(&config.keypair_path)?.pubkey(),
    };

    let finder = address_finder(config);
    let (token_account, _) = finder.find_token_account_address(&owner)?;
    let reader = BalanceReader::new(rpc(config), finder);

    // Never having held the token reads as zero
    let balance = reader.get_balance_or_zero(&owner).await?;

    println!("💰 Owner: {}", owner);
    println!("   Token account: {}", token_account);
    println!("   Balance: {}", balance);
    Ok(())
}
