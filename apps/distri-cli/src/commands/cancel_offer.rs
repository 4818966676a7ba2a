use crate::{
    commands::{connect, report},
    config::MarketConfig,
    error::CliResult,
};
use distri_sdk::MachineUuid;

pub async fn execute(config: &MarketConfig, machine_uuid: String) -> CliResult<()> {
    let machine_uuid = MachineUuid::from_hex(&machine_uuid)?;

    let client = connect(config)?;
    println!("🛑 Withdrawing offer for machine {}", machine_uuid);

    let result = client.cancel_offer(&machine_uuid).await?;
    report(result)
}
