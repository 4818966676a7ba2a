use crate::{
    commands::{connect, report},
    config::MarketConfig,
    error::CliResult,
};
use distri_sdk::{amount::ui_amount_to_base_units, MachineUuid};
use rust_decimal::Decimal;

pub async fn execute(
    config: &MarketConfig,
    machine_uuid: String,
    price: Decimal,
    duration: u64,
    disk: u64,
) -> CliResult<()> {
    let machine_uuid = MachineUuid::from_hex(&machine_uuid)?;
    let price_base_units = ui_amount_to_base_units(price)?;

    let client = connect(config)?;
    let machine = client.machine_address(&machine_uuid, None)?;

    println!("🖥️  Listing machine {}", machine_uuid);
    println!("   Account: {}", machine);
    println!("   Price: {} per hour ({} base units)", price, price_base_units);
    println!("   Max duration: {} hours, disk: {} GB", duration, disk);

    let result = client
        .make_offer(&machine_uuid, price_base_units, duration, disk)
        .await?;
    report(result)
}
