use crate::{
    commands::{connect, report},
    config::{parse_pubkey, MarketConfig},
    error::CliResult,
};
use distri_sdk::{OrderMetadata, OrderUuid};
use std::path::PathBuf;

pub async fn execute(
    config: &MarketConfig,
    machine: String,
    duration: u64,
    metadata_path: PathBuf,
    order_uuid: Option<String>,
) -> CliResult<()> {
    let machine = parse_pubkey(&machine)?;
    let metadata: OrderMetadata = serde_json::from_str(&std::fs::read_to_string(&metadata_path)?)?;
    let order_uuid = match order_uuid {
        Some(order_uuid) => OrderUuid::from_hex(&order_uuid)?,
        None => OrderUuid::now(),
    };

    let client = connect(config)?;
    let (order, _) = client
        .address_finder()
        .find_order_address(&client.wallet(), &order_uuid)?;

    println!("🛒 Ordering machine {} for {} hours", machine, duration);
    println!("   Task: {}", metadata.form_data.task_name);
    println!("   Order id: {}", order_uuid);
    println!("   Order account: {}", order);

    let result = client
        .place_order(machine, &order_uuid, duration, &metadata)
        .await?;
    report(result)
}
