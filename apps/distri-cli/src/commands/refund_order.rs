use crate::{
    commands::{connect, report},
    config::{parse_pubkey, MarketConfig},
    error::CliResult,
};
use distri_sdk::OrderUuid;

pub async fn execute(
    config: &MarketConfig,
    machine: String,
    order_uuid: String,
    seller: String,
) -> CliResult<()> {
    let machine = parse_pubkey(&machine)?;
    let seller = parse_pubkey(&seller)?;
    let order_uuid = OrderUuid::from_hex(&order_uuid)?;

    let client = connect(config)?;
    println!("💸 Refunding order {}", order_uuid);
    println!("   Seller: {}", seller);

    let result = client.refund_order(machine, &order_uuid, seller).await?;
    report(result)
}
