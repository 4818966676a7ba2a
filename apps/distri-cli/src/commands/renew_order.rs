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
    duration: u64,
) -> CliResult<()> {
    let machine = parse_pubkey(&machine)?;
    let order_uuid = OrderUuid::from_hex(&order_uuid)?;

    let client = connect(config)?;
    println!("🔁 Extending order {} by {} hours", order_uuid, duration);

    let result = client.renew_order(machine, &order_uuid, duration).await?;
    report(result)
}
