use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use config::{ConfigFile, MarketConfig};
use error::CliResult;

#[derive(Parser)]
#[command(name = "distri")]
#[command(about = "Distri CLI - Rent and list compute on the Distri marketplace")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    settings: Settings,

    #[command(subcommand)]
    command: Commands,
}

/// Connection settings. Flags beat environment variables, which beat the
/// config file.
#[derive(Args)]
struct Settings {
    /// YAML config file
    #[arg(long, env = "DISTRI_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Solana RPC URL
    #[arg(short, long, env = "DISTRI_RPC_URL", global = true)]
    rpc_url: Option<String>,

    /// Marketplace program id
    #[arg(long, env = "DISTRI_PROGRAM_ID", global = true)]
    program_id: Option<String>,

    /// Marketplace token mint
    #[arg(long, env = "DISTRI_MINT", global = true)]
    mint: Option<String>,

    /// Wallet keypair file
    #[arg(short, long, env = "DISTRI_KEYPAIR", global = true)]
    keypair: Option<PathBuf>,

    /// Wait after sending before polling for confirmation
    #[arg(long, env = "DISTRI_SETTLE_DELAY_MS", global = true)]
    settle_delay_ms: Option<u64>,
}

impl Settings {
    fn resolve(self) -> CliResult<MarketConfig> {
        let overrides = ConfigFile {
            rpc_url: self.rpc_url,
            program_id: self.program_id,
            mint: self.mint,
            keypair_path: self.keypair,
            settle_delay_ms: self.settle_delay_ms,
        };
        MarketConfig::load(self.config.as_deref(), overrides)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List a machine for rent
    MakeOffer {
        /// Machine id (32 hex chars)
        machine_uuid: String,

        /// Price per hour in tokens, e.g. 1.5
        #[arg(long)]
        price: Decimal,

        /// Longest rental accepted, in hours
        #[arg(long)]
        duration: u64,

        /// Disk offered, in GB
        #[arg(long)]
        disk: u64,
    },

    /// Withdraw a machine listing
    CancelOffer {
        /// Machine id (32 hex chars)
        machine_uuid: String,
    },

    /// Rent a listed machine
    PlaceOrder {
        /// Machine account address
        machine: String,

        /// Rental length in hours
        #[arg(long)]
        duration: u64,

        /// Order metadata JSON file
        #[arg(long)]
        metadata: PathBuf,

        /// Order id (32 hex chars); derived from the current time if omitted
        #[arg(long)]
        order_uuid: Option<String>,
    },

    /// Extend an existing order
    RenewOrder {
        /// Machine account address
        machine: String,

        /// Order id (32 hex chars)
        order_uuid: String,

        /// Additional hours
        #[arg(long)]
        duration: u64,
    },

    /// Refund an order
    RefundOrder {
        /// Machine account address
        machine: String,

        /// Order id (32 hex chars)
        order_uuid: String,

        /// Wallet of the machine's owner
        #[arg(long)]
        seller: String,
    },

    /// Claim rewards listed in a CSV file (period,machine_uuid,owner)
    ClaimRewards {
        /// Claims CSV file
        claims: PathBuf,
    },

    /// Show a token balance
    Balance {
        /// Owner wallet; defaults to the configured keypair
        owner: Option<String>,
    },

    /// Print the account address of a machine
    MachineAddress {
        /// Machine id (32 hex chars)
        machine_uuid: String,

        /// Owner wallet; defaults to the configured keypair
        owner: Option<String>,
    },
}

#[tokio::main]
async fn main() -> CliResult<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,distri_client=info,distri_batch_tx=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = cli.settings.resolve()?;

    match cli.command {
        Commands::MakeOffer {
            machine_uuid,
            price,
            duration,
            disk,
        } => commands::make_offer::execute(&config, machine_uuid, price, duration, disk).await,

        Commands::CancelOffer { machine_uuid } => {
            commands::cancel_offer::execute(&config, machine_uuid).await
        }

        Commands::PlaceOrder {
            machine,
            duration,
            metadata,
            order_uuid,
        } => commands::place_order::execute(&config, machine, duration, metadata, order_uuid).await,

        Commands::RenewOrder {
            machine,
            order_uuid,
            duration,
        } => commands::renew_order::execute(&config, machine, order_uuid, duration).await,

        Commands::RefundOrder {
            machine,
            order_uuid,
            seller,
        } => commands::refund_order::execute(&config, machine, order_uuid, seller).await,

        Commands::ClaimRewards { claims } => {
            commands::claim_rewards::execute(&config, claims).await
        }

        Commands::Balance { owner } => commands::balance::execute(&config, owner).await,

        Commands::MachineAddress {
            machine_uuid,
            owner,
        } => commands::machine_address::execute(&config, machine_uuid, owner),
    }
}
