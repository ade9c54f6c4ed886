//! Card Shop CLI - Database migrations and fixture loading.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! cardshop-cli migrate
//!
//! # Load the bundled fixture
//! cardshop-cli seed
//!
//! # Replace all data with a custom fixture
//! cardshop-cli seed --file fixtures/demo.yaml --clear
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed` - Insert sets, products, customers, orders and payments from YAML

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "cardshop-cli")]
#[command(author, version, about = "Card shop admin CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Load fixture data from a YAML file
    Seed {
        /// Path to the fixture file
        #[arg(short, long, default_value = "crates/cli/fixtures/seed.yaml")]
        file: PathBuf,

        /// Truncate every table before loading
        #[arg(long)]
        clear: bool,
    },
}

#[tokio::main]
async fn main() {
    // .env may carry RUST_LOG as well as the database URL
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { file, clear } => {
            let summary = commands::seed::run(&file, clear).await?;
            tracing::info!(
                sets = summary.sets,
                products = summary.products,
                customers = summary.customers,
                orders = summary.orders,
                order_items = summary.order_items,
                payments = summary.payments,
                "Seeding complete"
            );
        }
    }
    Ok(())
}
