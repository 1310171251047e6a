//! Command-line interface for hospital-seed
//!
//! # Usage Examples
//!
//! ```bash
//! # Patients into MongoDB (clears the collection first)
//! hospital-seed patients --count 50 --mongo-user root --mongo-password root
//!
//! # Keep existing patients and add 20 more
//! hospital-seed patients --count 20 --no-clear
//!
//! # Doctors into PostgreSQL
//! hospital-seed doctors --count 100 --pg-password postgres
//!
//! # Clinical records into MySQL, generated without writing
//! hospital-seed clinical --histories 50 --dry-run
//! ```
//!
//! Connection options also read the environment (and a `.env` file):
//! `HOST`, `MONGO_USER`, `MONGO_PASSWORD`, `MONGO_PORT`, `PG_DB`, `PG_USER`,
//! `PG_PASSWORD`, `PG_PORT`, `MYSQL_DB`, `MYSQL_USER`, `MYSQL_PASSWORD`,
//! `MYSQL_PORT`.

use clap::Parser;
use hospital_seed::seed::run_seed;
use hospital_seed::{GlobalOpts, SeedCommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hospital-seed")]
#[command(about = "Seed MongoDB, PostgreSQL and MySQL with synthetic hospital data")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: SeedCommand,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Variables already set in the environment take precedence over .env
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    run_seed(&cli.global, cli.command).await
}
