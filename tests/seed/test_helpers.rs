//! Connection settings and logging shared by the live store tests.

use clap::Parser;
use hospital_seed::seed::AllSeedArgs;
use hospital_seed::GlobalOpts;

/// Every store's connection options, read from the command line defaults
/// and the connection variables.
#[derive(Parser)]
pub struct StoreArgs {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(flatten)]
    pub all: AllSeedArgs,
}

impl StoreArgs {
    pub fn host(&self) -> &str {
        &self.global.host
    }
}

pub fn store_args(extra: &[&str]) -> StoreArgs {
    StoreArgs::parse_from(std::iter::once("hospital-seed").chain(extra.iter().copied()))
}

pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter("hospital_seed=info,seed_populate_mongodb=debug,seed_populate_postgresql=debug,seed_populate_mysql=warn")
        .try_init()
        .ok(); // Ignore if already initialized
}
