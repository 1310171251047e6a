//! CLI argument definitions for the PostgreSQL seeder.

use crate::insert::DEFAULT_BATCH_SIZE;
use clap::Args;
use seed_generator::DEFAULT_DOCTOR_SEED;

/// PostgreSQL connection arguments.
#[derive(Args, Clone, Debug)]
pub struct PostgreSQLConnectionArgs {
    /// PostgreSQL host (defaults to --host)
    #[arg(long, env = "PG_HOST")]
    pub pg_host: Option<String>,

    /// PostgreSQL port
    #[arg(long, env = "PG_PORT", default_value = "5432")]
    pub pg_port: u16,

    /// PostgreSQL username
    #[arg(long, env = "PG_USER", default_value = "postgres")]
    pub pg_user: String,

    /// PostgreSQL password
    #[arg(long, env = "PG_PASSWORD")]
    pub pg_password: Option<String>,

    /// PostgreSQL database name
    #[arg(long, env = "PG_DB", default_value = "hospital")]
    pub pg_database: String,
}

impl PostgreSQLConnectionArgs {
    /// Build the driver configuration.
    pub fn to_config(&self, default_host: &str) -> tokio_postgres::Config {
        let mut config = tokio_postgres::Config::new();
        config
            .host(self.host(default_host))
            .port(self.pg_port)
            .user(&self.pg_user)
            .dbname(&self.pg_database);
        if let Some(password) = &self.pg_password {
            config.password(password);
        }
        config
    }

    /// Connection target for logging (no password).
    pub fn describe(&self, default_host: &str) -> String {
        format!(
            "postgresql://{}@{}:{}/{}",
            self.pg_user,
            self.host(default_host),
            self.pg_port,
            self.pg_database
        )
    }

    fn host<'a>(&'a self, default_host: &'a str) -> &'a str {
        self.pg_host.as_deref().unwrap_or(default_host)
    }
}

/// Arguments for the `doctors` command.
#[derive(Args, Clone, Debug)]
pub struct DoctorSeedArgs {
    /// Number of doctors to generate
    #[arg(long, default_value = "100")]
    pub count: u64,

    /// Random seed for doctor generation. Fixed by default so a rerun
    /// produces the same identifiers and is rejected as conflicts.
    #[arg(long, default_value_t = DEFAULT_DOCTOR_SEED)]
    pub seed: u64,

    /// Rows per multi-row INSERT (capped by the PostgreSQL bind parameter limit)
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Dry-run mode: generate doctors and log what would be written without touching PostgreSQL
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub connection: PostgreSQLConnectionArgs,
}
