//! CLI argument definitions for the MySQL seeder.

use clap::Args;
use mysql_async::{Opts, OptsBuilder};

/// MySQL connection arguments.
#[derive(Args, Clone, Debug)]
pub struct MySQLConnectionArgs {
    /// MySQL host (defaults to --host)
    #[arg(long, env = "MYSQL_HOST")]
    pub mysql_host: Option<String>,

    /// MySQL port
    #[arg(long, env = "MYSQL_PORT", default_value = "3306")]
    pub mysql_port: u16,

    /// MySQL username
    #[arg(long, env = "MYSQL_USER", default_value = "root")]
    pub mysql_user: String,

    /// MySQL password
    #[arg(long, env = "MYSQL_PASSWORD")]
    pub mysql_password: Option<String>,

    /// MySQL database name
    #[arg(long, env = "MYSQL_DB", default_value = "hospital")]
    pub mysql_database: String,
}

impl MySQLConnectionArgs {
    /// Build the driver options.
    pub fn to_opts(&self, default_host: &str) -> Opts {
        OptsBuilder::default()
            .ip_or_hostname(self.host(default_host))
            .tcp_port(self.mysql_port)
            .user(Some(&self.mysql_user))
            .pass(self.mysql_password.as_deref())
            .db_name(Some(&self.mysql_database))
            .into()
    }

    /// Connection target for logging (no password).
    pub fn describe(&self, default_host: &str) -> String {
        format!(
            "mysql://{}@{}:{}/{}",
            self.mysql_user,
            self.host(default_host),
            self.mysql_port,
            self.mysql_database
        )
    }

    fn host<'a>(&'a self, default_host: &'a str) -> &'a str {
        self.mysql_host.as_deref().unwrap_or(default_host)
    }
}
