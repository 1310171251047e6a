//! Error types for the MySQL seeder.

use thiserror::Error;

/// Errors that can occur during MySQL seeding.
#[derive(Error, Debug)]
pub enum MySQLSeederError {
    /// MySQL connection or query error.
    #[error("MySQL error: {0}")]
    MySQL(#[from] mysql_async::Error),

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Generator error.
    #[error("Generator error: {0}")]
    Generator(#[from] seed_generator::GeneratorError),
}
