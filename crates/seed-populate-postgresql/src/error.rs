//! Error types for the PostgreSQL seeder.

use thiserror::Error;

/// Errors that can occur during PostgreSQL seeding.
#[derive(Error, Debug)]
pub enum PostgreSQLSeederError {
    /// PostgreSQL query error.
    #[error("PostgreSQL error: {0}")]
    PostgreSQL(#[from] tokio_postgres::Error),

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Generator error.
    #[error("Generator error: {0}")]
    Generator(#[from] seed_generator::GeneratorError),
}
