//! Error types for the MongoDB seeder.

use thiserror::Error;

/// Errors that can occur during MongoDB seeding.
#[derive(Error, Debug)]
pub enum MongoDBSeederError {
    /// MongoDB query or write error.
    #[error("MongoDB error: {0}")]
    MongoDB(#[from] mongodb::error::Error),

    /// The server could not be reached or rejected the credentials.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Generator error.
    #[error("Generator error: {0}")]
    Generator(#[from] seed_generator::GeneratorError),
}
