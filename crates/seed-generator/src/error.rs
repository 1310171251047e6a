//! Error type for generator operations.

/// Errors that can occur while generating records.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Every identifier in the 8-digit keyspace has been handed out or is taken.
    #[error("Identifier keyspace exhausted after {0} draws")]
    KeyspaceExhausted(u64),

    /// No patient identifiers to reference.
    #[error("Patient pool is empty; seed patients first")]
    EmptyPatientPool,

    /// No (doctor, specialty) pairs to reference.
    #[error("Doctor pool is empty; seed doctors first")]
    EmptyDoctorPool,

    /// Identifier construction failed.
    #[error("Invalid identifier: {0}")]
    Dni(#[from] seed_core::DniError),
}
