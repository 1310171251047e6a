//! Record generator for the hospital-seed framework.
//!
//! Every generator owns a seeded `StdRng` and takes the clock value it needs
//! ("today" or "now") as a parameter, so the same seed and clock always
//! produce the same records.
//!
//! # Architecture
//!
//! ```text
//!   seed ──► StdRng ──┬──► IdentifierSpace ──► Dni (distinct, bounded)
//!                     │
//!                     ├──► PatientGenerator         ──► Vec<Patient>
//!                     ├──► DoctorGenerator          ──► Vec<DoctorSchedule>
//!                     └──► ClinicalRecordGenerator  ──► Vec<ClinicalRecord>
//!                              ▲            ▲
//!                  patient ids ┘            └ (doctor id, specialty) pool
//! ```
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use seed_generator::PatientGenerator;
//! use std::collections::HashSet;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
//! let mut generator = PatientGenerator::new(42, today);
//! let patients = generator.generate(10, &HashSet::new()).unwrap();
//! assert_eq!(patients.len(), 10);
//! ```

pub mod clinical;
pub mod doctor;
pub mod error;
pub mod generators;
pub mod identifier;
pub mod patient;

// Re-exports for convenience
pub use clinical::{ClinicalRecordGenerator, MAX_APPOINTMENTS_PER_HISTORY, MAX_TEXT_CHARS};
pub use doctor::{DoctorGenerator, DEFAULT_DOCTOR_SEED, MAX_AVAILABILITY_PER_DOCTOR};
pub use error::GeneratorError;
pub use identifier::{IdentifierSpace, KEYSPACE_SIZE};
pub use patient::{PatientGenerator, INSURANCE_VALIDITY_MONTHS, MAX_AGE, MIN_AGE};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Build the generator RNG for a seed.
pub fn rng_from_seed(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Use the given seed, or draw a fresh one from the thread RNG.
///
/// The returned value is what callers should log, so a run without an
/// explicit seed can still be reproduced.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}
