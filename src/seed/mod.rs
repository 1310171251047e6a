//! Seed command handlers.
//!
//! Each handler connects to its store(s), generates records in memory and
//! writes them, logging one status line per phase.

pub mod args;
pub mod logging;
pub mod run;

pub use args::{AllSeedArgs, ClinicalSeedArgs};
pub use logging::mask_connection_password;
pub use run::{run_all, run_clinical, run_doctors, run_patients, run_seed};
