//! MySQL clinical record seeder.
//!
//! Writes clinical histories and their appointments, referencing patient
//! identifiers and doctor pairs loaded from the other two stores.

pub mod args;
pub mod error;
pub mod insert;
pub mod seeder;

pub use args::MySQLConnectionArgs;
pub use error::MySQLSeederError;
pub use seeder::ClinicalRecordSeeder;
