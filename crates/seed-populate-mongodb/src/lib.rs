//! MongoDB patient seeder.
//!
//! Writes synthetic patients into the patient collection and reads their
//! identifiers back for the clinical record seeder.

pub mod args;
pub mod error;
pub mod insert;
pub mod seeder;

pub use args::{MongoDBConnectionArgs, PatientSeedArgs};
pub use error::MongoDBSeederError;
pub use insert::{load_patient_ids, patient_to_document};
pub use seeder::{connect_collection, PatientSeeder};
