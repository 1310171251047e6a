//! PostgreSQL doctor seeder.
//!
//! Creates the `Doctor` and `Disponibilidad` tables, fills them inside one
//! transaction, and reads the (identifier, specialty) pool back for the
//! clinical record seeder.

pub mod args;
pub mod error;
pub mod insert;
pub mod seeder;

pub use args::{DoctorSeedArgs, PostgreSQLConnectionArgs};
pub use error::PostgreSQLSeederError;
pub use insert::load_doctor_pool;
pub use seeder::{connect_client, DoctorSeeder};
