//! hospital-seed library
//!
//! Seeds three databases with synthetic hospital data:
//!
//! - Patients (with optional insurance) into MongoDB
//! - Doctors and their weekly availability into PostgreSQL
//! - Clinical histories and appointments into MySQL, referencing the
//!   patients and doctors already stored
//!
//! # CLI Usage
//!
//! ```bash
//! # 50 patients, replacing the collection contents
//! hospital-seed patients --count 50
//!
//! # 100 doctors with the default seed
//! hospital-seed doctors --count 100
//!
//! # 50 clinical histories over the stored patients and doctors
//! hospital-seed clinical --histories 50
//!
//! # Everything, in order
//! hospital-seed --host db.internal all
//! ```

use clap::{Args, Subcommand};

pub mod seed;

use seed::{AllSeedArgs, ClinicalSeedArgs};
use seed_populate_mongodb::PatientSeedArgs;
use seed_populate_postgresql::DoctorSeedArgs;

/// Options shared by every command.
#[derive(Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Default host for all three stores (overridden per store by
    /// --mongo-host, --pg-host and --mysql-host)
    #[arg(long, global = true, env = "HOST", default_value = "localhost")]
    pub host: String,
}

#[derive(Subcommand, Clone, Debug)]
pub enum SeedCommand {
    /// Seed patients into MongoDB
    Patients {
        #[command(flatten)]
        args: PatientSeedArgs,
    },

    /// Seed doctors and availability into PostgreSQL
    Doctors {
        #[command(flatten)]
        args: DoctorSeedArgs,
    },

    /// Seed clinical histories and appointments into MySQL
    Clinical {
        #[command(flatten)]
        args: ClinicalSeedArgs,
    },

    /// Seed patients, doctors and clinical records in that order
    All {
        #[command(flatten)]
        args: AllSeedArgs,
    },
}
