//! Arguments for commands that touch more than one store.

use clap::Args;
use seed_populate::CommonSeedArgs;
use seed_populate_mongodb::{MongoDBConnectionArgs, PatientSeedArgs};
use seed_populate_mysql::MySQLConnectionArgs;
use seed_populate_postgresql::{DoctorSeedArgs, PostgreSQLConnectionArgs};

/// Arguments for the `clinical` command.
///
/// Patient identifiers are read from MongoDB and doctor pairs from
/// PostgreSQL; records are written to MySQL.
#[derive(Args, Clone, Debug)]
pub struct ClinicalSeedArgs {
    /// Number of clinical histories to generate
    #[arg(long, default_value = "50")]
    pub histories: u64,

    #[command(flatten)]
    pub mongo: MongoDBConnectionArgs,

    #[command(flatten)]
    pub postgres: PostgreSQLConnectionArgs,

    #[command(flatten)]
    pub mysql: MySQLConnectionArgs,

    #[command(flatten)]
    pub common: CommonSeedArgs,
}

/// Arguments for the `all` command: patients, then doctors, then clinical records.
#[derive(Args, Clone, Debug)]
pub struct AllSeedArgs {
    /// Number of patients to generate
    #[arg(long, default_value = "50")]
    pub patients: u64,

    /// Keep existing patients instead of deleting them first
    #[arg(long)]
    pub no_clear: bool,

    /// Number of doctors to generate
    #[arg(long, default_value = "100")]
    pub doctors: u64,

    /// Random seed for the doctor generator
    #[arg(long, default_value_t = seed_generator::DEFAULT_DOCTOR_SEED)]
    pub doctor_seed: u64,

    /// Rows per multi-row INSERT for the doctor step
    #[arg(long, default_value_t = seed_populate_postgresql::insert::DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Number of clinical histories to generate
    #[arg(long, default_value = "50")]
    pub histories: u64,

    #[command(flatten)]
    pub mongo: MongoDBConnectionArgs,

    #[command(flatten)]
    pub postgres: PostgreSQLConnectionArgs,

    #[command(flatten)]
    pub mysql: MySQLConnectionArgs,

    #[command(flatten)]
    pub common: CommonSeedArgs,
}

impl AllSeedArgs {
    /// Arguments for the patient step.
    ///
    /// `seed` is the resolved seed shared by the patient and clinical steps.
    pub fn patient_args(&self, seed: u64) -> PatientSeedArgs {
        PatientSeedArgs {
            count: self.patients,
            no_clear: self.no_clear,
            connection: self.mongo.clone(),
            common: self.common_with_seed(seed),
        }
    }

    /// Arguments for the doctor step.
    pub fn doctor_args(&self) -> DoctorSeedArgs {
        DoctorSeedArgs {
            count: self.doctors,
            seed: self.doctor_seed,
            batch_size: self.batch_size,
            dry_run: self.common.dry_run,
            connection: self.postgres.clone(),
        }
    }

    /// Arguments for the clinical step.
    pub fn clinical_args(&self, seed: u64) -> ClinicalSeedArgs {
        ClinicalSeedArgs {
            histories: self.histories,
            mongo: self.mongo.clone(),
            postgres: self.postgres.clone(),
            mysql: self.mysql.clone(),
            common: self.common_with_seed(seed),
        }
    }

    fn common_with_seed(&self, seed: u64) -> CommonSeedArgs {
        CommonSeedArgs {
            seed: Some(seed),
            ..self.common.clone()
        }
    }
}
