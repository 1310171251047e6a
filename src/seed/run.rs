//! Seed command runners.

use std::collections::HashSet;

use anyhow::Context;
use chrono::{Local, NaiveDate, NaiveDateTime};
use seed_core::{ClinicalRecord, Dni, DoctorRef};
use seed_generator::{
    resolve_seed, ClinicalRecordGenerator, DoctorGenerator, PatientGenerator,
};
use seed_populate::SeedReport;
use seed_populate_mongodb::{connect_collection, load_patient_ids, PatientSeedArgs, PatientSeeder};
use seed_populate_mysql::ClinicalRecordSeeder;
use seed_populate_postgresql::{connect_client, load_doctor_pool, DoctorSeedArgs, DoctorSeeder};

use super::{mask_connection_password, AllSeedArgs, ClinicalSeedArgs};
use crate::{GlobalOpts, SeedCommand};

/// Dispatch a parsed command, anchoring generated dates to the local clock.
pub async fn run_seed(global: &GlobalOpts, command: SeedCommand) -> anyhow::Result<()> {
    let now = Local::now().naive_local();

    match command {
        SeedCommand::Patients { args } => {
            run_patients(&global.host, &args, now.date()).await?;
        }
        SeedCommand::Doctors { args } => {
            run_doctors(&global.host, &args).await?;
        }
        SeedCommand::Clinical { args } => {
            run_clinical(&global.host, &args, now).await?;
        }
        SeedCommand::All { args } => {
            run_all(&global.host, &args, now).await?;
        }
    }

    Ok(())
}

/// Seed patients into MongoDB.
pub async fn run_patients(
    host: &str,
    args: &PatientSeedArgs,
    today: NaiveDate,
) -> anyhow::Result<SeedReport> {
    let seed = resolve_seed(args.common.seed);
    let conn_str = args.connection.connection_string(host);
    let target = format!(
        "{}.{}",
        args.connection.mongo_database, args.connection.mongo_collection
    );

    if args.common.dry_run {
        tracing::info!(
            "[DRY-RUN] Would seed {} patients into {} (seed={}, clear={})",
            args.count,
            target,
            seed,
            !args.no_clear
        );
        tracing::info!(
            "[DRY-RUN] Connection: {}",
            mask_connection_password(&conn_str)
        );

        let patients = PatientGenerator::new(seed, today).generate(args.count, &HashSet::new())?;
        let insured = patients.iter().filter(|p| p.has_insurance()).count();
        tracing::info!(
            "[DRY-RUN] Generated {} patients ({} with insurance)",
            patients.len(),
            insured
        );
        return Ok(SeedReport::default());
    }

    tracing::info!(
        "Seeding {} patients into {} (seed={})",
        args.count,
        target,
        seed
    );
    tracing::info!(
        "Connecting to MongoDB: {}",
        mask_connection_password(&conn_str)
    );

    let mut seeder = PatientSeeder::connect(
        &conn_str,
        &args.connection.mongo_database,
        &args.connection.mongo_collection,
        seed,
        today,
    )
    .await
    .context("Failed to connect to MongoDB")?;
    tracing::info!("Connected to MongoDB");

    let report = seeder
        .seed(args.count, !args.no_clear)
        .await
        .context("Failed to seed patients")?;

    tracing::info!("Patients: {}", report);
    Ok(report)
}

/// Seed doctors and their availability into PostgreSQL.
pub async fn run_doctors(host: &str, args: &DoctorSeedArgs) -> anyhow::Result<SeedReport> {
    let seed = args.seed;

    if args.dry_run {
        tracing::info!(
            "[DRY-RUN] Would seed {} doctors (seed={}, batch size {})",
            args.count,
            seed,
            args.batch_size
        );
        tracing::info!(
            "[DRY-RUN] Connection: {}",
            args.connection.describe(host)
        );

        let schedules = DoctorGenerator::new(seed).generate(args.count)?;
        let slots: usize = schedules.iter().map(|s| s.availability.len()).sum();
        tracing::info!(
            "[DRY-RUN] Generated {} doctors with {} availability slots",
            schedules.len(),
            slots
        );
        return Ok(SeedReport::default());
    }

    tracing::info!("Seeding {} doctors (seed={})", args.count, seed);
    tracing::info!(
        "Connecting to PostgreSQL: {}",
        args.connection.describe(host)
    );

    let mut seeder = DoctorSeeder::connect(&args.connection.to_config(host), seed)
        .await
        .context("Failed to connect to PostgreSQL")?
        .with_batch_size(args.batch_size);
    tracing::info!("Connected to PostgreSQL");

    seeder
        .create_tables()
        .await
        .context("Failed to create doctor tables")?;

    let report = seeder
        .seed(args.count)
        .await
        .context("Failed to seed doctors, no rows were committed")?;

    tracing::info!("Doctors: {}", report);
    Ok(report)
}

/// Seed clinical histories and appointments into MySQL.
///
/// Patient identifiers and doctor pairs are loaded from MongoDB and
/// PostgreSQL first; the dry run still reads them.
pub async fn run_clinical(
    host: &str,
    args: &ClinicalSeedArgs,
    now: NaiveDateTime,
) -> anyhow::Result<SeedReport> {
    let seed = resolve_seed(args.common.seed);
    let (patients, doctors) = load_pools(host, args).await?;

    if patients.is_empty() {
        anyhow::bail!(
            "No patients found in {}.{}; seed patients first",
            args.mongo.mongo_database,
            args.mongo.mongo_collection
        );
    }
    if doctors.is_empty() {
        anyhow::bail!("No doctors found in PostgreSQL; seed doctors first");
    }

    if args.common.dry_run {
        tracing::info!(
            "[DRY-RUN] Would seed {} clinical histories (seed={})",
            args.histories,
            seed
        );
        tracing::info!("[DRY-RUN] Connection: {}", args.mysql.describe(host));

        let records =
            ClinicalRecordGenerator::new(seed, now, patients, doctors)?.generate(args.histories);
        log_dry_run_records(&records);
        return Ok(SeedReport::default());
    }

    tracing::info!(
        "Seeding {} clinical histories (seed={})",
        args.histories,
        seed
    );
    tracing::info!("Connecting to MySQL: {}", args.mysql.describe(host));

    let seeder = ClinicalRecordSeeder::connect(args.mysql.to_opts(host), seed, now)
        .await
        .context("Failed to connect to MySQL")?;
    tracing::info!("Connected to MySQL");

    seeder
        .create_tables()
        .await
        .context("Failed to create clinical record tables")?;

    let result = seeder.seed(patients, doctors, args.histories).await;

    if let Err(e) = seeder.disconnect().await {
        tracing::warn!("Failed to disconnect from MySQL: {}", e);
    }

    let report = result.context("Failed to seed clinical records, transaction rolled back")?;
    tracing::info!("Clinical records: {}", report);
    Ok(report)
}

/// Seed patients, doctors and clinical records in that order.
///
/// The resolved `--seed` drives both the patient and the clinical step. The
/// dry run never connects: the clinical records are generated over the
/// in-memory patients and doctors.
pub async fn run_all(host: &str, args: &AllSeedArgs, now: NaiveDateTime) -> anyhow::Result<()> {
    let seed = resolve_seed(args.common.seed);

    if args.common.dry_run {
        return dry_run_all(args, seed, now);
    }

    let patients = run_patients(host, &args.patient_args(seed), now.date()).await?;
    let doctors = run_doctors(host, &args.doctor_args()).await?;
    let clinical = run_clinical(host, &args.clinical_args(seed), now).await?;

    tracing::info!(
        "Seeding complete: {} patients, {} doctors ({} availability slots), {} histories ({} appointments)",
        patients.records_inserted,
        doctors.records_inserted,
        doctors.children_inserted,
        clinical.records_inserted,
        clinical.children_inserted
    );

    Ok(())
}

fn dry_run_all(args: &AllSeedArgs, seed: u64, now: NaiveDateTime) -> anyhow::Result<()> {
    tracing::info!(
        "[DRY-RUN] Would seed {} patients, {} doctors and {} clinical histories (seed={}, doctor seed={})",
        args.patients,
        args.doctors,
        args.histories,
        seed,
        args.doctor_seed
    );

    let patients =
        PatientGenerator::new(seed, now.date()).generate(args.patients, &HashSet::new())?;
    let schedules = DoctorGenerator::new(args.doctor_seed).generate(args.doctors)?;
    tracing::info!(
        "[DRY-RUN] Generated {} patients and {} doctors",
        patients.len(),
        schedules.len()
    );

    let patient_ids: Vec<Dni> = patients.into_iter().map(|p| p.dni).collect();
    let doctor_refs: Vec<DoctorRef> = schedules.iter().map(|s| s.doctor.to_ref()).collect();
    let records = ClinicalRecordGenerator::new(seed, now, patient_ids, doctor_refs)?
        .generate(args.histories);
    log_dry_run_records(&records);

    Ok(())
}

fn log_dry_run_records(records: &[ClinicalRecord]) {
    let appointments: usize = records.iter().map(|r| r.appointments.len()).sum();
    tracing::info!(
        "[DRY-RUN] Generated {} clinical histories with {} appointments",
        records.len(),
        appointments
    );
}

async fn load_pools(
    host: &str,
    args: &ClinicalSeedArgs,
) -> anyhow::Result<(Vec<Dni>, Vec<DoctorRef>)> {
    let conn_str = args.mongo.connection_string(host);
    tracing::info!(
        "Connecting to MongoDB: {}",
        mask_connection_password(&conn_str)
    );
    let collection = connect_collection(
        &conn_str,
        &args.mongo.mongo_database,
        &args.mongo.mongo_collection,
    )
    .await
    .context("Failed to connect to MongoDB")?;

    // Sorted so a fixed seed picks the same records regardless of cursor order
    let mut patients = load_patient_ids(&collection)
        .await
        .context("Failed to load patient identifiers")?;
    patients.sort();
    tracing::info!("Loaded {} patient identifiers", patients.len());

    tracing::info!(
        "Connecting to PostgreSQL: {}",
        args.postgres.describe(host)
    );
    let client = connect_client(&args.postgres.to_config(host))
        .await
        .context("Failed to connect to PostgreSQL")?;

    let mut doctors = load_doctor_pool(&client)
        .await
        .context("Failed to load doctors")?;
    doctors.sort_by(|a, b| a.dni.cmp(&b.dni));
    tracing::info!("Loaded {} doctors", doctors.len());

    Ok((patients, doctors))
}
