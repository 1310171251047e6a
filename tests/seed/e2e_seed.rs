//! Full patients -> doctors -> clinical records scenario.

use crate::test_helpers::{init_logging, store_args};
use hospital_seed::seed::{run_clinical, run_doctors, run_patients};
use seed_generator::{MAX_APPOINTMENTS_PER_HISTORY, MAX_AVAILABILITY_PER_DOCTOR};
use seed_populate_mongodb::PatientSeeder;
use seed_populate_mysql::ClinicalRecordSeeder;
use seed_populate_postgresql::DoctorSeeder;

const SEED: u64 = 42;
const PATIENTS: u64 = 50;
const DOCTORS: u64 = 100;
const HISTORIES: u64 = 50;

#[tokio::test]
async fn test_seed_all_stores() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let args = store_args(&["--patients", "50", "--doctors", "100", "--histories", "50"]);
    let host = args.host();
    let now = chrono::Local::now().naive_local();

    // === PHASE 1: patients, clearing the collection ===
    let patient_args = args.all.patient_args(SEED);
    let report = run_patients(host, &patient_args, now.date()).await?;
    assert_eq!(report.records_inserted, PATIENTS);
    assert_eq!(report.conflicts, 0);

    let conn = &patient_args.connection;
    let patients = PatientSeeder::connect(
        &conn.connection_string(host),
        &conn.mongo_database,
        &conn.mongo_collection,
        SEED,
        now.date(),
    )
    .await?;
    assert_eq!(patients.document_count().await?, PATIENTS);

    // === PHASE 2: doctors and availability ===
    let doctor_args = args.all.doctor_args();
    let pg_config = doctor_args.connection.to_config(host);
    let doctor_store = DoctorSeeder::connect(&pg_config, doctor_args.seed).await?;
    doctor_store.create_tables().await?;
    let doctors_before = doctor_store.row_count("Doctor").await?;

    let report = run_doctors(host, &doctor_args).await?;
    // Doctors left by an earlier run with the same seed come back as conflicts
    assert_eq!(report.records_inserted + report.conflicts, DOCTORS);
    assert!(report.children_inserted >= report.records_inserted);
    assert!(
        report.children_inserted <= report.records_inserted * MAX_AVAILABILITY_PER_DOCTOR as u64
    );
    assert_eq!(
        doctor_store.row_count("Doctor").await?,
        doctors_before + report.records_inserted
    );

    // === PHASE 3: clinical records ===
    let clinical_args = args.all.clinical_args(SEED);
    let mysql = ClinicalRecordSeeder::connect(clinical_args.mysql.to_opts(host), SEED, now).await?;
    mysql.create_tables().await?;
    let histories_before = mysql.row_count("historias_clinicas").await?;
    let appointments_before = mysql.row_count("cita").await?;

    let report = run_clinical(host, &clinical_args, now).await?;
    assert_eq!(report.records_inserted, HISTORIES);
    assert!(report.children_inserted >= HISTORIES);
    assert!(report.children_inserted <= HISTORIES * MAX_APPOINTMENTS_PER_HISTORY as u64);

    assert_eq!(
        mysql.row_count("historias_clinicas").await? - histories_before,
        HISTORIES
    );
    assert_eq!(
        mysql.row_count("cita").await? - appointments_before,
        report.children_inserted
    );

    mysql.disconnect().await?;
    Ok(())
}
