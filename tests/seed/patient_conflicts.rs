//! Patient seeding against MongoDB: clearing makes reruns idempotent and
//! duplicate identifiers are counted instead of failing the insert.

use std::collections::HashSet;

use crate::test_helpers::{init_logging, store_args};
use chrono::NaiveDate;
use seed_generator::PatientGenerator;
use seed_populate_mongodb::insert::{count_documents, insert_patients, InsertOutcome};
use seed_populate_mongodb::{connect_collection, PatientSeeder};

const TEST_DB: &str = "hospital_seed_test";
const SEED: u64 = 9_001;
const COUNT: u64 = 30;
const EXTRA: u64 = 12;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

#[tokio::test]
async fn test_patient_seed_with_clear_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let args = store_args(&[]);
    let conn_str = args.all.mongo.connection_string(args.host());
    let collection = connect_collection(&conn_str, TEST_DB, "pacientes_idempotence").await?;
    collection.drop().await?;

    // === PHASE 1: seed twice with clear ===
    let mut seeder = PatientSeeder::with_collection(collection.clone(), SEED, today());
    let report = seeder.seed(COUNT, true).await?;
    assert_eq!(report.records_inserted, COUNT);
    assert_eq!(report.cleared, 0);
    assert_eq!(seeder.document_count().await?, COUNT);

    let report = seeder.seed(COUNT, true).await?;
    assert_eq!(report.cleared, COUNT);
    assert_eq!(report.records_inserted, COUNT);
    assert_eq!(report.conflicts, 0);
    assert_eq!(seeder.document_count().await?, COUNT);

    // === PHASE 2: a fresh seeder with the same seed still ends at COUNT ===
    let mut rerun = PatientSeeder::with_collection(collection.clone(), SEED, today());
    let report = rerun.seed(COUNT, true).await?;
    assert_eq!(report.records_inserted, COUNT);
    assert_eq!(rerun.document_count().await?, COUNT);

    // === PHASE 3: without clear the stored identifiers are skipped ===
    let mut append = PatientSeeder::with_collection(collection.clone(), SEED, today());
    let report = append.seed(EXTRA, false).await?;
    assert_eq!(report.cleared, 0);
    assert_eq!(report.records_inserted, EXTRA);
    assert_eq!(report.conflicts, 0);
    assert_eq!(append.document_count().await?, COUNT + EXTRA);

    collection.drop().await?;
    Ok(())
}

#[tokio::test]
async fn test_duplicate_patients_are_counted() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let args = store_args(&[]);
    let conn_str = args.all.mongo.connection_string(args.host());
    let collection = connect_collection(&conn_str, TEST_DB, "pacientes_conflicts").await?;
    collection.drop().await?;

    let patients =
        PatientGenerator::new(SEED, today()).generate(COUNT + EXTRA, &HashSet::new())?;

    // === PHASE 1: first COUNT patients ===
    let outcome = insert_patients(&collection, &patients[..COUNT as usize]).await?;
    assert_eq!(
        outcome,
        InsertOutcome {
            inserted: COUNT,
            conflicts: 0
        }
    );

    // === PHASE 2: all patients, the first COUNT collide ===
    let outcome = insert_patients(&collection, &patients).await?;
    assert_eq!(
        outcome,
        InsertOutcome {
            inserted: EXTRA,
            conflicts: COUNT
        }
    );
    assert_eq!(count_documents(&collection).await?, COUNT + EXTRA);

    collection.drop().await?;
    Ok(())
}
