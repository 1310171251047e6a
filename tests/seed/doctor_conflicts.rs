//! Doctor reruns against PostgreSQL: repeated identifiers are rejected and
//! their availability is never written.

use crate::test_helpers::{init_logging, store_args};
use seed_generator::DoctorGenerator;
use seed_populate_postgresql::{connect_client, DoctorSeeder};

const SCHEMA: &str = "hospital_seed_conflicts";
const SEED: u64 = 7_001;
const COUNT: u64 = 40;
const EXTRA: u64 = 10;

#[tokio::test]
async fn test_doctor_rerun_reports_conflicts() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let args = store_args(&[]);
    let base = args.all.postgres.to_config(args.host());

    // === PHASE 1: fresh schema, first run ===
    let admin = connect_client(&base).await?;
    admin
        .batch_execute(&format!(
            "DROP SCHEMA IF EXISTS {SCHEMA} CASCADE; CREATE SCHEMA {SCHEMA}"
        ))
        .await?;

    let mut config = base.clone();
    config.options(&format!("-c search_path={SCHEMA}"));

    let mut first = DoctorSeeder::connect(&config, SEED)
        .await?
        .with_batch_size(7);
    first.create_tables().await?;

    let report = first.seed(COUNT).await?;
    assert_eq!(report.records_inserted, COUNT);
    assert_eq!(report.conflicts, 0);
    assert!(report.children_inserted >= COUNT);

    let doctors = first.row_count("Doctor").await?;
    let slots = first.row_count("Disponibilidad").await?;
    assert_eq!(doctors, COUNT);
    assert_eq!(slots, report.children_inserted);

    // === PHASE 2: same seed again, every doctor conflicts ===
    let mut second = DoctorSeeder::connect(&config, SEED).await?;
    let report = second.seed(COUNT).await?;
    assert_eq!(report.records_inserted, 0);
    assert_eq!(report.conflicts, COUNT);
    assert_eq!(report.children_inserted, 0);
    assert_eq!(second.row_count("Doctor").await?, doctors);
    assert_eq!(second.row_count("Disponibilidad").await?, slots);

    // === PHASE 3: same seed, larger count; only the new doctors get availability ===
    let expected = DoctorGenerator::new(SEED).generate(COUNT + EXTRA)?;
    let new_slots: usize = expected[COUNT as usize..]
        .iter()
        .map(|s| s.availability.len())
        .sum();

    let mut third = DoctorSeeder::connect(&config, SEED)
        .await?
        .with_batch_size(3);
    let report = third.seed(COUNT + EXTRA).await?;
    assert_eq!(report.records_inserted, EXTRA);
    assert_eq!(report.conflicts, COUNT);
    assert_eq!(report.children_inserted, new_slots as u64);
    assert_eq!(third.row_count("Doctor").await?, doctors + EXTRA);
    assert_eq!(
        third.row_count("Disponibilidad").await?,
        slots + new_slots as u64
    );

    // === PHASE 4: cleanup ===
    admin
        .batch_execute(&format!("DROP SCHEMA IF EXISTS {SCHEMA} CASCADE"))
        .await?;

    Ok(())
}
