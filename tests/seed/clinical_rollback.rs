//! Clinical record writes against MySQL: a failed appointment insert rolls
//! back every history written by the same call.

use crate::test_helpers::{init_logging, store_args};
use chrono::NaiveDate;
use mysql_async::prelude::*;
use mysql_async::{OptsBuilder, Pool};
use seed_core::{DayOfWeek, Dni, DoctorRef};
use seed_populate_mysql::insert::{
    generate_create_appointment_table, generate_create_history_table,
};
use seed_populate_mysql::ClinicalRecordSeeder;

const TEST_DB: &str = "hospital_seed_rollback";
const SEED: u64 = 5_001;
const HISTORIES: u64 = 6;

fn pools() -> (Vec<Dni>, Vec<DoctorRef>) {
    let patients = vec!["30000001".parse().unwrap(), "30000002".parse().unwrap()];
    let doctors = vec![DoctorRef {
        dni: "40000001".parse().unwrap(),
        specialty: "Pediatría".to_string(),
    }];
    (patients, doctors)
}

#[tokio::test]
async fn test_failed_appointment_rolls_back_histories() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let args = store_args(&[]);
    let base = args.all.mysql.to_opts(args.host());
    let now = NaiveDate::from_ymd_opt(2026, 10, 18)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();

    // === PHASE 1: dedicated database with a cita table that rejects every weekday ===
    let server = Pool::new(OptsBuilder::from_opts(base.clone()).db_name(None::<String>));
    let mut conn = server.get_conn().await?;
    conn.query_drop(format!("DROP DATABASE IF EXISTS {TEST_DB}"))
        .await?;
    conn.query_drop(format!("CREATE DATABASE {TEST_DB}")).await?;
    drop(conn);

    // Strict mode turns the out-of-range ENUM value into an error
    let opts = OptsBuilder::from_opts(base)
        .db_name(Some(TEST_DB))
        .init(vec!["SET SESSION sql_mode = 'STRICT_ALL_TABLES'"]);
    let test_pool = Pool::new(opts.clone());
    let mut conn = test_pool.get_conn().await?;
    conn.query_drop(generate_create_history_table()).await?;
    let narrow_cita =
        generate_create_appointment_table().replace(&DayOfWeek::sql_value_list(), "'Domingo'");
    conn.query_drop(narrow_cita).await?;
    conn.query_drop(
        "INSERT INTO historias_clinicas (dni, fecha_creacion_historia) \
         VALUES ('30000009', '2026-01-01 08:00:00')",
    )
    .await?;
    drop(conn);

    // === PHASE 2: the write fails and leaves the tables as they were ===
    let seeder = ClinicalRecordSeeder::connect(opts.into(), SEED, now).await?;
    let (patients, doctors) = pools();
    let records = seeder.generate(patients, doctors, HISTORIES)?;

    let result = seeder.seed_records(&records).await;
    assert!(result.is_err());
    assert_eq!(seeder.row_count("historias_clinicas").await?, 1);
    assert_eq!(seeder.row_count("cita").await?, 0);

    // === PHASE 3: with the regular cita table the same records commit ===
    let mut conn = test_pool.get_conn().await?;
    conn.query_drop("DROP TABLE cita").await?;
    drop(conn);
    seeder.create_tables().await?;

    let report = seeder.seed_records(&records).await?;
    let appointments: usize = records.iter().map(|r| r.appointments.len()).sum();
    assert_eq!(report.records_inserted, HISTORIES);
    assert_eq!(report.children_inserted, appointments as u64);
    assert_eq!(seeder.row_count("historias_clinicas").await?, 1 + HISTORIES);
    assert_eq!(seeder.row_count("cita").await?, appointments as u64);

    // === PHASE 4: cleanup ===
    seeder.disconnect().await?;
    test_pool.disconnect().await?;
    let mut conn = server.get_conn().await?;
    conn.query_drop(format!("DROP DATABASE IF EXISTS {TEST_DB}"))
        .await?;
    drop(conn);
    server.disconnect().await?;

    Ok(())
}
