//! MySQL clinical record seeder.

use crate::error::MySQLSeederError;
use crate::insert::{
    generate_create_appointment_table, generate_create_history_table, insert_appointment,
    insert_history, row_count,
};
use chrono::NaiveDateTime;
use mysql_async::{prelude::*, Opts, Pool, Transaction, TxOpts};
use seed_core::{ClinicalRecord, Dni, DoctorRef};
use seed_generator::ClinicalRecordGenerator;
use seed_populate::SeedReport;
use std::time::Instant;
use tracing::{debug, error, info};

/// Seeder that writes clinical histories and appointments.
pub struct ClinicalRecordSeeder {
    pool: Pool,
    seed: u64,
    now: NaiveDateTime,
}

impl ClinicalRecordSeeder {
    /// Connect to MySQL and verify a connection can be checked out.
    ///
    /// # Arguments
    ///
    /// * `opts` - Driver options (host, port, credentials, database)
    /// * `seed` - Random seed for record generation
    /// * `now` - Timestamp that bounds history creation times
    pub async fn connect(
        opts: Opts,
        seed: u64,
        now: NaiveDateTime,
    ) -> Result<Self, MySQLSeederError> {
        let pool = Pool::new(opts);

        // Test connection
        let mut conn = pool
            .get_conn()
            .await
            .map_err(|e| MySQLSeederError::Connection(e.to_string()))?;
        conn.ping()
            .await
            .map_err(|e| MySQLSeederError::Connection(e.to_string()))?;
        drop(conn);

        Ok(Self::with_pool(pool, seed, now))
    }

    /// Create a seeder with an existing pool.
    pub fn with_pool(pool: Pool, seed: u64, now: NaiveDateTime) -> Self {
        Self { pool, seed, now }
    }

    /// Create the history and appointment tables if they do not exist.
    pub async fn create_tables(&self) -> Result<(), MySQLSeederError> {
        let history_ddl = generate_create_history_table();
        let appointment_ddl = generate_create_appointment_table();
        debug!("DDL: {}", history_ddl);
        debug!("DDL: {}", appointment_ddl);

        let mut conn = self.pool.get_conn().await?;
        conn.query_drop(history_ddl).await?;
        conn.query_drop(appointment_ddl).await?;
        info!("Tables historias_clinicas and cita created/verified");
        Ok(())
    }

    /// Generate `count` records over the given pools without writing them.
    ///
    /// Fails when either pool is empty.
    pub fn generate(
        &self,
        patients: Vec<Dni>,
        doctors: Vec<DoctorRef>,
        count: u64,
    ) -> Result<Vec<ClinicalRecord>, MySQLSeederError> {
        let mut generator = ClinicalRecordGenerator::new(self.seed, self.now, patients, doctors)?;
        Ok(generator.generate(count))
    }

    /// Generate `count` records and write them.
    pub async fn seed(
        &self,
        patients: Vec<Dni>,
        doctors: Vec<DoctorRef>,
        count: u64,
    ) -> Result<SeedReport, MySQLSeederError> {
        info!(
            "Generating {} clinical histories over {} patients and {} doctors",
            count,
            patients.len(),
            doctors.len()
        );
        let records = self.generate(patients, doctors, count)?;
        self.seed_records(&records).await
    }

    /// Write pre-generated records in a single transaction.
    ///
    /// Any failed insert rolls back every row written by this call.
    pub async fn seed_records(
        &self,
        records: &[ClinicalRecord],
    ) -> Result<SeedReport, MySQLSeederError> {
        let start_time = Instant::now();
        let mut conn = self.pool.get_conn().await?;
        let mut tx = conn.start_transaction(TxOpts::default()).await?;

        let mut report = match write_records(&mut tx, records).await {
            Ok(report) => report,
            Err(e) => {
                error!("Clinical record insert failed, rolling back: {}", e);
                if let Err(rollback) = tx.rollback().await {
                    error!("Rollback failed: {}", rollback);
                }
                return Err(e);
            }
        };

        tx.commit().await?;

        report.duration = start_time.elapsed();
        info!(
            "Clinical records stored: {} ({:.2} rows/sec)",
            report,
            report.rows_per_second()
        );
        Ok(report)
    }

    /// Get the row count for a table.
    pub async fn row_count(&self, table_name: &str) -> Result<u64, MySQLSeederError> {
        row_count(&self.pool, table_name).await
    }

    /// Close every pooled connection.
    pub async fn disconnect(self) -> Result<(), MySQLSeederError> {
        self.pool.disconnect().await?;
        Ok(())
    }
}

async fn write_records(
    tx: &mut Transaction<'_>,
    records: &[ClinicalRecord],
) -> Result<SeedReport, MySQLSeederError> {
    let mut report = SeedReport::default();
    let total = total_rows(records);
    info!(
        "Writing {} clinical histories ({} rows)",
        records.len(),
        total
    );

    for record in records {
        let history_id = insert_history(tx, &record.history).await?;
        report.records_inserted += 1;
        debug!(
            "Row {}/{}: history {:?} created for patient {}",
            report.rows_written(),
            total,
            history_id,
            record.history.patient_dni
        );

        for appointment in &record.appointments {
            insert_appointment(tx, appointment).await?;
            report.children_inserted += 1;
            info!(
                "Row {}/{}: appointment for patient {} with doctor {} ({}) on {} at {}",
                report.rows_written(),
                total,
                appointment.patient_dni,
                appointment.doctor_dni,
                appointment.specialty,
                appointment.day,
                appointment.time
            );
        }
    }

    Ok(report)
}

/// Rows one call writes: each history plus its appointments.
fn total_rows(records: &[ClinicalRecord]) -> u64 {
    records.iter().map(ClinicalRecord::row_count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn pools() -> (Vec<Dni>, Vec<DoctorRef>) {
        let patients = vec!["10000001".parse().unwrap(), "10000002".parse().unwrap()];
        let doctors = vec![DoctorRef {
            dni: "20000001".parse().unwrap(),
            specialty: "Cardiología".to_string(),
        }];
        (patients, doctors)
    }

    fn offline_seeder(seed: u64) -> ClinicalRecordSeeder {
        let opts = mysql_async::OptsBuilder::default().ip_or_hostname("localhost");
        ClinicalRecordSeeder::with_pool(Pool::new(opts), seed, now())
    }

    #[tokio::test]
    async fn test_generate_references_pools() {
        let seeder = offline_seeder(3);
        let (patients, doctors) = pools();
        let records = seeder
            .generate(patients.clone(), doctors.clone(), 10)
            .unwrap();

        assert_eq!(records.len(), 10);
        for record in &records {
            assert!(patients.contains(&record.history.patient_dni));
            for appointment in &record.appointments {
                assert_eq!(appointment.doctor_dni, doctors[0].dni);
                assert_eq!(appointment.specialty, "Cardiología");
            }
        }
    }

    #[tokio::test]
    async fn test_generate_rejects_empty_pools() {
        let seeder = offline_seeder(3);
        let (patients, doctors) = pools();

        let err = seeder.generate(Vec::new(), doctors, 1).unwrap_err();
        assert!(matches!(err, MySQLSeederError::Generator(_)));

        let err = seeder.generate(patients, Vec::new(), 1).unwrap_err();
        assert!(matches!(err, MySQLSeederError::Generator(_)));
    }

    #[tokio::test]
    async fn test_total_rows_counts_histories_and_appointments() {
        let seeder = offline_seeder(5);
        let (patients, doctors) = pools();
        let records = seeder.generate(patients, doctors, 8).unwrap();

        let appointments: usize = records.iter().map(|r| r.appointments.len()).sum();
        assert_eq!(total_rows(&records), 8 + appointments as u64);
        assert_eq!(total_rows(&[]), 0);
    }
}
