//! PostgreSQL doctor seeder.

use crate::error::PostgreSQLSeederError;
use crate::insert::{
    availability_batch_rows, doctor_batch_rows, generate_create_availability_table,
    generate_create_doctor_table, insert_availability_batch, insert_doctor_batch, row_count,
    DEFAULT_BATCH_SIZE,
};
use seed_core::{Availability, Doctor, DoctorSchedule};
use seed_generator::DoctorGenerator;
use seed_populate::SeedReport;
use std::collections::HashSet;
use std::time::Instant;
use tokio_postgres::{Client, NoTls};
use tracing::{debug, info, warn};

/// PostgreSQL seeder that generates doctors with their availability.
pub struct DoctorSeeder {
    client: Client,
    generator: DoctorGenerator,
    batch_size: usize,
}

impl DoctorSeeder {
    /// Connect to PostgreSQL and verify the connection.
    ///
    /// # Arguments
    ///
    /// * `config` - Driver configuration (host, port, credentials, database)
    /// * `seed` - Random seed for the doctor generator
    pub async fn connect(
        config: &tokio_postgres::Config,
        seed: u64,
    ) -> Result<Self, PostgreSQLSeederError> {
        let client = connect_client(config).await?;
        Ok(Self::with_client(client, seed))
    }

    /// Create a new seeder with an existing client.
    pub fn with_client(client: Client, seed: u64) -> Self {
        Self {
            client,
            generator: DoctorGenerator::new(seed),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Set the batch size for INSERT operations.
    ///
    /// Each table's batches are capped so a statement stays within the bind
    /// parameter limit.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        if doctor_batch_rows(batch_size) < batch_size {
            warn!(
                "Batch size {} exceeds the bind parameter limit, doctor batches capped at {}",
                batch_size,
                doctor_batch_rows(batch_size)
            );
        }
        self.batch_size = batch_size.max(1);
        self
    }

    /// Create the doctor and availability tables if they do not exist.
    pub async fn create_tables(&self) -> Result<(), PostgreSQLSeederError> {
        let doctor_ddl = generate_create_doctor_table();
        let availability_ddl = generate_create_availability_table();
        debug!("DDL: {}", doctor_ddl);
        debug!("DDL: {}", availability_ddl);

        self.client.execute(&doctor_ddl, &[]).await?;
        self.client.execute(&availability_ddl, &[]).await?;
        info!("Tables Doctor and Disponibilidad created/verified");
        Ok(())
    }

    /// Generate `count` doctors without writing them.
    pub fn generate(&mut self, count: u64) -> Result<Vec<DoctorSchedule>, PostgreSQLSeederError> {
        Ok(self.generator.generate(count)?)
    }

    /// Generate and insert `count` doctors with their availability.
    ///
    /// All rows are written in one transaction. Doctors whose identifier
    /// already exists are reported as conflicts and their availability is not
    /// written. On any error the transaction is dropped uncommitted, which
    /// rolls back every row from this run.
    pub async fn seed(&mut self, count: u64) -> Result<SeedReport, PostgreSQLSeederError> {
        let start_time = Instant::now();
        let mut report = SeedReport::default();

        let schedules = self.generate(count)?;
        let doctors: Vec<&Doctor> = schedules.iter().map(|s| &s.doctor).collect();

        let tx = self.client.transaction().await?;

        info!("Inserting {} doctors...", doctors.len());
        let mut inserted: HashSet<String> = HashSet::with_capacity(doctors.len());
        for (batch, chunk) in doctors.chunks(doctor_batch_rows(self.batch_size)).enumerate() {
            let written = insert_doctor_batch(&tx, chunk).await?;
            debug!("Doctor batch {} complete: {} rows", batch + 1, written.len());
            inserted.extend(written);
        }

        report.records_inserted = inserted.len() as u64;
        report.conflicts = doctors.len() as u64 - report.records_inserted;
        if report.conflicts > 0 {
            warn!(
                "{} doctors rejected: identifier already exists (their availability is skipped)",
                report.conflicts
            );
        }

        let slots: Vec<&Availability> = schedules
            .iter()
            .filter(|s| inserted.contains(s.doctor.dni.as_str()))
            .flat_map(|s| s.availability.iter())
            .collect();

        info!("Inserting {} availability slots...", slots.len());
        for chunk in slots.chunks(availability_batch_rows(self.batch_size)) {
            report.children_inserted += insert_availability_batch(&tx, chunk).await?;
        }

        tx.commit().await?;

        report.duration = start_time.elapsed();
        info!(
            "Doctors and availability stored: {} ({:.2} rows/sec)",
            report,
            report.rows_per_second()
        );

        Ok(report)
    }

    /// Get the row count for a table.
    pub async fn row_count(&self, table_name: &str) -> Result<u64, PostgreSQLSeederError> {
        row_count(&self.client, table_name).await
    }
}

/// Open a client, spawn its connection task and check it with `SELECT 1`.
pub async fn connect_client(config: &tokio_postgres::Config) -> Result<Client, PostgreSQLSeederError> {
    let (client, connection) = config
        .connect(NoTls)
        .await
        .map_err(|e| PostgreSQLSeederError::Connection(e.to_string()))?;

    // Spawn the connection task
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            tracing::error!("PostgreSQL connection error: {}", e);
        }
    });

    // Test connection
    client
        .simple_query("SELECT 1")
        .await
        .map_err(|e| PostgreSQLSeederError::Connection(e.to_string()))?;

    Ok(client)
}
