//! DDL and batched INSERT logic for the doctor store.

use crate::error::PostgreSQLSeederError;
use seed_core::{Availability, DayOfWeek, Doctor, DoctorRef};
use std::collections::HashSet;
use tokio_postgres::types::ToSql;
use tokio_postgres::{Client, Transaction};
use tracing::warn;

/// Default batch size for INSERT operations.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// PostgreSQL accepts at most `u16::MAX` bind parameters per statement.
const MAX_BIND_PARAMS: usize = u16::MAX as usize;

const DOCTOR_COLUMNS: usize = 5;
const AVAILABILITY_COLUMNS: usize = 3;

/// Largest doctor batch that fits in one statement.
pub const MAX_DOCTOR_BATCH_SIZE: usize = MAX_BIND_PARAMS / DOCTOR_COLUMNS;

/// Largest availability batch that fits in one statement.
pub const MAX_AVAILABILITY_BATCH_SIZE: usize = MAX_BIND_PARAMS / AVAILABILITY_COLUMNS;

/// Rows per doctor INSERT for a requested batch size.
pub fn doctor_batch_rows(batch_size: usize) -> usize {
    batch_size.clamp(1, MAX_DOCTOR_BATCH_SIZE)
}

/// Rows per availability INSERT for a requested batch size.
pub fn availability_batch_rows(batch_size: usize) -> usize {
    batch_size.clamp(1, MAX_AVAILABILITY_BATCH_SIZE)
}

/// Generate the CREATE TABLE statement for doctors.
pub fn generate_create_doctor_table() -> String {
    "CREATE TABLE IF NOT EXISTS Doctor (\
     dni VARCHAR(8) PRIMARY KEY, \
     nombres VARCHAR(50), \
     apellidos VARCHAR(50), \
     especialidad VARCHAR(100), \
     totalcitas INT)"
        .to_string()
}

/// Generate the CREATE TABLE statement for availability slots.
///
/// `dia` only accepts the six working-day labels.
pub fn generate_create_availability_table() -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS Disponibilidad (\
         id SERIAL PRIMARY KEY, \
         dia VARCHAR(15) NOT NULL CHECK (dia IN ({})), \
         hora TIME NOT NULL, \
         dni_doctor VARCHAR(8) NOT NULL, \
         FOREIGN KEY (dni_doctor) REFERENCES Doctor(dni))",
        DayOfWeek::sql_value_list()
    )
}

/// Build `($1, $2, ...), ($n, ...)` for a multi-row VALUES clause.
fn values_placeholders(rows: usize, columns: usize) -> String {
    let mut param_idx = 1;
    let mut placeholders: Vec<String> = Vec::with_capacity(rows);

    for _ in 0..rows {
        let row_placeholders: Vec<String> = (0..columns)
            .map(|_| {
                let p = format!("${param_idx}");
                param_idx += 1;
                p
            })
            .collect();
        placeholders.push(format!("({})", row_placeholders.join(", ")));
    }

    placeholders.join(", ")
}

/// Generate the doctor INSERT; conflicting identifiers are skipped and the
/// inserted ones returned.
pub fn generate_insert_doctors(rows: usize) -> String {
    format!(
        "INSERT INTO Doctor (dni, nombres, apellidos, especialidad, totalcitas) VALUES {} \
         ON CONFLICT (dni) DO NOTHING RETURNING dni",
        values_placeholders(rows, DOCTOR_COLUMNS)
    )
}

/// Generate the availability INSERT.
pub fn generate_insert_availability(rows: usize) -> String {
    format!(
        "INSERT INTO Disponibilidad (dia, hora, dni_doctor) VALUES {}",
        values_placeholders(rows, AVAILABILITY_COLUMNS)
    )
}

/// Convert boxed parameters to references for execution.
fn param_refs(params: &[Box<dyn ToSql + Sync + Send>]) -> Vec<&(dyn ToSql + Sync)> {
    params
        .iter()
        .map(|p| p.as_ref() as &(dyn ToSql + Sync))
        .collect()
}

/// Insert a batch of doctors and return the identifiers actually written.
///
/// Identifiers that already exist are left untouched and are absent from
/// the result.
pub async fn insert_doctor_batch(
    tx: &Transaction<'_>,
    doctors: &[&Doctor],
) -> Result<HashSet<String>, PostgreSQLSeederError> {
    if doctors.is_empty() {
        return Ok(HashSet::new());
    }

    let sql = generate_insert_doctors(doctors.len());

    let mut params: Vec<Box<dyn ToSql + Sync + Send>> = Vec::with_capacity(doctors.len() * DOCTOR_COLUMNS);
    for doctor in doctors {
        params.push(Box::new(doctor.dni.to_string()));
        params.push(Box::new(doctor.given_name.clone()));
        params.push(Box::new(doctor.family_name.clone()));
        params.push(Box::new(doctor.specialty.clone()));
        params.push(Box::new(doctor.total_appointments));
    }

    let rows = tx.query(&sql, &param_refs(&params)).await?;
    Ok(rows.iter().map(|row| row.get::<_, String>(0)).collect())
}

/// Insert a batch of availability rows.
pub async fn insert_availability_batch(
    tx: &Transaction<'_>,
    slots: &[&Availability],
) -> Result<u64, PostgreSQLSeederError> {
    if slots.is_empty() {
        return Ok(0);
    }

    let sql = generate_insert_availability(slots.len());

    let mut params: Vec<Box<dyn ToSql + Sync + Send>> = Vec::with_capacity(slots.len() * AVAILABILITY_COLUMNS);
    for slot in slots {
        params.push(Box::new(slot.day.as_str()));
        params.push(Box::new(slot.time));
        params.push(Box::new(slot.doctor_dni.to_string()));
    }

    Ok(tx.execute(&sql, &param_refs(&params)).await?)
}

/// Load every (identifier, specialty) pair from the doctor table.
///
/// Rows with a NULL specialty or a malformed identifier are skipped.
pub async fn load_doctor_pool(client: &Client) -> Result<Vec<DoctorRef>, PostgreSQLSeederError> {
    let rows = client
        .query("SELECT dni, especialidad FROM Doctor", &[])
        .await?;

    let mut pool = Vec::with_capacity(rows.len());
    for row in rows {
        let dni: String = row.get(0);
        let specialty: Option<String> = row.get(1);
        match (dni.parse(), specialty) {
            (Ok(dni), Some(specialty)) => pool.push(DoctorRef { dni, specialty }),
            _ => warn!("Skipping doctor row '{}' without usable identifier or specialty", dni),
        }
    }

    Ok(pool)
}

/// Get the row count for a table.
pub async fn row_count(client: &Client, table_name: &str) -> Result<u64, PostgreSQLSeederError> {
    let sql = format!("SELECT COUNT(*) FROM {table_name}");
    let row = client.query_one(&sql, &[]).await?;
    let count: i64 = row.get(0);
    Ok(count as u64)
}
