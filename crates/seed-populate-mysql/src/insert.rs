//! DDL, value encoding and row INSERTs for the clinical record store.

use crate::error::MySQLSeederError;
use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike};
use mysql_async::{prelude::*, Params, Pool, Transaction, Value};
use seed_core::{Appointment, ClinicalHistory, DayOfWeek};

/// Generate the CREATE TABLE statement for clinical histories.
///
/// `dni` is not declared as a foreign key: patients live in another store.
pub fn generate_create_history_table() -> String {
    "CREATE TABLE IF NOT EXISTS historias_clinicas (\
     id INT AUTO_INCREMENT PRIMARY KEY, \
     dni VARCHAR(10) NOT NULL, \
     fecha_creacion_historia DATETIME NOT NULL\
     ) DEFAULT CHARSET=utf8mb4"
        .to_string()
}

/// Generate the CREATE TABLE statement for appointments.
///
/// The day column uses the same six labels as the availability table.
pub fn generate_create_appointment_table() -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS cita (\
         id INT AUTO_INCREMENT PRIMARY KEY, \
         dni_doctor VARCHAR(10) NOT NULL, \
         especialidad VARCHAR(100), \
         dia_consulta ENUM({}) NOT NULL, \
         hora_consulta TIME NOT NULL, \
         dni VARCHAR(10) NOT NULL, \
         diagnostico TEXT, \
         tratamiento TEXT\
         ) DEFAULT CHARSET=utf8mb4",
        DayOfWeek::sql_value_list()
    )
}

const INSERT_HISTORY: &str =
    "INSERT INTO historias_clinicas (dni, fecha_creacion_historia) VALUES (?, ?)";

const INSERT_APPOINTMENT: &str = "INSERT INTO cita \
     (dni_doctor, especialidad, dia_consulta, hora_consulta, dni, diagnostico, tratamiento) \
     VALUES (?, ?, ?, ?, ?, ?, ?)";

/// Encode a timestamp as a MySQL DATETIME value.
pub fn datetime_value(dt: &NaiveDateTime) -> Value {
    Value::Date(
        dt.year() as u16,
        dt.month() as u8,
        dt.day() as u8,
        dt.hour() as u8,
        dt.minute() as u8,
        dt.second() as u8,
        dt.nanosecond() / 1_000,
    )
}

/// Encode a time of day as a MySQL TIME value.
pub fn time_value(t: &NaiveTime) -> Value {
    Value::Time(
        false,
        0,
        t.hour() as u8,
        t.minute() as u8,
        t.second() as u8,
        t.nanosecond() / 1_000,
    )
}

/// Positional parameters for a history INSERT.
pub fn history_params(history: &ClinicalHistory) -> Params {
    Params::Positional(vec![
        Value::from(history.patient_dni.as_str()),
        datetime_value(&history.created_at),
    ])
}

/// Positional parameters for an appointment INSERT.
pub fn appointment_params(appointment: &Appointment) -> Params {
    Params::Positional(vec![
        Value::from(appointment.doctor_dni.as_str()),
        Value::from(appointment.specialty.as_str()),
        Value::from(appointment.day.as_str()),
        time_value(&appointment.time),
        Value::from(appointment.patient_dni.as_str()),
        Value::from(appointment.diagnosis.as_str()),
        Value::from(appointment.treatment.as_str()),
    ])
}

/// Insert one clinical history and return its generated id.
pub async fn insert_history(
    tx: &mut Transaction<'_>,
    history: &ClinicalHistory,
) -> Result<Option<u64>, MySQLSeederError> {
    tx.exec_drop(INSERT_HISTORY, history_params(history)).await?;
    Ok(tx.last_insert_id())
}

/// Insert one appointment.
pub async fn insert_appointment(
    tx: &mut Transaction<'_>,
    appointment: &Appointment,
) -> Result<(), MySQLSeederError> {
    tx.exec_drop(INSERT_APPOINTMENT, appointment_params(appointment))
        .await?;
    Ok(())
}

/// Get the row count for a table.
pub async fn row_count(pool: &Pool, table_name: &str) -> Result<u64, MySQLSeederError> {
    let mut conn = pool.get_conn().await?;
    let count: Option<u64> = conn
        .query_first(format!("SELECT COUNT(*) FROM `{table_name}`"))
        .await?;
    Ok(count.unwrap_or(0))
}
