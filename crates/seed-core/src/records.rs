//! Record types produced by the generator and persisted by the seeders.

use crate::dni::Dni;
use crate::types::{DayOfWeek, InsuranceType};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Insurance attached to a patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insurance {
    pub kind: InsuranceType,
    pub expires_on: NaiveDate,
}

/// A patient document.
///
/// `dni` is the document's primary key and the join key used by the
/// clinical record seeder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub dni: Dni,
    pub given_name: String,
    pub family_name: String,
    pub birth_date: NaiveDate,
    pub insurance: Option<Insurance>,
}

impl Patient {
    /// Whether the patient holds insurance.
    pub fn has_insurance(&self) -> bool {
        self.insurance.is_some()
    }
}

/// A doctor row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub dni: Dni,
    pub given_name: String,
    pub family_name: String,
    pub specialty: String,
    /// Initial value only; not maintained when appointments are created.
    pub total_appointments: i32,
}

impl Doctor {
    /// The (identifier, specialty) pair referenced by appointments.
    pub fn to_ref(&self) -> DoctorRef {
        DoctorRef {
            dni: self.dni.clone(),
            specialty: self.specialty.clone(),
        }
    }
}

/// A doctor identifier together with its specialty, as loaded from the
/// doctor table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoctorRef {
    pub dni: Dni,
    pub specialty: String,
}

/// A doctor and the availability slots generated for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorSchedule {
    pub doctor: Doctor,
    pub availability: Vec<Availability>,
}

/// A weekly availability slot owned by a doctor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub day: DayOfWeek,
    pub time: NaiveTime,
    pub doctor_dni: Dni,
}

/// A clinical history row. The numeric id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicalHistory {
    pub patient_dni: Dni,
    pub created_at: NaiveDateTime,
}

/// An appointment row. The numeric id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub doctor_dni: Dni,
    /// Copied from the doctor at generation time.
    pub specialty: String,
    pub day: DayOfWeek,
    pub time: NaiveTime,
    pub patient_dni: Dni,
    pub diagnosis: String,
    pub treatment: String,
}

/// One clinical history and the appointments generated for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicalRecord {
    pub history: ClinicalHistory,
    pub appointments: Vec<Appointment>,
}

impl ClinicalRecord {
    /// Number of rows this record writes (history + appointments).
    pub fn row_count(&self) -> u64 {
        1 + self.appointments.len() as u64
    }
}
