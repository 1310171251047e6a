//! Core record types for the hospital-seed framework.
//!
//! This crate provides the foundational types shared by the generator and
//! the three seeders:
//!
//! - [`Dni`] - 8-digit national identifier used as the join key across stores
//! - [`Patient`] / [`Insurance`] - documents written to MongoDB
//! - [`Doctor`] / [`Availability`] - rows written to PostgreSQL
//! - [`ClinicalHistory`] / [`Appointment`] - rows written to MySQL
//! - [`DayOfWeek`] - the one day representation used by every store
//!
//! # Architecture
//!
//! ```text
//! seed-core (this crate)
//!    │
//!    ├─── seed-generator            (synthesises records from a seeded RNG)
//!    │
//!    ├─── seed-populate-mongodb     (patients)
//!    ├─── seed-populate-postgresql  (doctors + availability)
//!    └─── seed-populate-mysql       (clinical histories + appointments)
//! ```

pub mod dni;
pub mod records;
pub mod types;

// Re-exports for convenience
pub use dni::{Dni, DniError, DNI_MAX, DNI_MIN};
pub use records::{
    Appointment, Availability, ClinicalHistory, ClinicalRecord, Doctor, DoctorRef, DoctorSchedule,
    Insurance, Patient,
};
pub use types::{is_known_specialty, DayOfWeek, InsuranceType, SPECIALTIES};
