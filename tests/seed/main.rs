//! Seeding tests against live databases.
//!
//! The stores are named by the usual connection variables (`HOST`,
//! `MONGO_*`, `PG_*`, `MYSQL_*`). `e2e_seed` runs the three seeders in order
//! against the configured databases:
//! 1. Replace the patient collection with a fixed number of patients
//! 2. Add doctors and their availability
//! 3. Write clinical records over the stored patients and doctors
//! 4. Check the row deltas in every store
//!
//! The other modules work in their own collection, schema or database so
//! they can run alongside the scenario.

mod clinical_rollback;
mod doctor_conflicts;
mod e2e_seed;
mod patient_conflicts;
mod test_helpers;
