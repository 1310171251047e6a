//! Clinical history and appointment generation from loaded patient and
//! doctor pools.

use crate::error::GeneratorError;
use crate::generators::{
    generate_count, generate_datetime_between, generate_filler_text, generate_time_of_day,
    start_of_year,
};
use crate::rng_from_seed;
use chrono::NaiveDateTime;
use rand::rngs::StdRng;
use rand::Rng;
use seed_core::{Appointment, ClinicalHistory, ClinicalRecord, DayOfWeek, Dni, DoctorRef};

/// Appointments per history are drawn from `1..=MAX_APPOINTMENTS_PER_HISTORY`.
pub const MAX_APPOINTMENTS_PER_HISTORY: usize = 5;

/// Length bound for diagnosis and treatment text.
pub const MAX_TEXT_CHARS: usize = 100;

/// Generates clinical records that only reference identifiers from the
/// pools it was built with.
pub struct ClinicalRecordGenerator {
    rng: StdRng,
    now: NaiveDateTime,
    patients: Vec<Dni>,
    doctors: Vec<DoctorRef>,
}

impl ClinicalRecordGenerator {
    /// Create a generator over the loaded pools.
    ///
    /// Both pools must be non-empty.
    pub fn new(
        seed: u64,
        now: NaiveDateTime,
        patients: Vec<Dni>,
        doctors: Vec<DoctorRef>,
    ) -> Result<Self, GeneratorError> {
        if patients.is_empty() {
            return Err(GeneratorError::EmptyPatientPool);
        }
        if doctors.is_empty() {
            return Err(GeneratorError::EmptyDoctorPool);
        }
        Ok(Self {
            rng: rng_from_seed(seed),
            now,
            patients,
            doctors,
        })
    }

    /// Generate one history for a random patient plus 1..=5 appointments.
    pub fn next_record(&mut self) -> ClinicalRecord {
        let patient_dni = self.patients[self.rng.gen_range(0..self.patients.len())].clone();
        let created_at = generate_datetime_between(&mut self.rng, start_of_year(self.now), self.now);

        let count = generate_count(&mut self.rng, 1, MAX_APPOINTMENTS_PER_HISTORY);
        let appointments = (0..count)
            .map(|_| self.next_appointment(&patient_dni))
            .collect();

        ClinicalRecord {
            history: ClinicalHistory {
                patient_dni,
                created_at,
            },
            appointments,
        }
    }

    /// Generate `count` records. Patients are drawn with replacement.
    pub fn generate(&mut self, count: u64) -> Vec<ClinicalRecord> {
        (0..count).map(|_| self.next_record()).collect()
    }

    fn next_appointment(&mut self, patient_dni: &Dni) -> Appointment {
        let doctor = &self.doctors[self.rng.gen_range(0..self.doctors.len())];
        let doctor_dni = doctor.dni.clone();
        let specialty = doctor.specialty.clone();

        Appointment {
            doctor_dni,
            specialty,
            day: DayOfWeek::ALL[self.rng.gen_range(0..DayOfWeek::ALL.len())],
            time: generate_time_of_day(&mut self.rng),
            patient_dni: patient_dni.clone(),
            diagnosis: generate_filler_text(&mut self.rng, MAX_TEXT_CHARS),
            treatment: generate_filler_text(&mut self.rng, MAX_TEXT_CHARS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn patients() -> Vec<Dni> {
        ["11111111", "22222222", "33333333"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect()
    }

    fn doctors() -> Vec<DoctorRef> {
        vec![
            DoctorRef {
                dni: "44444444".parse().unwrap(),
                specialty: "Cardiología".to_string(),
            },
            DoctorRef {
                dni: "55555555".parse().unwrap(),
                specialty: "Pediatría".to_string(),
            },
        ]
    }

    #[test]
    fn test_empty_pools_rejected() {
        assert!(matches!(
            ClinicalRecordGenerator::new(1, now(), vec![], doctors()),
            Err(GeneratorError::EmptyPatientPool)
        ));
        assert!(matches!(
            ClinicalRecordGenerator::new(1, now(), patients(), vec![]),
            Err(GeneratorError::EmptyDoctorPool)
        ));
    }

    #[test]
    fn test_records_reference_loaded_pools() {
        let patient_pool: HashSet<Dni> = patients().into_iter().collect();
        let doctor_pool: HashSet<DoctorRef> = doctors().into_iter().collect();

        let mut generator = ClinicalRecordGenerator::new(42, now(), patients(), doctors()).unwrap();
        let records = generator.generate(50);
        assert_eq!(records.len(), 50);

        let appointments: usize = records.iter().map(|r| r.appointments.len()).sum();
        assert!((50..=250).contains(&appointments));

        for record in &records {
            assert!(patient_pool.contains(&record.history.patient_dni));
            assert!(record.history.created_at >= start_of_year(now()));
            assert!(record.history.created_at <= now());
            assert!((1..=MAX_APPOINTMENTS_PER_HISTORY).contains(&record.appointments.len()));

            for appt in &record.appointments {
                assert_eq!(appt.patient_dni, record.history.patient_dni);
                let pair = DoctorRef {
                    dni: appt.doctor_dni.clone(),
                    specialty: appt.specialty.clone(),
                };
                assert!(doctor_pool.contains(&pair));
                assert!(appt.diagnosis.chars().count() <= MAX_TEXT_CHARS);
                assert!(appt.treatment.chars().count() <= MAX_TEXT_CHARS);
            }
        }
    }

    #[test]
    fn test_row_count() {
        let mut generator = ClinicalRecordGenerator::new(5, now(), patients(), doctors()).unwrap();
        let record = generator.next_record();
        assert_eq!(record.row_count(), 1 + record.appointments.len() as u64);
    }
}
