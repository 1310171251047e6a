//! Doctor and availability generation.

use crate::error::GeneratorError;
use crate::generators::{
    generate_count, generate_first_name, generate_int_range, generate_last_name,
    generate_time_of_day,
};
use crate::identifier::IdentifierSpace;
use crate::rng_from_seed;
use rand::rngs::StdRng;
use rand::Rng;
use seed_core::{Availability, DayOfWeek, Doctor, DoctorSchedule, SPECIALTIES};

/// Seed used for doctors when none is given.
pub const DEFAULT_DOCTOR_SEED: u64 = 0;

/// Upper bound of the random initial appointment counter.
pub const MAX_TOTAL_APPOINTMENTS: i32 = 100;

/// Availability rows per doctor are drawn from `1..=MAX_AVAILABILITY_PER_DOCTOR`.
pub const MAX_AVAILABILITY_PER_DOCTOR: usize = 5;

/// Generates doctors and their weekly availability.
///
/// Identifiers come from a process-local [`IdentifierSpace`]; no store is
/// consulted, so two runs with the same seed produce the same identifiers.
pub struct DoctorGenerator {
    rng: StdRng,
    identifiers: IdentifierSpace,
}

impl DoctorGenerator {
    /// Create a new doctor generator.
    pub fn new(seed: u64) -> Self {
        let mut rng = rng_from_seed(seed);
        let identifiers = IdentifierSpace::new(&mut rng);
        Self { rng, identifiers }
    }

    /// Generate the next doctor with 1..=5 availability rows.
    pub fn next_schedule(&mut self) -> Result<DoctorSchedule, GeneratorError> {
        let doctor = Doctor {
            dni: self.identifiers.next_dni()?,
            given_name: generate_first_name(&mut self.rng),
            family_name: generate_last_name(&mut self.rng),
            specialty: SPECIALTIES[self.rng.gen_range(0..SPECIALTIES.len())].to_string(),
            total_appointments: generate_int_range(&mut self.rng, 0, MAX_TOTAL_APPOINTMENTS),
        };

        let slots = generate_count(&mut self.rng, 1, MAX_AVAILABILITY_PER_DOCTOR);
        let availability = (0..slots)
            .map(|_| Availability {
                day: DayOfWeek::ALL[self.rng.gen_range(0..DayOfWeek::ALL.len())],
                time: generate_time_of_day(&mut self.rng),
                doctor_dni: doctor.dni.clone(),
            })
            .collect();

        Ok(DoctorSchedule {
            doctor,
            availability,
        })
    }

    /// Generate `count` doctors with pairwise distinct identifiers.
    pub fn generate(&mut self, count: u64) -> Result<Vec<DoctorSchedule>, GeneratorError> {
        self.identifiers.ensure_available(count)?;
        (0..count).map(|_| self.next_schedule()).collect()
    }
}
