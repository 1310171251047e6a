//! Patient generation.

use crate::error::GeneratorError;
use crate::generators::{
    generate_birth_date, generate_date_between, generate_first_name, generate_last_name,
};
use crate::identifier::IdentifierSpace;
use crate::rng_from_seed;
use chrono::{Months, NaiveDate};
use rand::rngs::StdRng;
use rand::Rng;
use seed_core::{Dni, Insurance, InsuranceType, Patient};
use std::collections::HashSet;

/// Youngest generated age, in years.
pub const MIN_AGE: u32 = 1;

/// Oldest generated age, in years.
pub const MAX_AGE: u32 = 99;

/// Insurance expiration window, starting today.
pub const INSURANCE_VALIDITY_MONTHS: u32 = 24;

/// Generates patients with distinct identifiers.
pub struct PatientGenerator {
    rng: StdRng,
    today: NaiveDate,
    identifiers: IdentifierSpace,
}

impl PatientGenerator {
    /// Create a new patient generator.
    ///
    /// `today` anchors ages and insurance expiration dates.
    pub fn new(seed: u64, today: NaiveDate) -> Self {
        let mut rng = rng_from_seed(seed);
        let identifiers = IdentifierSpace::new(&mut rng);
        Self {
            rng,
            today,
            identifiers,
        }
    }

    /// Generate the next patient, avoiding identifiers in `taken`.
    pub fn next_patient(&mut self, taken: &HashSet<Dni>) -> Result<Patient, GeneratorError> {
        let dni = self.identifiers.next_excluding(taken)?;
        let given_name = generate_first_name(&mut self.rng);
        let family_name = generate_last_name(&mut self.rng);
        let birth_date = generate_birth_date(&mut self.rng, self.today, MIN_AGE, MAX_AGE);

        let insurance = if self.rng.gen_bool(0.5) {
            Some(self.next_insurance())
        } else {
            None
        };

        Ok(Patient {
            dni,
            given_name,
            family_name,
            birth_date,
            insurance,
        })
    }

    /// Generate `count` patients with pairwise distinct identifiers, none of
    /// which appear in `taken`.
    pub fn generate(
        &mut self,
        count: u64,
        taken: &HashSet<Dni>,
    ) -> Result<Vec<Patient>, GeneratorError> {
        self.identifiers.ensure_available(count)?;
        (0..count).map(|_| self.next_patient(taken)).collect()
    }

    fn next_insurance(&mut self) -> Insurance {
        let kind = InsuranceType::ALL[self.rng.gen_range(0..InsuranceType::ALL.len())];
        let last_day = self
            .today
            .checked_add_months(Months::new(INSURANCE_VALIDITY_MONTHS))
            .unwrap_or(self.today);
        let expires_on = generate_date_between(&mut self.rng, self.today, last_day);
        Insurance { kind, expires_on }
    }
}
