//! Collision-free 8-digit identifier generation.
//!
//! Identifiers are drawn from a seeded affine permutation of the keyspace,
//! `id(i) = DNI_MIN + (a * i + b) mod N`, with `gcd(a, N) = 1`. Each draw
//! advances `i`, so a single space never repeats an identifier and runs out
//! after exactly `N` draws instead of looping forever.

use crate::error::GeneratorError;
use rand::Rng;
use seed_core::{Dni, DNI_MAX, DNI_MIN};
use std::collections::HashSet;
use tracing::debug;

/// Number of distinct 8-digit identifiers.
pub const KEYSPACE_SIZE: u64 = (DNI_MAX - DNI_MIN) as u64 + 1;

/// Seeded permutation over the identifier keyspace.
#[derive(Debug, Clone)]
pub struct IdentifierSpace {
    multiplier: u64,
    offset: u64,
    position: u64,
}

impl IdentifierSpace {
    /// Create a new space whose permutation is picked by `rng`.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut multiplier = rng.gen_range(KEYSPACE_SIZE / 3..KEYSPACE_SIZE);
        // KEYSPACE_SIZE = 2^7 * 3^2 * 5^7, so a coprime value is at most 29 steps away.
        while gcd(multiplier, KEYSPACE_SIZE) != 1 {
            multiplier += 1;
        }
        let offset = rng.gen_range(0..KEYSPACE_SIZE);
        Self {
            multiplier,
            offset,
            position: 0,
        }
    }

    /// Number of identifiers handed out so far.
    pub fn drawn(&self) -> u64 {
        self.position
    }

    /// Number of identifiers this space can still produce.
    pub fn remaining(&self) -> u64 {
        KEYSPACE_SIZE - self.position
    }

    /// Fail fast when fewer than `count` identifiers are left.
    pub fn ensure_available(&self, count: u64) -> Result<(), GeneratorError> {
        if count > self.remaining() {
            return Err(GeneratorError::KeyspaceExhausted(self.drawn()));
        }
        Ok(())
    }

    /// Draw the next identifier.
    pub fn next_dni(&mut self) -> Result<Dni, GeneratorError> {
        if self.position >= KEYSPACE_SIZE {
            return Err(GeneratorError::KeyspaceExhausted(self.position));
        }
        let slot = (self.multiplier * self.position + self.offset) % KEYSPACE_SIZE;
        self.position += 1;
        Ok(Dni::from_number(DNI_MIN as u64 + slot)?)
    }

    /// Draw the next identifier that is not in `taken`.
    pub fn next_excluding(&mut self, taken: &HashSet<Dni>) -> Result<Dni, GeneratorError> {
        loop {
            let dni = self.next_dni()?;
            if !taken.contains(&dni) {
                return Ok(dni);
            }
            debug!("Identifier {} already taken, drawing again", dni);
        }
    }

    #[cfg(test)]
    fn at_position(mut self, position: u64) -> Self {
        self.position = position;
        self
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}
