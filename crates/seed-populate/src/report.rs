//! Outcome of a seeder run.

use std::fmt;
use std::time::Duration;

/// Counts reported by a seeder after a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Primary records written (patients, doctors or clinical histories).
    pub records_inserted: u64,
    /// Dependent rows written (availability slots or appointments).
    pub children_inserted: u64,
    /// Records rejected by the store's uniqueness constraint.
    pub conflicts: u64,
    /// Records removed before inserting.
    pub cleared: u64,
    /// Total time taken.
    pub duration: Duration,
}

impl SeedReport {
    /// Total rows written.
    pub fn rows_written(&self) -> u64 {
        self.records_inserted + self.children_inserted
    }

    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.duration.as_secs_f64() > 0.0 {
            self.rows_written() as f64 / self.duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

impl fmt::Display for SeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records, {} dependent rows, {} conflicts in {:?}",
            self.records_inserted, self.children_inserted, self.conflicts, self.duration
        )
    }
}
