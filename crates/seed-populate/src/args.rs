//! Common CLI argument definitions shared by the patient and clinical seeders.

use clap::Args;

/// Common arguments shared by seeders that draw a fresh seed by default.
#[derive(Args, Clone, Debug, Default)]
pub struct CommonSeedArgs {
    /// Random seed for deterministic generation (same seed = same data).
    /// A fresh seed is drawn and logged when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Dry-run mode: generate records and log what would be written without touching the target store
    #[arg(long)]
    pub dry_run: bool,
}
