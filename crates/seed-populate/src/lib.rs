//! Common types and utilities for seeders.
//!
//! This crate provides shared argument types and the run report used
//! across all seed-populate-* crates (MongoDB, PostgreSQL, MySQL).

pub mod args;
pub mod report;

pub use args::CommonSeedArgs;
pub use report::SeedReport;
