//! Provides input/output functionality for genotype exports and render output.
//!
//! Genotype files are read through the [`traits::GenotypeFile`] interface,
//! implemented for tab-delimited exports in [`ancestry`]. [`export`] writes a
//! finished primitive set as CSV, and [`synthetic`] produces random exports for
//! testing and benchmarking.

pub mod ancestry;
pub mod export;
pub mod synthetic;
pub mod traits;
