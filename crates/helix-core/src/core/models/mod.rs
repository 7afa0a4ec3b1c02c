//! Plain data types flowing through the pipeline.
//!
//! [`genotype`] holds what the parser produces, [`primitive`] holds what the
//! assembler hands to rendering adapters.

pub mod genotype;
pub mod primitive;
