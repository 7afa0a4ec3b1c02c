//! # Workflows Module
//!
//! High-level entry points that orchestrate the complete pipelines of the
//! library.
//!
//! ## Overview
//!
//! Workflows are what applications call. They wire the parser, the geometry
//! cache, the resolver and the assembler together, report progress through a
//! [`ProgressReporter`](crate::engine::progress::ProgressReporter) and log
//! their decisions with `tracing`.
//!
//! ## Architecture
//!
//! - **Render Workflow** ([`render`]) - Genotype records or a genotype file to
//!   a [`PrimitiveSet`](crate::core::models::primitive::PrimitiveSet) ready for
//!   any rendering backend.
//! - **Generate Workflow** ([`generate`]) - Writes synthetic AncestryDNA-style
//!   genotype files for testing and benchmarking.

pub mod generate;
pub mod render;
