//! # Engine Module
//!
//! The stateful and batch-oriented half of the library.
//!
//! ## Overview
//!
//! The engine turns parsed genotype records into render primitives. It owns the
//! memoized helix geometry, resolves per-strand base symbols, looks up their
//! colors and pairs everything into the primitive set handed to renderers.
//!
//! ## Architecture
//!
//! - **Geometry Cache** ([`cache`]) - Memoized helix coordinates keyed by base-pair count
//! - **Attribute Resolution** ([`resolver`]) - Genotype strings to per-strand base symbols
//! - **Primitive Assembly** ([`assembler`]) - Coordinates and symbols to colored primitives
//! - **Configuration** ([`config`]) - Render parameters and their builder
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting
//! - **Error Handling** ([`error`]) - The error kinds surfaced by the pipeline
//!
//! ## Parallelism
//!
//! With the `parallel` feature (on by default) the resolver and assembler split
//! their input into contiguous index ranges, process the ranges on the rayon
//! thread pool and concatenate the results in range order. Without the feature
//! the same ranges run one after another, so results never depend on it.

pub mod assembler;
pub mod cache;
pub mod config;
pub mod error;
pub(crate) mod partition;
pub mod progress;
pub mod resolver;
