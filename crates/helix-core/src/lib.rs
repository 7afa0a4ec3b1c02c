//! # dnahelix Core Library
//!
//! Turns raw genotype exports (one marker per line: id, chromosome, position,
//! two-letter genotype) into a double-helix model made of backend-agnostic
//! render primitives.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`GenotypeRecord`,
//!   `RenderPrimitive`), the pure parametric helix curve, color palettes and
//!   file I/O (genotype parsing, primitive export, synthetic data).
//!
//! - **[`engine`]: The Logic Core.** The memoizing `HelixCache`, the batch
//!   attribute resolver, the primitive assembler, and the contiguous-range
//!   partitioning that lets both run on worker threads while keeping results in
//!   input order.
//!
//! - **[`workflows`]: The Public API.** Ties `core` and `engine` together into
//!   the complete genotype-to-primitives pipeline.
//!
//! Rendering backends are not part of this crate. They consume the
//! [`PrimitiveSet`](core::models::primitive::PrimitiveSet) produced by
//! [`workflows::render`] and nothing else.

pub mod core;
pub mod engine;
pub mod workflows;
