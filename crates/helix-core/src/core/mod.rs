//! # Core Module
//!
//! Stateless building blocks shared by the engine and the workflows.
//!
//! - **Data models** ([`models`]) - Genotype records, base symbol pairs and render primitives
//! - **Geometry** ([`geometry`]) - The parametric double-helix curve and glyph sizes
//! - **Palettes** ([`palette`]) - Symbol to color mappings, built-in and user supplied
//! - **File I/O** ([`io`]) - Genotype file parsing, primitive export and synthetic data

pub mod geometry;
pub mod io;
pub mod models;
pub mod palette;
