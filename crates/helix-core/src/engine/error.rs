use crate::core::io::ancestry::GenotypeFileError;
use crate::core::models::primitive::Strand;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HelixError {
    #[error("Failed to read genotype data: {0}")]
    Parse(#[from] GenotypeFileError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(
        "Dimension mismatch: {coordinates} helix positions, {strand_a} strand-A symbols, {strand_b} strand-B symbols"
    )]
    DimensionMismatch {
        coordinates: usize,
        strand_a: usize,
        strand_b: usize,
    },

    #[error(
        "Unknown base symbol '{symbol}' on strand {strand} at pair index {index}; add it to the color palette"
    )]
    UnknownBaseSymbol {
        symbol: char,
        strand: Strand,
        index: usize,
    },
}
