use crate::core::geometry::HelixCoordinateSet;
use crate::core::models::primitive::{PrimitiveSet, RenderPrimitive, Strand};
use crate::core::palette::ColorLookup;
use crate::engine::error::HelixError;
use crate::engine::partition;
use nalgebra::Point3;
use std::ops::Range;

/// Builds the primitive set from helix coordinates and per-strand symbols.
///
/// Pair `i` gets one strand-A primitive at `coords.strand_a()[i]` colored by
/// `symbols_a[i]`, one strand-B primitive likewise, and a connector between
/// them.
///
/// # Errors
///
/// * [`HelixError::DimensionMismatch`] if the three inputs differ in length.
/// * [`HelixError::UnknownBaseSymbol`] for the first symbol `palette` has no
///   color for, scanning pairs in order and strand A before strand B.
pub fn assemble<L>(
    coords: &HelixCoordinateSet,
    symbols_a: &[char],
    symbols_b: &[char],
    palette: &L,
) -> Result<PrimitiveSet, HelixError>
where
    L: ColorLookup + ?Sized,
{
    check_dimensions(coords, symbols_a, symbols_b)?;
    let pairs = assemble_range(coords, symbols_a, symbols_b, palette, 0..coords.len())?;
    Ok(PrimitiveSet::from_pairs(pairs))
}

/// Same as [`assemble`], processed in contiguous chunks of `chunk_size` pairs
/// that may run on worker threads. Output and error reporting are identical to
/// [`assemble`].
pub fn assemble_partitioned<L>(
    coords: &HelixCoordinateSet,
    symbols_a: &[char],
    symbols_b: &[char],
    palette: &L,
    chunk_size: usize,
) -> Result<PrimitiveSet, HelixError>
where
    L: ColorLookup + Sync + ?Sized,
{
    check_dimensions(coords, symbols_a, symbols_b)?;
    let pairs = partition::map_ranges(coords.len(), chunk_size, |range| {
        assemble_range(coords, symbols_a, symbols_b, palette, range)
    })?;
    Ok(PrimitiveSet::from_pairs(pairs))
}

fn check_dimensions(
    coords: &HelixCoordinateSet,
    symbols_a: &[char],
    symbols_b: &[char],
) -> Result<(), HelixError> {
    if coords.len() != symbols_a.len() || coords.len() != symbols_b.len() {
        return Err(HelixError::DimensionMismatch {
            coordinates: coords.len(),
            strand_a: symbols_a.len(),
            strand_b: symbols_b.len(),
        });
    }
    Ok(())
}

fn assemble_range<L>(
    coords: &HelixCoordinateSet,
    symbols_a: &[char],
    symbols_b: &[char],
    palette: &L,
    range: Range<usize>,
) -> Result<Vec<(RenderPrimitive, RenderPrimitive)>, HelixError>
where
    L: ColorLookup + ?Sized,
{
    range
        .map(|i| {
            let a = primitive(coords.strand_a()[i], Strand::A, symbols_a[i], i, palette)?;
            let b = primitive(coords.strand_b()[i], Strand::B, symbols_b[i], i, palette)?;
            Ok((a, b))
        })
        .collect()
}

fn primitive<L>(
    position: Point3<f64>,
    strand: Strand,
    symbol: char,
    index: usize,
    palette: &L,
) -> Result<RenderPrimitive, HelixError>
where
    L: ColorLookup + ?Sized,
{
    let color = palette
        .color_for(symbol)
        .cloned()
        .ok_or(HelixError::UnknownBaseSymbol {
            symbol,
            strand,
            index,
        })?;
    Ok(RenderPrimitive {
        position,
        color,
        symbol,
        strand,
        pair_index: index,
    })
}
