use crate::core::models::primitive::{PrimitiveSet, Strand};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV export error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
}

#[derive(Debug, Serialize)]
struct PrimitiveRow<'a> {
    pair_index: usize,
    strand: Strand,
    x: f64,
    y: f64,
    z: f64,
    symbol: char,
    color: &'a str,
    radius: f64,
}

#[derive(Debug, Serialize)]
struct ConnectorRow {
    pair_index: usize,
    from_x: f64,
    from_y: f64,
    from_z: f64,
    to_x: f64,
    to_y: f64,
    to_z: f64,
    radius: f64,
}

/// Writes one CSV row per primitive, tagged with the sphere radius to draw it with.
pub fn write_primitives<W: Write>(
    set: &PrimitiveSet,
    sphere_radius: f64,
    writer: W,
) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for p in &set.primitives {
        wtr.serialize(PrimitiveRow {
            pair_index: p.pair_index,
            strand: p.strand,
            x: p.position.x,
            y: p.position.y,
            z: p.position.z,
            symbol: p.symbol,
            color: p.color.as_str(),
            radius: sphere_radius,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes one CSV row per connector, tagged with the cylinder radius to draw it with.
pub fn write_connectors<W: Write>(
    set: &PrimitiveSet,
    cylinder_radius: f64,
    writer: W,
) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for c in &set.connectors {
        wtr.serialize(ConnectorRow {
            pair_index: c.pair_index(),
            from_x: c.from.position.x,
            from_y: c.from.position.y,
            from_z: c.from.position.z,
            to_x: c.to.position.x,
            to_y: c.to.position.y,
            to_z: c.to.position.z,
            radius: cylinder_radius,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_primitives_to_path(
    set: &PrimitiveSet,
    sphere_radius: f64,
    path: &Path,
) -> Result<(), ExportError> {
    let file = std::fs::File::create(path).map_err(|e| csv_error(path, e.into()))?;
    write_primitives(set, sphere_radius, file).map_err(|e| csv_error(path, e))
}

pub fn write_connectors_to_path(
    set: &PrimitiveSet,
    cylinder_radius: f64,
    path: &Path,
) -> Result<(), ExportError> {
    let file = std::fs::File::create(path).map_err(|e| csv_error(path, e.into()))?;
    write_connectors(set, cylinder_radius, file).map_err(|e| csv_error(path, e))
}

fn csv_error(path: &Path, source: csv::Error) -> ExportError {
    ExportError::Csv {
        path: path.to_string_lossy().to_string(),
        source,
    }
}
