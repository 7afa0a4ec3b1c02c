use crate::core::io::ancestry;
use crate::core::models::genotype::GenotypeRecord;
use crate::core::models::primitive::PrimitiveSet;
use crate::engine::assembler;
use crate::engine::cache::HelixCache;
use crate::engine::config::RenderConfig;
use crate::engine::error::HelixError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::resolver;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Turns a batch of genotype records into a primitive set.
///
/// The helix is drawn with `min(config.base_pairs, records.len())` base pairs,
/// using the first records of the batch in order. Geometry comes from `cache`,
/// whose parameters must match `config.geometry`.
///
/// # Errors
///
/// * [`HelixError::InvalidArgument`] if `records` is empty or `cache` was
///   built for different helix parameters.
/// * [`HelixError::UnknownBaseSymbol`] if a resolved symbol is missing from
///   `config.palette`.
#[instrument(skip_all, name = "render_workflow", fields(records = records.len()))]
pub fn run(
    records: &[GenotypeRecord],
    config: &RenderConfig,
    cache: &HelixCache,
    reporter: &ProgressReporter,
) -> Result<PrimitiveSet, HelixError> {
    if cache.params() != &config.geometry {
        return Err(HelixError::InvalidArgument(format!(
            "geometry cache was built for {:?} but the render requests {:?}",
            cache.params(),
            config.geometry
        )));
    }

    let base_pairs = config.base_pairs.min(records.len());
    if base_pairs == 0 {
        return Err(HelixError::InvalidArgument(
            "no genotype records to draw".to_string(),
        ));
    }
    if records.len() < config.base_pairs {
        warn!(
            requested = config.base_pairs,
            available = records.len(),
            "Fewer records than requested base pairs; drawing a shorter helix."
        );
    }
    let batch = &records[..base_pairs];
    let chunk_size = config.batch.chunk_size;
    info!(base_pairs, chunk_size, "Preparing helix primitives.");

    let coordinates = reporter.phase("Helix Geometry", || cache.coordinates(base_pairs))?;

    let (symbols_a, symbols_b) = reporter.phase("Attribute Resolution", || {
        Ok::<_, HelixError>(resolver::resolve_partitioned(batch, chunk_size))
    })?;
    debug!(pairs = symbols_a.len(), "Resolved base symbols.");

    let primitives = reporter.phase("Primitive Assembly", || {
        assembler::assemble_partitioned(
            &coordinates,
            &symbols_a,
            &symbols_b,
            &config.palette,
            chunk_size,
        )
    })?;

    reporter.report(Progress::Message(format!(
        "Assembled {} primitives and {} connectors.",
        primitives.primitives.len(),
        primitives.connectors.len()
    )));
    info!(
        primitives = primitives.primitives.len(),
        connectors = primitives.connectors.len(),
        "Render workflow complete."
    );
    Ok(primitives)
}

/// Parses the genotype file at `path` and runs [`run`] on its records.
///
/// # Errors
///
/// Returns [`HelixError::Parse`] if the file cannot be read or a row is
/// malformed, plus every error of [`run`].
pub fn run_file(
    path: &Path,
    config: &RenderConfig,
    cache: &HelixCache,
    reporter: &ProgressReporter,
) -> Result<PrimitiveSet, HelixError> {
    let records = reporter.phase("Parsing", || ancestry::parse(path))?;
    info!(path = %path.display(), records = records.len(), "Parsed genotype file.");
    run(&records, config, cache, reporter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::{GlyphRadii, HelixParams};
    use crate::core::models::primitive::Strand;
    use crate::core::palette::{ColorPalette, PaletteStyle};
    use crate::engine::config::RenderConfigBuilder;
    use std::sync::Mutex;

    fn config(base_pairs: usize) -> RenderConfig {
        let params = HelixParams::default();
        let glyphs = GlyphRadii::default();
        RenderConfigBuilder::new()
            .base_pairs(base_pairs)
            .radius(params.radius)
            .vertical_stretch(params.vertical_stretch)
            .sphere_radius(glyphs.sphere)
            .cylinder_radius(glyphs.cylinder)
            .palette(ColorPalette::builtin(PaletteStyle::Full))
            .chunk_size(2)
            .build()
            .unwrap()
    }

    fn records(genotypes: &[&str]) -> Vec<GenotypeRecord> {
        genotypes
            .iter()
            .enumerate()
            .map(|(i, g)| GenotypeRecord::new(format!("rs{}", i + 1), "1", 100 * (i as u64 + 1), *g))
            .collect()
    }

    #[test]
    fn draws_one_pair_per_record_when_fewer_records_than_requested() {
        let cache = HelixCache::default();
        let set = run(
            &records(&["AG", "CT", "A"]),
            &config(200),
            &cache,
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(set.base_pairs(), 3);
        assert_eq!(set.primitives.len(), 6);
        assert!(cache.contains(3));
    }

    #[test]
    fn truncates_to_requested_base_pairs() {
        let cache = HelixCache::default();
        let set = run(
            &records(&["AG", "CT", "GA", "TC", "AA"]),
            &config(2),
            &cache,
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(set.base_pairs(), 2);
        let symbols: Vec<char> = set.strand(Strand::A).map(|p| p.symbol).collect();
        assert_eq!(symbols, vec!['A', 'C']);
    }

    #[test]
    fn empty_batch_is_rejected() {
        let result = run(&[], &config(10), &HelixCache::default(), &ProgressReporter::new());
        assert!(matches!(result, Err(HelixError::InvalidArgument(_))));
    }

    #[test]
    fn cache_with_other_params_is_rejected() {
        let cache = HelixCache::new(HelixParams {
            radius: 2.0,
            vertical_stretch: 4.0,
        });
        let result = run(&records(&["AG"]), &config(10), &cache, &ProgressReporter::new());
        assert!(matches!(result, Err(HelixError::InvalidArgument(_))));
        assert!(cache.is_empty());
    }

    #[test]
    fn reports_phases_in_pipeline_order() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|e| {
            if let Progress::PhaseStart { name } = e {
                events.lock().unwrap().push(name);
            }
        }));

        run(&records(&["AG"]), &config(5), &HelixCache::default(), &reporter).unwrap();
        drop(reporter);

        assert_eq!(
            events.into_inner().unwrap(),
            vec!["Helix Geometry", "Attribute Resolution", "Primitive Assembly"]
        );
    }

    #[test]
    fn unknown_symbol_aborts_the_render() {
        let result = run(
            &records(&["AG", "--"]),
            &config(5),
            &HelixCache::default(),
            &ProgressReporter::new(),
        );
        assert!(matches!(
            result,
            Err(HelixError::UnknownBaseSymbol {
                symbol: '-',
                strand: Strand::A,
                index: 1
            })
        ));
    }
}
