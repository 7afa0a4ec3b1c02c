use crate::core::io::synthetic;
use crate::engine::progress::{Progress, ProgressReporter};
use rand::Rng;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{info, instrument};

/// Name of the progress phase wrapping the row-writing task.
pub const GENERATE_PHASE: &str = "Generating Genotypes";

/// Writes a synthetic genotype file with `count` random rows to `path`.
///
/// The file gets the default three-line comment header and can be read back
/// with [`ancestry::parse`](crate::core::io::ancestry::parse). Progress is
/// reported as one task of `count` steps inside the [`GENERATE_PHASE`] phase.
#[instrument(skip(rng, reporter), fields(path = %path.display()))]
pub fn run(
    path: &Path,
    count: usize,
    rng: &mut impl Rng,
    reporter: &ProgressReporter,
) -> io::Result<()> {
    info!("Generating synthetic genotype data.");
    reporter.phase(GENERATE_PHASE, || {
        reporter.report(Progress::TaskStart {
            total_steps: count as u64,
        });

        let mut writer = BufWriter::new(File::create(path)?);
        synthetic::write_synthetic(
            &mut writer,
            &synthetic::default_header(),
            count,
            rng,
            |steps| reporter.report(Progress::TaskAdvance { steps }),
        )?;
        writer.flush()?;

        reporter.report(Progress::TaskFinish);
        Ok::<_, io::Error>(())
    })?;
    info!("Synthetic genotype file written.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::ancestry;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::atomic::{AtomicU64, Ordering};
    use tempfile::tempdir;

    #[test]
    fn written_file_parses_back_and_progress_adds_up() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("synthetic.txt");
        let advanced = AtomicU64::new(0);
        let reporter = ProgressReporter::with_callback(Box::new(|e| {
            if let Progress::TaskAdvance { steps } = e {
                advanced.fetch_add(steps, Ordering::Relaxed);
            }
        }));

        run(&path, 12_345, &mut StdRng::seed_from_u64(11), &reporter).unwrap();
        drop(reporter);

        let records = ancestry::parse(&path).unwrap();
        assert_eq!(records.len(), 12_345);
        assert_eq!(advanced.into_inner(), 12_345);
    }

    #[test]
    fn task_runs_inside_a_named_phase() {
        let dir = tempdir().unwrap();
        let events = std::sync::Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|e| {
            if !matches!(e, Progress::TaskAdvance { .. }) {
                events.lock().unwrap().push(e);
            }
        }));

        run(&dir.path().join("g.txt"), 10, &mut StdRng::seed_from_u64(2), &reporter).unwrap();
        drop(reporter);

        assert_eq!(
            events.into_inner().unwrap(),
            vec![
                Progress::PhaseStart {
                    name: GENERATE_PHASE
                },
                Progress::TaskStart { total_steps: 10 },
                Progress::TaskFinish,
                Progress::PhaseFinish,
            ]
        );
    }

    #[test]
    fn missing_parent_directory_is_an_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no/such/dir/out.txt");
        let result = run(&path, 1, &mut StdRng::seed_from_u64(1), &ProgressReporter::new());
        assert!(result.is_err());
    }
}
