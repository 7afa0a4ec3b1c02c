use crate::cli::RenderArgs;
use crate::config::PartialRenderConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use dnahelix::core::io::export;
use dnahelix::engine::cache::HelixCache;
use dnahelix::engine::progress::ProgressReporter;
use dnahelix::workflows;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn run(args: RenderArgs) -> Result<()> {
    let partial_config = PartialRenderConfig::load(args.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;

    let cache = HelixCache::new(config.geometry);
    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Building helix primitives from {}...", args.input.display());
    let primitives = workflows::render::run_file(&args.input, &config, &cache, &reporter)?;

    let connectors_path = connectors_output_path(&args.output);
    info!(
        "Writing {} primitives to {:?} and {} connectors to {:?}",
        primitives.primitives.len(),
        &args.output,
        primitives.connectors.len(),
        &connectors_path
    );
    export::write_primitives_to_path(&primitives, config.glyphs.sphere, &args.output)?;
    export::write_connectors_to_path(&primitives, config.glyphs.cylinder, &connectors_path)?;

    println!(
        "✓ {} base pairs written to: {}",
        primitives.base_pairs(),
        args.output.display()
    );
    println!("  Connectors written to: {}", connectors_path.display());
    println!("  Legend:");
    for (symbol, color) in config.palette.legend() {
        println!("    {} = {}", symbol, color);
    }

    Ok(())
}

/// `out/helix.csv` becomes `out/helix.connectors.csv`.
fn connectors_output_path(primitives_path: &Path) -> PathBuf {
    let stem = primitives_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "helix".to_string());
    let file_name = match primitives_path.extension() {
        Some(ext) => format!("{}.connectors.{}", stem, ext.to_string_lossy()),
        None => format!("{}.connectors.csv", stem),
    };
    primitives_path.with_file_name(file_name)
}
