use crate::cli::GenerateArgs;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use dnahelix::engine::progress::ProgressReporter;
use dnahelix::workflows;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

pub fn run(args: GenerateArgs) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => {
            info!("Seeding generator with {}.", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Generating {} synthetic genotype rows...", args.entries);
    workflows::generate::run(&args.output, args.entries, &mut rng, &reporter)?;
    println!("✓ Test data written to: {}", args.output.display());

    Ok(())
}
