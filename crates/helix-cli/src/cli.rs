use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "dnahelix contributors",
    version,
    about = "helix - Turn raw genotype exports into double-helix render primitives.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the double-helix primitives for a genotype file and export them as CSV.
    Render(RenderArgs),
    /// Write a synthetic genotype file for testing and benchmarking.
    Generate(GenerateArgs),
}

/// Arguments for the `render` subcommand.
#[derive(Args, Debug)]
pub struct RenderArgs {
    // --- Core Arguments ---
    /// Path to the tab-separated genotype file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the primitives CSV. Connectors are written next to it as
    /// `<stem>.connectors.csv`.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Overrides ---
    /// Override the number of base pairs to draw.
    #[arg(short = 'n', long, value_name = "INT")]
    pub base_pairs: Option<usize>,

    /// Override the built-in palette ('flat' or 'full').
    #[arg(long, value_name = "STYLE")]
    pub palette: Option<String>,

    /// Use a custom palette file instead of a built-in palette.
    #[arg(long, value_name = "PATH")]
    pub palette_file: Option<PathBuf>,

    /// Override the number of records processed per parallel chunk.
    #[arg(long, value_name = "INT")]
    pub chunk_size: Option<usize>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S geometry.radius=2.5
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path of the genotype file to write.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Number of data rows to generate.
    #[arg(short = 'n', long, default_value_t = 500_000, value_name = "INT")]
    pub entries: usize,

    /// Seed for reproducible output. A random seed is used when omitted.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,
}
