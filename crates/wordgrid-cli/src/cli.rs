use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "wordgrid CLI - Generate word search puzzles with words hidden along rows, columns and diagonals.",
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

    /// Set the number of threads used to place words concurrently.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a word search grid containing the given words.
    Generate(GenerateArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `{"puzzle": [["A", "B"], ...]}`
    #[default]
    Json,
    /// One row per line, letters separated by spaces.
    Text,
}

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    // --- Core Arguments ---
    /// Comma-separated list of words to hide (case-insensitive).
    #[arg(short, long, required = true, value_name = "WORDS")]
    pub words: String,

    /// Minimum grid side length. 0 lets the engine decide.
    #[arg(short = 'm', long, value_name = "INT")]
    pub min_size: Option<usize>,

    /// Write the puzzle to a file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Include the word list and answer key in the output.
    #[arg(long)]
    pub answers: bool,

    /// Optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Engine Overrides ---
    /// Seed for reproducible placement draws and fill letters.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Override the number of random candidates tried per word and pass.
    #[arg(long, value_name = "INT")]
    pub attempt_budget: Option<usize>,

    /// Override how many times the grid may grow before giving up.
    #[arg(long, value_name = "INT")]
    pub max_growth_steps: Option<usize>,

    /// Never grow the grid beyond this side length.
    #[arg(long, value_name = "INT")]
    pub max_size: Option<usize>,

    /// Also hide words right-to-left and bottom-to-top.
    #[arg(long)]
    pub reversed: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S placement.attempt-budget=200
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
