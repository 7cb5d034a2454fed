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
    author = "PSQ Developers",
    version,
    about = "PSQ CLI - Score pseudopotential transferability from all-electron and pseudized logarithmic-derivative curves.",
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

    /// Set the number of threads used to score channels in parallel.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score the transferability of a pseudopotential from AE/PS curve data.
    Score(ScoreArgs),
    /// Print the energy-domain weighting profile on a uniform energy grid.
    Weights(WeightsArgs),
}

/// Options shared by every command that builds an analysis configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct AnalysisArgs {
    /// Path to an analysis configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the down-weighting factor applied to unbound channels.
    #[arg(long, value_name = "FLOAT")]
    pub unbound_weight: Option<f64>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S weighting.high-window.center=5.5
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Path to the input curve table (CSV with columns kind,l,energy,value).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for an optional CSV report with the weight, aggregate and
    /// per-channel cumulative curves.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub analysis: AnalysisArgs,

    /// Override the highest bound angular momentum.
    #[arg(long, value_name = "INT")]
    pub lmax: Option<u32>,

    /// Override the low cutoff-energy hint (Hartree).
    #[arg(long, value_name = "FLOAT")]
    pub ecut_low: Option<f64>,

    /// Override the high cutoff-energy hint (Hartree).
    #[arg(long, value_name = "FLOAT")]
    pub ecut_high: Option<f64>,
}

/// Arguments for the `weights` subcommand.
#[derive(Args, Debug)]
pub struct WeightsArgs {
    #[command(flatten)]
    pub analysis: AnalysisArgs,

    /// Lowest energy of the grid (Hartree).
    #[arg(long, value_name = "FLOAT", allow_hyphen_values = true)]
    pub emin: f64,

    /// Highest energy of the grid (Hartree).
    #[arg(long, value_name = "FLOAT", allow_hyphen_values = true)]
    pub emax: f64,

    /// Number of grid points, including both end points.
    #[arg(long, value_name = "INT", default_value_t = 41)]
    pub points: usize,
}
