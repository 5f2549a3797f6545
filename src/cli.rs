use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vecfmt")]
#[command(
    about = "Print floating-point values as comma separated, round-trip scientific notation",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Values to format (defaults to the configured or built-in sample)
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<f64>,

    /// Config file to read instead of searching for .vecfmt.toml
    #[arg(short, long, env = "VECFMT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbosity: u8,
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}
