//! Command-line interface parsing
//!
//! This module handles parsing of CLI arguments using clap. Connection
//! details for the API and the document store come from the environment (see
//! [`crate::config`]); the flags here only shape the run itself.

use clap::Parser;

/// Search query used when none is given, matching the dataset's best-known
/// example
pub const DEFAULT_QUERY: &str = "Roosevelt";

/// Tenure - US presidential tenure statistics from a cached API dataset
#[derive(Parser, Debug)]
#[command(name = "tenure")]
#[command(about = "US presidential tenure statistics from a cached API dataset")]
#[command(version)]
pub struct Cli {
    /// Name fragment to search for (case-insensitive substring match)
    #[arg(short, long, default_value = DEFAULT_QUERY)]
    pub query: String,

    /// Print results as plain text instead of opening the dashboard
    #[arg(long)]
    pub text: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
