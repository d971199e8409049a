mod execute;
mod output;
mod output_tests;

use clap::Args;
use std::path::PathBuf;

use super::DisplayArgs;

/// Render reports for queries in a capture file
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  snapshot_queries show -f queries.json                  # Default report
  snapshot_queries show -f queries.json --idx --stacktrace
  snapshot_queries show -f queries.json --colored=false  # Plain text
  snapshot_queries show -f queries.json --select-only --format json")]
pub struct ShowCmd {
    /// Capture file: a JSON array of executed queries
    #[arg(short, long)]
    pub file: PathBuf,

    /// Only show read queries
    #[arg(long, default_value_t = false)]
    pub select_only: bool,

    #[command(flatten)]
    pub display: DisplayArgs,
}
