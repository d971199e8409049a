//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - An `execute` module producing a serializable result
//! - An `output` module rendering that result as a report

mod show;
mod sql;

pub use show::ShowCmd;
pub use sql::SqlCmd;

use clap::Subcommand;
use std::error::Error;

use crate::config::ConfigFile;
use crate::output::{OutputFormat, Outputable};
use crate::query::DisplayOptions;

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, config: &ConfigFile) -> Result<Self::Output, Box<dyn Error>>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render reports for queries in a capture file
    Show(ShowCmd),

    /// Reindent and highlight a single SQL statement
    Sql(SqlCmd),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(self, config: &ConfigFile, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Show(cmd) => {
                let result = cmd.execute(config)?;
                Ok(result.format(format))
            }
            Command::Sql(cmd) => {
                let result = cmd.execute(config)?;
                Ok(result.format(format))
            }
        }
    }
}

/// Report section switches shared by commands.
///
/// Each flag is tri-state: absent keeps the configured value, `--flag` turns
/// it on and `--flag=false` turns it off.
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayArgs {
    /// Show the call-site source line
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_name = "BOOL")]
    pub code: Option<bool>,

    /// Show the elapsed time
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_name = "BOOL")]
    pub duration: Option<bool>,

    /// Show "index: <n>"
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_name = "BOOL")]
    pub idx: Option<bool>,

    /// Show the call-site location
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_name = "BOOL")]
    pub location: Option<bool>,

    /// Show the full call stack
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_name = "BOOL")]
    pub stacktrace: Option<bool>,

    /// Show the SQL text
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_name = "BOOL")]
    pub sql: Option<bool>,

    #[command(flatten)]
    pub style: StyleArgs,
}

/// Highlighting and formatting switches.
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleArgs {
    /// Emit ANSI colors
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_name = "BOOL")]
    pub colored: Option<bool>,

    /// Reindent SQL and highlight source code
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_name = "BOOL")]
    pub formatted: Option<bool>,
}

impl DisplayArgs {
    /// Overlay the flags given on the command line onto `base`.
    pub fn apply(&self, base: DisplayOptions) -> DisplayOptions {
        let base = self.style.apply(base);
        DisplayOptions {
            code: self.code.unwrap_or(base.code),
            duration: self.duration.unwrap_or(base.duration),
            idx: self.idx.unwrap_or(base.idx),
            location: self.location.unwrap_or(base.location),
            stacktrace: self.stacktrace.unwrap_or(base.stacktrace),
            sql: self.sql.unwrap_or(base.sql),
            ..base
        }
    }
}

impl StyleArgs {
    pub fn apply(&self, base: DisplayOptions) -> DisplayOptions {
        DisplayOptions {
            colored: self.colored.unwrap_or(base.colored),
            formatted: self.formatted.unwrap_or(base.formatted),
            ..base
        }
    }
}
