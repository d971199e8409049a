//! snapshot_queries library - readable reports for executed database queries
//!
//! Provides the query record, the report builder, SQL reindenting and
//! dialect-aware terminal highlighting, plus the command and output
//! infrastructure behind the `snapshot_queries` binary.

pub mod capture;
pub mod cli;
pub mod commands;
pub mod config;
pub mod highlight;
pub mod logging;
pub mod output;
pub mod query;
pub mod query_log;
pub mod sql;
pub mod types;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod test_utils;

pub use query::{CapturedQuery, DisplayOptions, Query};
pub use query_log::QueryLog;
pub use types::{StackTrace, StacktraceLine, TimeDelta};
