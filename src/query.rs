//! Captured query records and their text reports.
//!
//! A [`Query`] is built once from a [`CapturedQuery`] and never changes
//! afterwards. The call-site `code` and `location` are taken from the
//! innermost stack frame at construction time.

use std::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::highlight::{highlight, Grammar};
use crate::sql;
use crate::types::{StackTrace, TimeDelta};

/// Number of SQL characters shown in the `Debug` representation.
const DEBUG_SQL_CHARS: usize = 30;

/// Facts about one query execution as handed over by the capture layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapturedQuery {
    /// Logical database / connection name
    pub db: String,
    pub duration: TimeDelta,
    /// Position among captured queries; not validated
    pub idx: i64,
    pub is_select: bool,
    /// Rendered parameter values
    #[serde(default)]
    pub params: String,
    /// Parameter values as passed to the driver
    #[serde(default)]
    pub raw_params: Vec<serde_json::Value>,
    pub sql: String,
    #[serde(default)]
    pub sql_parameterized: String,
    #[serde(default)]
    pub stacktrace: StackTrace,
    #[serde(default)]
    pub start_time: i64,
    #[serde(default)]
    pub stop_time: i64,
    /// Engine tag, e.g. "postgresql"
    pub db_type: String,
}

/// An executed query.
#[derive(Clone, PartialEq, Serialize)]
pub struct Query {
    code: String,
    db: String,
    duration: TimeDelta,
    idx: i64,
    is_select: bool,
    location: String,
    params: String,
    raw_params: Vec<serde_json::Value>,
    sql: String,
    sql_parameterized: String,
    stacktrace: StackTrace,
    start_time: i64,
    stop_time: i64,
    db_type: String,
}

/// Sections and styling of a query report.
///
/// Sections always appear in the order index, duration, location, code,
/// stacktrace, sql, no matter which are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Source snippet at the call site
    pub code: bool,
    /// Humanized elapsed time
    pub duration: bool,
    /// "index: <idx>"
    pub idx: bool,
    /// Call-site location
    pub location: bool,
    /// Full call stack
    pub stacktrace: bool,
    /// SQL text
    pub sql: bool,
    /// Master switch for ANSI highlighting of code and SQL
    pub colored: bool,
    /// Reindent SQL; also required for code highlighting
    pub formatted: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            code: true,
            duration: true,
            idx: false,
            location: true,
            stacktrace: false,
            sql: true,
            colored: true,
            formatted: true,
        }
    }
}

impl DisplayOptions {
    /// Every section and all styling turned off.
    pub fn none() -> Self {
        Self {
            code: false,
            duration: false,
            idx: false,
            location: false,
            stacktrace: false,
            sql: false,
            colored: false,
            formatted: false,
        }
    }
}

impl Query {
    /// Build a record from captured facts, deriving `code` and `location`
    /// from the innermost stack frame (empty when the stack is empty).
    pub fn create(captured: CapturedQuery) -> Self {
        let last_executed_line = captured.stacktrace.last();
        let code = last_executed_line
            .map(|line| line.code.clone())
            .unwrap_or_default();
        let location = last_executed_line
            .map(|line| line.location())
            .unwrap_or_default();

        tracing::trace!(idx = captured.idx, %location, "query record created");

        Self {
            code,
            db: captured.db,
            duration: captured.duration,
            idx: captured.idx,
            is_select: captured.is_select,
            location,
            params: captured.params,
            raw_params: captured.raw_params,
            sql: captured.sql,
            sql_parameterized: captured.sql_parameterized,
            stacktrace: captured.stacktrace,
            start_time: captured.start_time,
            stop_time: captured.stop_time,
            db_type: captured.db_type,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn db(&self) -> &str {
        &self.db
    }

    pub fn duration(&self) -> TimeDelta {
        self.duration
    }

    pub fn idx(&self) -> i64 {
        self.idx
    }

    pub fn is_select(&self) -> bool {
        self.is_select
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn params(&self) -> &str {
        &self.params
    }

    pub fn raw_params(&self) -> &[serde_json::Value] {
        &self.raw_params
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn sql_parameterized(&self) -> &str {
        &self.sql_parameterized
    }

    pub fn stacktrace(&self) -> &StackTrace {
        &self.stacktrace
    }

    pub fn start_time(&self) -> i64 {
        self.start_time
    }

    pub fn stop_time(&self) -> i64 {
        self.stop_time
    }

    pub fn db_type(&self) -> &str {
        &self.db_type
    }

    /// Render the report sections enabled in `options`, separated by blank lines.
    pub fn display_string(&self, options: &DisplayOptions) -> String {
        let mut sections = Vec::new();

        if options.idx {
            sections.push(format!("index: {}", self.idx));
        }

        if options.duration {
            sections.push(self.duration.humanize());
        }

        if options.location {
            sections.push(self.location.clone());
        }

        if options.code {
            sections.push(if options.colored && options.formatted {
                highlight(&self.code, Grammar::Source)
            } else {
                self.code.clone()
            });
        }

        if options.stacktrace {
            sections.push(self.stacktrace.to_string());
        }

        if options.sql {
            sections.push(if options.colored {
                self.enhanced_sql(options.formatted, options.colored)
            } else {
                self.sql.clone()
            });
        }

        let sections: Vec<&str> = sections.iter().map(|s| s.trim()).collect();
        sections.join("\n\n").trim_end().to_string()
    }

    /// Write the report plus a trailing newline to stdout.
    pub fn display(&self, options: &DisplayOptions) -> io::Result<()> {
        self.write_to(&mut io::stdout().lock(), options)
    }

    /// Write the report plus a trailing newline to `out` in a single write.
    pub fn write_to<W: Write>(&self, out: &mut W, options: &DisplayOptions) -> io::Result<()> {
        let mut report = self.display_string(options);
        report.push('\n');
        out.write_all(report.as_bytes())
    }

    fn enhanced_sql(&self, formatted: bool, colored: bool) -> String {
        sql::enhance(&self.sql, &self.db_type, formatted, colored)
    }
}

impl fmt::Debug for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let excerpt: String = self.sql.chars().take(DEBUG_SQL_CHARS).collect();
        let excerpt = excerpt.trim_matches(|c: char| c == '\'' || c == '"');
        write!(
            f,
            "Query(idx={}, code='{}', duration={:?}, location='{}', sql='{}...')",
            self.idx, self.code, self.duration, self.location, excerpt
        )
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_string(&DisplayOptions::default()))
    }
}
