//! Shared test utilities for record, report and command tests.
//!
//! This module provides common fixtures and helpers used across unit tests.

use std::io::Write;
use std::sync::OnceLock;

use regex::Regex;
use tempfile::NamedTempFile;

use crate::query::CapturedQuery;
use crate::types::{StackTrace, StacktraceLine, TimeDelta};

/// A two-frame stack: `main` calling into a repository method.
pub fn two_frame_trace() -> StackTrace {
    StackTrace::new(vec![
        StacktraceLine::new("src/main.rs", 12, "main", "run()?;"),
        StacktraceLine::new(
            "src/accounts/repo.rs",
            57,
            "find_user",
            "let user = conn.query_one(FIND_USER, &[&id])?;",
        ),
    ])
}

/// Captured query with index 4 taking 12ms against a PostgreSQL database.
pub fn captured(sql: &str, stacktrace: StackTrace) -> CapturedQuery {
    CapturedQuery {
        db: "default".to_string(),
        duration: TimeDelta::from_millis(12),
        idx: 4,
        is_select: true,
        params: "(42,)".to_string(),
        raw_params: vec![serde_json::json!(42)],
        sql: sql.to_string(),
        sql_parameterized: sql.replace("%s", "42"),
        stacktrace,
        start_time: 1_000,
        stop_time: 1_012,
        db_type: "postgresql".to_string(),
    }
}

/// Remove ANSI SGR escape sequences from `text`.
pub fn strip_ansi(text: &str) -> String {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| Regex::new("\x1b\\[[0-9;]*m").expect("valid ANSI pattern"));
    re.replace_all(text, "").into_owned()
}

/// Create a temporary file containing the given content.
///
/// Used to create capture and config files for loading tests.
pub fn create_temp_json_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// Capture file with a select, an update and a query with no stack.
pub const CAPTURE_JSON: &str = r#"[
  {
    "db": "default",
    "duration": 0.012,
    "idx": 0,
    "is_select": true,
    "params": "(42,)",
    "raw_params": [42],
    "sql": "SELECT * FROM users WHERE id = %s",
    "sql_parameterized": "SELECT * FROM users WHERE id = 42",
    "stacktrace": [
      {"file_path": "src/main.rs", "line_no": 12, "func_name": "main", "code": "run()?;"},
      {"file_path": "src/accounts/repo.rs", "line_no": 57, "func_name": "find_user", "code": "let user = conn.query_one(FIND_USER, &[&id])?;"}
    ],
    "start_time": 1000,
    "stop_time": 1012,
    "db_type": "postgresql"
  },
  {
    "db": "default",
    "duration": 0.003,
    "idx": 1,
    "is_select": false,
    "sql": "UPDATE users SET name = %s WHERE id = %s",
    "stacktrace": [
      {"file_path": "src/accounts/repo.rs", "line_no": 80, "func_name": "rename_user", "code": "conn.execute(RENAME_USER, &[&name, &id])?;"}
    ],
    "db_type": "postgresql"
  },
  {
    "db": "analytics",
    "duration": 0.0005,
    "idx": 2,
    "is_select": true,
    "sql": "SELECT 1",
    "db_type": "mysql"
  }
]"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_ansi() {
        assert_eq!(strip_ansi("\x1b[1m\x1b[34mSELECT\x1b[39m\x1b[0m 1"), "SELECT 1");
    }
}
