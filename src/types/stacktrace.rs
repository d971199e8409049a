//! Captured call stacks.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One call-site frame of a captured stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StacktraceLine {
    pub file_path: String,
    pub line_no: u32,
    pub func_name: String,
    /// Source snippet at the call site
    pub code: String,
}

impl StacktraceLine {
    pub fn new(
        file_path: impl Into<String>,
        line_no: u32,
        func_name: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            line_no,
            func_name: func_name.into(),
            code: code.into(),
        }
    }

    /// Format as "path/to/file.rs:42 in function_name".
    pub fn location(&self) -> String {
        format!("{}:{} in {}", self.file_path, self.line_no, self.func_name)
    }
}

impl fmt::Display for StacktraceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n    {}", self.location(), self.code.trim())
    }
}

/// Ordered call stack, outermost frame first.
///
/// The last frame is the innermost one, i.e. the line that actually
/// executed the query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StackTrace(Vec<StacktraceLine>);

impl StackTrace {
    pub fn new(frames: Vec<StacktraceLine>) -> Self {
        Self(frames)
    }

    /// The innermost frame, or `None` when nothing was captured.
    pub fn last(&self) -> Option<&StacktraceLine> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StacktraceLine> {
        self.0.iter()
    }
}

impl From<Vec<StacktraceLine>> for StackTrace {
    fn from(frames: Vec<StacktraceLine>) -> Self {
        Self(frames)
    }
}

impl FromIterator<StacktraceLine> for StackTrace {
    fn from_iter<I: IntoIterator<Item = StacktraceLine>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", rendered.join("\n"))
    }
}
