//! Ordered collections of query records.

use serde::Serialize;

use crate::query::{CapturedQuery, DisplayOptions, Query};
use crate::types::TimeDelta;

/// Queries in capture order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QueryLog {
    queries: Vec<Query>,
}

impl QueryLog {
    pub fn from_captured(captured: Vec<CapturedQuery>) -> Self {
        Self {
            queries: captured.into_iter().map(Query::create).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Query> {
        self.queries.iter()
    }

    /// Keep only read queries, preserving order and indices.
    pub fn select_only(self) -> Self {
        Self {
            queries: self.queries.into_iter().filter(Query::is_select).collect(),
        }
    }

    pub fn total_duration(&self) -> TimeDelta {
        self.queries.iter().map(Query::duration).sum()
    }

    /// Every query's report, separated by a blank line.
    pub fn display_string(&self, options: &DisplayOptions) -> String {
        self.queries
            .iter()
            .map(|query| query.display_string(options))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl From<Vec<Query>> for QueryLog {
    fn from(queries: Vec<Query>) -> Self {
        Self { queries }
    }
}

impl<'a> IntoIterator for &'a QueryLog {
    type Item = &'a Query;
    type IntoIter = std::slice::Iter<'a, Query>;

    fn into_iter(self) -> Self::IntoIter {
        self.queries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture;
    use crate::test_utils::CAPTURE_JSON;
    use rstest::{fixture, rstest};

    #[fixture]
    fn log() -> QueryLog {
        QueryLog::from_captured(capture::parse(CAPTURE_JSON).unwrap())
    }

    #[rstest]
    fn test_from_captured_keeps_order(log: QueryLog) {
        let indices: Vec<i64> = log.iter().map(Query::idx).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[rstest]
    fn test_select_only(log: QueryLog) {
        let selects = log.select_only();
        assert_eq!(selects.len(), 2);
        let indices: Vec<i64> = selects.iter().map(Query::idx).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[rstest]
    fn test_total_duration(log: QueryLog) {
        assert_eq!(log.total_duration().humanize(), "15ms");
    }

    #[rstest]
    fn test_display_string_joins_reports(log: QueryLog) {
        let options = DisplayOptions {
            idx: true,
            ..DisplayOptions::none()
        };
        assert_eq!(log.display_string(&options), "index: 0\n\nindex: 1\n\nindex: 2");
    }

    #[rstest]
    fn test_empty_log() {
        let log = QueryLog::default();
        assert!(log.is_empty());
        assert_eq!(log.display_string(&DisplayOptions::default()), "");
        assert_eq!(log.total_duration(), TimeDelta::default());
    }
}
