//! Output formatting for show command results.

use super::execute::ShowResult;
use crate::output::Outputable;

impl Outputable for ShowResult {
    fn to_table(&self) -> String {
        if self.queries.is_empty() {
            return "No queries captured.".to_string();
        }

        let noun = if self.total_queries == 1 { "query" } else { "queries" };
        let mut lines = vec![
            format!("Captured {} {} in {}", self.total_queries, noun, self.total_duration),
            String::new(),
        ];
        lines.push(self.queries.display_string(&self.options));

        lines.join("\n")
    }
}
