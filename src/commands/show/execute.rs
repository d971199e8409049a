use std::error::Error;

use serde::Serialize;

use super::ShowCmd;
use crate::capture;
use crate::commands::Execute;
use crate::config::ConfigFile;
use crate::query::DisplayOptions;
use crate::query_log::QueryLog;

/// Result of the show command execution
#[derive(Debug, Default, Serialize)]
pub struct ShowResult {
    pub total_queries: usize,
    pub total_duration: String,
    pub queries: QueryLog,
    #[serde(skip)]
    pub options: DisplayOptions,
}

impl ShowResult {
    pub fn new(queries: QueryLog, options: DisplayOptions) -> Self {
        Self {
            total_queries: queries.len(),
            total_duration: queries.total_duration().humanize(),
            queries,
            options,
        }
    }
}

impl Execute for ShowCmd {
    type Output = ShowResult;

    fn execute(self, config: &ConfigFile) -> Result<Self::Output, Box<dyn Error>> {
        let options = self.display.apply(config.display);
        let mut queries = QueryLog::from_captured(capture::load(&self.file)?);
        if self.select_only {
            queries = queries.select_only();
        }

        tracing::info!(
            file = %self.file.display(),
            count = queries.len(),
            select_only = self.select_only,
            "rendering captured queries"
        );

        Ok(ShowResult::new(queries, options))
    }
}
