use std::error::Error;

use serde::Serialize;

use super::SqlCmd;
use crate::commands::Execute;
use crate::config::ConfigFile;
use crate::sql::{enhance, DbType};

/// Result of the sql command execution
#[derive(Debug, Default, Serialize)]
pub struct SqlResult {
    pub db_type: String,
    pub grammar: String,
    pub sql: String,
    pub enhanced: String,
}

impl Execute for SqlCmd {
    type Output = SqlResult;

    fn execute(self, config: &ConfigFile) -> Result<Self::Output, Box<dyn Error>> {
        let options = self.style.apply(config.display);
        let grammar = DbType::from_tag(&self.db_type).grammar();
        let enhanced = enhance(&self.sql, &self.db_type, options.formatted, options.colored);

        Ok(SqlResult {
            grammar: grammar.name().to_string(),
            db_type: self.db_type,
            sql: self.sql,
            enhanced,
        })
    }
}
