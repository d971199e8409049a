mod cli_tests;
mod execute;
mod output;

use clap::Args;

use super::StyleArgs;

/// Reindent and highlight a single SQL statement
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  snapshot_queries sql 'select * from users where id = 1'
  snapshot_queries sql 'insert into t values (1) returning id' --db-type postgresql
  snapshot_queries sql 'select 1' --formatted=false     # Highlight only")]
pub struct SqlCmd {
    /// SQL text to enhance
    pub sql: String,

    /// Database engine tag selecting the highlighting grammar (e.g. postgresql, mysql)
    #[arg(short = 't', long, default_value = "sql")]
    pub db_type: String,

    #[command(flatten)]
    pub style: StyleArgs,
}
