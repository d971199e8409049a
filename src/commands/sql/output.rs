//! Output formatting for sql command results.

use super::execute::SqlResult;
use crate::output::Outputable;

impl Outputable for SqlResult {
    fn to_table(&self) -> String {
        self.enhanced.trim_end().to_string()
    }
}
