//! Output formatting tests for show command.

#[cfg(test)]
mod tests {
    use super::super::execute::ShowResult;
    use crate::capture;
    use crate::query::DisplayOptions;
    use crate::query_log::QueryLog;
    use crate::test_utils::CAPTURE_JSON;
    use rstest::{fixture, rstest};

    // =========================================================================
    // Expected outputs
    // =========================================================================

    const PLAIN_TABLE: &str = "\
Captured 3 queries in 15ms

index: 0

12ms

src/accounts/repo.rs:57 in find_user

let user = conn.query_one(FIND_USER, &[&id])?;

SELECT * FROM users WHERE id = %s

index: 1

3ms

src/accounts/repo.rs:80 in rename_user

conn.execute(RENAME_USER, &[&name, &id])?;

UPDATE users SET name = %s WHERE id = %s

index: 2

500µs





SELECT 1";

    const SINGLE_TABLE: &str = "\
Captured 1 query in 12ms

index: 4";

    // =========================================================================
    // Fixtures
    // =========================================================================

    #[fixture]
    fn empty_result() -> ShowResult {
        ShowResult::new(QueryLog::default(), DisplayOptions::default())
    }

    #[fixture]
    fn plain_result() -> ShowResult {
        let options = DisplayOptions {
            idx: true,
            colored: false,
            ..DisplayOptions::default()
        };
        ShowResult::new(
            QueryLog::from_captured(capture::parse(CAPTURE_JSON).unwrap()),
            options,
        )
    }

    #[fixture]
    fn single_result() -> ShowResult {
        use crate::query::Query;
        use crate::test_utils::{captured, two_frame_trace};

        let options = DisplayOptions {
            idx: true,
            ..DisplayOptions::none()
        };
        let query = Query::create(captured("SELECT 1", two_frame_trace()));
        ShowResult::new(QueryLog::from(vec![query]), options)
    }

    // =========================================================================
    // Tests
    // =========================================================================

    crate::output_table_test! {
        test_name: test_to_table_empty,
        fixture: empty_result,
        fixture_type: ShowResult,
        expected: "No queries captured.",
    }

    crate::output_table_test! {
        test_name: test_to_table_plain,
        fixture: plain_result,
        fixture_type: ShowResult,
        expected: PLAIN_TABLE,
    }

    crate::output_table_test! {
        test_name: test_to_table_single,
        fixture: single_result,
        fixture_type: ShowResult,
        expected: SINGLE_TABLE,
    }

    #[fixture]
    fn colored_result() -> ShowResult {
        ShowResult::new(
            QueryLog::from_captured(capture::parse(CAPTURE_JSON).unwrap()),
            DisplayOptions::default(),
        )
    }

    crate::output_table_contains_test! {
        test_name: test_to_table_colored,
        fixture: colored_result,
        fixture_type: ShowResult,
        contains: ["Captured 3 queries in 15ms", "src/accounts/repo.rs:57 in find_user", "\x1b["],
    }

    crate::output_json_test! {
        test_name: test_format_json,
        fixture: plain_result,
        fixture_type: ShowResult,
        assertions: {
            "total_queries": 3,
            "total_duration": "15ms",
        },
    }

    #[rstest]
    fn test_json_queries_carry_derived_fields(plain_result: ShowResult) {
        use crate::output::{OutputFormat, Outputable};
        let parsed: serde_json::Value =
            serde_json::from_str(&plain_result.format(OutputFormat::Json)).unwrap();
        assert_eq!(parsed["queries"][0]["location"], "src/accounts/repo.rs:57 in find_user");
        assert_eq!(parsed["queries"][2]["code"], "");
        assert!(parsed.get("options").is_none());
    }

    crate::output_toon_test! {
        test_name: test_format_toon,
        fixture: plain_result,
        fixture_type: ShowResult,
        contains: ["total_queries: 3", "total_duration:"],
    }
}
