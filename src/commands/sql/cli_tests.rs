//! CLI parsing tests for sql command using the test DSL.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_required_arg_test! {
        command: "sql",
        test_name: test_requires_sql,
        required_arg: "<SQL>",
    }

    crate::cli_defaults_test! {
        command: "sql",
        variant: Sql,
        required_args: ["SELECT 1"],
        defaults: {
            sql: "SELECT 1",
            db_type: "sql",
            style: crate::commands::StyleArgs::default(),
        },
    }

    crate::cli_option_test! {
        command: "sql",
        variant: Sql,
        test_name: test_with_db_type,
        args: ["SELECT 1", "--db-type", "postgresql"],
        field: db_type,
        expected: "postgresql",
    }

    crate::cli_option_test! {
        command: "sql",
        variant: Sql,
        test_name: test_with_short_db_type,
        args: ["SELECT 1", "-t", "mysql"],
        field: db_type,
        expected: "mysql",
    }

    #[rstest]
    fn test_bare_style_flag_before_positional() {
        let args = Args::try_parse_from(["snapshot_queries", "sql", "--colored", "SELECT 1"]).unwrap();
        match args.command {
            crate::commands::Command::Sql(cmd) => {
                assert_eq!(cmd.sql, "SELECT 1");
                assert_eq!(cmd.style.colored, Some(true));
            }
            _ => panic!("Expected Sql command"),
        }
    }

    #[rstest]
    fn test_formatted_false() {
        let args =
            Args::try_parse_from(["snapshot_queries", "sql", "SELECT 1", "--formatted=false"]).unwrap();
        match args.command {
            crate::commands::Command::Sql(cmd) => {
                assert_eq!(cmd.style.formatted, Some(false));
            }
            _ => panic!("Expected Sql command"),
        }
    }
}
