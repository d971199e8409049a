//! Token-recognition rules for each supported language.

/// How a double-quoted span is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoubleQuote {
    /// `"name"` is a quoted identifier (SQL)
    Identifier,
    /// `"text"` is a string literal with backslash escapes (source code)
    String,
}

/// Grammar used to highlight a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grammar {
    /// Generic ANSI SQL
    Sql,
    /// PostgreSQL dialect: generic SQL plus dollar quoting, `E''` strings and casts
    Postgres,
    /// General-purpose source code at a query's call site
    Source,
}

/// Static rule set backing a [`Grammar`].
#[derive(Debug)]
pub struct GrammarRules {
    pub name: &'static str,
    pub keywords: &'static [&'static [&'static str]],
    pub builtins: &'static [&'static [&'static str]],
    pub case_sensitive: bool,
    pub line_comments: &'static [&'static str],
    pub double_quote: DoubleQuote,
    /// `'it''s'` strings; otherwise `'c'` character literals
    pub sql_strings: bool,
    /// `?`, `%s`, `%(name)s`, `:name` and `$1` bind placeholders
    pub placeholders: bool,
    /// `$$body$$` and `$tag$body$tag$`
    pub dollar_quoting: bool,
    /// `E'escaped\n'`
    pub escape_strings: bool,
    /// `name!` is a macro invocation
    pub macros: bool,
}

impl Grammar {
    pub fn rules(self) -> &'static GrammarRules {
        match self {
            Grammar::Sql => &SQL_RULES,
            Grammar::Postgres => &POSTGRES_RULES,
            Grammar::Source => &SOURCE_RULES,
        }
    }

    pub fn name(self) -> &'static str {
        self.rules().name
    }

    pub(crate) fn is_keyword(self, word: &str) -> bool {
        contains_word(self.rules(), self.rules().keywords, word)
    }

    pub(crate) fn is_builtin(self, word: &str) -> bool {
        contains_word(self.rules(), self.rules().builtins, word)
    }
}

fn contains_word(rules: &GrammarRules, sets: &[&[&str]], word: &str) -> bool {
    sets.iter().flat_map(|set| set.iter()).any(|candidate| {
        if rules.case_sensitive {
            *candidate == word
        } else {
            candidate.eq_ignore_ascii_case(word)
        }
    })
}

const SQL_KEYWORDS: &[&str] = &[
    "ADD", "ALL", "ALTER", "AND", "ANY", "AS", "ASC", "BEGIN", "BETWEEN", "BY", "CASCADE", "CASE",
    "CAST", "CHECK", "COLUMN", "COMMIT", "CONSTRAINT", "CREATE", "CROSS", "DEFAULT", "DELETE",
    "DESC", "DISTINCT", "DROP", "ELSE", "END", "ESCAPE", "EXCEPT", "EXISTS", "FALSE", "FETCH",
    "FIRST", "FOR", "FOREIGN", "FROM", "FULL", "GRANT", "GROUP", "HAVING", "IF", "IN", "INDEX",
    "INNER", "INSERT", "INTERSECT", "INTO", "IS", "JOIN", "KEY", "LEFT", "LIKE", "LIMIT", "NATURAL",
    "NEXT", "NOT", "NOWAIT", "NULL", "OFFSET", "ON", "ONLY", "OR", "ORDER", "OUTER", "OVER",
    "PARTITION", "PRIMARY", "RECURSIVE", "REFERENCES", "RELEASE", "REVOKE", "RIGHT", "ROLLBACK",
    "ROWS", "SAVEPOINT", "SELECT", "SET", "SHARE", "TABLE", "TEMP", "TEMPORARY", "THEN",
    "TRANSACTION", "TRUE", "TRUNCATE", "UNION", "UNIQUE", "UPDATE", "USING", "VALUES", "VIEW",
    "WHEN", "WHERE", "WINDOW", "WITH",
];

const SQL_BUILTINS: &[&str] = &[
    "ABS", "AVG", "BIGINT", "BLOB", "BOOLEAN", "CHAR", "COALESCE", "COUNT", "CURRENT_DATE",
    "CURRENT_TIME", "CURRENT_TIMESTAMP", "DATE", "DECIMAL", "DOUBLE", "FLOAT", "INT", "INTEGER",
    "LENGTH", "LOWER", "MAX", "MIN", "NOW", "NULLIF", "NUMERIC", "PRECISION", "REAL", "ROUND",
    "SMALLINT", "SUBSTRING", "SUM", "TEXT", "TIME", "TIMESTAMP", "TRIM", "UPPER", "VARCHAR",
];

const POSTGRES_KEYWORDS: &[&str] = &[
    "ANALYZE", "CONCURRENTLY", "CONFLICT", "COPY", "DEFERRABLE", "DEFERRED", "DO", "EXPLAIN",
    "EXTENSION", "FUNCTION", "ILIKE", "INITIALLY", "LANGUAGE", "LATERAL", "LISTEN", "MATERIALIZED",
    "NOTHING", "NOTIFY", "REFRESH", "RETURNING", "RETURNS", "SCHEMA", "SEQUENCE", "SIMILAR",
    "TABLESAMPLE", "TRIGGER", "VACUUM",
];

const POSTGRES_BUILTINS: &[&str] = &[
    "ARRAY", "ARRAY_AGG", "BIGSERIAL", "BYTEA", "CIDR", "DATE_TRUNC", "DENSE_RANK",
    "GENERATE_SERIES", "HSTORE", "INET", "INTERVAL", "JSON", "JSONB", "JSONB_BUILD_OBJECT",
    "JSON_BUILD_OBJECT", "RANK", "ROW_NUMBER", "SERIAL", "SMALLSERIAL", "STRING_AGG", "TIMESTAMPTZ",
    "TO_CHAR", "TSQUERY", "TSVECTOR", "UNNEST", "UUID",
];

const SOURCE_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while",
];

const SOURCE_BUILTINS: &[&str] = &[
    "Box", "Err", "None", "Ok", "Option", "Result", "Some", "String", "Vec", "bool", "char", "f32",
    "f64", "i32", "i64", "str", "u32", "u64", "usize",
];

static SQL_RULES: GrammarRules = GrammarRules {
    name: "sql",
    keywords: &[SQL_KEYWORDS],
    builtins: &[SQL_BUILTINS],
    case_sensitive: false,
    line_comments: &["--"],
    double_quote: DoubleQuote::Identifier,
    sql_strings: true,
    placeholders: true,
    dollar_quoting: false,
    escape_strings: false,
    macros: false,
};

static POSTGRES_RULES: GrammarRules = GrammarRules {
    name: "postgresql",
    keywords: &[SQL_KEYWORDS, POSTGRES_KEYWORDS],
    builtins: &[SQL_BUILTINS, POSTGRES_BUILTINS],
    case_sensitive: false,
    line_comments: &["--"],
    double_quote: DoubleQuote::Identifier,
    sql_strings: true,
    placeholders: true,
    dollar_quoting: true,
    escape_strings: true,
    macros: false,
};

static SOURCE_RULES: GrammarRules = GrammarRules {
    name: "source",
    keywords: &[SOURCE_KEYWORDS],
    builtins: &[SOURCE_BUILTINS],
    case_sensitive: true,
    line_comments: &["//"],
    double_quote: DoubleQuote::String,
    sql_strings: false,
    placeholders: false,
    dollar_quoting: false,
    escape_strings: false,
    macros: true,
};

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Grammar::Sql, "select", true)]
    #[case(Grammar::Sql, "SeLeCt", true)]
    #[case(Grammar::Sql, "returning", false)]
    #[case(Grammar::Postgres, "RETURNING", true)]
    #[case(Grammar::Postgres, "select", true)]
    #[case(Grammar::Source, "fn", true)]
    #[case(Grammar::Source, "FN", false)]
    #[case(Grammar::Source, "select", false)]
    fn test_is_keyword(#[case] grammar: Grammar, #[case] word: &str, #[case] expected: bool) {
        assert_eq!(grammar.is_keyword(word), expected);
    }

    #[rstest]
    fn test_postgres_builtins_extend_sql() {
        assert!(Grammar::Postgres.is_builtin("jsonb"));
        assert!(Grammar::Postgres.is_builtin("count"));
        assert!(!Grammar::Sql.is_builtin("jsonb"));
    }

    #[rstest]
    fn test_names() {
        assert_eq!(Grammar::Sql.name(), "sql");
        assert_eq!(Grammar::Postgres.name(), "postgresql");
        assert_eq!(Grammar::Source.name(), "source");
    }
}
