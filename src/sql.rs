//! SQL enhancement: reindenting and dialect-aware highlighting.

use sqlformat::{FormatOptions, Indent, QueryParams};

use crate::highlight::{highlight, tokenize, Grammar, TokenKind};

/// Database engine a query was executed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbType {
    PostgreSql,
    MySql,
    Sqlite,
    Other,
}

impl DbType {
    /// Parse an engine tag such as `"postgresql"`, ignoring case.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "postgresql" => DbType::PostgreSql,
            "mysql" => DbType::MySql,
            "sqlite" => DbType::Sqlite,
            _ => DbType::Other,
        }
    }

    /// Grammar used to highlight SQL for this engine.
    ///
    /// Engines without an entry in [`SQL_GRAMMARS`] use the generic SQL grammar.
    pub fn grammar(self) -> Grammar {
        SQL_GRAMMARS
            .iter()
            .find(|(db_type, _)| *db_type == self)
            .map(|(_, grammar)| *grammar)
            .unwrap_or(Grammar::Sql)
    }
}

/// Engine-specific highlighting grammars.
pub const SQL_GRAMMARS: &[(DbType, Grammar)] = &[(DbType::PostgreSql, Grammar::Postgres)];

const SENTINEL_PREFIX: &str = "snapshot_queries_opaque_";

/// Reindent SQL: one clause per line, two-space indentation, case preserved.
///
/// Driver placeholders (`%s`, `%(name)s`) and dollar-quoted literals come
/// back byte-for-byte; only the whitespace around them changes.
pub fn reindent(sql: &str) -> String {
    let options = FormatOptions {
        indent: Indent::Spaces(2),
        ..FormatOptions::default()
    };
    let (masked, spans) = mask_opaque(sql);
    let formatted = sqlformat::format(&masked, &QueryParams::None, options);
    unmask_opaque(formatted, &spans)
}

/// Spans the formatter would rewrite, replaced by identifier-shaped sentinels.
fn mask_opaque(sql: &str) -> (String, Vec<(String, &str)>) {
    let mut prefix = SENTINEL_PREFIX.to_string();
    while sql.contains(&prefix) {
        prefix.push('_');
    }

    let mut masked = String::with_capacity(sql.len());
    let mut spans = Vec::new();
    for token in tokenize(sql, Grammar::Postgres) {
        let opaque = match token.kind {
            TokenKind::Placeholder => token.text.starts_with('%'),
            TokenKind::String => token.text.starts_with('$'),
            _ => false,
        };
        if opaque {
            let sentinel = format!("{prefix}{}_", spans.len());
            masked.push_str(&sentinel);
            spans.push((sentinel, token.text));
        } else {
            masked.push_str(token.text);
        }
    }
    (masked, spans)
}

fn unmask_opaque(mut formatted: String, spans: &[(String, &str)]) -> String {
    for (sentinel, original) in spans {
        formatted = formatted.replacen(sentinel.as_str(), original, 1);
    }
    formatted
}

/// Optionally reindent and optionally highlight `sql` for the engine named by `db_type`.
pub fn enhance(sql: &str, db_type: &str, formatted: bool, colored: bool) -> String {
    let grammar = DbType::from_tag(db_type).grammar();
    tracing::debug!(db_type, grammar = grammar.name(), formatted, colored, "enhancing sql");

    let sql = if formatted {
        reindent(sql)
    } else {
        sql.to_string()
    };

    if colored {
        highlight(&sql, grammar)
    } else {
        sql
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::strip_ansi;
    use owo_colors::OwoColorize;
    use rstest::rstest;

    #[rstest]
    #[case("postgresql", DbType::PostgreSql)]
    #[case("PostgreSQL", DbType::PostgreSql)]
    #[case("MYSQL", DbType::MySql)]
    #[case("sqlite", DbType::Sqlite)]
    #[case("oracle", DbType::Other)]
    #[case("", DbType::Other)]
    fn test_from_tag(#[case] tag: &str, #[case] expected: DbType) {
        assert_eq!(DbType::from_tag(tag), expected);
    }

    #[rstest]
    #[case("PostgreSQL", Grammar::Postgres)]
    #[case("postgresql", Grammar::Postgres)]
    #[case("mysql", Grammar::Sql)]
    #[case("sqlite", Grammar::Sql)]
    #[case("cockroach", Grammar::Sql)]
    fn test_grammar_selection(#[case] tag: &str, #[case] expected: Grammar) {
        assert_eq!(DbType::from_tag(tag).grammar(), expected);
    }

    #[rstest]
    fn test_plain_passthrough() {
        let sql = "SELECT a,\n   b FROM t";
        assert_eq!(enhance(sql, "postgresql", false, false), sql);
    }

    #[rstest]
    fn test_formatted_splits_clauses() {
        let out = enhance("SELECT a, b FROM t WHERE a = 1", "mysql", true, false);
        assert!(out.contains('\n'));
        assert!(!out.contains('\x1b'));
        assert!(out.contains("FROM"));
        assert!(out.contains("WHERE"));
    }

    #[rstest]
    fn test_colored_unformatted_keeps_layout() {
        let sql = "SELECT a\n      FROM t   WHERE a = 1";
        let out = enhance(sql, "postgresql", false, true);
        assert!(out.contains('\x1b'));
        assert_eq!(strip_ansi(&out), sql);
    }

    #[rstest]
    fn test_dialect_affects_highlighting() {
        let sql = "UPDATE t SET a = 1 RETURNING a";
        assert_ne!(
            enhance(sql, "PostgreSQL", false, true),
            enhance(sql, "mysql", false, true)
        );
    }

    #[rstest]
    #[case("SELECT * FROM users WHERE id = %s", "%s")]
    #[case("SELECT * FROM users WHERE id = %(user_id)s", "%(user_id)s")]
    #[case("SELECT $$a b$$", "$$a b$$")]
    #[case("SELECT $body$ x  y $body$ FROM t", "$body$ x  y $body$")]
    fn test_reindent_keeps_opaque_tokens(#[case] sql: &str, #[case] token: &str) {
        let out = reindent(sql);
        assert!(out.contains(token), "{out:?} lost {token:?}");
        assert!(!out.contains(SENTINEL_PREFIX));
    }

    #[rstest]
    fn test_formatted_colored_keeps_placeholders() {
        let out = enhance(
            "UPDATE users SET name = %(name)s WHERE id = %s AND body = $$a b$$",
            "postgresql",
            true,
            true,
        );
        let plain = strip_ansi(&out);
        assert!(plain.contains("%(name)s"));
        assert!(plain.contains("id = %s"));
        assert!(plain.contains("$$a b$$"));
        assert!(out.contains(&"%s".green().to_string()));
    }

    #[rstest]
    fn test_mask_avoids_sentinel_collisions() {
        let sql = "SELECT snapshot_queries_opaque_0_ FROM t WHERE id = %s";
        let out = reindent(sql);
        assert!(out.contains("snapshot_queries_opaque_0_"));
        assert!(out.contains("id = %s"));
    }

    #[rstest]
    fn test_select_one_end_to_end() {
        let out = enhance("SELECT 1", "postgresql", true, true);
        assert!(!out.is_empty());
        assert_ne!(out, "SELECT 1");
        assert!(strip_ansi(&out).contains("SELECT"));
    }
}
