//! Splits text into classified tokens according to a [`Grammar`].
//!
//! Every byte of the input belongs to exactly one token, so concatenating
//! the token texts always reproduces the input.

use super::grammar::{DoubleQuote, Grammar};

/// Token classification used by the terminal formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Whitespace,
    Comment,
    Keyword,
    Builtin,
    Name,
    QuotedName,
    String,
    Number,
    Placeholder,
    Operator,
    Punctuation,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

const OPERATORS: &[&str] = &[
    "->>", "::", "<>", "<=", ">=", "!=", "||", "->", "=>", "==", "&&", "+=", "-=", "*=", "/=",
    "<<", ">>", "@>", "<@",
];

const OPERATOR_CHARS: &str = "+-*/%<>=!|&^~@";
const PUNCTUATION_CHARS: &str = "(),;.[]{}";

pub struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    grammar: Grammar,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str, grammar: Grammar) -> Self {
        Self { src, pos: 0, grammar }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// Length in bytes of the next token and its kind.
    fn scan_token(&self) -> (TokenKind, usize) {
        let rest = self.rest();
        let rules = self.grammar.rules();
        let mut chars = rest.chars();
        let Some(c) = chars.next() else {
            return (TokenKind::Other, 0);
        };
        let next = chars.next();

        if c.is_whitespace() {
            return (TokenKind::Whitespace, take_while(rest, char::is_whitespace));
        }

        if rules.line_comments.iter().any(|prefix| rest.starts_with(prefix)) {
            return (TokenKind::Comment, rest.find('\n').unwrap_or(rest.len()));
        }

        if rest.starts_with("/*") {
            let len = rest[2..].find("*/").map(|end| end + 4).unwrap_or(rest.len());
            return (TokenKind::Comment, len);
        }

        if c == '$' && rules.placeholders && next.is_some_and(|n| n.is_ascii_digit()) {
            return (TokenKind::Placeholder, 1 + take_while(&rest[1..], |ch| ch.is_ascii_digit()));
        }

        if c == '$' && rules.dollar_quoting {
            if let Some(len) = dollar_quoted(rest) {
                return (TokenKind::String, len);
            }
        }

        if rules.escape_strings && (c == 'E' || c == 'e') && next == Some('\'') {
            return (TokenKind::String, 1 + quoted(&rest[1..], '\'', Escape::Backslash));
        }

        if c == '\'' {
            if rules.sql_strings {
                return (TokenKind::String, quoted(rest, '\'', Escape::Doubled));
            }
            if let Some(len) = char_literal(rest) {
                return (TokenKind::String, len);
            }
            return (TokenKind::Punctuation, 1);
        }

        if c == '"' {
            return match rules.double_quote {
                DoubleQuote::Identifier => (TokenKind::QuotedName, quoted(rest, '"', Escape::Doubled)),
                DoubleQuote::String => (TokenKind::String, quoted(rest, '"', Escape::Backslash)),
            };
        }

        if c == '`' && rules.sql_strings {
            return (TokenKind::QuotedName, quoted(rest, '`', Escape::Doubled));
        }

        if c.is_ascii_digit() {
            return (TokenKind::Number, number(rest, self.grammar == Grammar::Source));
        }

        if rules.placeholders {
            if let Some(len) = placeholder(rest) {
                return (TokenKind::Placeholder, len);
            }
        }

        if c.is_alphabetic() || c == '_' {
            let len = take_while(rest, |ch| ch.is_alphanumeric() || ch == '_');
            let word = &rest[..len];
            if rules.macros && rest[len..].starts_with('!') && !rest[len..].starts_with("!=") {
                return (TokenKind::Builtin, len + 1);
            }
            let kind = if self.grammar.is_keyword(word) {
                TokenKind::Keyword
            } else if self.grammar.is_builtin(word) {
                TokenKind::Builtin
            } else {
                TokenKind::Name
            };
            return (kind, len);
        }

        if let Some(op) = OPERATORS.iter().find(|op| rest.starts_with(**op)) {
            return (TokenKind::Operator, op.len());
        }
        if OPERATOR_CHARS.contains(c) {
            return (TokenKind::Operator, c.len_utf8());
        }
        if PUNCTUATION_CHARS.contains(c) {
            return (TokenKind::Punctuation, c.len_utf8());
        }

        (TokenKind::Other, c.len_utf8())
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.src.len() {
            return None;
        }
        let (kind, len) = self.scan_token();
        let text = &self.src[self.pos..self.pos + len];
        self.pos += len;
        Some(Token { kind, text })
    }
}

/// Tokenize `src` with the given grammar.
pub fn tokenize(src: &str, grammar: Grammar) -> Vec<Token<'_>> {
    Lexer::new(src, grammar).collect()
}

#[derive(Clone, Copy)]
enum Escape {
    /// `''` inside `'...'`
    Doubled,
    /// `\'` inside `'...'`
    Backslash,
}

fn take_while(s: &str, pred: impl Fn(char) -> bool) -> usize {
    s.char_indices()
        .find(|(_, c)| !pred(*c))
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Length of a quoted span starting at `s[0] == quote`; runs to the end when unterminated.
fn quoted(s: &str, quote: char, escape: Escape) -> usize {
    let mut iter = s.char_indices().skip(1).peekable();
    while let Some((i, c)) = iter.next() {
        match escape {
            Escape::Backslash if c == '\\' => {
                iter.next();
            }
            Escape::Doubled if c == quote && iter.peek().is_some_and(|(_, n)| *n == quote) => {
                iter.next();
            }
            _ if c == quote => return i + c.len_utf8(),
            _ => {}
        }
    }
    s.len()
}

/// `'a'` or `'\n'`; anything else (e.g. a lifetime) is not a literal.
fn char_literal(s: &str) -> Option<usize> {
    let mut chars = s.char_indices().skip(1);
    let (_, first) = chars.next()?;
    if first == '\\' {
        chars.next()?;
    }
    match chars.next() {
        Some((i, '\'')) => Some(i + 1),
        _ => None,
    }
}

/// `$tag$ ... $tag$` with an empty or identifier tag.
fn dollar_quoted(s: &str) -> Option<usize> {
    let tag_len = take_while(&s[1..], |ch| ch.is_alphanumeric() || ch == '_');
    if !s[1 + tag_len..].starts_with('$') {
        return None;
    }
    let delimiter = &s[..tag_len + 2];
    let body_start = delimiter.len();
    let len = s[body_start..]
        .find(delimiter)
        .map(|end| body_start + end + delimiter.len())
        .unwrap_or(s.len());
    Some(len)
}

/// Digits with optional fraction and exponent; `allow_suffix` also takes `1u32`-style suffixes.
fn number(s: &str, allow_suffix: bool) -> usize {
    let mut len = take_while(s, |ch| ch.is_ascii_digit() || ch == '_');
    let rest = &s[len..];
    if rest.starts_with('.') && rest[1..].starts_with(|ch: char| ch.is_ascii_digit()) {
        len += 1 + take_while(&rest[1..], |ch| ch.is_ascii_digit());
    }
    let rest = &s[len..];
    if rest.starts_with(['e', 'E']) {
        let exp = &rest[1..];
        let sign = usize::from(exp.starts_with(['+', '-']));
        let digits = take_while(&exp[sign..], |ch| ch.is_ascii_digit());
        if digits > 0 {
            len += 1 + sign + digits;
        }
    }
    if allow_suffix {
        len += take_while(&s[len..], |ch| ch.is_ascii_alphanumeric());
    }
    len
}

/// Driver bind parameters: `?`, `%s`, `%(name)s`, `:name`.
fn placeholder(s: &str) -> Option<usize> {
    if s.starts_with('?') {
        return Some(1);
    }
    if s.starts_with("%s") {
        return Some(2);
    }
    if let Some(named) = s.strip_prefix("%(") {
        let close = named.find(")s")?;
        return Some(2 + close + 2);
    }
    if let Some(named) = s.strip_prefix(':') {
        if named.starts_with(|ch: char| ch.is_alphabetic() || ch == '_') {
            return Some(1 + take_while(named, |ch| ch.is_alphanumeric() || ch == '_'));
        }
    }
    None
}
