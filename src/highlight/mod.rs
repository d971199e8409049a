//! Syntax highlighting for terminal output.
//!
//! Text is split into tokens by a [`Grammar`]-driven lexer and each token is
//! painted with ANSI escape sequences. Whitespace is never styled, so line
//! breaks and indentation of the input survive unchanged.

mod grammar;
mod lexer;

pub use grammar::{DoubleQuote, Grammar, GrammarRules};
pub use lexer::{tokenize, Lexer, Token, TokenKind};

use owo_colors::OwoColorize;

/// Highlight `text` with the given grammar, producing ANSI-escaped output.
pub fn highlight(text: &str, grammar: Grammar) -> String {
    Lexer::new(text, grammar)
        .map(paint)
        .collect()
}

fn paint(token: Token<'_>) -> String {
    let text = token.text;
    match token.kind {
        TokenKind::Keyword => text.blue().bold().to_string(),
        TokenKind::Builtin => text.cyan().to_string(),
        TokenKind::String => text.yellow().to_string(),
        TokenKind::Number => text.magenta().to_string(),
        TokenKind::Comment => text.bright_black().to_string(),
        TokenKind::Placeholder => text.green().to_string(),
        TokenKind::QuotedName => text.bold().to_string(),
        TokenKind::Whitespace
        | TokenKind::Name
        | TokenKind::Operator
        | TokenKind::Punctuation
        | TokenKind::Other => text.to_string(),
    }
}
