//! Cell state
//!
//! A cell holds the bounded stream of tokens lexed from its raw text plus
//! the display value resolved from the first of them. Malformed content
//! turns the cell into an error state; errors are local to the cell and
//! never abort the surrounding document.

use std::fmt;

use crate::source::{SourceBuffer, Span};
use crate::token::Token;

/// Why a cell was abandoned during lexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellErrorKind {
    /// A reference resolves outside the sheet bounds.
    Bounds,
    /// No closing quote before the end of the buffer.
    UnterminatedString,
    /// The token stream exceeded the per-cell capacity.
    TooManyTokens,
    /// Reserved for content that cannot be classified.
    NoSense,
}

impl CellErrorKind {
    /// Fixed diagnostic label used as the cell's display text.
    pub fn label(&self) -> &'static str {
        match self {
            CellErrorKind::Bounds => "#BOUNDS!",
            CellErrorKind::UnterminatedString => "#UNTERM!",
            CellErrorKind::TooManyTokens => "#TOKENS!",
            CellErrorKind::NoSense => "#NOSENSE!",
        }
    }
}

impl fmt::Display for CellErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The display-ready value derived from a cell's first token.
///
/// Multi-token cell content is lexed in full but never evaluated; only the
/// first token is projected into one of these.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Resolved {
    /// Nothing to display.
    #[default]
    Empty,
    /// A numeric value, rendered with one fractional digit.
    Number(f64),
    /// String content; the span excludes the delimiting quotes.
    Text(Span),
    /// The cell is in an error state and displays its diagnostic label.
    Error(CellErrorKind),
}

impl Resolved {
    /// The text this value renders as. String content is looked up in
    /// `source`.
    pub fn display_text(&self, source: &SourceBuffer) -> String {
        match self {
            Resolved::Empty => String::new(),
            Resolved::Number(n) => format!("{n:.1}"),
            Resolved::Text(span) => source.text(*span).into_owned(),
            Resolved::Error(kind) => kind.label().to_string(),
        }
    }
}

/// One grid position's parsed state.
#[derive(Debug, Clone, Default)]
pub struct Cell {
    /// Tokens lexed from the cell's raw text, in source order.
    pub tokens: Vec<Token>,
    /// Display value, written by the resolver pass (errors by the lexer).
    pub resolved: Resolved,
    /// Marks the last cell of a row; the renderer breaks the line here.
    pub ends_row: bool,
}

impl Cell {
    /// Whether the cell is in an error state.
    pub fn is_error(&self) -> bool {
        matches!(self.resolved, Resolved::Error(_))
    }

    /// The error kind, if the cell is in an error state.
    pub fn error_kind(&self) -> Option<CellErrorKind> {
        match self.resolved {
            Resolved::Error(kind) => Some(kind),
            _ => None,
        }
    }

    /// Whether the cell lexed no tokens and carries no error.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty() && !self.is_error()
    }

    /// The first lexed token, the only one ever resolved to a value.
    pub fn first_token(&self) -> Option<&Token> {
        self.tokens.first()
    }

    /// Put the cell into an error state. Once set, later tokenization
    /// results are not trusted and the lexer stops appending.
    pub fn fail(&mut self, kind: CellErrorKind) {
        self.resolved = Resolved::Error(kind);
    }

    /// Append a token. On filling `capacity` the cell fails closed with
    /// [`CellErrorKind::TooManyTokens`] instead of growing.
    pub fn push_token(&mut self, token: Token, capacity: usize) {
        if self.is_error() {
            return;
        }
        self.tokens.push(token);
        if self.tokens.len() >= capacity {
            self.fail(CellErrorKind::TooManyTokens);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    fn dummy_token(n: f64) -> Token {
        Token::new(TokenKind::Number(n), Span::new(0, 1), 1, 0)
    }

    #[test]
    fn test_push_token_capacity() {
        let mut cell = Cell::default();
        for i in 0..7 {
            cell.push_token(dummy_token(i as f64), 8);
        }
        assert!(!cell.is_error());
        assert_eq!(cell.tokens.len(), 7);

        // The eighth token fills the capacity and fails the cell closed.
        cell.push_token(dummy_token(7.0), 8);
        assert_eq!(cell.error_kind(), Some(CellErrorKind::TooManyTokens));
        assert!(cell.tokens.len() <= 8);

        // Further pushes are ignored once the cell is in an error state.
        cell.push_token(dummy_token(8.0), 8);
        assert!(cell.tokens.len() <= 8);
    }

    #[test]
    fn test_error_state_is_sticky() {
        let mut cell = Cell::default();
        cell.fail(CellErrorKind::UnterminatedString);
        cell.push_token(dummy_token(1.0), 8);
        assert!(cell.tokens.is_empty());
        assert_eq!(cell.error_kind(), Some(CellErrorKind::UnterminatedString));
    }

    #[test]
    fn test_labels() {
        assert_eq!(CellErrorKind::Bounds.to_string(), "#BOUNDS!");
        assert_eq!(CellErrorKind::UnterminatedString.to_string(), "#UNTERM!");
        assert_eq!(CellErrorKind::TooManyTokens.to_string(), "#TOKENS!");
        assert_eq!(CellErrorKind::NoSense.to_string(), "#NOSENSE!");
    }

    #[test]
    fn test_display_text() {
        let source = SourceBuffer::from_bytes("\"hi\"");
        assert_eq!(Resolved::Empty.display_text(&source), "");
        assert_eq!(Resolved::Number(2.0).display_text(&source), "2.0");
        assert_eq!(Resolved::Number(-3.5).display_text(&source), "-3.5");
        assert_eq!(
            Resolved::Text(Span::new(0, 4).inner()).display_text(&source),
            "hi"
        );
        assert_eq!(
            Resolved::Error(CellErrorKind::Bounds).display_text(&source),
            "#BOUNDS!"
        );
    }
}
