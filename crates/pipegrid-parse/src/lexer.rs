//! Cell lexer
//!
//! Second pass: walk the source buffer once, left to right, top to bottom,
//! splitting it into cells on the delimiter and emitting a bounded stream
//! of typed tokens per cell. Malformed content is contained to the
//! offending cell as an error state; the byte cursor always keeps moving,
//! so sibling cells lex normally.

use pipegrid_core::{
    CellErrorKind, Operator, RefAddress, Result, Sheet, SourceBuffer, Span, Token, TokenKind,
};

use crate::options::ParseOptions;

/// Tokenizes every cell of an allocated [`Sheet`].
///
/// Tracks two cursors at once: the byte position within the buffer (with
/// line/column for diagnostics) and the (row, col) grid position the bytes
/// belong to. Delimiters and newlines advance the grid cursor no matter
/// what state the current cell is in.
pub struct CellLexer<'a> {
    source: &'a SourceBuffer,
    options: &'a ParseOptions,
    sheet: &'a mut Sheet,
    /// Byte position in the buffer.
    pos: usize,
    /// 1-based line number of the byte at `pos`.
    line: u32,
    /// 0-based byte offset of `pos` within its line.
    column: u32,
    /// Grid cursor: the cell currently receiving tokens.
    row: u32,
    col: u16,
}

impl<'a> CellLexer<'a> {
    /// Create a lexer over `source` that writes into `sheet`.
    pub fn new(source: &'a SourceBuffer, options: &'a ParseOptions, sheet: &'a mut Sheet) -> Self {
        Self {
            source,
            options,
            sheet,
            pos: 0,
            line: 1,
            column: 0,
            row: 0,
            col: 0,
        }
    }

    /// Tokenize the whole buffer.
    pub fn run(mut self) {
        while let Some(byte) = self.peek() {
            match byte {
                b' ' | b'\t' => self.bump(),
                b'\n' => self.next_row(),
                d if d == self.options.delimiter => self.next_cell(),
                _ => self.lex_cell_byte(byte),
            }
        }
        tracing::debug!(lines = self.line, "cell lexing finished");
    }

    // === Cell content dispatch ===

    fn lex_cell_byte(&mut self, byte: u8) {
        // An errored or out-of-range cell keeps consuming bytes so the
        // cursor stays aligned for its siblings, but lexes nothing more.
        let usable = self
            .sheet
            .cell(self.row, self.col)
            .is_some_and(|cell| !cell.is_error());
        if !usable {
            self.bump();
            return;
        }

        if byte.is_ascii_digit() || (byte == b'-' && self.digit_follows()) {
            self.lex_number();
        } else if byte == self.options.quote {
            self.lex_string();
        } else if byte == b'@' || byte == b'$' {
            self.lex_reference(byte);
        } else if let Some(op) = Operator::from_byte(byte) {
            let token = Token::new(
                TokenKind::Operator(op),
                Span::new(self.pos, 1),
                self.line,
                self.column,
            );
            self.bump();
            self.push_token(token);
        } else {
            // Anything else is skipped without a token.
            self.bump();
        }
    }

    /// Longest decimal floating-point lexeme starting at the cursor:
    /// optional sign, integer part, optional fraction, optional exponent.
    fn lex_number(&mut self) {
        let start = self.pos;
        let (line, column) = (self.line, self.column);

        if self.peek() == Some(b'-') {
            self.bump();
        }
        self.bump_while(|b| b.is_ascii_digit());

        if self.peek() == Some(b'.') {
            self.bump();
            self.bump_while(|b| b.is_ascii_digit());
        }

        // An exponent only counts when at least one digit follows it;
        // otherwise the lexeme ends before the 'e'.
        if matches!(self.peek(), Some(b'e' | b'E')) {
            let signed = matches!(self.peek_at(1), Some(b'+' | b'-'));
            let first_digit = if signed { 2 } else { 1 };
            if self.peek_at(first_digit).is_some_and(|b| b.is_ascii_digit()) {
                self.bump();
                if signed {
                    self.bump();
                }
                self.bump_while(|b| b.is_ascii_digit());
            }
        }

        let span = Span::new(start, self.pos - start);
        let value = self.source.text(span).parse().unwrap_or(0.0);
        self.push_token(Token::new(TokenKind::Number(value), span, line, column));
    }

    /// Consume through the closing quote. Running off the end of the
    /// buffer first fails the cell with an unterminated-string error.
    fn lex_string(&mut self) {
        let start = self.pos;
        let (line, column) = (self.line, self.column);

        self.bump(); // opening quote
        loop {
            match self.peek() {
                None => {
                    self.fail_cell(CellErrorKind::UnterminatedString);
                    return;
                }
                Some(q) if q == self.options.quote => {
                    self.bump();
                    break;
                }
                Some(_) => self.bump(),
            }
        }

        // The span keeps both quote bytes.
        let span = Span::new(start, self.pos - start);
        self.push_token(Token::new(TokenKind::String, span, line, column));
    }

    // === Reference resolver ===

    /// Decode an `@`/`$` reference: letters are a base-26 column, digits a
    /// 1-based row. The whole letters+digits run is consumed whether the
    /// address resolves or not; a failure is a bounds error on the cell.
    fn lex_reference(&mut self, sigil: u8) {
        let start = self.pos;
        let (line, column) = (self.line, self.column);

        self.bump(); // sigil
        let body_start = self.pos;
        self.bump_while(|b| b.is_ascii_alphabetic());
        self.bump_while(|b| b.is_ascii_digit());

        let body = Span::new(body_start, self.pos - body_start);
        match self.resolve_reference(body) {
            Ok(addr) => {
                let kind = if sigil == b'@' {
                    TokenKind::RefAbsolute(addr)
                } else {
                    TokenKind::RefRelative(addr)
                };
                let span = Span::new(start, self.pos - start);
                self.push_token(Token::new(kind, span, line, column));
            }
            Err(_) => self.fail_cell(CellErrorKind::Bounds),
        }
    }

    fn resolve_reference(&self, body: Span) -> Result<RefAddress> {
        let addr = RefAddress::parse(&self.source.text(body))?;
        if addr.row >= self.sheet.rows() {
            return Err(pipegrid_core::Error::RowOutOfBounds(
                addr.row,
                self.sheet.rows(),
            ));
        }
        if addr.col >= self.sheet.cols() {
            return Err(pipegrid_core::Error::ColumnOutOfBounds(
                addr.col,
                self.sheet.cols(),
            ));
        }
        Ok(addr)
    }

    // === Cursor plumbing ===

    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos)
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.source.get(self.pos + offset)
    }

    fn digit_follows(&self) -> bool {
        self.peek_at(1).is_some_and(|b| b.is_ascii_digit())
    }

    /// Consume one byte, keeping the line/column counters honest even when
    /// a newline is swallowed as string content.
    fn bump(&mut self) {
        if let Some(byte) = self.peek() {
            self.pos += 1;
            if byte == b'\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
    }

    fn bump_while<F: Fn(u8) -> bool>(&mut self, keep: F) {
        while self.peek().is_some_and(&keep) {
            self.bump();
        }
    }

    /// Delimiter: move the grid cursor to the next cell in the row. Columns
    /// past the scanned width saturate; their bytes are consumed unparsed.
    fn next_cell(&mut self) {
        self.bump();
        self.col = self.col.saturating_add(1);
    }

    /// Newline: move the grid cursor to the first cell of the next row.
    fn next_row(&mut self) {
        self.bump();
        self.row += 1;
        self.col = 0;
    }

    fn push_token(&mut self, token: Token) {
        if let Some(cell) = self.sheet.cell_mut(self.row, self.col) {
            cell.push_token(token, self.options.token_capacity);
        }
    }

    fn fail_cell(&mut self, kind: CellErrorKind) {
        if let Some(cell) = self.sheet.cell_mut(self.row, self.col) {
            cell.fail(kind);
        }
    }
}
