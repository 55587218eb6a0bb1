//! Input cursor and leaf productions.
//!
//! The cursor is the parser's only mutable state: the input buffer and a
//! byte position that moves left to right. String, number and literal
//! productions live here; the recursive productions are in
//! [`parser`](super::parser).

use super::types::Number;
use crate::error::{ErrorKind, ParseError, ParseResult};

/// Byte cursor over a JSON text.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Get the current position in the input.
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Peek at the current byte without consuming it.
    pub(crate) fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Consume and return the current byte.
    pub(crate) fn bump(&mut self) -> Option<u8> {
        let b = self.peek();
        if b.is_some() {
            self.pos += 1;
        }
        b
    }

    fn error(&self, kind: ErrorKind) -> ParseError {
        ParseError::new(kind, self.pos)
    }

    /// Error for a production that needed a byte here: end of input or an
    /// unexpected token, depending on whether a byte exists.
    pub(crate) fn unexpected(&self) -> ParseError {
        if self.is_at_end() {
            self.error(ErrorKind::UnexpectedEndOfInput)
        } else {
            self.error(ErrorKind::UnexpectedToken)
        }
    }

    /// Skip spaces, tabs, newlines and carriage returns.
    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    /// Consume `expected` or fail without moving.
    pub(crate) fn expect_byte(&mut self, expected: u8) -> ParseResult<()> {
        if self.peek() == Some(expected) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    /// Consume the exact bytes of a literal such as `true`.
    pub(crate) fn expect_literal(&mut self, literal: &[u8]) -> ParseResult<()> {
        for &b in literal {
            self.expect_byte(b)?;
        }
        Ok(())
    }

    /// Read a string body; the opening quote has already been consumed.
    pub(crate) fn parse_string_literal(&mut self) -> ParseResult<String> {
        let open = self.pos.saturating_sub(1);
        let mut out = String::new();
        let mut run_start = self.pos;

        loop {
            match self.bump() {
                None => return Err(ParseError::new(ErrorKind::UnterminatedString, open)),
                Some(b'"') => {
                    out.push_str(&self.input[run_start..self.pos - 1]);
                    return Ok(out);
                }
                Some(b'\\') => {
                    let backslash = self.pos - 1;
                    out.push_str(&self.input[run_start..backslash]);
                    let ch = match self.bump() {
                        None => return Err(ParseError::new(ErrorKind::UnterminatedString, open)),
                        Some(b'"') => '"',
                        Some(b'\\') => '\\',
                        Some(b'/') => '/',
                        Some(b'b') => '\x08',
                        Some(b'f') => '\x0C',
                        Some(b'n') => '\n',
                        Some(b'r') => '\r',
                        Some(b't') => '\t',
                        Some(_) => return Err(ParseError::new(ErrorKind::InvalidEscape, backslash)),
                    };
                    out.push(ch);
                    run_start = self.pos;
                }
                // Everything else, raw control bytes and multi-byte UTF-8
                // included, is copied through in runs.
                Some(_) => {}
            }
        }
    }

    fn skip_digits(&mut self) {
        while let Some(b'0'..=b'9') = self.peek() {
            self.pos += 1;
        }
    }

    /// Read a number: `-`? (`0` | [1-9][0-9]*) (`.` [0-9]+)?
    ///
    /// Spans without a fraction become `Number::Int`, falling back to
    /// `Number::Float` when the value does not fit in `i32`.
    pub(crate) fn parse_number(&mut self) -> ParseResult<Number> {
        let start = self.pos;

        if self.peek() == Some(b'-') {
            self.pos += 1;
        }

        // Integer part
        match self.peek() {
            Some(b'0') => self.pos += 1,
            Some(b'1'..=b'9') => {
                self.pos += 1;
                self.skip_digits();
            }
            _ => return Err(self.unexpected()),
        }

        let is_float = self.peek() == Some(b'.');
        if is_float {
            self.pos += 1;
            match self.peek() {
                Some(b'0'..=b'9') => self.skip_digits(),
                _ => return Err(self.unexpected()),
            }
        }

        let text = &self.input[start..self.pos];
        let invalid = || ParseError::new(ErrorKind::UnexpectedToken, start);
        if is_float {
            return text.parse::<f64>().map(Number::Float).map_err(|_| invalid());
        }
        match text.parse::<i32>() {
            Ok(i) => Ok(Number::Int(i)),
            Err(_) => text.parse::<f64>().map(Number::Float).map_err(|_| invalid()),
        }
    }
}
