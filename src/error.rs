//! Error handling for the JSON parser.
//!
//! Every parse failure aborts the whole parse and yields a single
//! [`ParseError`] carrying the failure kind and the byte offset where it was
//! detected. Accessor kind mismatches on [`Value`](crate::Value) are not
//! errors and never surface here.

use thiserror::Error;

/// Failure kinds reported by the parser.
///
/// Each kind has a stable numeric code and name so that callers (and the CLI)
/// can report failures in a machine-readable way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    /// The input ended while a production still expected characters.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    /// A backslash in a string was followed by an unsupported character.
    #[error("invalid escape sequence")]
    InvalidEscape,

    /// No closing quote was found before the end of input.
    #[error("unterminated string")]
    UnterminatedString,

    /// A byte matched no production, or a required `:` `,` `}` `]` was missing.
    #[error("unexpected token")]
    UnexpectedToken,

    /// Containers were nested deeper than the configured limit.
    #[error("nesting depth exceeded")]
    DepthExceeded,

    /// Bytes remained after a complete top-level value.
    #[error("trailing data after value")]
    TrailingData,

    /// The input was larger than the configured size limit.
    #[error("input too large")]
    InputTooLarge,
}

impl ErrorKind {
    /// Get the numeric error code.
    pub const fn code(&self) -> u32 {
        match self {
            ErrorKind::UnexpectedEndOfInput => 1,
            ErrorKind::InvalidEscape => 2,
            ErrorKind::UnterminatedString => 3,
            ErrorKind::UnexpectedToken => 4,
            ErrorKind::DepthExceeded => 5,
            ErrorKind::TrailingData => 6,
            ErrorKind::InputTooLarge => 7,
        }
    }

    /// Get the error name as a string.
    pub const fn name(&self) -> &'static str {
        match self {
            ErrorKind::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorKind::InvalidEscape => "InvalidEscape",
            ErrorKind::UnterminatedString => "UnterminatedString",
            ErrorKind::UnexpectedToken => "UnexpectedToken",
            ErrorKind::DepthExceeded => "DepthExceeded",
            ErrorKind::TrailingData => "TrailingData",
            ErrorKind::InputTooLarge => "InputTooLarge",
        }
    }
}

/// A parse failure: what went wrong and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("{kind} at byte {offset}")]
pub struct ParseError {
    kind: ErrorKind,
    offset: usize,
}

impl ParseError {
    /// Create an error of `kind` detected at byte `offset`.
    pub const fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// The failure kind.
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Byte offset into the input where the failure was detected.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Shorthand for `self.kind().code()`.
    pub const fn code(&self) -> u32 {
        self.kind.code()
    }
}

/// Result type for parse operations.
pub type ParseResult<T> = Result<T, ParseError>;
