//! rcjson - immutable, reference-counted JSON values.
//!
//! This crate parses JSON text into a [`Value`] tree and renders values back
//! to text. Values are immutable and share their payloads through atomic
//! reference counting, so cloning is O(1) and values can be read from any
//! thread.
//!
//! # Architecture
//!
//! - [`json`] - Value model, parser and formatter
//! - [`error`] - Parse error kinds with byte offsets
//!
//! # Behavior
//!
//! - Accessors coerce: a mismatched kind yields a zero value, never an error.
//! - Lookups of missing keys or out-of-range indices yield the shared [`NULL`].
//! - Parsing is strict: unknown tokens, bad escapes, unterminated strings,
//!   excessive nesting and trailing data abort the parse with a
//!   [`ParseError`] carrying the byte offset.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod error;
pub mod json;

// Re-export commonly used types
pub use error::{ErrorKind, ParseError, ParseResult};
pub use json::{format, parse, parse_with_limits, Kind, Limits, Number, Parser, Style, Value, NULL};
