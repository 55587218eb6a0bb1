//! JSON parsing and formatting.
//!
//! # Architecture
//!
//! The JSON subsystem is organized into focused modules:
//!
//! - [`types`] - Immutable, shared value model
//! - [`limits`] - Depth guard and strictness options
//! - `cursor` - Byte cursor with the string/number/literal productions
//! - [`parser`] - Recursive descent parser
//! - [`format`] - Text rendering in standard or classic layout
//!
//! # Example
//!
//! ```
//! use rcjson::json::{parse, Style};
//!
//! let value = parse(r#"{"a":1,"b":[1,2,3]}"#).unwrap();
//! assert_eq!(value["b"][2].int_value(), 3);
//! assert!(value["missing"].is_null());
//!
//! assert_eq!(value.format(), r#"{"a":1,"b":[1,2,3]}"#);
//! assert_eq!(value.format_with(Style::Classic), "{a:1, b:[1, 2, 3]}");
//! ```

mod cursor;
pub mod format;
pub mod limits;
pub mod parser;
mod ser;
pub mod types;

// Re-export commonly used items
pub use format::{format, format_with, Style};
pub use limits::Limits;
pub use parser::{parse, parse_with_limits, Parser};
pub use types::{Array, Kind, Number, Object, Value, NULL};
