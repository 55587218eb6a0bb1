//! Rendering of [`Value`] trees as text.
//!
//! Two output styles are supported:
//!
//! - [`Style::Standard`]: minified JSON that [`parse`](super::parse) reads
//!   back to an equal value.
//! - [`Style::Classic`]: the historical layout `{key:value, key:[1, 2]}`
//!   with unquoted object keys, `", "` separators and six-digit floats. It is
//!   kept for output compatibility and is not valid JSON when objects are
//!   present.
//!
//! Both styles use the same minimal string escaping: `"`, `\`, backspace,
//! form feed, newline, carriage return and tab are escaped, every other
//! character (other control characters included) is written as-is.

use std::fmt::Write as _;

use super::types::{Number, Object, Value};

/// Output layout for [`format_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Minified, re-parsable JSON.
    #[default]
    Standard,
    /// Unquoted keys and `", "` separators.
    Classic,
}

/// Render a value as standard JSON.
pub fn format(value: &Value) -> String {
    format_with(value, Style::Standard)
}

/// Render a value using `style`.
pub fn format_with(value: &Value, style: Style) -> String {
    let mut output = String::new();
    format_into(value, style, &mut output);
    output
}

/// Append the rendering of `value` to `output`.
pub fn format_into(value: &Value, style: Style, output: &mut String) {
    match value {
        Value::Null => output.push_str("null"),
        Value::Bool(true) => output.push_str("true"),
        Value::Bool(false) => output.push_str("false"),
        Value::Number(n) => write_number(*n, style, output),
        Value::String(s) => write_string(s, output),
        Value::Array(items) => write_array(items, style, output),
        Value::Object(entries) => write_object(entries, style, output),
    }
}

fn write_number(number: Number, style: Style, output: &mut String) {
    // Writing into a String cannot fail.
    let _ = match (number, style) {
        (Number::Int(i), _) => write!(output, "{}", i),
        (Number::Float(f), Style::Classic) => write!(output, "{:.6}", f),
        (Number::Float(f), Style::Standard) if !f.is_finite() => write!(output, "null"),
        (Number::Float(f), Style::Standard) => {
            let start = output.len();
            let res = write!(output, "{}", f);
            // Keep integral floats distinguishable from integers.
            if !output[start..].contains('.') {
                output.push_str(".0");
            }
            res
        }
    };
}

/// Write a string with the minimal escape set.
fn write_string(s: &str, output: &mut String) {
    output.push('"');
    for ch in s.chars() {
        match ch {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\x08' => output.push_str("\\b"),
            '\x0C' => output.push_str("\\f"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c => output.push(c),
        }
    }
    output.push('"');
}

fn separator(style: Style) -> &'static str {
    match style {
        Style::Standard => ",",
        Style::Classic => ", ",
    }
}

fn write_array(items: &[Value], style: Style, output: &mut String) {
    output.push('[');
    for (i, value) in items.iter().enumerate() {
        if i > 0 {
            output.push_str(separator(style));
        }
        format_into(value, style, output);
    }
    output.push(']');
}

fn write_object(entries: &Object, style: Style, output: &mut String) {
    output.push('{');
    for (i, (key, value)) in entries.iter().enumerate() {
        if i > 0 {
            output.push_str(separator(style));
        }
        match style {
            Style::Standard => write_string(key, output),
            Style::Classic => output.push_str(key),
        }
        output.push(':');
        format_into(value, style, output);
    }
    output.push('}');
}
