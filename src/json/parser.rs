//! Recursive descent JSON parser.
//!
//! `parse_value(depth)` dispatches on one peeked byte to the leaf
//! productions of [`Cursor`] or to the object/array productions, which
//! recurse at `depth + 1`. Any failure aborts the whole parse; no partial
//! value is ever returned.

use std::str::FromStr;

use super::cursor::Cursor;
use super::limits::Limits;
use super::types::{Array, Object, Value};
use crate::error::{ErrorKind, ParseError, ParseResult};

/// JSON parser over a borrowed text buffer.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    input_len: usize,
    limits: Limits,
}

impl<'a> Parser<'a> {
    /// Create a parser for `input` with [`Limits::strict`].
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
            input_len: input.len(),
            limits: Limits::default(),
        }
    }

    /// Replace the limits used by [`parse`](Self::parse).
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Get the current byte position of the cursor.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Parse one top-level value.
    ///
    /// Whitespace after the value is skipped; anything else left over is
    /// `TrailingData` unless the limits allow it, in which case the cursor
    /// stays on the first trailing byte.
    pub fn parse(&mut self) -> ParseResult<Value> {
        let result = self.parse_document();
        match &result {
            Ok(value) => tracing::trace!(
                bytes = self.input_len,
                kind = %value.kind(),
                "parsed JSON document"
            ),
            Err(err) => tracing::debug!(
                kind = err.kind().name(),
                offset = err.offset(),
                "JSON parse failed"
            ),
        }
        result
    }

    fn parse_document(&mut self) -> ParseResult<Value> {
        if self.input_len > self.limits.max_input_size {
            return Err(ParseError::new(ErrorKind::InputTooLarge, 0));
        }

        let value = self.parse_value(0)?;

        self.cursor.skip_whitespace();
        if !self.cursor.is_at_end() && !self.limits.allow_trailing_data {
            return Err(ParseError::new(
                ErrorKind::TrailingData,
                self.cursor.position(),
            ));
        }

        Ok(value)
    }

    /// Parse a single value nested inside `depth` containers.
    fn parse_value(&mut self, depth: usize) -> ParseResult<Value> {
        self.cursor.skip_whitespace();

        match self.cursor.peek() {
            Some(b'-' | b'0'..=b'9') => Ok(Value::Number(self.cursor.parse_number()?)),
            Some(b't') => {
                self.cursor.expect_literal(b"true")?;
                Ok(Value::Bool(true))
            }
            Some(b'f') => {
                self.cursor.expect_literal(b"false")?;
                Ok(Value::Bool(false))
            }
            Some(b'n') => {
                self.cursor.expect_literal(b"null")?;
                Ok(Value::Null)
            }
            Some(b'"') => {
                self.cursor.bump();
                Ok(Value::from(self.cursor.parse_string_literal()?))
            }
            Some(b'{') => self.parse_object(depth),
            Some(b'[') => self.parse_array(depth),
            _ => Err(self.cursor.unexpected()),
        }
    }

    /// Check the depth guard before opening a container at the cursor.
    ///
    /// Returns the depth of the container's children.
    fn enter(&self, depth: usize) -> ParseResult<usize> {
        let level = depth + 1;
        if level > self.limits.max_nesting_depth {
            return Err(ParseError::new(
                ErrorKind::DepthExceeded,
                self.cursor.position(),
            ));
        }
        Ok(level)
    }

    /// Parse a JSON object.
    fn parse_object(&mut self, depth: usize) -> ParseResult<Value> {
        let level = self.enter(depth)?;
        self.cursor.expect_byte(b'{')?;

        let mut map = Object::new();

        // Empty object
        self.cursor.skip_whitespace();
        if self.cursor.peek() == Some(b'}') {
            self.cursor.bump();
            return Ok(Value::from(map));
        }

        loop {
            // Expect string key
            self.cursor.skip_whitespace();
            self.cursor.expect_byte(b'"')?;
            let key = self.cursor.parse_string_literal()?;

            // Expect colon
            self.cursor.skip_whitespace();
            self.cursor.expect_byte(b':')?;

            // Later duplicates overwrite earlier ones
            let value = self.parse_value(level)?;
            map.insert(key, value);

            // Expect comma or closing brace
            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                Some(b',') => {
                    self.cursor.bump();
                }
                Some(b'}') => {
                    self.cursor.bump();
                    break;
                }
                _ => return Err(self.cursor.unexpected()),
            }
        }

        Ok(Value::from(map))
    }

    /// Parse a JSON array.
    fn parse_array(&mut self, depth: usize) -> ParseResult<Value> {
        let level = self.enter(depth)?;
        self.cursor.expect_byte(b'[')?;

        let mut arr = Array::new();

        // Empty array
        self.cursor.skip_whitespace();
        if self.cursor.peek() == Some(b']') {
            self.cursor.bump();
            return Ok(Value::from(arr));
        }

        loop {
            arr.push(self.parse_value(level)?);

            // Expect comma or closing bracket
            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                Some(b',') => {
                    self.cursor.bump();
                }
                Some(b']') => {
                    self.cursor.bump();
                    break;
                }
                _ => return Err(self.cursor.unexpected()),
            }
        }

        Ok(Value::from(arr))
    }
}

/// Parse a JSON string into a Value with [`Limits::strict`].
pub fn parse(input: &str) -> ParseResult<Value> {
    parse_with_limits(input, Limits::default())
}

/// Parse a JSON string into a Value with custom limits.
pub fn parse_with_limits(input: &str, limits: Limits) -> ParseResult<Value> {
    Parser::new(input).with_limits(limits).parse()
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Value> {
        parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::types::{Kind, Number};

    fn parse_lenient(input: &str) -> ParseResult<Value> {
        parse_with_limits(input, Limits::lenient())
    }

    fn nested(open: char, close: char, depth: usize) -> String {
        let mut s = String::new();
        s.extend(std::iter::repeat(open).take(depth));
        s.extend(std::iter::repeat(close).take(depth));
        s
    }

    #[test]
    fn test_parse_null() {
        assert_eq!(parse("null").unwrap(), Value::Null);
    }

    #[test]
    fn test_parse_booleans() {
        assert_eq!(parse("true").unwrap(), Value::Bool(true));
        assert_eq!(parse("false").unwrap(), Value::Bool(false));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse("42").unwrap(), Value::from(42));
        assert_eq!(parse("-123").unwrap(), Value::from(-123));
        assert_eq!(parse("102").unwrap().as_number(), Some(Number::Int(102)));
        assert_eq!(parse("0.5").unwrap(), Value::from(0.5));
    }

    #[test]
    fn test_parse_string() {
        assert_eq!(parse(r#""hello""#).unwrap(), Value::from("hello"));
    }

    #[test]
    fn test_parse_array() {
        let result = parse("[1, 2, 3]").unwrap();
        assert_eq!(
            result,
            Value::from(vec![Value::from(1), Value::from(2), Value::from(3)])
        );
    }

    #[test]
    fn test_parse_object() {
        let result = parse(r#"{"a": 1, "b": 2}"#).unwrap();
        let mut expected = Object::new();
        expected.insert("a".to_string(), Value::from(1));
        expected.insert("b".to_string(), Value::from(2));
        assert_eq!(result, Value::from(expected));
    }

    #[test]
    fn test_empty_containers_with_whitespace() {
        assert_eq!(parse("{ \n}").unwrap(), Value::from(Object::new()));
        assert_eq!(parse("[\t]").unwrap(), Value::from(Array::new()));
    }

    #[test]
    fn test_duplicate_key_overwrites() {
        let result = parse(r#"{"a": 1, "a": 2}"#).unwrap();
        assert_eq!(result.object_items().len(), 1);
        assert_eq!(result["a"], Value::from(2));
    }

    #[test]
    fn test_unknown_token_rejected() {
        let err = parse("?").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedToken);
        assert_eq!(err.offset(), 0);
    }

    #[test]
    fn test_empty_input() {
        let err = parse("  ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEndOfInput);
        assert_eq!(err.offset(), 2);
    }

    #[test]
    fn test_bad_literal() {
        let err = parse("tru").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEndOfInput);
        let err = parse("nil").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedToken);
        assert_eq!(err.offset(), 1);
    }

    #[test]
    fn test_missing_colon() {
        let err = parse(r#"{"a" 1}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedToken);
        assert_eq!(err.offset(), 5);
    }

    #[test]
    fn test_missing_value() {
        let err = parse(r#"{"a":}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedToken);
        assert_eq!(err.offset(), 5);
    }

    #[test]
    fn test_non_string_key() {
        let err = parse("{1:2}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedToken);
        assert_eq!(err.offset(), 1);
    }

    #[test]
    fn test_trailing_comma_rejected() {
        let err = parse("[1, 2,]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedToken);
        assert_eq!(err.offset(), 6);

        let err = parse(r#"{"a":1,}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedToken);
        assert_eq!(err.offset(), 7);
    }

    #[test]
    fn test_missing_separator() {
        let err = parse("[1 2]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedToken);
        assert_eq!(err.offset(), 3);
    }

    #[test]
    fn test_unclosed_containers() {
        assert_eq!(parse("[1,").unwrap_err().kind(), ErrorKind::UnexpectedEndOfInput);
        assert_eq!(parse("[1").unwrap_err().kind(), ErrorKind::UnexpectedEndOfInput);
        assert_eq!(parse("{").unwrap_err().kind(), ErrorKind::UnexpectedEndOfInput);
        assert_eq!(
            parse(r#"{"a":1"#).unwrap_err().kind(),
            ErrorKind::UnexpectedEndOfInput
        );
    }

    #[test]
    fn test_trailing_content_rejected() {
        let err = parse("null extra").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TrailingData);
        assert_eq!(err.offset(), 5);
    }

    #[test]
    fn test_trailing_whitespace_accepted() {
        assert!(parse("[1]\r\n  ").is_ok());
    }

    #[test]
    fn test_trailing_content_allowed_when_lenient() {
        let mut parser = Parser::new("{} rest").with_limits(Limits::lenient());
        assert_eq!(parser.parse().unwrap(), Value::from(Object::new()));
        assert_eq!(parser.position(), 3);
    }

    #[test]
    fn test_nesting_depth_limit() {
        let limits = Limits::strict().with_max_nesting_depth(2);

        // Depth 2 is allowed
        assert!(parse_with_limits("[[1]]", limits).is_ok());

        // Depth 3 exceeds limit
        let err = parse_with_limits("[[[1]]]", limits).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DepthExceeded);
        assert_eq!(err.offset(), 2);

        let err = parse_with_limits(r#"{"a":{"b":{}}}"#, limits).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DepthExceeded);
        assert_eq!(err.offset(), 10);
    }

    #[test]
    fn test_default_depth_limit() {
        assert!(parse(&nested('[', ']', 200)).is_ok());
        let err = parse(&nested('[', ']', 201)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DepthExceeded);
        assert_eq!(err.offset(), 200);
    }

    #[test]
    fn test_input_too_large() {
        let mut limits = Limits::strict();
        limits.max_input_size = 4;
        let err = parse_with_limits("[1, 2]", limits).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputTooLarge);
        assert_eq!(err.offset(), 0);
    }

    #[test]
    fn test_carriage_return_is_whitespace() {
        let result = parse_lenient("{\r\n\"a\"\r\n:\r\n1\r\n}").unwrap();
        assert_eq!(result["a"], Value::from(1));
    }

    #[test]
    fn test_from_str() {
        let value: Value = "[true]".parse().unwrap();
        assert_eq!(value[0], Value::Bool(true));
        assert!("[".parse::<Value>().is_err());
    }

    #[test]
    fn test_nested_structure() {
        let result = parse(r#"{"arr": [1, {"nested": true}], "num": 42}"#).unwrap();
        assert!(result.is_object());
        assert_eq!(result["arr"].kind(), Kind::Array);
        assert!(result["arr"][1]["nested"].bool_value());
        assert_eq!(result["num"].int_value(), 42);
    }
}
