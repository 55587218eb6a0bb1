//! JSON value types.
//!
//! [`Value`] is a closed sum over the six JSON kinds. Heap payloads (strings,
//! arrays, objects) live behind [`Arc`], so cloning a value is O(1) and
//! aliases the same payload. Nothing mutates a payload after construction,
//! which keeps shared payloads safe to read from any number of owners and
//! threads. Values are built bottom-up, so the value graph can share
//! children between parents but can never contain a cycle.
//!
//! Accessors coerce: asking a value for a payload of the wrong kind returns
//! a zero value (`0`, `false`, `""`, empty array, empty object) instead of
//! failing. Use [`Value::kind`] when the distinction matters.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;
use std::sync::Arc;

use super::format::{self, Style};

/// Ordered sequence of values.
pub type Array = Vec<Value>;

/// Mapping from key to value, iterated in key byte order.
pub type Object = BTreeMap<String, Value>;

/// The shared null returned by missing-key and out-of-range lookups.
pub static NULL: Value = Value::Null;

static EMPTY_ARRAY: Array = Vec::new();
static EMPTY_OBJECT: Object = BTreeMap::new();

/// The kind tag of a [`Value`].
///
/// Kinds are totally ordered in declaration order; this is the first key
/// when comparing values of different kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    /// `null`
    Null,
    /// Integer or floating-point number
    Number,
    /// `true` / `false`
    Bool,
    /// String
    String,
    /// Array of values
    Array,
    /// Object keyed by string
    Object,
}

impl Kind {
    /// Lowercase name used in messages.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Number => "number",
            Kind::Bool => "boolean",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A JSON number, kept as the representation it was built or parsed with.
///
/// Both representations report [`Kind::Number`] and compare by their
/// floating-point value, so `Int(2) == Float(2.0)`.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// 32-bit integer
    Int(i32),
    /// 64-bit float
    Float(f64),
}

impl Number {
    /// The value as `f64`.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => f64::from(i),
            Number::Float(f) => f,
        }
    }

    /// The value as `i32`. Floats are truncated toward zero and saturate at
    /// the `i32` bounds; NaN becomes 0.
    pub fn as_i32(self) -> i32 {
        match self {
            Number::Int(i) => i,
            Number::Float(f) => f as i32,
        }
    }

    /// Returns true for the floating-point representation.
    pub fn is_float(self) -> bool {
        matches!(self, Number::Float(_))
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    // Numeric order with -0.0 == 0.0; NaN falls back to total_cmp so the
    // order stays total.
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.as_f64(), other.as_f64());
        a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
    }
}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let f = self.as_f64();
        let f = if f == 0.0 { 0.0 } else { f };
        f.to_bits().hash(state);
    }
}

/// An immutable, shared JSON value.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// JSON null literal
    #[default]
    Null,
    /// JSON number
    Number(Number),
    /// JSON boolean
    Bool(bool),
    /// JSON string
    String(Arc<String>),
    /// JSON array
    Array(Arc<Array>),
    /// JSON object
    Object(Arc<Object>),
}

impl Value {
    /// A null value. Equal to, and indistinguishable from, [`NULL`].
    pub const fn null() -> Self {
        Value::Null
    }

    /// The kind tag of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Number(_) => Kind::Number,
            Value::Bool(_) => Kind::Bool,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Returns the kind name as a string for messages.
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a number value.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true if this is an array value.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true if this is an object value.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// The numeric value, or `0.0` for non-numbers.
    pub fn number_value(&self) -> f64 {
        self.as_f64().unwrap_or(0.0)
    }

    /// The numeric value as `i32`, or `0` for non-numbers.
    pub fn int_value(&self) -> i32 {
        self.as_i32().unwrap_or(0)
    }

    /// The boolean value, or `false` for non-booleans.
    pub fn bool_value(&self) -> bool {
        self.as_bool().unwrap_or(false)
    }

    /// The string payload, or `""` for non-strings.
    pub fn string_value(&self) -> &str {
        self.as_str().unwrap_or("")
    }

    /// The array elements, or an empty slice for non-arrays.
    pub fn array_items(&self) -> &[Value] {
        self.as_array().unwrap_or(&EMPTY_ARRAY)
    }

    /// The object entries, or an empty map for non-objects.
    pub fn object_items(&self) -> &Object {
        self.as_object().unwrap_or(&EMPTY_OBJECT)
    }

    /// Returns the number if this is a Number, None otherwise.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the number as `f64` if this is a Number, None otherwise.
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(Number::as_f64)
    }

    /// Returns the number as `i32` if this is a Number, None otherwise.
    pub fn as_i32(&self) -> Option<i32> {
        self.as_number().map(Number::as_i32)
    }

    /// Returns the boolean value if this is a Bool, None otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is a String, None otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns a reference to the array if this is an Array, None otherwise.
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns a reference to the object if this is an Object, None otherwise.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Get a value from an object by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|o| o.get(key))
    }

    /// Get a value from an array by index.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|a| a.get(index))
    }

    /// Returns true if both values alias the same heap payload.
    ///
    /// Always false for null, numbers and booleans, which have no payload.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::String(a), Value::String(b)) => Arc::ptr_eq(a, b),
            (Value::Array(a), Value::Array(b)) => Arc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Render as standard JSON text.
    pub fn format(&self) -> String {
        format::format(self)
    }

    /// Render using the given output style.
    pub fn format_with(&self, style: Style) -> String {
        format::format_with(self, style)
    }

    /// Append the rendering to `out`.
    pub fn format_into(&self, style: Style, out: &mut String) {
        format::format_into(self, style, out);
    }
}

impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        self.get_index(index).unwrap_or(&NULL)
    }
}

impl Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&NULL)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::String(a), Value::String(b)) => Arc::ptr_eq(a, b) || a == b,
            (Value::Array(a), Value::Array(b)) => Arc::ptr_eq(a, b) || a == b,
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b) || a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.ptr_eq(other) {
            return Ordering::Equal;
        }
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Number(a), Value::Number(b)) => a.cmp(b),
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Array(a), Value::Array(b)) => a.cmp(b),
            (Value::Object(a), Value::Object(b)) => a.cmp(b),
            _ => self.kind().cmp(&other.kind()),
        }
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        match self {
            Value::Null => {}
            Value::Number(n) => n.hash(state),
            Value::Bool(b) => b.hash(state),
            Value::String(s) => s.hash(state),
            Value::Array(a) => a.hash(state),
            Value::Object(o) => o.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::Int(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(Arc::new(value.to_owned()))
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(Arc::new(value.clone()))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(Arc::new(value))
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Value::Array(Arc::new(value))
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(Arc::new(value))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::from(iter.into_iter().collect::<Array>())
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Value::from(iter.into_iter().collect::<Object>())
    }
}
