use bytes::Bytes;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use std::fmt;

use super::dictionary::Dictionary;
use super::error::BencodexError;
use super::key::Key;

/// A Bencodex value.
///
/// Bencodex extends bencode with null, booleans and Unicode text. Empty byte
/// strings, texts, lists and dictionaries are distinct values and never
/// collapse into [`Value::Null`].
///
/// # Examples
///
/// ```
/// use bencodex::codec::Value;
///
/// let int = Value::from(42i64);
/// let text = Value::text("hello");
/// let list = Value::List(vec![Value::Null, Value::Boolean(true)]);
///
/// assert_eq!(int.as_i64(), Some(42));
/// assert_eq!(text.as_text(), Some("hello"));
/// assert_eq!(list.as_list().map(|l| l.len()), Some(2));
/// assert_ne!(Value::empty_text(), Value::empty_bytes());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// The null value.
    Null,
    /// A boolean.
    Boolean(bool),
    /// A signed integer of arbitrary size.
    Integer(BigInt),
    /// An opaque byte string.
    Bytes(Bytes),
    /// A Unicode text.
    Text(String),
    /// An ordered list of values.
    List(Vec<Value>),
    /// A dictionary in canonical key order.
    Dict(Dictionary),
}

/// The variant of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Bytes,
    Text,
    List,
    Dict,
}

impl ValueKind {
    /// A short lowercase name, used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Bytes => "byte string",
            ValueKind::Text => "text",
            ValueKind::List => "list",
            ValueKind::Dict => "dictionary",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// Creates a byte string value.
    pub fn bytes(b: impl Into<Bytes>) -> Self {
        Value::Bytes(b.into())
    }

    /// Creates a text value.
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    /// Creates an integer value.
    pub fn integer(i: impl Into<BigInt>) -> Self {
        Value::Integer(i.into())
    }

    /// The empty byte string, encoded as `0:`.
    pub fn empty_bytes() -> Self {
        Value::Bytes(Bytes::new())
    }

    /// The empty text, encoded as `u0:`.
    pub fn empty_text() -> Self {
        Value::Text(String::new())
    }

    /// The empty list, encoded as `le`.
    pub fn empty_list() -> Self {
        Value::List(Vec::new())
    }

    /// The empty dictionary, encoded as `de`.
    pub fn empty_dict() -> Self {
        Value::Dict(Dictionary::new())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Integer(_) => ValueKind::Integer,
            Value::Bytes(_) => ValueKind::Bytes,
            Value::Text(_) => ValueKind::Text,
            Value::List(_) => ValueKind::List,
            Value::Dict(_) => ValueKind::Dict,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value as an integer, if it is one.
    pub fn as_integer(&self) -> Option<&BigInt> {
        match self {
            Value::Integer(i) => Some(i),
            _ => None,
        }
    }

    /// Returns the value as an `i64`, if it is an integer that fits.
    ///
    /// # Examples
    ///
    /// ```
    /// use bencodex::codec::Value;
    /// use num_bigint::BigInt;
    ///
    /// assert_eq!(Value::from(-3i64).as_i64(), Some(-3));
    /// assert_eq!(Value::integer(BigInt::from(u64::MAX)).as_i64(), None);
    /// ```
    pub fn as_i64(&self) -> Option<i64> {
        self.as_integer()?.to_i64()
    }

    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the value as text, if it is a text.
    ///
    /// Byte strings are not reinterpreted, even when they hold valid UTF-8.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dictionary> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Consumes the value and returns the list, if it is one.
    pub fn into_list(self) -> Option<Vec<Value>> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Consumes the value and returns the dictionary, if it is one.
    pub fn into_dict(self) -> Option<Dictionary> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Looks up a key in this value if it is a dictionary.
    ///
    /// `&str` keys look up text keys; byte slices look up byte string keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use bencodex::decode;
    ///
    /// let value = decode(b"d1:ai1eu1:bne").unwrap();
    /// assert_eq!(value.get(b"a").and_then(|v| v.as_i64()), Some(1));
    /// assert!(value.get("b").unwrap().is_null());
    /// assert_eq!(value.get("a"), None);
    /// ```
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.as_dict()?.get(&key.into())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Bytes(b) => write!(f, "{:?}", b),
            Value::Text(s) => write!(f, "{:?}", s),
            Value::List(l) => {
                f.write_str("[")?;
                for (i, item) in l.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Dict(d) => {
                f.write_str("{")?;
                for (i, (key, val)) in d.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, val)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i.into())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i.into())
    }
}

impl From<u64> for Value {
    fn from(i: u64) -> Self {
        Value::Integer(i.into())
    }
}

impl From<BigInt> for Value {
    fn from(i: BigInt) -> Self {
        Value::Integer(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Bytes> for Value {
    fn from(b: Bytes) -> Self {
        Value::Bytes(b)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Bytes(Bytes::copy_from_slice(b))
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(l: Vec<Value>) -> Self {
        Value::List(l)
    }
}

impl From<Dictionary> for Value {
    fn from(d: Dictionary) -> Self {
        Value::Dict(d)
    }
}

impl From<Key> for Value {
    fn from(k: Key) -> Self {
        match k {
            Key::Bytes(b) => Value::Bytes(b),
            Key::Text(s) => Value::Text(s),
        }
    }
}

impl TryFrom<&Value> for i64 {
    type Error = BencodexError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_i64().ok_or(BencodexError::Conversion {
            expected: "i64",
            found: value.kind().name(),
        })
    }
}

impl TryFrom<&Value> for bool {
    type Error = BencodexError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_bool().ok_or(BencodexError::Conversion {
            expected: "bool",
            found: value.kind().name(),
        })
    }
}
