use bytes::Bytes;
use std::cmp::Ordering;
use std::fmt;

use super::error::BencodexError;
use super::value::Value;

/// The kind of a dictionary key. Byte strings sort before text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyKind {
    /// A byte string key.
    Bytes,
    /// A Unicode text key.
    Text,
}

/// A dictionary key: either a byte string or a text.
///
/// The `Ord` implementation is the canonical key order used both to validate
/// decoded dictionaries and to iterate dictionaries during encoding; see
/// [`compare_keys`].
///
/// # Examples
///
/// ```
/// use bencodex::codec::Key;
///
/// assert!(Key::bytes(b"zzz".as_slice()) < Key::text("a"));
/// assert!(Key::text("a") < Key::text("ab"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A byte string key.
    Bytes(Bytes),
    /// A text key.
    Text(String),
}

impl Key {
    /// Creates a byte string key.
    pub fn bytes(b: impl Into<Bytes>) -> Self {
        Key::Bytes(b.into())
    }

    /// Creates a text key.
    pub fn text(s: impl Into<String>) -> Self {
        Key::Text(s.into())
    }

    /// Returns whether this is a byte string or text key.
    pub fn kind(&self) -> KeyKind {
        match self {
            Key::Bytes(_) => KeyKind::Bytes,
            Key::Text(_) => KeyKind::Text,
        }
    }

    /// Returns the underlying bytes: raw for byte strings, UTF-8 for text.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Key::Bytes(b) => b,
            Key::Text(s) => s.as_bytes(),
        }
    }

    /// Returns the text if this is a text key.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Key::Text(s) => Some(s),
            Key::Bytes(_) => None,
        }
    }
}

/// Compares two keys in canonical order.
///
/// Keys of different kinds order byte strings first. Keys of the same kind
/// compare their bytes lexicographically as unsigned values, with a proper
/// prefix sorting first. Text keys compare by UTF-8 bytes, which matches
/// comparing by Unicode scalar values.
pub fn compare_keys(a: &Key, b: &Key) -> Ordering {
    a.kind()
        .cmp(&b.kind())
        .then_with(|| a.as_bytes().cmp(b.as_bytes()))
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_keys(self, other)
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Bytes(b) => write!(f, "{:?}", b),
            Key::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Text(s.to_owned())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Text(s)
    }
}

impl From<&[u8]> for Key {
    fn from(b: &[u8]) -> Self {
        Key::Bytes(Bytes::copy_from_slice(b))
    }
}

impl<const N: usize> From<&[u8; N]> for Key {
    fn from(b: &[u8; N]) -> Self {
        Key::Bytes(Bytes::copy_from_slice(b))
    }
}

impl From<Vec<u8>> for Key {
    fn from(b: Vec<u8>) -> Self {
        Key::Bytes(Bytes::from(b))
    }
}

impl From<Bytes> for Key {
    fn from(b: Bytes) -> Self {
        Key::Bytes(b)
    }
}

impl TryFrom<Value> for Key {
    type Error = BencodexError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bytes(b) => Ok(Key::Bytes(b)),
            Value::Text(s) => Ok(Key::Text(s)),
            other => Err(BencodexError::Conversion {
                expected: "dictionary key",
                found: other.kind().name(),
            }),
        }
    }
}
