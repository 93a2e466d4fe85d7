//! Bencodex encoding and decoding.
//!
//! Bencodex extends bencode with null, booleans and Unicode text, and fixes a
//! single canonical encoding for every value. Decoding rejects anything that is
//! not in canonical form, so equal values always have equal bytes.
//!
//! # Data Types
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Null | `n` | `n` → null |
//! | Boolean | `t` / `f` | `t` → true |
//! | Integer | `i<number>e` | `i-42e` → -42 |
//! | Byte String | `<length>:<data>` | `4:spam` → b"spam" |
//! | Text | `u<length>:<utf-8>` | `u5:hello` → "hello" |
//! | List | `l<items>e` | `lnte` → [null, true] |
//! | Dictionary | `d<key><value>...e` | `d1:ai1eu1:bne` → {b"a": 1, "b": null} |
//!
//! Integers have arbitrary size. Dictionary keys are byte strings or texts;
//! byte string keys come first, and keys of the same kind ascend by their
//! bytes.
//!
//! # Examples
//!
//! ```
//! use bencodex::codec::{decode, encode, Dictionary, Key, Value};
//!
//! let value = decode(b"d1:ai1eu1:bne").unwrap();
//! assert_eq!(value.get(b"a").and_then(Value::as_i64), Some(1));
//! assert_eq!(encode(&value).unwrap(), b"d1:ai1eu1:bne");
//!
//! let dict: Dictionary = [(Key::text("name"), Value::text("bencodex"))]
//!     .into_iter()
//!     .collect();
//! assert_eq!(encode(&Value::Dict(dict)).unwrap(), b"du4:nameu8:bencodexe");
//! ```
//!
//! # Error Handling
//!
//! Every failure is a [`BencodexError`]; [`BencodexError::kind`] groups them:
//!
//! - [`ErrorKind::Format`] - malformed integer, length, key or UTF-8
//! - [`ErrorKind::Order`] - dictionary keys out of order or duplicated
//! - [`ErrorKind::Truncated`] - input ended unexpectedly
//! - [`ErrorKind::TrailingData`] - extra data after the value
//! - [`ErrorKind::UnexpectedToken`] - a byte that starts no value
//! - [`ErrorKind::DepthLimit`] - nesting beyond [`DecoderConfig`]'s limit

mod decode;
mod dictionary;
mod encode;
mod error;
mod integer;
mod key;
mod value;

pub use decode::{decode, decode_with, DecoderConfig, DEFAULT_MAX_DEPTH};
pub use dictionary::Dictionary;
pub use encode::{encode, encode_to, encoded_len};
pub use error::{BencodexError, ErrorKind};
pub use integer::{format_integer, parse_integer};
pub use key::{compare_keys, Key, KeyKind};
pub use value::{Value, ValueKind};

#[cfg(test)]
mod tests;
