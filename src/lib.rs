//! bencodex - Canonical Bencodex serialization
//!
//! Bencodex is bencode extended with null, booleans and Unicode text, with
//! exactly one valid encoding per value. It is meant for data that is hashed
//! or signed, where two parties must produce byte-identical output.
//!
//! # Modules
//!
//! - [`codec`] - Value model, canonical encoder and strict decoder
//! - [`fingerprint`] - SHA-256 fingerprints of canonical encodings
//!
//! # Examples
//!
//! ```
//! use bencodex::{decode, encode, Fingerprint, Value};
//!
//! let value = decode(b"lu5:helloi42ee").unwrap();
//! assert_eq!(value.as_list().unwrap()[0], Value::text("hello"));
//! assert_eq!(encode(&value).unwrap(), b"lu5:helloi42ee");
//!
//! println!("fingerprint: {}", Fingerprint::of(&value).unwrap());
//! ```

pub mod codec;
pub mod fingerprint;

pub use codec::{
    decode, decode_with, encode, BencodexError, DecoderConfig, Dictionary, ErrorKind, Key, Value,
};
pub use fingerprint::Fingerprint;
