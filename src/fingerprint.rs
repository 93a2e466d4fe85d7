//! Content fingerprints over canonical encodings.

use sha2::{Digest, Sha256};
use std::fmt;

use crate::codec::{encode, BencodexError, Value};

/// SHA-256 digest of a value's canonical encoding.
///
/// Because the encoding is canonical, two values have the same fingerprint
/// exactly when they are equal.
///
/// # Examples
///
/// ```
/// use bencodex::{decode, Fingerprint};
///
/// let a = decode(b"d1:ai1eu1:bne").unwrap();
/// let b = decode(b"d1:ai1eu1:bne").unwrap();
/// assert_eq!(Fingerprint::of(&a).unwrap(), Fingerprint::of(&b).unwrap());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Computes the fingerprint of `value`.
    pub fn of(value: &Value) -> Result<Self, BencodexError> {
        Ok(Self::of_encoded(&encode(value)?))
    }

    /// Computes the fingerprint of bytes that are already canonically encoded.
    pub fn of_encoded(encoded: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(encoded);
        Fingerprint(hasher.finalize().into())
    }

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Fingerprint(bytes)
    }

    /// Parses a 64-digit hex string, in either case.
    pub fn from_hex(s: &str) -> Option<Self> {
        let digits = s.as_bytes();
        if digits.len() != 64 {
            return None;
        }
        let mut out = [0u8; 32];
        for (byte, pair) in out.iter_mut().zip(digits.chunks_exact(2)) {
            *byte = (nibble(pair[0])? << 4) | nibble(pair[1])?;
        }
        Some(Fingerprint(out))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex form of the digest.
    pub fn to_hex(&self) -> String {
        let mut hex = String::with_capacity(64);
        for byte in self.0 {
            hex.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
            hex.push(char::from(HEX_DIGITS[usize::from(byte & 0x0f)]));
        }
        hex
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", self.to_hex())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

fn nibble(digit: u8) -> Option<u8> {
    char::from(digit).to_digit(16).map(|d| d as u8)
}
