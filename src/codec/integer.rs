//! Canonical decimal integers.
//!
//! Both integer literals (`i...e`) and length prefixes (`<len>:`) share one
//! canonical form: no leading zeros except a lone `0`, no `+`, no `-0`.
//! Length prefixes additionally never carry a sign.

use num_bigint::BigInt;

use super::error::BencodexError;

/// Parses a canonical signed decimal integer.
///
/// # Errors
///
/// Returns [`BencodexError::InvalidInteger`] for empty input, a leading `+`,
/// zero padding, `-0`, or any non-digit character.
///
/// # Examples
///
/// ```
/// use bencodex::codec::parse_integer;
/// use num_bigint::BigInt;
///
/// assert_eq!(parse_integer(b"-5").unwrap(), BigInt::from(-5));
/// assert!(parse_integer(b"01").is_err());
/// assert!(parse_integer(b"-0").is_err());
/// ```
pub fn parse_integer(digits: &[u8]) -> Result<BigInt, BencodexError> {
    parse_integer_at(digits, 0)
}

/// Formats an integer in its unique canonical decimal form.
///
/// The form is derived from the value every time, so it does not matter how the
/// integer was constructed.
pub fn format_integer(value: &BigInt) -> String {
    value.to_str_radix(10)
}

pub(crate) fn parse_integer_at(digits: &[u8], offset: usize) -> Result<BigInt, BencodexError> {
    if let Some(reason) = non_canonical(digits, true) {
        return Err(BencodexError::InvalidInteger { offset, reason });
    }

    BigInt::parse_bytes(digits, 10).ok_or(BencodexError::InvalidInteger {
        offset,
        reason: "not a decimal number",
    })
}

/// Parses an unsigned canonical length prefix.
///
/// Lengths too large for `usize` saturate; no input can satisfy them, so the
/// caller reports them as truncated.
pub(crate) fn parse_length_at(digits: &[u8], offset: usize) -> Result<usize, BencodexError> {
    if let Some(reason) = non_canonical(digits, false) {
        return Err(BencodexError::InvalidLength { offset, reason });
    }

    Ok(digits.iter().fold(0usize, |acc, d| {
        acc.saturating_mul(10).saturating_add(usize::from(d - b'0'))
    }))
}

fn non_canonical(digits: &[u8], signed: bool) -> Option<&'static str> {
    let (negative, magnitude) = match digits.split_first() {
        Some((b'-', rest)) if signed => (true, rest),
        _ => (false, digits),
    };

    if magnitude.is_empty() {
        return Some("no digits");
    }
    if !magnitude.iter().all(u8::is_ascii_digit) {
        return Some("non-digit character");
    }
    if magnitude[0] == b'0' && magnitude.len() > 1 {
        return Some("leading zero");
    }
    if negative && magnitude == b"0" {
        return Some("negative zero");
    }
    None
}
