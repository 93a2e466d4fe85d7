use std::collections::btree_map;
use std::io::Write;
use std::slice;

use super::error::BencodexError;
use super::integer::format_integer;
use super::key::Key;
use super::value::Value;

/// Encodes a Bencodex value to its canonical byte form.
///
/// - Null: `n`
/// - Booleans: `t` / `f`
/// - Integers: `i<number>e`
/// - Byte strings: `<length>:<data>`
/// - Texts: `u<utf-8 length>:<utf-8 data>`
/// - Lists: `l<items>e`
/// - Dictionaries: `d<key><value>...e`, byte string keys first, then text keys
///
/// Dictionaries are already in canonical order, so nothing is sorted here and
/// the same value always produces the same bytes.
///
/// # Examples
///
/// ```
/// use bencodex::codec::{encode, Dictionary, Key, Value};
///
/// let mut dict = Dictionary::new();
/// dict.insert(Key::text("b"), Value::Null);
/// dict.insert(Key::bytes(b"a".as_slice()), Value::from(1i64));
///
/// assert_eq!(encode(&Value::Dict(dict)).unwrap(), b"d1:ai1eu1:bne");
/// assert_eq!(encode(&Value::empty_text()).unwrap(), b"u0:");
/// ```
pub fn encode(value: &Value) -> Result<Vec<u8>, BencodexError> {
    let mut buf = Vec::new();
    encode_value(value, &mut buf);
    tracing::trace!(len = buf.len(), "encoded bencodex value");
    Ok(buf)
}

/// Encodes a value and writes it to `writer`.
///
/// The whole encoding is produced before anything is written, so an error
/// never leaves a partial value behind from the encoder itself.
///
/// # Errors
///
/// Returns [`BencodexError::Io`] if the writer fails.
pub fn encode_to<W: Write>(value: &Value, writer: &mut W) -> Result<(), BencodexError> {
    let buf = encode(value)?;
    writer.write_all(&buf)?;
    Ok(())
}

/// Returns the exact length of the canonical encoding of `value`.
///
/// No output buffer is built, but each integer is still formatted once to
/// count its digits.
pub fn encoded_len(value: &Value) -> usize {
    let mut len = 0;
    let mut pending = vec![value];

    while let Some(value) = pending.pop() {
        len += match value {
            Value::Null | Value::Boolean(_) => 1,
            Value::Integer(i) => format_integer(i).len() + 2,
            Value::Bytes(b) => prefixed_len(b.len()),
            Value::Text(s) => 1 + prefixed_len(s.len()),
            Value::List(l) => {
                pending.extend(l);
                2
            }
            Value::Dict(d) => {
                pending.extend(d.values());
                2 + d.keys().map(key_len).sum::<usize>()
            }
        };
    }
    len
}

/// A container whose children are still being written.
enum Frame<'a> {
    List(slice::Iter<'a, Value>),
    Dict(btree_map::Iter<'a, Key, Value>),
}

/// Writes `value` depth-first, keeping open containers on a heap stack so
/// arbitrarily deep values cannot exhaust the call stack.
fn encode_value(value: &Value, buf: &mut Vec<u8>) {
    let mut stack: Vec<Frame<'_>> = Vec::new();
    let mut next = Some(value);

    loop {
        if let Some(value) = next.take() {
            match value {
                Value::Null => buf.push(b'n'),
                Value::Boolean(true) => buf.push(b't'),
                Value::Boolean(false) => buf.push(b'f'),
                Value::Integer(i) => {
                    buf.push(b'i');
                    buf.extend_from_slice(format_integer(i).as_bytes());
                    buf.push(b'e');
                }
                Value::Bytes(b) => write_prefixed(b, buf),
                Value::Text(s) => {
                    buf.push(b'u');
                    write_prefixed(s.as_bytes(), buf);
                }
                Value::List(l) => {
                    buf.push(b'l');
                    stack.push(Frame::List(l.iter()));
                }
                Value::Dict(d) => {
                    buf.push(b'd');
                    stack.push(Frame::Dict(d.iter()));
                }
            }
        }

        let Some(frame) = stack.last_mut() else {
            return;
        };
        next = match frame {
            Frame::List(items) => items.next(),
            Frame::Dict(entries) => entries.next().map(|(key, val)| {
                encode_key(key, buf);
                val
            }),
        };
        if next.is_none() {
            stack.pop();
            buf.push(b'e');
        }
    }
}

fn encode_key(key: &Key, buf: &mut Vec<u8>) {
    if let Key::Text(_) = key {
        buf.push(b'u');
    }
    write_prefixed(key.as_bytes(), buf);
}

fn write_prefixed(payload: &[u8], buf: &mut Vec<u8>) {
    buf.extend_from_slice(payload.len().to_string().as_bytes());
    buf.push(b':');
    buf.extend_from_slice(payload);
}

fn key_len(key: &Key) -> usize {
    let tag = match key {
        Key::Bytes(_) => 0,
        Key::Text(_) => 1,
    };
    tag + prefixed_len(key.as_bytes().len())
}

fn prefixed_len(len: usize) -> usize {
    decimal_digits(len) + 1 + len
}

fn decimal_digits(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}
