use bytes::Bytes;

use super::dictionary::Dictionary;
use super::error::BencodexError;
use super::integer::{parse_integer_at, parse_length_at};
use super::key::Key;
use super::value::{Value, ValueKind};

/// Default ceiling on container nesting.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Decoder settings.
///
/// # Examples
///
/// ```
/// use bencodex::codec::{decode_with, DecoderConfig, ErrorKind};
///
/// let config = DecoderConfig::default().with_max_depth(2);
/// assert!(decode_with(b"llee", &config).is_ok());
/// let err = decode_with(b"llleee", &config).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::DepthLimit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    max_depth: usize,
}

impl DecoderConfig {
    /// Sets the maximum number of nested lists and dictionaries.
    ///
    /// Decoding itself never recurses, but deeply nested trees are expensive
    /// to drop, compare and encode, so the limit is enforced up front.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Decodes exactly one canonical Bencodex value.
///
/// # Errors
///
/// Fails on any malformed or non-canonical input, including bytes left over
/// after the value. No partial value is returned.
///
/// # Examples
///
/// ```
/// use bencodex::codec::{decode, ErrorKind, Value};
///
/// assert_eq!(decode(b"u0:").unwrap(), Value::empty_text());
/// assert_eq!(decode(b"i-5e").unwrap(), Value::from(-5i64));
/// assert_eq!(decode(b"i01e").unwrap_err().kind(), ErrorKind::Format);
/// assert_eq!(decode(b"i1ei2e").unwrap_err().kind(), ErrorKind::TrailingData);
/// ```
pub fn decode(data: &[u8]) -> Result<Value, BencodexError> {
    decode_with(data, &DecoderConfig::default())
}

/// Decodes exactly one canonical Bencodex value using `config`.
pub fn decode_with(data: &[u8], config: &DecoderConfig) -> Result<Value, BencodexError> {
    tracing::trace!(len = data.len(), "decoding bencodex value");

    let mut decoder = Decoder {
        data,
        pos: 0,
        max_depth: config.max_depth,
    };
    let result = decoder.decode_root();

    if let Err(e) = &result {
        tracing::debug!(offset = ?e.offset(), error = %e, "rejected bencodex input");
    }
    result
}

/// A container still waiting for its terminator.
enum Frame {
    List(Vec<Value>),
    Dict {
        dict: Dictionary,
        /// A decoded key waiting for its value.
        key: Option<Key>,
    },
}

impl Frame {
    fn expects_key(&self) -> bool {
        matches!(self, Frame::Dict { key: None, .. })
    }
}

struct Decoder<'a> {
    data: &'a [u8],
    pos: usize,
    max_depth: usize,
}

impl<'a> Decoder<'a> {
    fn decode_root(&mut self) -> Result<Value, BencodexError> {
        let value = self.decode_value()?;

        if self.pos != self.data.len() {
            return Err(BencodexError::TrailingData { offset: self.pos });
        }

        Ok(value)
    }

    /// Decodes one value, keeping open containers on a heap stack instead of
    /// the call stack.
    fn decode_value(&mut self) -> Result<Value, BencodexError> {
        let mut stack: Vec<Frame> = Vec::new();

        loop {
            let start = self.pos;
            let tag = self.peek()?;

            if stack.last().is_some_and(Frame::expects_key) && tag != b'e' {
                match tag_kind(tag) {
                    Some(ValueKind::Bytes | ValueKind::Text) => {}
                    Some(kind) => {
                        return Err(BencodexError::InvalidKey {
                            offset: start,
                            found: kind.name(),
                        })
                    }
                    None => return Err(BencodexError::UnexpectedByte { offset: start, byte: tag }),
                }
            }

            let value = match tag {
                b'l' | b'd' => {
                    if stack.len() >= self.max_depth {
                        return Err(BencodexError::NestingTooDeep {
                            offset: start,
                            limit: self.max_depth,
                        });
                    }
                    self.pos += 1;
                    stack.push(if tag == b'l' {
                        Frame::List(Vec::new())
                    } else {
                        Frame::Dict {
                            dict: Dictionary::new(),
                            key: None,
                        }
                    });
                    continue;
                }
                b'e' if !stack.is_empty() => {
                    self.pos += 1;
                    match stack.pop() {
                        Some(Frame::List(items)) => Value::List(items),
                        Some(Frame::Dict { dict, key: None }) => Value::Dict(dict),
                        // A key without a value.
                        _ => return Err(BencodexError::UnexpectedByte { offset: start, byte: tag }),
                    }
                }
                _ => self.decode_scalar(tag)?,
            };

            match stack.last_mut() {
                None => return Ok(value),
                Some(Frame::List(items)) => items.push(value),
                Some(Frame::Dict { dict, key }) => match key.take() {
                    None => {
                        let k = Key::try_from(value)?;
                        if !dict.accepts(&k) {
                            return Err(BencodexError::UnorderedKey { offset: start });
                        }
                        *key = Some(k);
                    }
                    Some(k) => dict.push(k, value)?,
                },
            }
        }
    }

    fn decode_scalar(&mut self, tag: u8) -> Result<Value, BencodexError> {
        let start = self.pos;
        match tag {
            b'n' => {
                self.pos += 1;
                Ok(Value::Null)
            }
            b't' | b'f' => {
                self.pos += 1;
                Ok(Value::Boolean(tag == b't'))
            }
            b'i' => {
                self.pos += 1;
                let end = self.find(b'e')?;
                let int = parse_integer_at(&self.data[self.pos..end], self.pos)?;
                self.pos = end + 1;
                Ok(Value::Integer(int))
            }
            b'0'..=b'9' => {
                let payload = self.length_prefixed()?;
                Ok(Value::Bytes(Bytes::copy_from_slice(payload)))
            }
            b'u' => {
                self.pos += 1;
                let payload = self.length_prefixed()?;
                let text = std::str::from_utf8(payload).map_err(|_| BencodexError::InvalidUtf8 {
                    offset: self.pos - payload.len(),
                })?;
                Ok(Value::Text(text.to_owned()))
            }
            byte => Err(BencodexError::UnexpectedByte {
                offset: start,
                byte,
            }),
        }
    }

    /// Reads `<len>:<payload>` starting at the current position.
    fn length_prefixed(&mut self) -> Result<&'a [u8], BencodexError> {
        let colon = self.find(b':')?;
        let len = parse_length_at(&self.data[self.pos..colon], self.pos)?;
        self.pos = colon + 1;

        if len > self.data.len() - self.pos {
            return Err(BencodexError::UnexpectedEof {
                offset: self.data.len(),
            });
        }

        let payload = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(payload)
    }

    fn peek(&self) -> Result<u8, BencodexError> {
        self.data
            .get(self.pos)
            .copied()
            .ok_or(BencodexError::UnexpectedEof { offset: self.pos })
    }

    /// Finds the next `byte` at or after the current position.
    fn find(&self, byte: u8) -> Result<usize, BencodexError> {
        self.data[self.pos..]
            .iter()
            .position(|&b| b == byte)
            .map(|i| self.pos + i)
            .ok_or(BencodexError::UnexpectedEof {
                offset: self.data.len(),
            })
    }
}

/// The kind of value a tag byte introduces, if any.
fn tag_kind(tag: u8) -> Option<ValueKind> {
    match tag {
        b'n' => Some(ValueKind::Null),
        b't' | b'f' => Some(ValueKind::Boolean),
        b'i' => Some(ValueKind::Integer),
        b'0'..=b'9' => Some(ValueKind::Bytes),
        b'u' => Some(ValueKind::Text),
        b'l' => Some(ValueKind::List),
        b'd' => Some(ValueKind::Dict),
        _ => None,
    }
}
