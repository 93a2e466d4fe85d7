use thiserror::Error;

use super::key::Key;

/// Errors produced while encoding, decoding or converting Bencodex values.
///
/// Decoding errors carry the byte offset at which the violation was found.
/// Every error is terminal: the codec never repairs non-canonical input.
#[derive(Debug, Error)]
pub enum BencodexError {
    /// Input ended before a length, payload or terminator was complete.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },

    /// Integer literal is empty, signed wrongly, zero-padded or not decimal.
    #[error("invalid integer at offset {offset}: {reason}")]
    InvalidInteger { offset: usize, reason: &'static str },

    /// Length prefix of a byte string or text is not canonical.
    #[error("invalid length prefix at offset {offset}: {reason}")]
    InvalidLength { offset: usize, reason: &'static str },

    /// Text payload is not valid UTF-8.
    #[error("invalid utf-8 in text at offset {offset}")]
    InvalidUtf8 { offset: usize },

    /// Dictionary key decoded to something other than a byte string or text.
    #[error("dictionary key at offset {offset} must be a byte string or text, found {found}")]
    InvalidKey { offset: usize, found: &'static str },

    /// Dictionary key is not strictly greater than the previous key.
    #[error("dictionary key at offset {offset} is out of order or duplicated")]
    UnorderedKey { offset: usize },

    /// [`Dictionary::push`](super::Dictionary::push) was given a key that
    /// does not sort after the last key.
    #[error("dictionary key {key} does not sort after the last key")]
    OutOfOrderKey { key: Key },

    /// A byte that cannot start a value or close a container.
    #[error("unexpected byte {byte:#04x} at offset {offset}")]
    UnexpectedByte { offset: usize, byte: u8 },

    /// Bytes remain after the top-level value.
    #[error("trailing data at offset {offset}")]
    TrailingData { offset: usize },

    /// Container nesting exceeded the configured ceiling.
    #[error("nesting deeper than {limit} levels at offset {offset}")]
    NestingTooDeep { offset: usize, limit: usize },

    /// A value has no mapping into the requested type.
    #[error("cannot convert {found} into {expected}")]
    Conversion {
        expected: &'static str,
        found: &'static str,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of a [`BencodexError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed tag, integer, length or UTF-8 payload.
    Format,
    /// Dictionary keys not strictly increasing.
    Order,
    /// Input ended too early.
    Truncated,
    /// Bytes after the top-level value.
    TrailingData,
    /// A byte where no tag or terminator is valid.
    UnexpectedToken,
    /// Nesting ceiling exceeded.
    DepthLimit,
    /// Value cannot be represented as the requested type.
    Conversion,
    /// Underlying writer failed.
    Io,
}

impl BencodexError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BencodexError::UnexpectedEof { .. } => ErrorKind::Truncated,
            BencodexError::InvalidInteger { .. }
            | BencodexError::InvalidLength { .. }
            | BencodexError::InvalidUtf8 { .. }
            | BencodexError::InvalidKey { .. } => ErrorKind::Format,
            BencodexError::UnorderedKey { .. } | BencodexError::OutOfOrderKey { .. } => {
                ErrorKind::Order
            }
            BencodexError::UnexpectedByte { .. } => ErrorKind::UnexpectedToken,
            BencodexError::TrailingData { .. } => ErrorKind::TrailingData,
            BencodexError::NestingTooDeep { .. } => ErrorKind::DepthLimit,
            BencodexError::Conversion { .. } => ErrorKind::Conversion,
            BencodexError::Io(_) => ErrorKind::Io,
        }
    }

    /// Byte offset of the violation, for decoding errors.
    ///
    /// Errors that did not come from decoding input have no offset.
    pub fn offset(&self) -> Option<usize> {
        match self {
            BencodexError::UnexpectedEof { offset }
            | BencodexError::InvalidInteger { offset, .. }
            | BencodexError::InvalidLength { offset, .. }
            | BencodexError::InvalidUtf8 { offset }
            | BencodexError::InvalidKey { offset, .. }
            | BencodexError::UnorderedKey { offset }
            | BencodexError::UnexpectedByte { offset, .. }
            | BencodexError::TrailingData { offset }
            | BencodexError::NestingTooDeep { offset, .. } => Some(*offset),
            BencodexError::OutOfOrderKey { .. }
            | BencodexError::Conversion { .. }
            | BencodexError::Io(_) => None,
        }
    }
}
