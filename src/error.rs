//! Error types reported by the record codecs
//!
//! Encoding into an owned vector cannot fail; only the cursor form
//! ([`encode_to_slice`](crate::facade::encode_to_slice)) reports
//! [`EncodeError`]. Every decode path reports [`DecodeError`], whose
//! variants carry the byte offset at which the failing field began.

use thiserror::Error;

/// Failure to serialize a record into a caller-supplied buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The destination holds fewer bytes than the encoded record requires
    #[error("destination buffer too small: need {needed} bytes, {available} available")]
    BufferTooSmall { needed: usize, available: usize },
}

/// Classification of malformed (as opposed to merely short) input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A boolean byte other than `0x00` or `0x01`
    #[error("expected boolean := (0x00 | 0x01), got 0x{0:02x}")]
    InvalidBool(u8),
    /// A variable-width integer that is over-long or exceeds the width of its target type
    #[error("varint overflows {bits}-bit target")]
    VarintOverflow { bits: u32 },
    /// An arbitrary-precision integer encoded with a redundant high group
    #[error("non-canonical encoding with trailing zero group")]
    NonCanonical,
    /// A text payload that is not valid UTF-8
    #[error("text payload is not valid UTF-8")]
    Utf8,
    /// A length prefix that cannot be represented as `usize`
    #[error("length prefix {0} exceeds addressable size")]
    LengthOverflow(u64),
}

/// Failure to deserialize a record from a byte buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// Fewer bytes remain than the next field requires
    #[error("cannot consume {requested} bytes at offset {offset}: only {remaining} remaining")]
    Truncated {
        offset: usize,
        requested: usize,
        remaining: usize,
    },
    /// The bytes of a field do not form a valid encoding of its scalar type
    #[error("invalid field encoding at offset {offset}: {kind}")]
    InvalidFormat { offset: usize, kind: FormatError },
    /// A complete record was decoded but unconsumed bytes follow it
    #[error("{residual} trailing bytes after decoded record")]
    Trailing { residual: usize },
}

impl DecodeError {
    /// Constructs an [`InvalidFormat`](DecodeError::InvalidFormat) error at `offset`
    pub const fn invalid(offset: usize, kind: FormatError) -> Self {
        Self::InvalidFormat { offset, kind }
    }
}

pub type EncodeResult<T> = std::result::Result<T, EncodeError>;

pub type DecodeResult<T> = std::result::Result<T, DecodeError>;
