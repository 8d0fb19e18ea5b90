//! Core of the record transcoding API
//!
//! This module contains the high-level transcoding traits [`Encode`] and
//! [`Decode`], implemented for every key and value record by the derive macros
//! of the same name. A record implementation visits its fields in declared
//! order and hands each one to the role-specific field codec in
//! [`crate::codec`]; nothing at this level knows about individual scalar types.
//!
//! The sub-module [`len`] defines [`Estimable`](len::Estimable), the size
//! oracle callers use to pre-size buffers, and [`target`] defines
//! [`Target`], the append-only byte sink that is the dual of
//! [`Parser`](crate::parse::Parser).

use crate::error::DecodeResult;
use crate::parse::{ParseResult, Parser, SliceParser};

use self::len::Estimable;
use self::target::Target;

pub mod len;
pub mod target;

/// Trait for records that serialize into their binary wire form
///
/// Implementing [`Encode`] only requires [`write_to`](Encode::write_to); the
/// derive macro produces it from the record's field list and role.
pub trait Encode {
    /// Appends the serialized bytes of this value to a generic buffer,
    /// returning the exact number of bytes written
    ///
    /// The natural definition of this method is structurally inductive on the
    /// fields of the record, in declared order.
    fn write_to<U: Target>(&self, buf: &mut U) -> usize;

    /// Counts the bytes [`write_to`](Encode::write_to) would produce, by
    /// writing to the zero-allocation [`ByteCounter`](target::ByteCounter).
    #[must_use]
    #[inline]
    fn counted_len(&self) -> usize {
        self.write_to(&mut std::io::sink())
    }

    /// Creates a [`Vec<u8>`] and fills it with the serialized bytes of this value.
    #[must_use]
    fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        let _ = self.write_to(&mut buf);
        buf
    }
}

/// Extension trait for `Encode` that makes use of the [`Estimable`] size oracle
///
/// Blanket-implemented for every record that is both `Encode` and `Estimable`,
/// which every derived record is.
pub trait EncodeLength: Encode + Estimable {
    /// Pre-determines the exact number of bytes required to serialize `self`,
    /// and returns a `Vec<u8>` allocated to exactly that capacity.
    #[must_use]
    fn to_bytes_full(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.estimate());
        let _ = self.write_to(&mut buf);
        buf
    }

    /// Clears `buf`, resizes it to fit the serialized form of `self` exactly,
    /// and writes into it.
    fn write_to_vec(&self, buf: &mut Vec<u8>) {
        buf.clear();
        buf.reserve_exact(self.estimate());
        let _n = self.write_to(buf);
        debug_assert_eq!(_n, self.estimate());
    }
}

impl<T: Encode + Estimable + ?Sized> EncodeLength for T {}

/// Trait for records that can be deserialized from their binary wire form
///
/// The one required method, [`parse`](Decode::parse), consumes exactly the
/// bytes of one encoded record from a [`Parser`], field by field, failing as
/// soon as a field cannot be read.
pub trait Decode: Sized {
    /// Attempt to consume and interpret a value of type `Self` from a `Parser`.
    ///
    /// # Errors
    ///
    /// Errors are propagated from the field codecs: [`DecodeError::Truncated`]
    /// when the input ends early, [`DecodeError::InvalidFormat`] when a field's
    /// bytes are malformed.
    ///
    /// [`DecodeError::Truncated`]: crate::error::DecodeError::Truncated
    /// [`DecodeError::InvalidFormat`]: crate::error::DecodeError::InvalidFormat
    fn parse<P: Parser>(p: &mut P) -> ParseResult<Self>;

    /// Decodes a value from a buffer holding exactly one encoded record.
    ///
    /// If the feature-flag `check_complete_parse` is enabled, leftover bytes
    /// after the record are reported as [`DecodeError::Trailing`]; otherwise
    /// they are ignored.
    ///
    /// [`DecodeError::Trailing`]: crate::error::DecodeError::Trailing
    fn try_decode(bytes: &[u8]) -> DecodeResult<Self> {
        let mut p = SliceParser::new(bytes);
        let ret = Self::parse(&mut p)?;
        cfg_if::cfg_if! {
            if #[cfg(feature = "check_complete_parse")] {
                if !p.is_exhausted() {
                    return Err(crate::error::DecodeError::Trailing { residual: p.remainder() });
                }
            }
        }
        Ok(ret)
    }

    /// Decodes one record from the front of `bytes`, returning it along with
    /// the unconsumed remainder.
    fn decode_prefix(bytes: &[u8]) -> DecodeResult<(Self, &[u8])> {
        let mut p = SliceParser::new(bytes);
        let ret = Self::parse(&mut p)?;
        Ok((ret, p.rest()))
    }
}
