//! Field-level codecs invoked by derived record implementations
//!
//! Each sub-module pairs one transform with one serializer, and is the only
//! place that pairing is spelled out:
//!
//! | module | transform | serializer |
//! |---|---|---|
//! | [`key`] | host → canonical | fixed |
//! | [`compact`] | identity | compact |
//! | [`raw`] | identity | fixed |
//!
//! The trait bounds are what keep key records fixed-width: a variable-width
//! type does not implement [`Canonical`], so naming one as a key field fails
//! to compile:
//!
//! ```compile_fail
//! recodec::record_family! {
//!     mod named {
//!         key { name: String }
//!         value { hits: u64 }
//!     }
//! }
//! ```
//!
//! A key record cannot opt into a value encoding either:
//!
//! ```compile_fail
//! #[derive(recodec::Encode)]
//! #[record(key, compact)]
//! struct Id {
//!     id: u32,
//! }
//! ```
//!
//! [`Canonical`]: crate::endian::Canonical

/// Canonical, order-preserving key fields
pub mod key {
    use std::cmp::Ordering;

    use crate::conv::{len::FixedLength, target::Target};
    use crate::endian::Canonical;
    use crate::parse::{ParseResult, Parser};

    #[inline]
    pub fn write<T: Canonical, U: Target>(value: &T, buf: &mut U) -> usize {
        value.to_canonical().write_fixed(buf)
    }

    #[inline]
    pub fn read<T: Canonical, P: Parser>(p: &mut P) -> ParseResult<T> {
        T::parse_fixed(p).map(Canonical::from_canonical)
    }

    #[inline]
    pub const fn width<T: Canonical>() -> usize {
        <T as FixedLength>::LEN
    }

    /// Compares two field values the way their encodings compare
    #[inline]
    pub fn cmp<T: Canonical>(a: &T, b: &T) -> Ordering {
        a.key_cmp(b)
    }
}

/// Compressed value fields
pub mod compact {
    use crate::conv::target::Target;
    use crate::parse::{ParseResult, Parser};
    use crate::scalar::Scalar;

    #[inline]
    pub fn write<T: Scalar, U: Target>(value: &T, buf: &mut U) -> usize {
        value.write_compact(buf)
    }

    #[inline]
    pub fn read<T: Scalar, P: Parser>(p: &mut P) -> ParseResult<T> {
        T::parse_compact(p)
    }

    #[inline]
    pub fn len<T: Scalar>(value: &T) -> usize {
        value.compact_len()
    }
}

/// Pass-through value fields
pub mod raw {
    use crate::conv::{len::FixedLength, target::Target};
    use crate::parse::{ParseResult, Parser};
    use crate::scalar::FixedScalar;

    #[inline]
    pub fn write<T: FixedScalar, U: Target>(value: &T, buf: &mut U) -> usize {
        value.write_fixed(buf)
    }

    #[inline]
    pub fn read<T: FixedScalar, P: Parser>(p: &mut P) -> ParseResult<T> {
        T::parse_fixed(p)
    }

    #[inline]
    pub const fn width<T: FixedScalar>() -> usize {
        <T as FixedLength>::LEN
    }
}
