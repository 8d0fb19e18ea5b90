//! Per-field serializers
//!
//! Every type usable as a record field implements [`Scalar`], the compressing
//! serializer used for compact value records. Types with a fixed-width form
//! additionally implement [`FixedScalar`], the uncompressed serializer used for
//! pass-through value fields and (after the canonical transform of
//! [`crate::endian`]) for key fields.
//!
//! | type | fixed | compact |
//! |---|---|---|
//! | `bool`, `u8`, `i8` | 1 byte | 1 byte |
//! | `u16`, `u32`, `u64` | little-endian | LEB128 varint |
//! | `i16`, `i32`, `i64` | little-endian | zigzag varint |
//! | `f32`, `f64` | little-endian bits | little-endian bits |
//! | `[u8; N]` | `N` bytes | `N` bytes |
//! | `Vec<u8>`, `String` | n/a | varint length, then bytes |
//! | `BigUint` | n/a | base-128 groups |

mod bytes;
mod float;
mod int;
mod nat;

use crate::conv::{len::FixedLength, target::Target};
use crate::parse::{ParseResult, Parser};
use crate::schema::ScalarKind;

/// Compressing serializer for a single field value
pub trait Scalar: Sized {
    /// Schema-level name of this type, recorded in field descriptors
    const KIND: ScalarKind;

    /// Value held by a default-constructed record field
    fn zero() -> Self;

    /// Appends the compact encoding of `self`, returning the bytes written
    fn write_compact<U: Target>(&self, buf: &mut U) -> usize;

    /// Consumes a compact encoding produced by [`write_compact`](Scalar::write_compact)
    fn parse_compact<P: Parser>(p: &mut P) -> ParseResult<Self>;

    /// Exact length of the compact encoding of `self`
    fn compact_len(&self) -> usize;
}

/// Uncompressed, fixed-width serializer for a single field value
///
/// The width of the encoding is [`FixedLength::LEN`] for every value.
pub trait FixedScalar: Scalar + FixedLength {
    /// Appends exactly `Self::LEN` bytes
    fn write_fixed<U: Target>(&self, buf: &mut U) -> usize;

    /// Consumes exactly `Self::LEN` bytes
    fn parse_fixed<P: Parser>(p: &mut P) -> ParseResult<Self>;
}
