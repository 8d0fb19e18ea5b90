//! Schema-driven key/value record codecs for ordered storage engines
//!
//! # Overview
//!
//! An ordered key/value engine stores records as pairs of byte strings and
//! compares keys by raw byte comparison. `recodec` generates, from two
//! declarative field lists, a **record family**: a key record type and a
//! value record type, each with field storage, structural equality, a
//! full-field constructor, and a binary codec with write, read and size
//! operations.
//!
//! The two halves of a family are serialized under opposite policies:
//!
//! * **Keys** use the canonical encoding. Every field is fixed-width and
//!   transformed into an order-preserving big-endian form
//!   ([`endian::Canonical`]), so that byte-wise comparison of two encoded keys
//!   equals the lexicographic comparison of their fields in declared order.
//!   Variable-width types cannot be key fields; this is checked at compile time.
//! * **Values** use either the compact encoding, where each field goes
//!   through a compressing serializer (LEB128 varints, length-prefixed
//!   payloads), or the pass-through encoding, where each field is written
//!   fixed-width in little-endian order. The choice is made once per family.
//!
//! Record types are produced by the `Encode`, `Decode`, `Estimable` and
//! `Record` derive macros, driven by a `#[record(..)]` attribute, or more
//! conveniently by the [`record_family!`] macro which applies all of them:
//!
//! ```
//! recodec::record_family! {
//!     pub mod customer {
//!         key { w_id: u32, d_id: u32, c_id: u32 }
//!         value(compact) { balance: i64, credit: [u8; 2], last: String }
//!     }
//! }
//!
//! let key = customer::Key::new(1, 3, 2045);
//! let value = customer::Value::new(-10, *b"GC", "BARBARBAR".into());
//!
//! let kb = recodec::encode(&key);
//! let vb = recodec::encode(&value);
//! assert_eq!(kb.len(), recodec::size(&key));
//! assert_eq!(recodec::decode::<customer::Value>(&vb).unwrap(), value);
//! ```
//!
//! The free functions in [`facade`] (re-exported at the crate root) are the
//! entry points a storage engine calls; the traits in [`conv`] are what they
//! dispatch to.
//!
//! # Features
//!
//! * `varint_values` (default): `#[record(value)]` without an explicit
//!   encoding means compact; without the feature it means pass-through.
//! * `check_complete_parse`: whole-buffer decodes reject trailing bytes.
//! * `serde_impls`: `serde::Serialize` for the schema descriptors.

extern crate self as recodec;

pub mod codec;
pub mod conv;
pub mod endian;
pub mod error;
pub mod facade;
mod family;
pub mod parse;
pub mod scalar;
pub mod schema;
pub mod varint;

pub use crate::conv::{
    len::{Estimable, FixedLength},
    target::Target,
    Decode, Encode, EncodeLength,
};
pub use crate::endian::Canonical;
pub use crate::error::{DecodeError, DecodeResult, EncodeError, EncodeResult, FormatError};
pub use crate::facade::{decode, decode_into, decode_prefix, encode, encode_into, encode_to_slice, size};
pub use crate::parse::{ParseResult, Parser, SliceParser};
pub use crate::scalar::{FixedScalar, Scalar};
pub use crate::schema::{Family, FamilyDescriptor, FieldDescriptor, Record, Role, ValueEncoding};

pub use ::record_derive::{Decode, Encode, Estimable, Record};
