//! Field descriptors, record roles and family descriptors
//!
//! The derive macros emit, for every record type, a `const` [`FieldList`]
//! describing its fields in declared order together with the record's
//! [`Role`]. Nothing at run time consults these descriptors to encode or
//! decode (dispatch is static); they exist so that the wire format of a
//! record family can be inspected, compared and documented for any other
//! reader or writer of the same family.
//!
//! ```
//! use recodec::schema::Family;
//!
//! recodec::record_family! {
//!     pub mod stock {
//!         key { w_id: u32, i_id: u32 }
//!         value(compact) { quantity: i16, data: Vec<u8> }
//!     }
//! }
//!
//! let text = stock::Family::descriptor().to_string();
//! assert!(text.contains("w_id: u32, 4 bytes, big-endian"));
//! assert!(text.contains("data: blob, var, identity"));
//! ```

use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde_impls")]
use serde::Serialize;

use crate::conv::{len::Estimable, Decode, Encode};

/// Scalar type of a single field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_impls", derive(Serialize))]
pub enum ScalarKind {
    Bool,
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
    /// Fixed-width opaque bytes, `[u8; N]`
    Bytes(usize),
    /// Length-prefixed opaque bytes, `Vec<u8>`
    Blob,
    /// Length-prefixed UTF-8, `String`
    Text,
    /// Arbitrary-precision natural number, `BigUint`
    Nat,
}

impl ScalarKind {
    /// Width of the fixed (uncompressed) encoding, if the type has one
    #[must_use]
    pub const fn fixed_width(self) -> Option<usize> {
        match self {
            Self::Bool | Self::U8 | Self::I8 => Some(1),
            Self::U16 | Self::I16 => Some(2),
            Self::U32 | Self::I32 | Self::F32 => Some(4),
            Self::U64 | Self::I64 | Self::F64 => Some(8),
            Self::Bytes(n) => Some(n),
            Self::Blob | Self::Text | Self::Nat => None,
        }
    }

    /// Whether the compact encoding of this type is variable-width
    #[must_use]
    pub const fn is_variable(self) -> bool {
        !matches!(
            self,
            Self::Bool | Self::U8 | Self::I8 | Self::F32 | Self::F64 | Self::Bytes(_)
        )
    }

    const fn is_signed(self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }
}

impl Display for ScalarKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::U8 => f.write_str("u8"),
            Self::I8 => f.write_str("i8"),
            Self::U16 => f.write_str("u16"),
            Self::I16 => f.write_str("i16"),
            Self::U32 => f.write_str("u32"),
            Self::I32 => f.write_str("i32"),
            Self::U64 => f.write_str("u64"),
            Self::I64 => f.write_str("i64"),
            Self::F32 => f.write_str("f32"),
            Self::F64 => f.write_str("f64"),
            Self::Bytes(n) => write!(f, "bytes[{n}]"),
            Self::Blob => f.write_str("blob"),
            Self::Text => f.write_str("text"),
            Self::Nat => f.write_str("nat"),
        }
    }
}

/// `(type, name)` pair describing one field of a record
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_impls", derive(Serialize))]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: ScalarKind,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, kind: ScalarKind) -> Self {
        Self { name, kind }
    }
}

/// Ordered field descriptors of a record; declared order is wire order
pub type FieldList = &'static [FieldDescriptor];

/// Encoding discipline of a value record
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_impls", derive(Serialize))]
pub enum ValueEncoding {
    /// Every field through the compressing serializer
    Compact,
    /// Every field fixed-width little-endian, no transform
    PassThrough,
}

cfg_if::cfg_if! {
    if #[cfg(feature = "varint_values")] {
        /// Encoding used by `#[record(value)]` when none is named
        pub const DEFAULT_VALUE_ENCODING: ValueEncoding = ValueEncoding::Compact;
    } else {
        /// Encoding used by `#[record(value)]` when none is named
        pub const DEFAULT_VALUE_ENCODING: ValueEncoding = ValueEncoding::PassThrough;
    }
}

/// Which half of a family a record is, and how it is serialized
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_impls", derive(Serialize))]
pub enum Role {
    /// Canonical, order-preserving, fixed-width encoding
    Key,
    Value(ValueEncoding),
}

impl Role {
    /// Whether every record with this role encodes to the same number of bytes
    #[must_use]
    pub const fn is_fixed_width(self) -> bool {
        !matches!(self, Self::Value(ValueEncoding::Compact))
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Role::Key => f.write_str("key, canonical"),
            Role::Value(ValueEncoding::Compact) => f.write_str("value, compact"),
            Role::Value(ValueEncoding::PassThrough) => f.write_str("value, pass-through"),
        }
    }
}

/// Record type with a schema-level description
///
/// Implemented by `#[derive(Record)]`, which also generates the full-field
/// constructor `new`.
pub trait Record: Encode + Decode + Estimable {
    const ROLE: Role;

    const FIELDS: FieldList;

    #[must_use]
    fn layout() -> WireLayout {
        WireLayout {
            role: Self::ROLE,
            fields: Self::FIELDS,
        }
    }
}

/// Wire format of one record type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde_impls", derive(Serialize))]
pub struct WireLayout {
    pub role: Role,
    pub fields: FieldList,
}

impl WireLayout {
    /// Constant encoded width, when the role is fixed-width
    #[must_use]
    pub fn fixed_width(&self) -> Option<usize> {
        if !self.role.is_fixed_width() {
            return None;
        }
        self.fields
            .iter()
            .try_fold(0usize, |acc, fd| Some(acc + fd.kind.fixed_width()?))
    }

    /// Describes the width and transform applied to a single field
    fn describe_field(&self, fd: &FieldDescriptor, f: &mut Formatter<'_>) -> fmt::Result {
        let width = match (self.role, fd.kind.fixed_width()) {
            (Role::Value(ValueEncoding::Compact), _) if fd.kind.is_variable() => None,
            (_, width) => width,
        };
        let transform = match self.role {
            Role::Key if fd.kind.fixed_width() == Some(1) && !fd.kind.is_signed() => "identity",
            Role::Key if matches!(fd.kind, ScalarKind::Bytes(_)) => "identity",
            Role::Key if fd.kind.is_signed() => "big-endian, sign-flipped",
            Role::Key if matches!(fd.kind, ScalarKind::F32 | ScalarKind::F64) => {
                "big-endian, total-order"
            }
            Role::Key => "big-endian",
            Role::Value(_) => "identity",
        };
        match width {
            Some(1) => write!(f, "{}: {}, 1 byte, {}", fd.name, fd.kind, transform),
            Some(n) => write!(f, "{}: {}, {} bytes, {}", fd.name, fd.kind, n, transform),
            None => write!(f, "{}: {}, var, {}", fd.name, fd.kind, transform),
        }
    }
}

impl Display for WireLayout {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.fixed_width() {
            Some(n) => writeln!(f, "({}; {} bytes)", self.role, n)?,
            None => writeln!(f, "({}; variable)", self.role)?,
        }
        for (ix, fd) in self.fields.iter().enumerate() {
            write!(f, "  {ix}. ")?;
            self.describe_field(fd, f)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Pairing of one key record type and one value record type
///
/// Implemented on the `Family` marker type generated by
/// [`record_family!`](crate::record_family).
pub trait Family {
    const NAME: &'static str;

    type Key: Record;

    type Value: Record;

    #[must_use]
    fn descriptor() -> FamilyDescriptor {
        FamilyDescriptor {
            name: Self::NAME,
            key: <Self::Key as Record>::layout(),
            value: <Self::Value as Record>::layout(),
        }
    }
}

/// Wire format of a whole record family
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde_impls", derive(Serialize))]
pub struct FamilyDescriptor {
    pub name: &'static str,
    pub key: WireLayout,
    pub value: WireLayout,
}

impl FamilyDescriptor {
    /// Whether `other` reads and writes the same bytes as `self`
    ///
    /// Field names are not part of the wire format and are ignored.
    #[must_use]
    pub fn is_wire_compatible(&self, other: &FamilyDescriptor) -> bool {
        fn same(a: &WireLayout, b: &WireLayout) -> bool {
            a.role == b.role
                && a.fields.len() == b.fields.len()
                && a.fields.iter().zip(b.fields).all(|(x, y)| x.kind == y.kind)
        }
        same(&self.key, &other.key) && same(&self.value, &other.value)
    }
}

impl Display for FamilyDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}::Key ", self.name)?;
        Display::fmt(&self.key, f)?;
        write!(f, "{}::Value ", self.name)?;
        Display::fmt(&self.value, f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const KEY: FieldList = &[
        FieldDescriptor::new("a", ScalarKind::U32),
        FieldDescriptor::new("b", ScalarKind::I64),
        FieldDescriptor::new("tag", ScalarKind::Bytes(3)),
    ];

    const VALUE: FieldList = &[
        FieldDescriptor::new("x", ScalarKind::U32),
        FieldDescriptor::new("ok", ScalarKind::Bool),
        FieldDescriptor::new("name", ScalarKind::Text),
    ];

    #[test]
    fn layout_widths() {
        let key = WireLayout { role: Role::Key, fields: KEY };
        assert_eq!(key.fixed_width(), Some(15));
        let value = WireLayout {
            role: Role::Value(ValueEncoding::Compact),
            fields: VALUE,
        };
        assert_eq!(value.fixed_width(), None);
    }

    #[test]
    fn layout_text() {
        let key = WireLayout { role: Role::Key, fields: KEY };
        assert_eq!(
            key.to_string(),
            "(key, canonical; 15 bytes)\n\
             \x20 0. a: u32, 4 bytes, big-endian\n\
             \x20 1. b: i64, 8 bytes, big-endian, sign-flipped\n\
             \x20 2. tag: bytes[3], 3 bytes, identity\n"
        );
        let value = WireLayout {
            role: Role::Value(ValueEncoding::Compact),
            fields: VALUE,
        };
        let text = value.to_string();
        assert!(text.starts_with("(value, compact; variable)\n"));
        assert!(text.contains("0. x: u32, var, identity"));
        assert!(text.contains("1. ok: bool, 1 byte, identity"));
    }

    #[test]
    fn compatibility_ignores_names() {
        const RENAMED: FieldList = &[
            FieldDescriptor::new("p", ScalarKind::U32),
            FieldDescriptor::new("q", ScalarKind::Bool),
            FieldDescriptor::new("r", ScalarKind::Text),
        ];
        let mk = |enc, value| FamilyDescriptor {
            name: "t",
            key: WireLayout { role: Role::Key, fields: KEY },
            value: WireLayout {
                role: Role::Value(enc),
                fields: value,
            },
        };
        let base = mk(ValueEncoding::Compact, VALUE);
        assert!(base.is_wire_compatible(&mk(ValueEncoding::Compact, RENAMED)));
        assert!(!base.is_wire_compatible(&mk(ValueEncoding::PassThrough, VALUE)));
    }
}
