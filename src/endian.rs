//! Host-order to canonical-order transform for key fields
//!
//! A key field is written as `to_canonical(value)` through the fixed-width
//! (little-endian) serializer, so the transform is chosen such that the bytes
//! that reach the buffer are the *order-preserving* big-endian form:
//!
//! * unsigned integers: plain big-endian;
//! * signed integers: big-endian with the sign bit flipped, so negatives sort
//!   before non-negatives;
//! * floats: the IEEE-754 total-order mapping (negatives bit-inverted,
//!   positives sign-flipped), then big-endian;
//! * `bool`, `u8` and `[u8; N]`: identity, since their bytes already compare
//!   in natural order.
//!
//! Byte-wise comparison of two encoded keys of the same record type is then
//! equivalent to comparing their fields lexicographically in declared order
//! with [`Canonical::key_cmp`]. For floats that is the IEEE total order, so
//! `-0.0 < 0.0` and NaNs compare by bit pattern.

use std::cmp::Ordering;

use crate::scalar::FixedScalar;

/// Endian transform applied to key fields around the fixed-width serializer
///
/// `from_canonical(to_canonical(x)) == x` must hold bit-for-bit.
pub trait Canonical: FixedScalar + Copy {
    fn to_canonical(self) -> Self;

    fn from_canonical(self) -> Self;

    /// Total order agreeing with the byte order of the canonical encoding
    fn key_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! identity_canonical {
    ($($t:ty),+) => {
        $(
            impl Canonical for $t {
                #[inline(always)]
                fn to_canonical(self) -> Self {
                    self
                }

                #[inline(always)]
                fn from_canonical(self) -> Self {
                    self
                }

                #[inline]
                fn key_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )+
    };
}

identity_canonical!(bool, u8);

impl<const N: usize> Canonical for [u8; N] {
    #[inline(always)]
    fn to_canonical(self) -> Self {
        self
    }

    #[inline(always)]
    fn from_canonical(self) -> Self {
        self
    }

    #[inline]
    fn key_cmp(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }
}

impl Canonical for i8 {
    #[inline]
    fn to_canonical(self) -> Self {
        ((self as u8) ^ 0x80) as i8
    }

    #[inline]
    fn from_canonical(self) -> Self {
        ((self as u8) ^ 0x80) as i8
    }

    #[inline]
    fn key_cmp(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }
}

macro_rules! unsigned_canonical {
    ($($t:ty),+) => {
        $(
            impl Canonical for $t {
                #[inline]
                fn to_canonical(self) -> Self {
                    <$t>::from_le_bytes(self.to_be_bytes())
                }

                #[inline]
                fn from_canonical(self) -> Self {
                    <$t>::from_be_bytes(self.to_le_bytes())
                }

                #[inline]
                fn key_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )+
    };
}

unsigned_canonical!(u16, u32, u64);

macro_rules! signed_canonical {
    ($($t:ty => $u:ty),+) => {
        $(
            impl Canonical for $t {
                #[inline]
                fn to_canonical(self) -> Self {
                    const SIGN: $u = 1 << (<$u>::BITS - 1);
                    <$t>::from_le_bytes(((self as $u) ^ SIGN).to_be_bytes())
                }

                #[inline]
                fn from_canonical(self) -> Self {
                    const SIGN: $u = 1 << (<$u>::BITS - 1);
                    (<$u>::from_be_bytes(self.to_le_bytes()) ^ SIGN) as $t
                }

                #[inline]
                fn key_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )+
    };
}

signed_canonical!(i16 => u16, i32 => u32, i64 => u64);

macro_rules! float_canonical {
    ($($t:ty => $u:ty),+) => {
        $(
            impl Canonical for $t {
                #[inline]
                fn to_canonical(self) -> Self {
                    const SIGN: $u = 1 << (<$u>::BITS - 1);
                    let bits = self.to_bits();
                    let ordered = if bits & SIGN != 0 { !bits } else { bits ^ SIGN };
                    <$t>::from_bits(<$u>::from_le_bytes(ordered.to_be_bytes()))
                }

                #[inline]
                fn from_canonical(self) -> Self {
                    const SIGN: $u = 1 << (<$u>::BITS - 1);
                    let ordered = <$u>::from_be_bytes(self.to_bits().to_le_bytes());
                    let bits = if ordered & SIGN != 0 { ordered ^ SIGN } else { !ordered };
                    <$t>::from_bits(bits)
                }

                #[inline]
                fn key_cmp(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }
            }
        )+
    };
}

float_canonical!(f32 => u32, f64 => u64);
