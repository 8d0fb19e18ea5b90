//! Oracle for the exact byte-length of the serialized form of a value
//!
//! [`FixedLength`] marks scalars and records whose serialized form has the same
//! width for every value; it is required of every key field and of every
//! field of a pass-through value record. [`Estimable`] is the record-level
//! size operation used to pre-size buffers before writing: fixed-width records
//! answer with the constant [`Estimable::KNOWN`], compact records sum the
//! sizes of their fields case by case.
//!
//! Both are normally implemented by the [`Estimable`](crate::Estimable) derive
//! macro rather than by hand.

/// Trait marking a type as having an invariant-length serialized form
pub trait FixedLength {
    /// Invariant byte-length of the serialized forms of all possible values of `Self`
    const LEN: usize;
}

macro_rules! fix_length {
    ($n:expr, $($x:ty),+) => {
        $(impl FixedLength for $x {
            const LEN: usize = $n;
        })+
    };
}

fix_length!(1, u8, i8, bool);
fix_length!(2, u16, i16);
fix_length!(4, u32, i32, f32);
fix_length!(8, u64, i64, f64);

impl<const N: usize> FixedLength for [u8; N] {
    const LEN: usize = N;
}

/// Trait used to provide precise length-predictions for the binary
/// serialization of a record, so that a large-enough buffer can be allocated
/// or checked before writing.
pub trait Estimable {
    /// Indicates that the length is a constant value for all possible values of `Self`.
    ///
    /// There is deliberately no default: an implementor must state `None` to
    /// declare a record variable-width.
    const KNOWN: Option<usize>;

    /// Infallible fallback that determines the byte-length of the serialized
    /// form of a value on a case-by-case basis.
    fn unknown(&self) -> usize;

    /// Short-circuiting length function that returns the value of `Self::KNOWN`,
    /// or the evaluation of `self.unknown()` if the former is `None`.
    #[inline]
    fn estimate(&self) -> usize {
        Self::KNOWN.unwrap_or_else(|| self.unknown())
    }
}
