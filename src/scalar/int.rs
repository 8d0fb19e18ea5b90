use super::{FixedScalar, Scalar};
use crate::conv::target::Target;
use crate::parse::{ParseResult, Parser};
use crate::schema::ScalarKind;
use crate::varint;

macro_rules! impl_fixed_int {
    ($($t:ty),+) => {
        $(
            impl FixedScalar for $t {
                #[inline]
                fn write_fixed<U: Target>(&self, buf: &mut U) -> usize {
                    buf.push_many(self.to_le_bytes())
                }

                #[inline]
                fn parse_fixed<P: Parser>(p: &mut P) -> ParseResult<Self> {
                    p.consume_arr().map(<$t>::from_le_bytes)
                }
            }
        )+
    };
}

impl_fixed_int!(u8, i8, u16, i16, u32, i32, u64, i64);

impl Scalar for u8 {
    const KIND: ScalarKind = ScalarKind::U8;

    fn zero() -> Self {
        0
    }

    fn write_compact<U: Target>(&self, buf: &mut U) -> usize {
        buf.push_one(*self)
    }

    fn parse_compact<P: Parser>(p: &mut P) -> ParseResult<Self> {
        p.consume_byte()
    }

    fn compact_len(&self) -> usize {
        1
    }
}

impl Scalar for i8 {
    const KIND: ScalarKind = ScalarKind::I8;

    fn zero() -> Self {
        0
    }

    fn write_compact<U: Target>(&self, buf: &mut U) -> usize {
        buf.push_one(*self as u8)
    }

    fn parse_compact<P: Parser>(p: &mut P) -> ParseResult<Self> {
        Ok(p.consume_byte()? as i8)
    }

    fn compact_len(&self) -> usize {
        1
    }
}

macro_rules! impl_varint_unsigned {
    ($($t:ty => $kind:ident),+) => {
        $(
            impl Scalar for $t {
                const KIND: ScalarKind = ScalarKind::$kind;

                fn zero() -> Self {
                    0
                }

                #[inline]
                fn write_compact<U: Target>(&self, buf: &mut U) -> usize {
                    varint::write(u64::from(*self), buf)
                }

                #[inline]
                fn parse_compact<P: Parser>(p: &mut P) -> ParseResult<Self> {
                    // `varint::read` rejects anything wider than the target
                    Ok(varint::read(p, <$t>::BITS)? as $t)
                }

                #[inline]
                fn compact_len(&self) -> usize {
                    varint::encoded_len(u64::from(*self))
                }
            }
        )+
    };
}

impl_varint_unsigned!(u16 => U16, u32 => U32, u64 => U64);

macro_rules! impl_varint_signed {
    ($($t:ty => $kind:ident),+) => {
        $(
            impl Scalar for $t {
                const KIND: ScalarKind = ScalarKind::$kind;

                fn zero() -> Self {
                    0
                }

                #[inline]
                fn write_compact<U: Target>(&self, buf: &mut U) -> usize {
                    varint::write(varint::zigzag(i64::from(*self)), buf)
                }

                #[inline]
                fn parse_compact<P: Parser>(p: &mut P) -> ParseResult<Self> {
                    Ok(varint::unzigzag(varint::read(p, <$t>::BITS)?) as $t)
                }

                #[inline]
                fn compact_len(&self) -> usize {
                    varint::encoded_len(varint::zigzag(i64::from(*self)))
                }
            }
        )+
    };
}

impl_varint_signed!(i16 => I16, i32 => I32, i64 => I64);
