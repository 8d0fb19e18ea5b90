use super::{FixedScalar, Scalar};
use crate::conv::{len::FixedLength, target::Target};
use crate::parse::{ParseResult, Parser};
use crate::schema::ScalarKind;

// Floating-point payloads do not compress; the compact form is the fixed form.
macro_rules! impl_float {
    ($($t:ty => $kind:ident),+) => {
        $(
            impl Scalar for $t {
                const KIND: ScalarKind = ScalarKind::$kind;

                fn zero() -> Self {
                    0.0
                }

                fn write_compact<U: Target>(&self, buf: &mut U) -> usize {
                    self.write_fixed(buf)
                }

                fn parse_compact<P: Parser>(p: &mut P) -> ParseResult<Self> {
                    Self::parse_fixed(p)
                }

                fn compact_len(&self) -> usize {
                    <$t as FixedLength>::LEN
                }
            }

            impl FixedScalar for $t {
                #[inline]
                fn write_fixed<U: Target>(&self, buf: &mut U) -> usize {
                    buf.push_many(self.to_bits().to_le_bytes())
                }

                #[inline]
                fn parse_fixed<P: Parser>(p: &mut P) -> ParseResult<Self> {
                    p.consume_arr().map(<$t>::from_le_bytes)
                }
            }
        )+
    };
}

impl_float!(f32 => F32, f64 => F64);
