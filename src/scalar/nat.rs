use num_bigint::BigUint;
use num_integer::Integer;

use super::Scalar;
use crate::conv::target::Target;
use crate::error::{DecodeError, FormatError};
use crate::parse::{ParseResult, Parser};
use crate::schema::ScalarKind;

impl Scalar for BigUint {
    const KIND: ScalarKind = ScalarKind::Nat;

    fn zero() -> Self {
        BigUint::default()
    }

    fn write_compact<U: Target>(&self, buf: &mut U) -> usize {
        let mut groups = self.to_radix_le(0x80);
        if groups.is_empty() {
            groups.push(0);
        }

        // Every group but the last carries the continuation bit; setting it
        // everywhere and then toggling the final one keeps the loop branch-free.
        for byt in groups.iter_mut() {
            *byt |= 0x80;
        }
        if let Some(last) = groups.last_mut() {
            *last ^= 0x80;
        }

        buf.push_all(&groups)
    }

    fn parse_compact<P: Parser>(p: &mut P) -> ParseResult<Self> {
        let offset = p.offset();
        let mut lo7 = Vec::new();
        loop {
            let byte = p.consume_byte()?;
            lo7.push(byte & 0x7f);
            if byte & 0x80 == 0 {
                if byte == 0 && lo7.len() > 1 {
                    return Err(DecodeError::invalid(offset, FormatError::NonCanonical));
                }
                break;
            }
        }
        BigUint::from_radix_le(&lo7, 0x80)
            .ok_or(DecodeError::invalid(offset, FormatError::NonCanonical))
    }

    fn compact_len(&self) -> usize {
        let bits = (self.bits() as usize).max(1);
        Integer::div_ceil(&bits, &7)
    }
}
