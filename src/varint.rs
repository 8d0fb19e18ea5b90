//! LEB128 variable-width integers and the zigzag mapping for signed values
//!
//! Each byte carries seven payload bits, least-significant group first, with
//! the high bit set on every byte but the last. Decoding rejects encodings
//! longer than the target width allows and final groups carrying bits beyond
//! it, as well as zero-padded final groups, so every value has exactly one
//! accepted encoding.

use num_integer::Integer;

use crate::conv::target::Target;
use crate::error::{DecodeError, FormatError};
use crate::parse::{ParseResult, Parser};

/// Number of bytes in the varint encoding of `value`
#[must_use]
pub fn encoded_len(value: u64) -> usize {
    let bits = (u64::BITS - value.leading_zeros()).max(1) as usize;
    Integer::div_ceil(&bits, &7)
}

/// Appends the varint encoding of `value`
pub fn write<U: Target>(mut value: u64, buf: &mut U) -> usize {
    let mut n = 0;
    while value >= 0x80 {
        n += buf.push_one((value as u8 & 0x7f) | 0x80);
        value >>= 7;
    }
    n + buf.push_one(value as u8)
}

/// Consumes a varint whose decoded value must fit in `bits` bits
pub fn read<P: Parser>(p: &mut P, bits: u32) -> ParseResult<u64> {
    let start = p.offset();
    let overflow = DecodeError::invalid(start, FormatError::VarintOverflow { bits });
    let max_len = Integer::div_ceil(&bits, &7);
    let mut value = 0u64;
    for ix in 0..max_len {
        let byte = p.consume_byte()?;
        let shift = 7 * ix;
        let group = u64::from(byte & 0x7f);
        if shift + 7 > bits && group >> (bits - shift) != 0 {
            return Err(overflow);
        }
        value |= group << shift;
        if byte & 0x80 == 0 {
            if byte == 0 && ix > 0 {
                return Err(DecodeError::invalid(start, FormatError::NonCanonical));
            }
            return Ok(value);
        }
    }
    Err(overflow)
}

/// Maps signed integers onto unsigned ones so that small magnitudes stay small
#[inline]
#[must_use]
pub const fn zigzag(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Inverse of [`zigzag`]
#[inline]
#[must_use]
pub const fn unzigzag(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parse::SliceParser;

    fn enc(v: u64) -> Vec<u8> {
        let mut buf = Vec::new();
        let n = write(v, &mut buf);
        assert_eq!(n, buf.len());
        assert_eq!(n, encoded_len(v));
        buf
    }

    #[test]
    fn known_encodings() {
        assert_eq!(enc(0), vec![0x00]);
        assert_eq!(enc(1), vec![0x01]);
        assert_eq!(enc(127), vec![0x7f]);
        assert_eq!(enc(128), vec![0x80, 0x01]);
        assert_eq!(enc(300), vec![0xac, 0x02]);
        assert_eq!(enc(u64::MAX).len(), 10);
    }

    #[test]
    fn read_back() {
        for v in [0, 1, 127, 128, 300, 16_383, 16_384, u32::MAX as u64, u64::MAX] {
            let bytes = enc(v);
            let mut p = SliceParser::new(&bytes);
            assert_eq!(read(&mut p, 64).unwrap(), v);
            assert!(p.is_exhausted());
        }
    }

    #[test]
    fn rejects_overflow() {
        // 70_000 does not fit in 16 bits
        let bytes = enc(70_000);
        let mut p = SliceParser::new(&bytes);
        assert_eq!(
            read(&mut p, 16).unwrap_err(),
            DecodeError::invalid(0, FormatError::VarintOverflow { bits: 16 })
        );
        // continuation bit on the last permitted byte
        let mut p = SliceParser::new(&[0xff, 0xff, 0x83]);
        assert!(matches!(read(&mut p, 16), Err(DecodeError::InvalidFormat { .. })));
        // over-long encoding of a 64-bit value
        let mut p = SliceParser::new(&[0x80; 11]);
        assert!(matches!(read(&mut p, 64), Err(DecodeError::InvalidFormat { .. })));
    }

    #[test]
    fn rejects_padded_zero() {
        let mut p = SliceParser::new(&[0x81, 0x00]);
        assert_eq!(
            read(&mut p, 32).unwrap_err(),
            DecodeError::invalid(0, FormatError::NonCanonical)
        );
    }

    #[test]
    fn rejects_truncation() {
        let mut p = SliceParser::new(&[0x80, 0x80]);
        assert!(matches!(read(&mut p, 32), Err(DecodeError::Truncated { offset: 2, .. })));
    }

    #[test]
    fn zigzag_pairs() {
        assert_eq!(zigzag(0), 0);
        assert_eq!(zigzag(-1), 1);
        assert_eq!(zigzag(1), 2);
        assert_eq!(zigzag(-2), 3);
        assert_eq!(zigzag(i64::MIN), u64::MAX);
        for v in [0, -1, 1, i64::MIN, i64::MAX, -300, 300] {
            assert_eq!(unzigzag(zigzag(v)), v);
        }
    }
}
