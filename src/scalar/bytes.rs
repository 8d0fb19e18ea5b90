use super::{FixedScalar, Scalar};
use crate::conv::target::Target;
use crate::error::{DecodeError, FormatError};
use crate::parse::{ParseResult, Parser};
use crate::schema::ScalarKind;
use crate::varint;

impl Scalar for bool {
    const KIND: ScalarKind = ScalarKind::Bool;

    fn zero() -> Self {
        false
    }

    fn write_compact<U: Target>(&self, buf: &mut U) -> usize {
        self.write_fixed(buf)
    }

    fn parse_compact<P: Parser>(p: &mut P) -> ParseResult<Self> {
        Self::parse_fixed(p)
    }

    fn compact_len(&self) -> usize {
        1
    }
}

impl FixedScalar for bool {
    fn write_fixed<U: Target>(&self, buf: &mut U) -> usize {
        buf.push_one(u8::from(*self))
    }

    fn parse_fixed<P: Parser>(p: &mut P) -> ParseResult<Self> {
        let offset = p.offset();
        match p.consume_byte()? {
            0x00 => Ok(false),
            0x01 => Ok(true),
            byte => Err(DecodeError::invalid(offset, FormatError::InvalidBool(byte))),
        }
    }
}

impl<const N: usize> Scalar for [u8; N] {
    const KIND: ScalarKind = ScalarKind::Bytes(N);

    fn zero() -> Self {
        [0; N]
    }

    fn write_compact<U: Target>(&self, buf: &mut U) -> usize {
        buf.push_all(self)
    }

    fn parse_compact<P: Parser>(p: &mut P) -> ParseResult<Self> {
        p.consume_arr()
    }

    fn compact_len(&self) -> usize {
        N
    }
}

impl<const N: usize> FixedScalar for [u8; N] {
    fn write_fixed<U: Target>(&self, buf: &mut U) -> usize {
        buf.push_all(self)
    }

    fn parse_fixed<P: Parser>(p: &mut P) -> ParseResult<Self> {
        p.consume_arr()
    }
}

/// Consumes a varint length prefix followed by that many bytes
fn take_prefixed<P: Parser>(p: &mut P) -> ParseResult<&[u8]> {
    let offset = p.offset();
    let len = varint::read(p, u64::BITS)?;
    let len = usize::try_from(len)
        .map_err(|_| DecodeError::invalid(offset, FormatError::LengthOverflow(len)))?;
    p.consume(len)
}

fn prefixed_len(len: usize) -> usize {
    varint::encoded_len(len as u64) + len
}

impl Scalar for Vec<u8> {
    const KIND: ScalarKind = ScalarKind::Blob;

    fn zero() -> Self {
        Vec::new()
    }

    fn write_compact<U: Target>(&self, buf: &mut U) -> usize {
        varint::write(self.len() as u64, buf) + buf.push_all(self)
    }

    fn parse_compact<P: Parser>(p: &mut P) -> ParseResult<Self> {
        take_prefixed(p).map(<[u8]>::to_vec)
    }

    fn compact_len(&self) -> usize {
        prefixed_len(self.len())
    }
}

impl Scalar for String {
    const KIND: ScalarKind = ScalarKind::Text;

    fn zero() -> Self {
        String::new()
    }

    fn write_compact<U: Target>(&self, buf: &mut U) -> usize {
        varint::write(self.len() as u64, buf) + buf.push_all(self.as_bytes())
    }

    fn parse_compact<P: Parser>(p: &mut P) -> ParseResult<Self> {
        let offset = p.offset();
        let raw = take_prefixed(p)?;
        std::str::from_utf8(raw)
            .map(str::to_owned)
            .map_err(|_| DecodeError::invalid(offset, FormatError::Utf8))
    }

    fn compact_len(&self) -> usize {
        prefixed_len(self.len())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parse::SliceParser;

    #[test]
    fn bool_strict() {
        let mut p = SliceParser::new(&[0x01, 0x00, 0xff]);
        assert!(bool::parse_fixed(&mut p).unwrap());
        assert!(!bool::parse_fixed(&mut p).unwrap());
        assert_eq!(
            bool::parse_fixed(&mut p).unwrap_err(),
            DecodeError::invalid(2, FormatError::InvalidBool(0xff))
        );
    }

    #[test]
    fn blob_prefix() {
        let blob = vec![7u8; 200];
        let mut buf = Vec::new();
        assert_eq!(blob.write_compact(&mut buf), 202);
        assert_eq!(&buf[..2], &[0xc8, 0x01]);
        assert_eq!(blob.compact_len(), buf.len());
        let mut p = SliceParser::new(&buf);
        assert_eq!(Vec::<u8>::parse_compact(&mut p).unwrap(), blob);
    }

    #[test]
    fn blob_truncated_payload() {
        let mut p = SliceParser::new(&[0x05, 1, 2]);
        assert_eq!(
            Vec::<u8>::parse_compact(&mut p).unwrap_err(),
            DecodeError::Truncated {
                offset: 1,
                requested: 5,
                remaining: 2
            }
        );
    }

    #[test]
    fn text_rejects_bad_utf8() {
        let mut p = SliceParser::new(&[0x02, 0xc3, 0x28]);
        assert_eq!(
            String::parse_compact(&mut p).unwrap_err(),
            DecodeError::invalid(0, FormatError::Utf8)
        );
        let mut buf = Vec::new();
        "héllo".to_string().write_compact(&mut buf);
        let mut p = SliceParser::new(&buf);
        assert_eq!(String::parse_compact(&mut p).unwrap(), "héllo");
    }

    #[test]
    fn fixed_bytes_verbatim() {
        let mut buf = Vec::new();
        assert_eq!(b"abc".write_fixed(&mut buf), 3);
        let mut p = SliceParser::new(&buf);
        assert_eq!(<[u8; 3]>::parse_compact(&mut p).unwrap(), *b"abc");
    }
}
