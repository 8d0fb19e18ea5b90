use super::{ParseResult, Parser};

/// Parser over a borrowed byte slice
///
/// Decoding never copies the input; variable-length payloads are cloned out
/// of the slice only by the scalar that owns them.
#[derive(Clone, Debug)]
pub struct SliceParser<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> SliceParser<'a> {
    pub const fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    /// Returns the bytes that have not yet been consumed
    #[must_use]
    pub fn rest(&self) -> &'a [u8] {
        let buf: &'a [u8] = self.buf;
        &buf[self.offset..]
    }
}

impl<'a> From<&'a [u8]> for SliceParser<'a> {
    fn from(buf: &'a [u8]) -> Self {
        Self::new(buf)
    }
}

impl Parser for SliceParser<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    fn offset(&self) -> usize {
        self.offset
    }

    fn consume(&mut self, nbytes: usize) -> ParseResult<&[u8]> {
        if nbytes > self.remainder() {
            return Err(self.truncated(nbytes));
        }
        let start = self.offset;
        self.offset += nbytes;
        Ok(&self.buf[start..self.offset])
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::DecodeError;

    #[test]
    fn consume_advances() {
        let mut p = SliceParser::new(&[1, 2, 3, 4, 5]);
        assert_eq!(p.consume_byte().unwrap(), 1);
        assert_eq!(p.consume_arr::<2>().unwrap(), [2, 3]);
        assert_eq!(p.offset(), 3);
        assert_eq!(p.remainder(), 2);
        assert_eq!(p.rest(), &[4, 5]);
    }

    #[test]
    fn overrun_leaves_state() {
        let mut p = SliceParser::new(&[1, 2, 3]);
        p.consume_byte().unwrap();
        assert_eq!(
            p.consume(4).unwrap_err(),
            DecodeError::Truncated {
                offset: 1,
                requested: 4,
                remaining: 2
            }
        );
        assert_eq!(p.offset(), 1);
        assert_eq!(p.consume(2).unwrap(), &[2, 3]);
        assert!(p.is_exhausted());
    }
}
