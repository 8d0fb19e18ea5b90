//! Byte-level parsing model used by record decoders
//!
//! A [`Parser`] is a forward-only cursor over an immutable byte buffer: a byte
//! can only be viewed by consuming it, after every preceding byte has been
//! consumed, and never again afterwards. Every consuming method checks the
//! remaining length first and fails with [`DecodeError::Truncated`] rather
//! than reading out of bounds, leaving the parser state unchanged.
//!
//! For type-aware parsing see the [`Decode`](crate::conv::Decode) trait, which
//! is built entirely on top of the methods defined here.

pub mod sliceparser;

use crate::error::{DecodeError, DecodeResult};

pub use sliceparser::SliceParser;

/// Result type returned by `Parser` methods and by [`Decode::parse`](crate::conv::Decode::parse)
pub type ParseResult<T> = DecodeResult<T>;

/// Stateful, non-backtracking cursor over a byte buffer
///
/// The following properties hold for every implementation:
///
/// * A fresh parser has `offset() == 0` and `len()` equal to the buffer length
/// * `remainder()` is the largest `n` for which `consume(n)` succeeds
/// * A successful `consume(n)` decreases `remainder()` by exactly `n`; a failed
///   call leaves it unchanged
pub trait Parser {
    /// Total length of the underlying buffer
    fn len(&self) -> usize;

    /// Number of bytes consumed so far
    fn offset(&self) -> usize;

    /// Number of bytes that can still be consumed
    fn remainder(&self) -> usize {
        self.len() - self.offset()
    }

    /// Returns `true` if every byte of the buffer has been consumed
    fn is_exhausted(&self) -> bool {
        self.remainder() == 0
    }

    /// Consumes and returns exactly `nbytes` bytes
    ///
    /// # Invariants
    ///
    /// Must return `Ok(s)` precisely when `nbytes <= self.remainder()`, in which
    /// case `s.len() == nbytes`.
    fn consume(&mut self, nbytes: usize) -> ParseResult<&[u8]>;

    /// Consumes a single byte
    fn consume_byte(&mut self) -> ParseResult<u8> {
        Ok(self.consume(1)?[0])
    }

    /// Consumes `N` bytes and returns them in array-form
    fn consume_arr<const N: usize>(&mut self) -> ParseResult<[u8; N]> {
        let mut arr = [0u8; N];
        arr.copy_from_slice(self.consume(N)?);
        Ok(arr)
    }

    /// Produces the error describing an attempt to consume `requested` bytes
    /// at the current position
    fn truncated(&self, requested: usize) -> DecodeError {
        DecodeError::Truncated {
            offset: self.offset(),
            requested,
            remaining: self.remainder(),
        }
    }
}
