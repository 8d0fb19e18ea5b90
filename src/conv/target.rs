/// Marker trait for byte-oriented buffers with incremental append operations
///
/// In most ways, it is convenient to think of `Target` as an analogous trait to
/// [`std::io::Write`]. The principal difference between the two is the fact
/// that the `push_XXX` methods on `Target` are infallible and total; while they
/// return a `usize` value representing the number of bytes written, this is
/// used only for summary book-keeping on the caller side.
///
/// Bounded targets such as [`SliceTarget`] rely on the caller having checked
/// capacity against [`Estimable::estimate`](crate::conv::len::Estimable::estimate)
/// beforehand; the facade does this for every cursor-form write.
pub trait Target {
    /// Ensures that at least `extra` further bytes can be appended without
    /// reallocation, where the underlying buffer has a notion of capacity.
    fn anticipate(&mut self, extra: usize);

    /// Appends a single byte, returning `1`.
    fn push_one(&mut self, b: u8) -> usize;

    /// Appends the bytes in a known-length array, returning `N`.
    ///
    /// ```ignore
    /// x.push_many(*b"Rust") === x.push_one(b'R') + x.push_one(b'u') + x.push_one(b's') + x.push_one(b't')
    /// ```
    fn push_many<const N: usize>(&mut self, arr: [u8; N]) -> usize;

    /// Appends the bytes of an arbitrary-length slice, returning its length.
    fn push_all(&mut self, buf: &[u8]) -> usize;
}

/// Useful alias for `std::io::Sink` that is used to count the number of
/// bytes required to serialize an arbitrary-typed object, without
/// performing any memory operations.
pub type ByteCounter = std::io::Sink;

impl Target for ByteCounter {
    #[inline(always)]
    fn anticipate(&mut self, _: usize) {}

    #[inline(always)]
    fn push_one(&mut self, _: u8) -> usize {
        1
    }

    #[inline(always)]
    fn push_many<const N: usize>(&mut self, _: [u8; N]) -> usize {
        N
    }

    #[inline(always)]
    fn push_all(&mut self, buf: &[u8]) -> usize {
        buf.len()
    }
}

impl Target for Vec<u8> {
    #[inline]
    fn anticipate(&mut self, extra: usize) {
        self.reserve(extra)
    }

    #[inline]
    fn push_one(&mut self, b: u8) -> usize {
        self.push(b);
        1
    }

    #[inline]
    fn push_many<const N: usize>(&mut self, arr: [u8; N]) -> usize {
        self.extend_from_slice(&arr);
        N
    }

    #[inline]
    fn push_all(&mut self, buf: &[u8]) -> usize {
        self.extend_from_slice(buf);
        buf.len()
    }
}

/// Write cursor over a caller-owned, pre-sized byte slice
///
/// Pushing beyond the end of the slice is an invariant violation and panics;
/// use [`SliceTarget::remaining`] or the facade's checked entry point to stay
/// within bounds.
#[derive(Debug)]
pub struct SliceTarget<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> SliceTarget<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Number of bytes written so far
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Number of bytes that can still be written
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Consumes the cursor, returning the unwritten tail of the slice
    #[must_use]
    pub fn into_rest(self) -> &'a mut [u8] {
        let SliceTarget { buf, pos } = self;
        &mut buf[pos..]
    }
}

impl Target for SliceTarget<'_> {
    #[inline(always)]
    fn anticipate(&mut self, extra: usize) {
        debug_assert!(extra <= self.remaining());
    }

    #[inline]
    fn push_one(&mut self, b: u8) -> usize {
        self.buf[self.pos] = b;
        self.pos += 1;
        1
    }

    #[inline]
    fn push_many<const N: usize>(&mut self, arr: [u8; N]) -> usize {
        self.push_all(&arr)
    }

    #[inline]
    fn push_all(&mut self, buf: &[u8]) -> usize {
        let end = self.pos + buf.len();
        self.buf[self.pos..end].copy_from_slice(buf);
        self.pos = end;
        buf.len()
    }
}
