//! Type-generic entry points used by the storage engine
//!
//! Each function resolves the record's codec statically from its type; none
//! of them hold state, so they may be called concurrently on distinct buffers.

use std::any::type_name;

use tracing::{debug, trace};

use crate::conv::{len::Estimable, target::SliceTarget, Decode, Encode, EncodeLength};
use crate::error::{DecodeResult, EncodeError, EncodeResult};

/// Serializes `record` into a freshly allocated, exactly sized buffer
#[must_use]
pub fn encode<R: Encode + Estimable>(record: &R) -> Vec<u8> {
    record.to_bytes_full()
}

/// Clears `buf`, then serializes `record` into it, returning the encoded bytes
pub fn encode_into<'a, R: Encode + Estimable>(buf: &'a mut Vec<u8>, record: &R) -> &'a [u8] {
    record.write_to_vec(buf);
    buf.as_slice()
}

/// Serializes `record` at the front of `dst`, returning the unwritten tail
///
/// # Errors
///
/// Returns [`EncodeError::BufferTooSmall`] without writing anything if `dst`
/// is shorter than [`size(record)`](size).
pub fn encode_to_slice<'a, R: Encode + Estimable>(
    dst: &'a mut [u8],
    record: &R,
) -> EncodeResult<&'a mut [u8]> {
    let needed = record.estimate();
    if dst.len() < needed {
        debug!(
            record = type_name::<R>(),
            needed,
            available = dst.len(),
            "destination buffer too small"
        );
        return Err(EncodeError::BufferTooSmall {
            needed,
            available: dst.len(),
        });
    }
    let mut tgt = SliceTarget::new(dst);
    let written = record.write_to(&mut tgt);
    debug_assert_eq!(written, needed);
    trace!(record = type_name::<R>(), written, "encoded record");
    Ok(tgt.into_rest())
}

/// Deserializes a record from a buffer holding exactly one encoding of it
///
/// # Errors
///
/// See [`Decode::try_decode`].
pub fn decode<R: Decode>(bytes: &[u8]) -> DecodeResult<R> {
    R::try_decode(bytes).map_err(|err| {
        debug!(record = type_name::<R>(), len = bytes.len(), %err, "decode failed");
        err
    })
}

/// Deserializes into a caller-supplied record, returning a reference to it
///
/// On failure `out` is left unmodified.
///
/// # Errors
///
/// See [`Decode::try_decode`].
pub fn decode_into<'r, R: Decode>(bytes: &[u8], out: &'r mut R) -> DecodeResult<&'r mut R> {
    *out = decode(bytes)?;
    Ok(out)
}

/// Deserializes one record from the front of `bytes`, returning the
/// unconsumed remainder as the advanced cursor
///
/// # Errors
///
/// Propagates [`DecodeError::Truncated`](crate::error::DecodeError::Truncated)
/// and [`DecodeError::InvalidFormat`](crate::error::DecodeError::InvalidFormat)
/// from the field decoders.
pub fn decode_prefix<R: Decode>(bytes: &[u8]) -> DecodeResult<(R, &[u8])> {
    R::decode_prefix(bytes).map_err(|err| {
        debug!(record = type_name::<R>(), len = bytes.len(), %err, "prefix decode failed");
        err
    })
}

/// Number of bytes [`encode`] produces for `record`
#[must_use]
#[inline]
pub fn size<R: Estimable>(record: &R) -> usize {
    record.estimate()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::DecodeError;

    crate::record_family! {
        mod item {
            key { i_id: u32 }
            value(compact) { im_id: u32, price: i64, name: String }
        }
    }

    fn sample() -> item::Value {
        item::Value::new(17, -1250, "widget".to_string())
    }

    #[test]
    fn vec_form_clears() {
        let mut buf = vec![0xee; 64];
        let out = encode_into(&mut buf, &sample()).to_vec();
        assert_eq!(out, encode(&sample()));
        assert_eq!(buf.len(), size(&sample()));
    }

    #[test]
    fn cursor_form() {
        let mut backing = [0u8; 16];
        let rest = encode_to_slice(&mut backing, &item::Key::new(9)).unwrap();
        assert_eq!(rest.len(), 12);
        let rest = encode_to_slice(rest, &item::Key::new(10)).unwrap();
        assert_eq!(rest.len(), 8);

        let (first, tail) = decode_prefix::<item::Key>(&backing).unwrap();
        let (second, _) = decode_prefix::<item::Key>(tail).unwrap();
        assert_eq!(first, item::Key::new(9));
        assert_eq!(second, item::Key::new(10));
    }

    #[test]
    fn cursor_too_small() {
        let mut backing = [0u8; 3];
        assert_eq!(
            encode_to_slice(&mut backing, &item::Key::new(1)).unwrap_err(),
            EncodeError::BufferTooSmall {
                needed: 4,
                available: 3
            }
        );
        assert_eq!(backing, [0, 0, 0]);
    }

    #[test]
    fn decode_into_keeps_out_on_error() {
        let bytes = encode(&sample());
        let mut out = item::Value::default();
        assert_eq!(decode_into(&bytes, &mut out).unwrap(), &sample());

        let mut untouched = item::Value::new(1, 2, "x".into());
        let err = decode_into(&bytes[..bytes.len() - 1], &mut untouched).unwrap_err();
        assert!(matches!(err, DecodeError::Truncated { .. }));
        assert_eq!(untouched, item::Value::new(1, 2, "x".into()));
    }
}
