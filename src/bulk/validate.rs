//! Argument validation for copy requests.
//!
//! Every checked entry point runs these pure functions before any memory is
//! touched. A failure guarantees zero bytes were copied. The checks are
//! expressed over lengths and offsets only, so they never read either
//! buffer.

use crate::error::{BufCopyError, BufferSide, Result};

/// Validate one side of a copy request: `offset + count` elements must fit
/// inside a buffer of length `len`.
///
/// Failures are classified for diagnostics, in this precedence:
/// the offset itself is past the buffer end, the count alone exceeds the
/// whole buffer, or the offset is valid but the range overruns the
/// remaining room. `offset == len` with `count == 0` is a valid empty
/// range.
#[inline]
pub fn validate_side(side: BufferSide, len: usize, offset: usize, count: usize) -> Result<()> {
    match offset.checked_add(count) {
        Some(end) if end <= len => Ok(()),
        _ => {
            if offset >= len {
                Err(BufCopyError::offset_past_end(side, offset, len))
            } else if count > len {
                Err(BufCopyError::count_exceeds_buffer(side, count, len))
            } else {
                Err(BufCopyError::range_overrun(side, offset, count, len))
            }
        }
    }
}

/// Validate a partial copy request against both buffers.
///
/// The source side is checked first, so a request that is invalid on both
/// sides reports the source error.
#[inline]
pub fn validate_range(
    src_len: usize,
    src_offset: usize,
    dst_len: usize,
    dst_offset: usize,
    count: usize,
) -> Result<()> {
    validate_side(BufferSide::Source, src_len, src_offset, count)?;
    validate_side(BufferSide::Destination, dst_len, dst_offset, count)
}

/// Fast path for whole-buffer copies: both offsets are zero and the count
/// equals the source length, so the range arithmetic is satisfied by
/// construction. Only the destination's capacity needs confirming, since it
/// may legitimately be shorter than the source.
#[inline]
pub fn validate_full(src_len: usize, dst_len: usize) -> Result<()> {
    if dst_len < src_len {
        return Err(BufCopyError::count_exceeds_buffer(
            BufferSide::Destination,
            src_len,
            dst_len,
        ));
    }
    Ok(())
}
