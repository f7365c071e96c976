//! Copy strategy selection and execution.
//!
//! Given an already-validated (or explicitly trusted) request, the
//! dispatcher picks the cheapest correct strategy for the transfer size and
//! executes it. No bounds checking happens here.

use std::ptr;

use super::element::CopyElement;

/// Transfers below this many bytes stay element-wise when the raw word
/// copier is compiled in; at or above it, word copying amortizes its setup
/// cost and wins.
pub const WORD_COPY_THRESHOLD_BYTES: usize = 128;

/// Without the raw word copier, transfers at or above this many bytes use
/// the platform bulk primitive instead of the element-wise loop.
pub const BLOCK_COPY_THRESHOLD_BYTES: usize = 1024;

/// Copy strategies ordered by increasing transfer size.
///
/// Thresholds are expressed in bytes; for multi-byte element types the
/// element-count threshold is the byte threshold divided by the element
/// width (truncating).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStrategy {
    /// Per-element loop, cheapest for small transfers
    Element,
    /// Platform bulk-copy primitive over the raw byte run
    Block,
    /// Unrolled word-width-adaptive copy (`raw-copy` builds only)
    WordAligned,
}

/// Select the copy strategy for a transfer of `byte_len` bytes.
///
/// With the word copier compiled in the ladder is element-wise below
/// [`WORD_COPY_THRESHOLD_BYTES`] and word copy from there up; the block
/// threshold does not apply. Otherwise it is element-wise below
/// [`BLOCK_COPY_THRESHOLD_BYTES`] and block copy from there up.
#[inline]
pub fn strategy_for_bytes(byte_len: usize) -> CopyStrategy {
    #[cfg(bufcopy_word_copy)]
    {
        if byte_len < WORD_COPY_THRESHOLD_BYTES {
            CopyStrategy::Element
        } else {
            CopyStrategy::WordAligned
        }
    }
    #[cfg(not(bufcopy_word_copy))]
    {
        if byte_len < BLOCK_COPY_THRESHOLD_BYTES {
            CopyStrategy::Element
        } else {
            CopyStrategy::Block
        }
    }
}

/// Copy `count` elements from `src` to `dst` using the strategy selected
/// for the transfer's byte size.
///
/// # Safety
///
/// - `src` must be valid for reads of `count` elements and `dst` valid for
///   writes of `count` elements.
/// - The two regions must not overlap.
#[inline]
pub(crate) unsafe fn copy_elements<T: CopyElement>(src: *const T, dst: *mut T, count: usize) {
    let byte_len = count * T::WIDTH;
    match strategy_for_bytes(byte_len) {
        CopyStrategy::Element => unsafe { element_copy(src, dst, count) },
        CopyStrategy::Block => unsafe { ptr::copy_nonoverlapping(src, dst, count) },
        CopyStrategy::WordAligned => {
            // Not selectable when the word copier is compiled out; the
            // block primitive stands in for the variant there.
            #[cfg(bufcopy_word_copy)]
            unsafe {
                super::raw::word_copy(dst as *mut u8, src as *const u8, byte_len)
            }
            #[cfg(not(bufcopy_word_copy))]
            unsafe {
                ptr::copy_nonoverlapping(src, dst, count)
            }
        }
    }
}

/// Plain per-element pointer walk.
#[inline]
unsafe fn element_copy<T: Copy>(mut src: *const T, mut dst: *mut T, count: usize) {
    unsafe {
        let end = src.add(count);
        while src < end {
            *dst = *src;
            src = src.add(1);
            dst = dst.add(1);
        }
    }
}
