//! Bulk copy operations over contiguous homogeneous buffers
//!
//! This module provides the copy-strategy dispatcher and the validated,
//! typed copy surface built on it. Every checked entry point runs the
//! [`validate`] contract before any data movement; strategy selection and
//! execution live in [`dispatch`], and the word-width-adaptive raw copier
//! (compiled on `raw-copy` builds for unaligned-access-tolerant targets) in
//! its own submodule.

pub mod dispatch;
pub mod element;
pub mod validate;

#[cfg(bufcopy_word_copy)]
mod raw;

pub use dispatch::{
    strategy_for_bytes, CopyStrategy, BLOCK_COPY_THRESHOLD_BYTES, WORD_COPY_THRESHOLD_BYTES,
};
pub use element::CopyElement;
pub use validate::{validate_full, validate_range, validate_side};

use crate::error::{BufCopyError, BufferSide, Result};

/// Native word width of the host in bytes.
pub const WORD_BYTES: usize = std::mem::size_of::<usize>();

/// Bulk copy operations dispatcher.
///
/// Stateless beyond the compile-time strategy configuration it reports;
/// construction is cheap, but most callers go through
/// [`get_global_bulk_ops`] or the free functions in this module.
pub struct BulkCopyOps {
    word_bytes: usize,
    word_copy: bool,
}

impl BulkCopyOps {
    /// Create a new bulk copy dispatcher.
    pub fn new() -> Self {
        let ops = Self {
            word_bytes: WORD_BYTES,
            word_copy: cfg!(bufcopy_word_copy),
        };
        log::debug!(
            "bulk copy ops: word width {} bytes, word copy {}",
            ops.word_bytes,
            if ops.word_copy { "enabled" } else { "disabled" }
        );
        ops
    }

    /// Native word width used by the raw copier, in bytes.
    pub fn word_bytes(&self) -> usize {
        self.word_bytes
    }

    /// Whether the raw word-aligned copier is compiled into this build.
    pub fn word_copy_enabled(&self) -> bool {
        self.word_copy
    }

    /// Validated whole-buffer copy of `src.len()` elements into the front
    /// of `dst`.
    ///
    /// The destination may be longer than the source; its tail is left
    /// untouched. A shorter destination fails validation and nothing is
    /// copied.
    pub fn copy<T: CopyElement>(&self, src: &[T], dst: &mut [T]) -> Result<()> {
        validate::validate_full(src.len(), dst.len())?;
        unsafe {
            dispatch::copy_elements(src.as_ptr(), dst.as_mut_ptr(), src.len());
        }
        Ok(())
    }

    /// Validated partial copy of `count` elements from
    /// `src[src_offset..]` into `dst[dst_offset..]`.
    ///
    /// On failure nothing is copied; elements of `dst` outside the target
    /// range are never touched.
    pub fn copy_range<T: CopyElement>(
        &self,
        src: &[T],
        src_offset: usize,
        dst: &mut [T],
        dst_offset: usize,
        count: usize,
    ) -> Result<()> {
        validate::validate_range(src.len(), src_offset, dst.len(), dst_offset, count)?;
        unsafe {
            dispatch::copy_elements(
                src.as_ptr().add(src_offset),
                dst.as_mut_ptr().add(dst_offset),
                count,
            );
        }
        Ok(())
    }

    /// Partial copy without any validation.
    ///
    /// Escape hatch for call sites that have already established the bounds
    /// invariants upstream, e.g. inside a loop processing many same-shaped
    /// requests. Debug builds still assert the bounds.
    ///
    /// # Safety
    ///
    /// `src_offset + count` must not exceed `src.len()` and
    /// `dst_offset + count` must not exceed `dst.len()`; violating either
    /// is undefined behavior (out-of-bounds memory access).
    pub unsafe fn copy_range_unchecked<T: CopyElement>(
        &self,
        src: &[T],
        src_offset: usize,
        dst: &mut [T],
        dst_offset: usize,
        count: usize,
    ) {
        debug_assert!(src_offset
            .checked_add(count)
            .map_or(false, |end| end <= src.len()));
        debug_assert!(dst_offset
            .checked_add(count)
            .map_or(false, |end| end <= dst.len()));
        unsafe {
            dispatch::copy_elements(
                src.as_ptr().add(src_offset),
                dst.as_mut_ptr().add(dst_offset),
                count,
            );
        }
    }

    /// Produce a copy of `src` in a freshly allocated buffer, propagating
    /// an absent input.
    pub fn duplicate<T: CopyElement>(&self, src: Option<&[T]>) -> Option<Vec<T>> {
        let src = src?;
        let mut out = vec![T::default(); src.len()];
        // Cannot fail: the lengths match by construction.
        self.copy(src, &mut out).ok()?;
        Some(out)
    }

    /// Validated byte-offset-addressed copy between buffers of possibly
    /// different element widths.
    ///
    /// Offsets and count are expressed in bytes against each buffer's
    /// native-endian representation; the result of copying across widths is
    /// therefore endian-dependent, exactly like viewing both buffers as raw
    /// bytes.
    pub fn block_copy<S: CopyElement, D: CopyElement>(
        &self,
        src: &[S],
        src_byte_offset: usize,
        dst: &mut [D],
        dst_byte_offset: usize,
        byte_count: usize,
    ) -> Result<()> {
        validate::validate_range(
            byte_length(src),
            src_byte_offset,
            byte_length(dst),
            dst_byte_offset,
            byte_count,
        )?;
        unsafe {
            dispatch::copy_elements::<u8>(
                (src.as_ptr() as *const u8).add(src_byte_offset),
                (dst.as_mut_ptr() as *mut u8).add(dst_byte_offset),
                byte_count,
            );
        }
        Ok(())
    }

    /// Read byte `index` of `buf`'s native-endian representation.
    pub fn get_byte<T: CopyElement>(&self, buf: &[T], index: usize) -> Result<u8> {
        let len = byte_length(buf);
        if index >= len {
            return Err(BufCopyError::offset_past_end(BufferSide::Source, index, len));
        }
        Ok(unsafe { *(buf.as_ptr() as *const u8).add(index) })
    }

    /// Write byte `index` of `buf`'s native-endian representation.
    pub fn set_byte<T: CopyElement>(&self, buf: &mut [T], index: usize, value: u8) -> Result<()> {
        let len = byte_length(buf);
        if index >= len {
            return Err(BufCopyError::offset_past_end(
                BufferSide::Destination,
                index,
                len,
            ));
        }
        unsafe {
            *(buf.as_mut_ptr() as *mut u8).add(index) = value;
        }
        Ok(())
    }
}

impl Default for BulkCopyOps {
    fn default() -> Self {
        Self::new()
    }
}

//==============================================================================
// GLOBAL INSTANCE AND CONVENIENCE FUNCTIONS
//==============================================================================

/// Global bulk copy operations instance for reuse
static GLOBAL_BULK_OPS: std::sync::OnceLock<BulkCopyOps> = std::sync::OnceLock::new();

/// Get the global bulk copy operations instance
pub fn get_global_bulk_ops() -> &'static BulkCopyOps {
    GLOBAL_BULK_OPS.get_or_init(BulkCopyOps::new)
}

/// Length of `buf` in bytes: element count times element width.
pub fn byte_length<T: CopyElement>(buf: &[T]) -> usize {
    buf.len() * T::WIDTH
}

/// Convenience function for a validated whole-buffer copy
pub fn copy<T: CopyElement>(src: &[T], dst: &mut [T]) -> Result<()> {
    get_global_bulk_ops().copy(src, dst)
}

/// Convenience function for a validated partial copy
pub fn copy_range<T: CopyElement>(
    src: &[T],
    src_offset: usize,
    dst: &mut [T],
    dst_offset: usize,
    count: usize,
) -> Result<()> {
    get_global_bulk_ops().copy_range(src, src_offset, dst, dst_offset, count)
}

/// Convenience function for the unchecked partial copy
///
/// # Safety
///
/// Same contract as [`BulkCopyOps::copy_range_unchecked`].
pub unsafe fn copy_range_unchecked<T: CopyElement>(
    src: &[T],
    src_offset: usize,
    dst: &mut [T],
    dst_offset: usize,
    count: usize,
) {
    unsafe {
        get_global_bulk_ops().copy_range_unchecked(src, src_offset, dst, dst_offset, count);
    }
}

/// Convenience function for duplicating a buffer
pub fn duplicate<T: CopyElement>(src: Option<&[T]>) -> Option<Vec<T>> {
    get_global_bulk_ops().duplicate(src)
}

/// Convenience function for the byte-offset-addressed copy
pub fn block_copy<S: CopyElement, D: CopyElement>(
    src: &[S],
    src_byte_offset: usize,
    dst: &mut [D],
    dst_byte_offset: usize,
    byte_count: usize,
) -> Result<()> {
    get_global_bulk_ops().block_copy(src, src_byte_offset, dst, dst_byte_offset, byte_count)
}

/// Convenience function for reading one byte of a typed buffer
pub fn get_byte<T: CopyElement>(buf: &[T], index: usize) -> Result<u8> {
    get_global_bulk_ops().get_byte(buf, index)
}

/// Convenience function for writing one byte of a typed buffer
pub fn set_byte<T: CopyElement>(buf: &mut [T], index: usize, value: u8) -> Result<()> {
    get_global_bulk_ops().set_byte(buf, index, value)
}
