//! # Bufcopy: Optimized Bulk-Copy Operations
//!
//! This crate copies runs of fixed-width scalar elements between contiguous
//! buffers faster than a naive per-element loop, by selecting among several
//! copy strategies based on transfer size.
//!
//! ## Key Features
//!
//! - **Strategy dispatch**: element-wise, block, and word-aligned copying
//!   chosen by byte-size thresholds
//! - **Word-width-adaptive raw copier**: unrolled unaligned word moves
//!   tuned to the host's native word width (4 or 8 bytes), compiled in via
//!   the `raw-copy` feature on architectures that tolerate unaligned access
//! - **Validated entry points**: structured, diagnostic-quality bounds
//!   errors before any byte moves, plus an explicit unchecked escape hatch
//! - **One generic implementation**: a sealed element trait covers all
//!   8/16/32/64-bit integer scalars (16-bit code units ride on `u16`)
//! - **Byte-level views**: byte-offset block copy and single-byte access
//!   into typed buffers
//!
//! ## Quick Start
//!
//! ```rust
//! use bufcopy::{copy_range, duplicate};
//!
//! let src = [1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10];
//! let mut dst = [0u8; 10];
//! copy_range(&src, 2, &mut dst, 0, 5)?;
//! assert_eq!(dst, [3, 4, 5, 6, 7, 0, 0, 0, 0, 0]);
//!
//! let dup = duplicate(Some(&src[..])).unwrap();
//! assert_eq!(&dup[..], &src[..]);
//! # Ok::<(), bufcopy::BufCopyError>(())
//! ```
//!
//! ## Overlap
//!
//! Overlapping source and destination regions are unrepresentable through
//! the safe API (`&[T]` and `&mut [T]` cannot alias) and are undefined
//! behavior through [`copy_range_unchecked`]; there is no overlap-tolerant
//! move operation.

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod bulk;
pub mod error;

pub use bulk::{
    block_copy, byte_length, copy, copy_range, copy_range_unchecked, duplicate, get_byte,
    get_global_bulk_ops, set_byte, strategy_for_bytes, BulkCopyOps, CopyElement, CopyStrategy,
    BLOCK_COPY_THRESHOLD_BYTES, WORD_BYTES, WORD_COPY_THRESHOLD_BYTES,
};
pub use error::{BufCopyError, BufferSide, Result};
