//! Error handling for bulk copy operations
//!
//! This module provides structured error reporting for every validated copy
//! entry point. Each variant corresponds to one distinguishable way a
//! requested range can fail to fit a buffer, so callers get the exact
//! numbers they need for diagnostics.

use std::fmt;

use thiserror::Error;

/// Identifies which buffer argument of a copy request an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferSide {
    /// The buffer elements are read from
    Source,
    /// The buffer elements are written to
    Destination,
}

impl fmt::Display for BufferSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferSide::Source => f.write_str("source"),
            BufferSide::Destination => f.write_str("destination"),
        }
    }
}

/// Main error type for the bufcopy library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufCopyError {
    /// An offset argument points past the end of its buffer
    #[error("{side} offset {offset} is past the end of the buffer (length {len})")]
    OffsetPastEnd {
        /// Which buffer the offset refers to
        side: BufferSide,
        /// The invalid offset
        offset: usize,
        /// The buffer's length
        len: usize,
    },

    /// The requested element count exceeds an entire buffer's length
    #[error("count {count} exceeds the whole {side} buffer (length {len})")]
    CountExceedsBuffer {
        /// Which buffer is too small
        side: BufferSide,
        /// The requested element count
        count: usize,
        /// The buffer's length
        len: usize,
    },

    /// The offset is valid but offset + count overruns the buffer
    #[error("range {offset}+{count} overruns the {side} buffer (length {len})")]
    RangeOverrun {
        /// Which buffer the range overruns
        side: BufferSide,
        /// The (valid) starting offset
        offset: usize,
        /// The requested element count
        count: usize,
        /// The buffer's length
        len: usize,
    },
}

impl BufCopyError {
    /// Create an offset-past-end error
    pub fn offset_past_end(side: BufferSide, offset: usize, len: usize) -> Self {
        Self::OffsetPastEnd { side, offset, len }
    }

    /// Create a count-exceeds-buffer error
    pub fn count_exceeds_buffer(side: BufferSide, count: usize, len: usize) -> Self {
        Self::CountExceedsBuffer { side, count, len }
    }

    /// Create a range-overrun error
    pub fn range_overrun(side: BufferSide, offset: usize, count: usize, len: usize) -> Self {
        Self::RangeOverrun {
            side,
            offset,
            count,
            len,
        }
    }

    /// Which buffer this error refers to
    pub fn side(&self) -> BufferSide {
        match self {
            Self::OffsetPastEnd { side, .. }
            | Self::CountExceedsBuffer { side, .. }
            | Self::RangeOverrun { side, .. } => *side,
        }
    }
}

/// Result type alias for bufcopy operations
pub type Result<T> = std::result::Result<T, BufCopyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BufCopyError::offset_past_end(BufferSide::Source, 7, 5);
        assert_eq!(
            err.to_string(),
            "source offset 7 is past the end of the buffer (length 5)"
        );

        let err = BufCopyError::count_exceeds_buffer(BufferSide::Destination, 9, 5);
        assert_eq!(
            err.to_string(),
            "count 9 exceeds the whole destination buffer (length 5)"
        );

        let err = BufCopyError::range_overrun(BufferSide::Source, 3, 5, 5);
        assert_eq!(
            err.to_string(),
            "range 3+5 overruns the source buffer (length 5)"
        );
    }

    #[test]
    fn test_error_side() {
        let err = BufCopyError::range_overrun(BufferSide::Destination, 1, 2, 2);
        assert_eq!(err.side(), BufferSide::Destination);
    }

    #[test]
    fn test_error_equality() {
        let a = BufCopyError::offset_past_end(BufferSide::Source, 7, 5);
        let b = BufCopyError::offset_past_end(BufferSide::Source, 7, 5);
        assert_eq!(a, b);
    }
}
