//! Property-based tests for bulk copy correctness
//!
//! Validates the copy contracts against randomly generated buffers,
//! offsets, and counts, including the untouched-remainder guarantee and the
//! validator's classification against a reference predicate.

use bufcopy::{bulk::validate_side, copy, copy_range, duplicate, BufCopyError, BufferSide};
use proptest::prelude::*;

// =============================================================================
// GENERATORS
// =============================================================================

/// A source buffer together with a valid (offset, count) range into it
fn buffer_with_range() -> impl Strategy<Value = (Vec<u8>, usize, usize)> {
    prop::collection::vec(any::<u8>(), 0..4096).prop_flat_map(|buf| {
        let len = buf.len();
        (Just(buf), 0..=len).prop_flat_map(move |(buf, offset)| {
            (Just(buf), Just(offset), 0..=(len - offset))
        })
    })
}

proptest! {
    #[test]
    fn prop_full_copy_reproduces_source(src in prop::collection::vec(any::<u8>(), 0..4096)) {
        let mut dst = vec![0u8; src.len()];
        copy(&src, &mut dst).unwrap();
        prop_assert_eq!(src, dst);
    }

    #[test]
    fn prop_partial_copy_correct_and_remainder_untouched(
        (src, src_offset, count) in buffer_with_range(),
        dst_len in 0usize..4096,
        dst_offset in 0usize..4096,
    ) {
        let mut dst = vec![0xA5u8; dst_len];
        let result = copy_range(&src, src_offset, &mut dst, dst_offset, count);

        let dst_fits = dst_offset
            .checked_add(count)
            .map_or(false, |end| end <= dst_len);

        if dst_fits {
            prop_assert!(result.is_ok());
            prop_assert_eq!(
                &dst[dst_offset..dst_offset + count],
                &src[src_offset..src_offset + count]
            );
            prop_assert!(dst[..dst_offset].iter().all(|&b| b == 0xA5));
            prop_assert!(dst[dst_offset + count..].iter().all(|&b| b == 0xA5));
        } else {
            prop_assert!(result.is_err());
            // Failed validation guarantees zero bytes copied.
            prop_assert!(dst.iter().all(|&b| b == 0xA5));
        }
    }

    #[test]
    fn prop_duplicate_round_trip_u64(src in prop::collection::vec(any::<u64>(), 0..1024)) {
        let dup = duplicate(Some(&src[..])).unwrap();
        prop_assert_eq!(dup, src);
    }

    #[test]
    fn prop_validator_matches_reference(
        len in 0usize..10_000,
        offset in 0usize..20_000,
        count in 0usize..20_000,
    ) {
        let result = validate_side(BufferSide::Source, len, offset, count);
        let sound = offset.checked_add(count).map_or(false, |end| end <= len);
        prop_assert_eq!(result.is_ok(), sound);

        if let Err(err) = result {
            let expected = if offset >= len {
                BufCopyError::offset_past_end(BufferSide::Source, offset, len)
            } else if count > len {
                BufCopyError::count_exceeds_buffer(BufferSide::Source, count, len)
            } else {
                BufCopyError::range_overrun(BufferSide::Source, offset, count, len)
            };
            prop_assert_eq!(err, expected);
        }
    }
}
