//! Raw word-aligned memory copier.
//!
//! Moves bytes using the widest load/store the host word width allows,
//! two words per loop iteration, then peels the tail in strictly descending
//! unit sizes. Starting addresses are treated as opaque: the routine relies
//! on the target's tolerance for unaligned word access, which is why it is
//! only compiled for architectures `build.rs` approves of.

use super::WORD_BYTES;

/// Copy `len` bytes from `src` to `dst` using unrolled word moves.
///
/// # Safety
///
/// - `src` must be valid for reads of `len` bytes and `dst` valid for
///   writes of `len` bytes.
/// - The two regions must not overlap.
///
/// Only reachable through the dispatcher after validation or through the
/// explicit unchecked entry points, so the routine itself has no error
/// conditions.
#[inline]
pub(crate) unsafe fn word_copy(mut dst: *mut u8, mut src: *const u8, mut len: usize) {
    // Two word moves per iteration to reduce the loop-overhead-to-work
    // ratio.
    while len >= 2 * WORD_BYTES {
        unsafe {
            let lo = (src as *const usize).read_unaligned();
            let hi = (src.add(WORD_BYTES) as *const usize).read_unaligned();
            (dst as *mut usize).write_unaligned(lo);
            (dst.add(WORD_BYTES) as *mut usize).write_unaligned(hi);

            src = src.add(2 * WORD_BYTES);
            dst = dst.add(2 * WORD_BYTES);
        }
        len -= 2 * WORD_BYTES;
    }

    if len >= WORD_BYTES {
        unsafe {
            (dst as *mut usize).write_unaligned((src as *const usize).read_unaligned());
            src = src.add(WORD_BYTES);
            dst = dst.add(WORD_BYTES);
        }
        len -= WORD_BYTES;
    }

    // On 64-bit hosts a 4-byte chunk can still remain below the word size.
    if WORD_BYTES == 8 && len >= 4 {
        unsafe {
            (dst as *mut u32).write_unaligned((src as *const u32).read_unaligned());
            src = src.add(4);
            dst = dst.add(4);
        }
        len -= 4;
    }

    if len >= 2 {
        unsafe {
            (dst as *mut u16).write_unaligned((src as *const u16).read_unaligned());
            src = src.add(2);
            dst = dst.add(2);
        }
        len -= 2;
    }

    if len >= 1 {
        unsafe {
            *dst = *src;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(len: usize) -> Vec<u8> {
        (0..len).map(|i| ((i * 31 + 7) % 256) as u8).collect()
    }

    fn roundtrip(len: usize) {
        let src = pattern(len);
        let mut dst = vec![0u8; len];
        unsafe {
            word_copy(dst.as_mut_ptr(), src.as_ptr(), len);
        }
        assert_eq!(src, dst, "mismatch at length {}", len);
    }

    #[test]
    fn test_word_copy_all_peel_paths() {
        // Every residue class of the descending peel: below a word, exactly
        // one word, between one and two words, and multiples beyond the
        // unrolled loop.
        for len in 0..=(4 * WORD_BYTES + 3) {
            roundtrip(len);
        }
    }

    #[test]
    fn test_word_copy_large() {
        for len in [100, 127, 128, 129, 1023, 1024, 1025, 8192] {
            roundtrip(len);
        }
    }

    #[test]
    fn test_word_copy_unaligned_starts() {
        let src = pattern(256);
        let mut dst = vec![0u8; 256];
        for shift in 1..WORD_BYTES {
            dst.fill(0);
            let len = 128;
            unsafe {
                word_copy(dst.as_mut_ptr().add(shift), src.as_ptr().add(shift), len);
            }
            assert_eq!(&src[shift..shift + len], &dst[shift..shift + len]);
            assert!(dst[..shift].iter().all(|&b| b == 0));
            assert!(dst[shift + len..].iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn test_word_copy_zero_length() {
        let src = [0xAAu8; 8];
        let mut dst = [0x55u8; 8];
        unsafe {
            word_copy(dst.as_mut_ptr(), src.as_ptr(), 0);
        }
        assert!(dst.iter().all(|&b| b == 0x55));
    }
}
