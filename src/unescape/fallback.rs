use super::*;

/**
The byte-at-a-time scan strategy.

A "block" is a single byte, so the lane bitmasks collapse to a plain
equality check and the scan needs no slack past the terminator. This is
the portable fallback and the correctness oracle for the vectorized
strategies.
*/
pub(super) struct Scalar;

impl BackslashAndQuote for Scalar {
    type Block = u8;

    const BLOCK_SIZE: usize = 1;

    #[inline(always)]
    unsafe fn load_block_unaligned(ptr: *const u8) -> u8 {
        *ptr
    }

    #[inline(always)]
    unsafe fn store_block_unaligned(block: u8, ptr: *mut u8) {
        *ptr = block;
    }

    #[inline(always)]
    unsafe fn mask_quote(block: u8) -> u32 {
        (block == b'"') as u32
    }

    #[inline(always)]
    unsafe fn mask_backslash(block: u8) -> u32 {
        (block == b'\\') as u32
    }
}

// SAFETY: Callers must ensure `src` reaches an unescaped `"`, and that
// `dst` is at least as long as `src`
#[inline(always)]
pub(super) unsafe fn unescape(dst: &mut [u8], src: &[u8]) -> usize {
    unescape_blocks::<Scalar>(dst, src)
}
