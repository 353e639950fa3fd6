use std::{arch::aarch64::*, mem};

use crate::std_ext::arch::aarch64::*;
use crate::unescape::*;

pub(in crate::unescape) const NEON_BLOCK_SIZE: usize = mem::size_of::<uint8x16_t>();

/**
The 16-byte Neon scan strategy.
*/
pub(in crate::unescape) struct Neon;

impl BackslashAndQuote for Neon {
    type Block = uint8x16_t;

    const BLOCK_SIZE: usize = NEON_BLOCK_SIZE;

    #[inline(always)]
    unsafe fn load_block_unaligned(ptr: *const u8) -> uint8x16_t {
        // SAFETY: In this module, Neon is always available
        vld1q_u8(ptr)
    }

    #[inline(always)]
    unsafe fn store_block_unaligned(block: uint8x16_t, ptr: *mut u8) {
        // SAFETY: In this module, Neon is always available
        vst1q_u8(ptr, block)
    }

    #[inline(always)]
    unsafe fn mask_quote(block: uint8x16_t) -> u32 {
        // SAFETY: In this module, Neon is always available
        let match_quote = vceqq_u8(block, splatq([b'"'; 16]));
        vmovemaskq_u8(match_quote) as u32
    }

    #[inline(always)]
    unsafe fn mask_backslash(block: uint8x16_t) -> u32 {
        // SAFETY: In this module, Neon is always available
        let match_backslash = vceqq_u8(block, splatq([b'\\'; 16]));
        vmovemaskq_u8(match_backslash) as u32
    }
}

// SAFETY: Callers must ensure Neon is available
// SAFETY: Callers must ensure `src` reaches an unescaped `"` with 15 readable
// bytes after it, and that `dst` is at least as long as `src`
#[target_feature(enable = "neon")]
pub(in crate::unescape) unsafe fn unescape_neon(dst: &mut [u8], src: &[u8]) -> usize {
    unescape_blocks::<Neon>(dst, src)
}
