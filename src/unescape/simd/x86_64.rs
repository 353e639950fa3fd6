use std::{arch::x86_64::*, mem};

use crate::unescape::*;

pub(in crate::unescape) const AVX2_BLOCK_SIZE: usize = mem::size_of::<__m256i>();
pub(in crate::unescape) const SSE2_BLOCK_SIZE: usize = mem::size_of::<__m128i>();

/**
The 32-byte AVX2 scan strategy.
*/
pub(in crate::unescape) struct Avx2;

impl BackslashAndQuote for Avx2 {
    type Block = __m256i;

    const BLOCK_SIZE: usize = AVX2_BLOCK_SIZE;

    #[inline(always)]
    unsafe fn load_block_unaligned(ptr: *const u8) -> __m256i {
        // HEURISTIC: strings are rarely long enough for aligning reads to pay off,
        // so we just do unaligned loads
        _mm256_loadu_si256(
            #[allow(clippy::cast_ptr_alignment)]
            {
                ptr as *const _
            },
        )
    }

    #[inline(always)]
    unsafe fn store_block_unaligned(block: __m256i, ptr: *mut u8) {
        _mm256_storeu_si256(
            #[allow(clippy::cast_ptr_alignment)]
            {
                ptr as *mut _
            },
            block,
        )
    }

    #[inline(always)]
    unsafe fn mask_quote(block: __m256i) -> u32 {
        let match_quote = _mm256_cmpeq_epi8(block, _mm256_set1_epi8(b'"' as i8));
        _mm256_movemask_epi8(match_quote) as u32
    }

    #[inline(always)]
    unsafe fn mask_backslash(block: __m256i) -> u32 {
        let match_backslash = _mm256_cmpeq_epi8(block, _mm256_set1_epi8(b'\\' as i8));
        _mm256_movemask_epi8(match_backslash) as u32
    }
}

/**
The 16-byte SSE2 scan strategy.
*/
pub(in crate::unescape) struct Sse2;

impl BackslashAndQuote for Sse2 {
    type Block = __m128i;

    const BLOCK_SIZE: usize = SSE2_BLOCK_SIZE;

    #[inline(always)]
    unsafe fn load_block_unaligned(ptr: *const u8) -> __m128i {
        _mm_loadu_si128(
            #[allow(clippy::cast_ptr_alignment)]
            {
                ptr as *const _
            },
        )
    }

    #[inline(always)]
    unsafe fn store_block_unaligned(block: __m128i, ptr: *mut u8) {
        _mm_storeu_si128(
            #[allow(clippy::cast_ptr_alignment)]
            {
                ptr as *mut _
            },
            block,
        )
    }

    #[inline(always)]
    unsafe fn mask_quote(block: __m128i) -> u32 {
        let match_quote = _mm_cmpeq_epi8(block, _mm_set1_epi8(b'"' as i8));
        _mm_movemask_epi8(match_quote) as u32
    }

    #[inline(always)]
    unsafe fn mask_backslash(block: __m128i) -> u32 {
        let match_backslash = _mm_cmpeq_epi8(block, _mm_set1_epi8(b'\\' as i8));
        _mm_movemask_epi8(match_backslash) as u32
    }
}

// SAFETY: Callers must ensure AVX2 is available
// SAFETY: Callers must ensure `src` reaches an unescaped `"` with 31 readable
// bytes after it, and that `dst` is at least as long as `src`
#[target_feature(enable = "avx2")]
pub(in crate::unescape) unsafe fn unescape_avx2(dst: &mut [u8], src: &[u8]) -> usize {
    unescape_blocks::<Avx2>(dst, src)
}

// SAFETY: Callers must ensure `src` reaches an unescaped `"` with 15 readable
// bytes after it, and that `dst` is at least as long as `src`
#[target_feature(enable = "sse2")]
pub(in crate::unescape) unsafe fn unescape_sse2(dst: &mut [u8], src: &[u8]) -> usize {
    unescape_blocks::<Sse2>(dst, src)
}
