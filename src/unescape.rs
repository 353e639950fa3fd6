/*!
String unescaping for JSON string literals.

This module contains a vectorized implementation for expanding the escape
sequences in a JSON string into their literal UTF-8 bytes.

It's not a general-purpose implementation, it requires strings come from a
previously tokenized JSON document: the input starts just past the opening
`"` and is trusted to reach an unescaped `"` terminator by scanning forward.
Escape sequences are not validated along the way, a malformed escape produces
garbage bytes rather than an error.

The decode loop is shared between a set of interchangeable scan strategies
behind the [`BackslashAndQuote`] trait. Each strategy copies one block of
bytes from the source to the destination per step and reports where that
block holds quotes and backslashes. The vectorized strategies read and write
whole blocks at a time, which is why callers have to guarantee readable and
writable slack past the terminator (see [`PADDING`]).
*/

mod fallback;

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
mod simd;

/**
The number of readable bytes [`unescape_trusted`] may touch past the
terminator, covering its widest scan strategy.

Callers satisfy it by keeping this many bytes of the source slice after the
first unescaped `"`.
*/
pub const PADDING: usize = 31;

/**
Expands the escape sequences in the content of a JSON string literal,
returning the number of decoded bytes written to the front of `dst`.

`src` must start at the first content byte past the opening `"` of the
literal. Bytes are copied verbatim up to the first unescaped `"`, which
terminates the scan and is not copied; short escapes and `\uXXXX` escapes
are expanded along the way. Decoding never produces more bytes than it
consumes.
*/
// SAFETY: Callers must ensure `src` reaches an unescaped `"` with `PADDING`
// readable bytes after it, and that `dst` is at least as long as `src`
pub unsafe fn unescape_trusted(dst: &mut [u8], src: &[u8]) -> usize {
    // when SIMD is available, we can vectorize
    #[cfg(target_arch = "x86_64")]
    {
        if src.len() >= simd::AVX2_BLOCK_SIZE && is_x86_feature_detected!("avx2") {
            // SAFETY: avx2 is available
            return simd::unescape_avx2(dst, src);
        }

        if src.len() >= simd::SSE2_BLOCK_SIZE {
            // SAFETY: sse2 is part of the x86_64 baseline
            return simd::unescape_sse2(dst, src);
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        if src.len() >= simd::NEON_BLOCK_SIZE
            && std::arch::is_aarch64_feature_detected!("neon")
        {
            // SAFETY: neon is available
            return simd::unescape_neon(dst, src);
        }
    }

    // when no vector strategy fits, we need to fallback
    fallback::unescape(dst, src)
}

/**
[`unescape_trusted`], pinned to the byte-at-a-time strategy.

The fallback needs no slack past the terminator and runs on any
architecture; it's also the oracle the vectorized strategies are
tested against.
*/
// SAFETY: Callers must ensure `src` reaches an unescaped `"`, and that
// `dst` is at least as long as `src`
pub unsafe fn unescape_trusted_fallback(dst: &mut [u8], src: &[u8]) -> usize {
    fallback::unescape(dst, src)
}

/**
[`unescape_trusted`], pinned to the 32-byte AVX2 strategy.
*/
// SAFETY: Callers must ensure AVX2 is available
// SAFETY: Callers must ensure `src` reaches an unescaped `"` with 31 readable
// bytes after it, and that `dst` is at least as long as `src`
#[cfg(target_arch = "x86_64")]
pub unsafe fn unescape_trusted_avx2(dst: &mut [u8], src: &[u8]) -> usize {
    simd::unescape_avx2(dst, src)
}

/**
[`unescape_trusted`], pinned to the 16-byte SSE2 strategy.
*/
// SAFETY: Callers must ensure `src` reaches an unescaped `"` with 15 readable
// bytes after it, and that `dst` is at least as long as `src`
#[cfg(target_arch = "x86_64")]
pub unsafe fn unescape_trusted_sse2(dst: &mut [u8], src: &[u8]) -> usize {
    simd::unescape_sse2(dst, src)
}

/**
[`unescape_trusted`], pinned to the 16-byte Neon strategy.
*/
// SAFETY: Callers must ensure Neon is available
// SAFETY: Callers must ensure `src` reaches an unescaped `"` with 15 readable
// bytes after it, and that `dst` is at least as long as `src`
#[cfg(target_arch = "aarch64")]
pub unsafe fn unescape_trusted_neon(dst: &mut [u8], src: &[u8]) -> usize {
    simd::unescape_neon(dst, src)
}

/**
A scan strategy over fixed-size blocks of the source.

Each step unconditionally copies one block from the source to the destination
and reports, as lane bitmasks, where the block holds `"` and `\` bytes. The
shared decode loop compares the masks to decide whether to keep scanning,
decode an escape, or terminate.
*/
trait BackslashAndQuote {
    type Block: Copy;

    /**
    The number of bytes one scan step copies.
    */
    const BLOCK_SIZE: usize;

    // SAFETY: Callers must ensure `BLOCK_SIZE` bytes are readable at `ptr`
    unsafe fn load_block_unaligned(ptr: *const u8) -> Self::Block;

    // SAFETY: Callers must ensure `BLOCK_SIZE` bytes are writable at `ptr`
    unsafe fn store_block_unaligned(block: Self::Block, ptr: *mut u8);

    /**
    A bitmask with bit `i` set when lane `i` of the block is a `"`.
    */
    unsafe fn mask_quote(block: Self::Block) -> u32;

    /**
    A bitmask with bit `i` set when lane `i` of the block is a `\`.
    */
    unsafe fn mask_backslash(block: Self::Block) -> u32;
}

struct Scan {
    /**
    The current byte offset into the source.
    */
    src_offset: usize,
    /**
    The current byte offset into the destination.
    */
    dst_offset: usize,
}

// SAFETY: Callers must ensure `src` reaches an unescaped `"` with
// `S::BLOCK_SIZE - 1` readable bytes after it, and that `dst` is at least
// as long as `src`
#[inline(always)]
unsafe fn unescape_blocks<S: BackslashAndQuote>(dst: &mut [u8], src: &[u8]) -> usize {
    test_assert!(src.len() >= S::BLOCK_SIZE);
    test_assert!(dst.len() >= src.len());

    let mut scan = Scan {
        src_offset: 0,
        dst_offset: 0,
    };

    loop {
        // decoding never grows the output, so the destination offset never
        // runs ahead of the source offset and a block that reads in bounds
        // also writes in bounds
        test_assert!(scan.dst_offset <= scan.src_offset);
        test_assert!(scan.src_offset + S::BLOCK_SIZE <= src.len());

        let block = S::load_block_unaligned(src.as_ptr().add(scan.src_offset));
        S::store_block_unaligned(block, dst.as_mut_ptr().add(scan.dst_offset));

        let mask_quote = S::mask_quote(block);
        let mask_backslash = S::mask_backslash(block);

        // decide which of the two special bytes comes first in the block
        // decrementing a mask smears ones below its lowest set bit, so ANDing
        // the result with the other mask is nonzero exactly when the other
        // matched earlier; a tie is impossible since the bytes differ
        if mask_backslash.wrapping_sub(1) & mask_quote != 0 {
            // the terminator: everything before it is already copied
            return scan.dst_offset + mask_quote.trailing_zeros() as usize;
        }

        if mask_quote.wrapping_sub(1) & mask_backslash != 0 {
            let to_backslash = mask_backslash.trailing_zeros() as usize;

            scan.src_offset += to_backslash;
            scan.dst_offset += to_backslash;

            decode_escape(dst, src, &mut scan);
            continue;
        }

        scan.src_offset += S::BLOCK_SIZE;
        scan.dst_offset += S::BLOCK_SIZE;
    }
}

/**
Decodes the escape sequence the scan offsets point at.

On entry the offsets are at the `\`; on exit they're just past the sequence
and its decoded bytes.
*/
// SAFETY: Callers must ensure the scan offsets are within `src` and `dst`
#[inline(always)]
unsafe fn decode_escape(dst: &mut [u8], src: &[u8], scan: &mut Scan) {
    let escaped = *get_unchecked!(src, scan.src_offset + 1);

    if escaped != b'u' {
        // a two byte escape: the map holds the literal byte for each of the
        // eight recognized letters; an unrecognized letter lands on a zero
        *get_unchecked_mut!(dst, scan.dst_offset) = ESCAPE_MAP[escaped as usize];

        scan.src_offset += 2;
        scan.dst_offset += 1;

        return;
    }

    let cp = read_hex4(src, scan.src_offset + 2);
    scan.src_offset += 6;

    // a `\u` escape holding a high surrogate may be the first half of a
    // pair; when its low half follows immediately the two combine into one
    // supplementary codepoint, otherwise the half is written on its own as
    // the (ill-formed) 3-byte sequence its value implies
    if let 0xd800..=0xdbff = cp {
        if let Some(low) = peek_low_surrogate(src, scan.src_offset) {
            if let Some(ch) = crate::std_ext::char::from_utf16_surrogate_pair(cp as u16, low) {
                scan.src_offset += 6;
                scan.dst_offset += write_utf8(dst, scan.dst_offset, ch as u32);

                return;
            }
        }
    }

    scan.dst_offset += write_utf8(dst, scan.dst_offset, cp);
}

/**
Reads the low half of a surrogate pair, if one starts at `offset`.

Unlike the rest of the decoder this looks beyond the escape being decoded,
so it has to check the bytes it wants are still within the source.
*/
#[inline]
fn peek_low_surrogate(src: &[u8], offset: usize) -> Option<u16> {
    if offset + 6 > src.len() {
        return None;
    }

    if src[offset] != b'\\' || src[offset + 1] != b'u' {
        return None;
    }

    // SAFETY: `offset + 6` is within `src`
    let cp = unsafe { read_hex4(src, offset + 2) };

    match cp {
        0xdc00..=0xdfff => Some(cp as u16),
        _ => None,
    }
}

/**
Assembles a codepoint from the 4 hex digits at `offset`.

There's one table per digit position with the values pre-shifted, so the four
lookups combine with bitwise OR and no branching. Non-hex digits poison the
codepoint with an all-ones sentinel instead of being checked here.
*/
// SAFETY: Callers must ensure `offset + 4` is within `src`
#[inline(always)]
unsafe fn read_hex4(src: &[u8], offset: usize) -> u32 {
    HEX_NIBBLE[3][*get_unchecked!(src, offset) as usize]
        | HEX_NIBBLE[2][*get_unchecked!(src, offset + 1) as usize]
        | HEX_NIBBLE[1][*get_unchecked!(src, offset + 2) as usize]
        | HEX_NIBBLE[0][*get_unchecked!(src, offset + 3) as usize]
}

/**
Encodes `cp` as UTF-8 at `offset`, returning the number of bytes written.

Codepoints past the Unicode range write nothing; the only way to reach one
is a malformed `\u` escape poisoned by the non-hex sentinel.
*/
// SAFETY: Callers must ensure 4 bytes are writable at `offset`
#[inline(always)]
unsafe fn write_utf8(dst: &mut [u8], offset: usize, cp: u32) -> usize {
    if cp <= 0x7f {
        *get_unchecked_mut!(dst, offset) = cp as u8;

        1
    } else if cp <= 0x7ff {
        *get_unchecked_mut!(dst, offset) = 0xc0 + (cp >> 6) as u8;
        *get_unchecked_mut!(dst, offset + 1) = 0x80 + (cp & 0x3f) as u8;

        2
    } else if cp <= 0xffff {
        *get_unchecked_mut!(dst, offset) = 0xe0 + (cp >> 12) as u8;
        *get_unchecked_mut!(dst, offset + 1) = 0x80 + ((cp >> 6) & 0x3f) as u8;
        *get_unchecked_mut!(dst, offset + 2) = 0x80 + (cp & 0x3f) as u8;

        3
    } else if cp <= 0x10ffff {
        *get_unchecked_mut!(dst, offset) = 0xf0 + (cp >> 18) as u8;
        *get_unchecked_mut!(dst, offset + 1) = 0x80 + ((cp >> 12) & 0x3f) as u8;
        *get_unchecked_mut!(dst, offset + 2) = 0x80 + ((cp >> 6) & 0x3f) as u8;
        *get_unchecked_mut!(dst, offset + 3) = 0x80 + (cp & 0x3f) as u8;

        4
    } else {
        0
    }
}

/**
The literal byte for each short escape letter.

Only the eight recognized letters hold meaningful entries; the decoder reads
other slots only on malformed input, where it produces whatever the slot
holds (zero).
*/
const ESCAPE_MAP: [u8; 256] = {
    let mut map = [0u8; 256];

    map[b'"' as usize] = b'"';
    map[b'/' as usize] = b'/';
    map[b'\\' as usize] = b'\\';
    map[b'b' as usize] = 0x08;
    map[b'f' as usize] = 0x0c;
    map[b'n' as usize] = b'\n';
    map[b'r' as usize] = b'\r';
    map[b't' as usize] = b'\t';

    map
};

/**
The sentinel a non-hex character maps to in [`HEX_NIBBLE`].
*/
const NON_HEX: u32 = 0xffff_ffff;

/**
Pre-shifted hex digit values, one table per digit position of a `\uXXXX`
escape.
*/
const HEX_NIBBLE: [[u32; 256]; 4] = {
    const fn hex(b: u8) -> u32 {
        match b {
            b'0'..=b'9' => (b - b'0') as u32,
            b'a'..=b'f' => (b - b'a') as u32 + 10,
            b'A'..=b'F' => (b - b'A') as u32 + 10,
            _ => NON_HEX,
        }
    }

    let mut tables = [[NON_HEX; 256]; 4];

    let mut nibble = 0;
    while nibble < 4 {
        let mut b = 0;
        while b < 256 {
            let v = hex(b as u8);
            if v != NON_HEX {
                tables[nibble][b] = v << (nibble * 4);
            }

            b += 1;
        }

        nibble += 1;
    }

    tables
};
