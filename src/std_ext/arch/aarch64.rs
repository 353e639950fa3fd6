use std::arch::aarch64::*;

#[target_feature(enable = "neon")]
#[inline]
// SAFETY: Callers must ensure Neon is available
pub unsafe fn splatq(v: [u8; 16]) -> uint8x16_t {
    // Transmuting an array into a `uint8x16_t` is not a valid operation
    // The alignment of an array is less strict
    vld1q_u8(v.as_ptr())
}

// Neon doesn't have a built-in equivalent to x86's movemask
// We implement our own by masking each lane to a single bit and adding the
// bytes across each half of the vector, producing a `u16` with a set bit
// corresponding to each `ff` lane in the original
#[target_feature(enable = "neon")]
#[inline]
// SAFETY: Callers must ensure Neon is available
pub unsafe fn vmovemaskq_u8(a: uint8x16_t) -> u16 {
    let bits = vandq_u8(
        a,
        splatq([
            0b0000_0001,
            0b0000_0010,
            0b0000_0100,
            0b0000_1000,
            0b0001_0000,
            0b0010_0000,
            0b0100_0000,
            0b1000_0000,
            0b0000_0001,
            0b0000_0010,
            0b0000_0100,
            0b0000_1000,
            0b0001_0000,
            0b0010_0000,
            0b0100_0000,
            0b1000_0000,
        ]),
    );

    let lo = vaddv_u8(vget_low_u8(bits)) as u16;
    let hi = vaddv_u8(vget_high_u8(bits)) as u16;

    (hi << 8) | lo
}
