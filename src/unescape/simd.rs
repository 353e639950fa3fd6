/*!
Vectorized scan strategies.

Each strategy broadcasts the `"` and `\` bytes across a vector, compares a
whole block of input against both, and collapses the comparisons into lane
bitmasks for the shared decode loop. The strategies only differ in block
width and the intrinsics that produce the bitmasks.
*/

#[cfg(target_arch = "x86_64")]
mod x86_64;

#[cfg(target_arch = "x86_64")]
pub(super) use self::x86_64::{unescape_avx2, unescape_sse2, AVX2_BLOCK_SIZE, SSE2_BLOCK_SIZE};

#[cfg(target_arch = "aarch64")]
mod aarch64;

#[cfg(target_arch = "aarch64")]
pub(super) use self::aarch64::{unescape_neon, NEON_BLOCK_SIZE};
