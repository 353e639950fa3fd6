#![cfg(unstable)]
#![feature(test)]
extern crate test;

use std::iter;

// the workload is 10k copies of `abcd"`, escaped, with the opening quote
// stripped and the slack the widest strategy needs appended
fn bench_input() -> Vec<u8> {
    let s = "abcd\"".repeat(10_000);
    let escaped = serde_json::to_string(&s).unwrap();

    let mut src = escaped.as_bytes()[1..].to_vec();
    src.extend(iter::repeat(b' ').take(marten_json::PADDING));

    src
}

#[bench]
fn unescape_50kb_dispatched(b: &mut test::Bencher) {
    let src = bench_input();
    let mut dst = vec![0u8; src.len()];

    b.bytes = src.len() as u64;
    b.iter(|| unsafe { marten_json::unescape_trusted(&mut dst, &src) })
}

#[bench]
fn unescape_50kb_fallback(b: &mut test::Bencher) {
    let src = bench_input();
    let mut dst = vec![0u8; src.len()];

    b.bytes = src.len() as u64;
    b.iter(|| unsafe { marten_json::unescape_trusted_fallback(&mut dst, &src) })
}

#[cfg(target_arch = "x86_64")]
#[bench]
fn unescape_50kb_avx2(b: &mut test::Bencher) {
    if !is_x86_feature_detected!("avx2") {
        return;
    }

    let src = bench_input();
    let mut dst = vec![0u8; src.len()];

    b.bytes = src.len() as u64;
    b.iter(|| unsafe { marten_json::unescape_trusted_avx2(&mut dst, &src) })
}

#[cfg(target_arch = "x86_64")]
#[bench]
fn unescape_50kb_sse2(b: &mut test::Bencher) {
    let src = bench_input();
    let mut dst = vec![0u8; src.len()];

    b.bytes = src.len() as u64;
    b.iter(|| unsafe { marten_json::unescape_trusted_sse2(&mut dst, &src) })
}

#[bench]
fn unescape_50kb_serde_json(b: &mut test::Bencher) {
    let s = "abcd\"".repeat(10_000);
    let escaped = serde_json::to_string(&s).unwrap();

    b.bytes = escaped.len() as u64;
    b.iter(|| serde_json::from_str::<String>(&escaped).unwrap())
}
