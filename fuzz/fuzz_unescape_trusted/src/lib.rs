use std::iter;

pub fn unescape(input: &[u8]) {
    // turn arbitrary bytes into a legal source view: appending a run of `"`
    // guarantees the scan reaches an unescaped terminator even when the
    // input ends mid-escape, with the slack the widest strategy needs left
    // over after it
    let mut src = input.to_vec();
    src.extend(iter::repeat(b'"').take(64));

    let mut dst = vec![0u8; src.len()];
    let len = unsafe { marten_json::unescape_trusted_fallback(&mut dst, &src) };
    let expected = &dst[..len];

    // every strategy available on this machine must agree with the fallback
    {
        let mut dst = vec![0u8; src.len()];
        let len = unsafe { marten_json::unescape_trusted(&mut dst, &src) };

        assert_eq!(expected, &dst[..len]);
    }

    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") {
            let mut dst = vec![0u8; src.len()];
            let len = unsafe { marten_json::unescape_trusted_avx2(&mut dst, &src) };

            assert_eq!(expected, &dst[..len]);
        }

        {
            let mut dst = vec![0u8; src.len()];
            let len = unsafe { marten_json::unescape_trusted_sse2(&mut dst, &src) };

            assert_eq!(expected, &dst[..len]);
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        if std::arch::is_aarch64_feature_detected!("neon") {
            let mut dst = vec![0u8; src.len()];
            let len = unsafe { marten_json::unescape_trusted_neon(&mut dst, &src) };

            assert_eq!(expected, &dst[..len]);
        }
    }
}
