/*
The behavior of malformed escape sequences isn't guaranteed, but it is
deterministic, and all the scan strategies have to agree on it. These tests
pin the "garbage in, garbage out" contract down:

- an unrecognized escape letter produces whatever its escape map slot holds
  (zero).
- a non-hex digit in a `\u` escape poisons the codepoint with the all-ones
  sentinel, which encodes as nothing at all.
- a surrogate half without its partner is written as the ill-formed 3-byte
  sequence its value implies.

A missing terminator or an escape that runs past the padded region isn't
covered here: that's a violated precondition, not an input.
*/

use crate::tests::{padded, unescape_all_strategies};

#[test]
fn invalid_unrecognized_escape_letter() {
    let src = padded(br#"a\qb""#);

    assert_eq!(vec![b'a', 0x00, b'b'], unescape_all_strategies(&src));
}

#[test]
fn invalid_non_hex_unicode_escape() {
    // the poisoned codepoint is out of Unicode range, so nothing is written
    let src = padded(br#"a\uzzzzb""#);

    assert_eq!(b"ab".to_vec(), unescape_all_strategies(&src));
}

#[test]
fn invalid_partially_hex_unicode_escape() {
    // one bad digit is enough to poison the whole codepoint
    let src = padded(br#"a\u00z0b""#);

    assert_eq!(b"ab".to_vec(), unescape_all_strategies(&src));
}

#[test]
fn invalid_lone_high_surrogate() {
    let src = padded(br#"\ud800x""#);

    assert_eq!(vec![0xed, 0xa0, 0x80, b'x'], unescape_all_strategies(&src));
}

#[test]
fn invalid_lone_high_surrogate_at_end() {
    // the pair lookahead runs into the terminator and leaves the half alone
    let src = padded(br#"\ud800""#);

    assert_eq!(vec![0xed, 0xa0, 0x80], unescape_all_strategies(&src));
}

#[test]
fn invalid_lone_low_surrogate() {
    let src = padded(br#"\udc00""#);

    assert_eq!(vec![0xed, 0xb0, 0x80], unescape_all_strategies(&src));
}

#[test]
fn invalid_mismatched_surrogate_pair() {
    // a high surrogate followed by a non-surrogate escape doesn't combine
    let src = padded(br#"\ud800\u0041""#);

    assert_eq!(vec![0xed, 0xa0, 0x80, b'A'], unescape_all_strategies(&src));
}

#[test]
fn invalid_high_surrogate_pair() {
    // two high halves in a row both stand alone
    let src = padded(br#"\ud800\ud800""#);

    assert_eq!(
        vec![0xed, 0xa0, 0x80, 0xed, 0xa0, 0x80],
        unescape_all_strategies(&src)
    );
}
