use rand::Rng;
use std::fmt::Write;

/**
Generates a random escaped JSON string literal (terminator included) along
with its decoded UTF-8 bytes.

Fuzzing is good at finding bizarre almost-JSON but rarely produces long
valid literals full of escapes. This generator stampedes the decoder with
valid combinations instead, mixing plain runs with every kind of escape at
every alignment.
*/
pub fn escaped_literal() -> (String, Vec<u8>) {
    let mut escaped = String::new();
    let mut decoded = Vec::new();

    for _ in 0..rng(32) {
        write_token(&mut escaped, &mut decoded);
    }

    escaped.push('"');

    (escaped, decoded)
}

fn write_token(escaped: &mut String, decoded: &mut Vec<u8>) {
    match rng(10) {
        0..=3 => write_ascii_run(escaped, decoded),
        4 => write_short_escape(escaped, decoded),
        5 => write_bmp_escape(escaped, decoded),
        6 => write_surrogate_pair(escaped, decoded),
        7 => write_raw_multibyte(escaped, decoded),
        8 => write_control_escape(escaped, decoded),
        _ => write_lorem(escaped, decoded),
    }
}

fn write_ascii_run(escaped: &mut String, decoded: &mut Vec<u8>) {
    for _ in 0..rng(40) {
        let b = ASCII.as_bytes()[rng(ASCII.len())];

        escaped.push(b as char);
        decoded.push(b);
    }
}

fn write_short_escape(escaped: &mut String, decoded: &mut Vec<u8>) {
    let (seq, byte) = SHORT_ESCAPES[rng(SHORT_ESCAPES.len())];

    escaped.push_str(seq);
    decoded.push(byte);
}

fn write_bmp_escape(escaped: &mut String, decoded: &mut Vec<u8>) {
    let code = loop {
        let code = rng(0x1_0000) as u32;

        if !(0xd800..=0xdfff).contains(&code) {
            break code;
        }
    };

    if rng_bool() {
        write!(escaped, "\\u{:04x}", code).unwrap();
    } else {
        write!(escaped, "\\u{:04X}", code).unwrap();
    }

    push_char(decoded, char::from_u32(code).unwrap());
}

fn write_surrogate_pair(escaped: &mut String, decoded: &mut Vec<u8>) {
    let code = 0x1_0000 + rng(0x10_0000) as u32;

    let high = 0xd800 + ((code - 0x1_0000) >> 10);
    let low = 0xdc00 + ((code - 0x1_0000) & 0x3ff);

    write!(escaped, "\\u{:04x}\\u{:04x}", high, low).unwrap();

    push_char(decoded, char::from_u32(code).unwrap());
}

fn write_raw_multibyte(escaped: &mut String, decoded: &mut Vec<u8>) {
    let c = ['é', '壁', '😄'][rng(3)];

    escaped.push(c);
    push_char(decoded, c);
}

fn write_control_escape(escaped: &mut String, decoded: &mut Vec<u8>) {
    let b = rng(0x20) as u8;

    write!(escaped, "\\u{:04x}", b).unwrap();
    decoded.push(b);
}

fn write_lorem(escaped: &mut String, decoded: &mut Vec<u8>) {
    let take = rng(LOREM.len());

    escaped.push_str(&LOREM[..take]);
    decoded.extend_from_slice(&LOREM.as_bytes()[..take]);
}

fn push_char(decoded: &mut Vec<u8>, c: char) {
    let mut buf = [0; 4];

    decoded.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}

fn rng(to: usize) -> usize {
    rand::thread_rng().gen_range(0..to)
}

fn rng_bool() -> bool {
    rand::random()
}

const ASCII: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 ,.;:!?";

const SHORT_ESCAPES: &[(&str, u8)] = &[
    ("\\\"", b'"'),
    ("\\\\", b'\\'),
    ("\\/", b'/'),
    ("\\b", 0x08),
    ("\\f", 0x0c),
    ("\\n", b'\n'),
    ("\\r", b'\r'),
    ("\\t", b'\t'),
];

// It's public domain, ok
const LOREM: &str =
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.";
