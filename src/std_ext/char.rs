/**
Combines a UTF-16 surrogate pair into its supplementary codepoint.

Returns `None` unless `high` and `low` really are a high and low surrogate
half in that order; every such pair maps to a valid `char`.
*/
pub(crate) fn from_utf16_surrogate_pair(high: u16, low: u16) -> Option<char> {
    if !(0xd800..=0xdbff).contains(&high) || !(0xdc00..=0xdfff).contains(&low) {
        return None;
    }

    let code = 0x10000 + (((high as u32 - 0xd800) << 10) | (low as u32 - 0xdc00));

    char::from_u32(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combines_surrogate_halves() {
        assert_eq!(Some('😄'), from_utf16_surrogate_pair(0xd83d, 0xde04));
        assert_eq!(Some('\u{10000}'), from_utf16_surrogate_pair(0xd800, 0xdc00));
        assert_eq!(Some('\u{10ffff}'), from_utf16_surrogate_pair(0xdbff, 0xdfff));
    }

    #[test]
    fn rejects_misordered_halves() {
        assert_eq!(None, from_utf16_surrogate_pair(0xdc00, 0xd800));
        assert_eq!(None, from_utf16_surrogate_pair(0x0041, 0xdc00));
        assert_eq!(None, from_utf16_surrogate_pair(0xd800, 0x0041));
    }
}
