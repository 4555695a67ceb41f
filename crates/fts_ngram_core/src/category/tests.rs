use super::*;

// === Agreement with the C locale ===

#[test]
fn matches_ascii_ctype_for_every_ascii_byte() {
    for byte in 0u8..0x80 {
        let expected = if byte.is_ascii_digit() {
            TokenCategory::Digit
        } else if byte.is_ascii_whitespace() || byte.is_ascii_control() {
            TokenCategory::WhitespaceOrControl
        } else if byte.is_ascii_alphabetic() {
            TokenCategory::Alphabetic
        } else if byte.is_ascii_punctuation() {
            TokenCategory::Punctuation
        } else {
            TokenCategory::Other
        };
        assert_eq!(
            TokenCategory::of(byte),
            expected,
            "byte {byte:#04x} misclassified"
        );
    }
}

#[test]
fn high_bytes_are_other() {
    for byte in 0x80u8..=0xFF {
        assert_eq!(TokenCategory::of(byte), TokenCategory::Other);
    }
}

#[test]
fn space_is_not_other() {
    // 0x20 is the one printable byte classified as a separator.
    assert_eq!(TokenCategory::of(b' '), TokenCategory::WhitespaceOrControl);
    assert_eq!(TokenCategory::of(0x0B), TokenCategory::WhitespaceOrControl);
    assert_eq!(TokenCategory::of(0x7F), TokenCategory::WhitespaceOrControl);
    assert_eq!(TokenCategory::of(0x00), TokenCategory::WhitespaceOrControl);
}

#[test]
fn punctuation_boundaries() {
    for byte in [b'!', b'/', b':', b'@', b'[', b'`', b'{', b'~'] {
        assert_eq!(TokenCategory::of(byte), TokenCategory::Punctuation);
    }
}

// === Helpers ===

#[test]
fn only_separators_are_unindexed() {
    assert!(!TokenCategory::WhitespaceOrControl.is_indexed());
    for category in [
        TokenCategory::Digit,
        TokenCategory::Alphabetic,
        TokenCategory::Punctuation,
        TokenCategory::Other,
    ] {
        assert!(category.is_indexed(), "{category} should be indexed");
    }
}

#[test]
fn display_uses_short_names() {
    assert_eq!(TokenCategory::Alphabetic.to_string(), "alpha");
    assert_eq!(TokenCategory::Other.to_string(), "other");
}

#[test]
fn category_is_one_byte() {
    assert_eq!(std::mem::size_of::<TokenCategory>(), 1);
}
