use super::*;
use pretty_assertions::assert_eq;

/// Helper: segment a string and return `(text, start, end, category)` tuples.
fn seg(text: &str) -> Vec<(&str, usize, usize, TokenCategory)> {
    Segmenter::new(text)
        .map(|t| (t.text, t.span.start, t.span.end, t.category))
        .collect()
}

// === Category runs ===

#[test]
fn splits_on_whitespace() {
    assert_eq!(
        seg("foo bar"),
        vec![
            ("foo", 0, 3, TokenCategory::Alphabetic),
            ("bar", 4, 7, TokenCategory::Alphabetic),
        ]
    );
}

#[test]
fn splits_on_category_change() {
    assert_eq!(
        seg("abc123!?x"),
        vec![
            ("abc", 0, 3, TokenCategory::Alphabetic),
            ("123", 3, 6, TokenCategory::Digit),
            ("!?", 6, 8, TokenCategory::Punctuation),
            ("x", 8, 9, TokenCategory::Alphabetic),
        ]
    );
}

#[test]
fn mixed_case_is_one_run() {
    assert_eq!(seg("HeLLo"), vec![("HeLLo", 0, 5, TokenCategory::Alphabetic)]);
}

#[test]
fn control_bytes_separate_like_spaces() {
    assert_eq!(
        seg("a\tb\r\nc\0d\x7Fe"),
        vec![
            ("a", 0, 1, TokenCategory::Alphabetic),
            ("b", 2, 3, TokenCategory::Alphabetic),
            ("c", 5, 6, TokenCategory::Alphabetic),
            ("d", 7, 8, TokenCategory::Alphabetic),
            ("e", 9, 10, TokenCategory::Alphabetic),
        ]
    );
}

// === Multi-byte characters ===

#[test]
fn each_multibyte_char_is_its_own_token() {
    assert_eq!(
        seg("中文字"),
        vec![
            ("中", 0, 3, TokenCategory::Other),
            ("文", 3, 6, TokenCategory::Other),
            ("字", 6, 9, TokenCategory::Other),
        ]
    );
}

#[test]
fn latin_followed_by_cjk() {
    assert_eq!(
        seg("Hello世界"),
        vec![
            ("Hello", 0, 5, TokenCategory::Alphabetic),
            ("世", 5, 8, TokenCategory::Other),
            ("界", 8, 11, TokenCategory::Other),
        ]
    );
}

#[test]
fn every_sequence_length() {
    assert_eq!(
        seg("é中\u{1F600}"),
        vec![
            ("é", 0, 2, TokenCategory::Other),
            ("中", 2, 5, TokenCategory::Other),
            ("\u{1F600}", 5, 9, TokenCategory::Other),
        ]
    );
}

// === Empty and separator-only input ===

#[test]
fn empty_input_yields_nothing() {
    assert!(seg("").is_empty());
}

#[test]
fn whitespace_only_yields_nothing() {
    assert!(seg(" \t\n  \r\n").is_empty());
}

#[test]
fn iterator_is_fused() {
    let mut tokens = Segmenter::new("a");
    assert!(tokens.next().is_some());
    assert!(tokens.next().is_none());
    assert!(tokens.next().is_none());
}

// === Byte input ===

#[test]
fn segment_validates_bytes() {
    let tokens = segment("東京 tower".as_bytes()).unwrap();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[2].text, "tower");

    let err = segment(b"ok \xE4\xB8").unwrap_err();
    assert_eq!(err.pos, 3);
    assert_eq!(err.kind, utf8::Utf8ErrorKind::Truncated);
}

#[test]
fn segment_rejects_non_characters() {
    assert!(segment("a\u{FFFF}".as_bytes()).is_err());
}

// === Properties ===

mod proptest_segmenter {
    use super::super::*;
    use proptest::prelude::*;

    fn text_strategy() -> impl Strategy<Value = String> {
        proptest::collection::vec(
            prop_oneof![
                Just(' '),
                Just('\t'),
                Just('\n'),
                Just('a'),
                Just('Z'),
                Just('7'),
                Just('.'),
                Just('é'),
                Just('中'),
                Just('\u{1F600}'),
                any::<char>(),
            ],
            0..64,
        )
        .prop_map(|chars| chars.into_iter().collect())
    }

    proptest! {
        #[test]
        fn tokens_and_gaps_rebuild_the_input(text in text_strategy()) {
            let mut rebuilt = String::new();
            let mut pos = 0;
            for token in Segmenter::new(&text) {
                let gap = &text[pos..token.span.start];
                prop_assert!(
                    gap.bytes().all(|b| TokenCategory::of(b) == TokenCategory::WhitespaceOrControl),
                    "gap {:?} contains indexed bytes", gap
                );
                rebuilt.push_str(gap);
                rebuilt.push_str(token.text);
                pos = token.span.end;
            }
            let tail = &text[pos..];
            prop_assert!(tail.bytes().all(|b| TokenCategory::of(b) == TokenCategory::WhitespaceOrControl));
            rebuilt.push_str(tail);
            prop_assert_eq!(rebuilt, text);
        }

        #[test]
        fn tokens_are_ordered_and_non_empty(text in text_strategy()) {
            let tokens: Vec<_> = Segmenter::new(&text).collect();
            for token in &tokens {
                prop_assert!(token.span.start < token.span.end);
                prop_assert_eq!(token.text, &text[token.span.as_range()]);
            }
            for pair in tokens.windows(2) {
                prop_assert!(pair[0].span.end <= pair[1].span.start);
            }
        }

        #[test]
        fn other_tokens_are_single_chars(text in text_strategy()) {
            for token in Segmenter::new(&text) {
                if token.category == TokenCategory::Other {
                    prop_assert_eq!(token.text.chars().count(), 1);
                }
            }
        }
    }
}
