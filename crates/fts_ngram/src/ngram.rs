//! N-gram window assembly over base tokens.
//!
//! For each base token `i` a window is grown from `i`:
//!
//! 1. Token `i` is always a member.
//! 2. Token `i + j` joins only if it is `Other` and so is the member before
//!    it. ASCII runs therefore always stand alone, while consecutive
//!    multi-byte characters form windows of up to `gram` tokens.
//! 3. A window cut short by the end of input is dropped when the last `gram`
//!    tokens are all `Other`: the full window that started before it already
//!    covers every one of its members.
//! 4. When the previous window was a single ASCII token and the current one
//!    is a multi-character window, each proper prefix of the current window is
//!    emitted first (`"Hello世界"` yields `世` before `世界`), so the first
//!    character after a script change is searchable on its own.

use std::borrow::Cow;
use std::iter::FusedIterator;

use fts_ngram_core::{Segmenter, Span, Token, TokenCategory};

use crate::TokenizerConfig;

/// One emitted n-gram.
///
/// `text` is the concatenation of the member tokens, ASCII-lowercased unless
/// the tokenizer is case sensitive. `span` runs from the start of the first
/// member to the end of the last one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NgramToken<'a> {
    pub text: Cow<'a, str>,
    pub span: Span,
}

impl NgramToken<'_> {
    /// Detach the token from the source text.
    pub fn into_owned(self) -> NgramToken<'static> {
        NgramToken {
            text: Cow::Owned(self.text.into_owned()),
            span: self.span,
        }
    }
}

/// A run of `len` base tokens starting at index `start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Window {
    start: usize,
    len: usize,
}

/// Lazy, single-pass iterator over the n-grams of one text.
///
/// Created by [`NgramTokenizer::ngrams`](crate::NgramTokenizer::ngrams).
/// Windows come out in order of their first token, so `span.start` never
/// decreases.
#[derive(Clone, Debug)]
pub struct Ngrams<'a> {
    source: &'a str,
    tokens: Vec<Token<'a>>,
    gram: usize,
    case_sensitive: bool,
    /// Whether a window cut short at the end is already covered (rule 3).
    tail_covered: bool,
    /// Index of the base token the next window starts at.
    next_start: usize,
    /// Shape of the last emitted window: `(len, first member category)`.
    prev: Option<(usize, TokenCategory)>,
    /// Prefix replay in progress: the full window and the next prefix length.
    replay: Option<(Window, usize)>,
}

impl<'a> Ngrams<'a> {
    pub(crate) fn new(source: &'a str, config: TokenizerConfig) -> Self {
        let tokens: Vec<Token<'a>> = Segmenter::new(source).collect();
        let gram = config.gram().get();
        let tail_covered = tokens.len() >= gram
            && tokens[tokens.len() - gram..]
                .iter()
                .all(|t| t.category == TokenCategory::Other);

        for token in &tokens {
            tracing::trace!(text = token.text, span = %token.span, category = %token.category, "base token");
        }

        Ngrams {
            source,
            tokens,
            gram,
            case_sensitive: config.case_sensitive(),
            tail_covered,
            next_start: 0,
            prev: None,
            replay: None,
        }
    }

    /// The base tokens the windows are built from.
    pub fn base_tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    /// Grow the window starting at `start`, or `None` if it is suppressed.
    fn window_at(&self, start: usize) -> Option<Window> {
        let mut len = 1;
        while len < self.gram {
            let Some(next) = self.tokens.get(start + len) else {
                if self.tail_covered {
                    return None;
                }
                break;
            };
            let prev = self.tokens[start + len - 1].category;
            if next.category != TokenCategory::Other || next.category != prev {
                break;
            }
            len += 1;
        }
        Some(Window { start, len })
    }

    fn emit(&self, window: Window) -> NgramToken<'a> {
        let members = &self.tokens[window.start..window.start + window.len];
        let span = members[0].span.merge(members[members.len() - 1].span);

        let contiguous = members
            .windows(2)
            .all(|pair| pair[0].span.end == pair[1].span.start);
        let text = if contiguous {
            Cow::Borrowed(&self.source[span.as_range()])
        } else {
            Cow::Owned(members.iter().map(|t| t.text).collect())
        };
        let text = if self.case_sensitive {
            text
        } else {
            fold_ascii_case(text)
        };

        tracing::trace!(text = %text, %span, "n-gram");
        NgramToken { text, span }
    }
}

impl<'a> Iterator for Ngrams<'a> {
    type Item = NgramToken<'a>;

    fn next(&mut self) -> Option<NgramToken<'a>> {
        if let Some((window, len)) = self.replay.take() {
            if len < window.len {
                self.replay = Some((window, len + 1));
            }
            return Some(self.emit(Window {
                start: window.start,
                len,
            }));
        }

        while self.next_start < self.tokens.len() {
            let start = self.next_start;
            self.next_start += 1;

            let Some(window) = self.window_at(start) else {
                tracing::trace!(start, "tail window already covered");
                continue;
            };

            let first = self.tokens[start].category;
            let after_single_ascii =
                matches!(self.prev, Some((1, category)) if category != TokenCategory::Other);
            self.prev = Some((window.len, first));

            if after_single_ascii && first == TokenCategory::Other && window.len > 1 {
                self.replay = Some((window, 2));
                return Some(self.emit(Window { start, len: 1 }));
            }
            return Some(self.emit(window));
        }
        None
    }
}

impl FusedIterator for Ngrams<'_> {}

/// Lowercase ASCII letters, leaving every other byte untouched.
fn fold_ascii_case(text: Cow<'_, str>) -> Cow<'_, str> {
    if text.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(text.to_ascii_lowercase())
    } else {
        text
    }
}
