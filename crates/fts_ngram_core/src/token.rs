//! Base tokens produced by the segmenter.

use crate::{Span, TokenCategory};

/// One base token: a maximal same-category ASCII run, or one multi-byte
/// character.
///
/// `text` is always the exact source slice at `span`; tokens are never
/// normalized at this layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    pub text: &'a str,
    pub span: Span,
    pub category: TokenCategory,
}

impl<'a> Token<'a> {
    #[inline]
    pub fn new(text: &'a str, span: Span, category: TokenCategory) -> Self {
        debug_assert!(span.start < span.end, "empty token at {span}");
        debug_assert_eq!(text.len(), span.len(), "token text does not match {span}");
        Token {
            text,
            span,
            category,
        }
    }
}
