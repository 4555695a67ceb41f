//! Single-pass category-run segmentation.
//!
//! The segmenter walks the text once. At each position the current byte is
//! classified:
//!
//! - `Other` (a non-ASCII lead byte): the token is exactly one character, its
//!   length taken from the UTF-8 lead-byte table.
//! - anything else: the run is extended while following bytes share the
//!   category.
//!
//! Whitespace/control runs are consumed but never yielded. Everything else is
//! yielded in source order, so token spans are strictly increasing and never
//! overlap.

use std::iter::FusedIterator;

use crate::utf8::{self, Utf8Error};
use crate::{Cursor, Span, Token, TokenCategory};

/// Lazy iterator over the base tokens of a string.
///
/// Input is `&str`, so every multi-byte lead byte the scanner meets is valid
/// and the scan always ends exactly at the end of the text. Use
/// [`segment`] to start from raw bytes.
#[derive(Clone, Debug)]
pub struct Segmenter<'a> {
    text: &'a str,
    cursor: Cursor<'a>,
}

impl<'a> Segmenter<'a> {
    pub fn new(text: &'a str) -> Self {
        Segmenter {
            text,
            cursor: Cursor::new(text.as_bytes()),
        }
    }

    /// Validate `bytes`, then segment them.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, Utf8Error> {
        Ok(Self::new(utf8::decode(bytes)?))
    }

    /// The text being segmented.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Consume one run (or one character) and return its category and span.
    fn next_run(&mut self) -> Option<(TokenCategory, Span)> {
        let start = self.cursor.pos();
        let byte = self.cursor.current()?;
        let category = TokenCategory::of(byte);

        if category == TokenCategory::Other {
            // Lead bytes of a `&str` are always in the table.
            let len = utf8::sequence_len(byte).unwrap_or(1);
            self.cursor.advance_n(len);
        } else {
            self.cursor.advance();
            self.cursor.eat_while(|b| TokenCategory::of(b) == category);
        }

        Some((category, Span::new(start, self.cursor.pos())))
    }
}

impl<'a> Iterator for Segmenter<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        loop {
            let (category, span) = self.next_run()?;
            if category.is_indexed() {
                return Some(Token::new(&self.text[span.as_range()], span, category));
            }
        }
    }
}

impl FusedIterator for Segmenter<'_> {}

/// Validate `bytes` and collect every base token.
///
/// Fails without yielding anything if the buffer is not valid UTF-8.
pub fn segment(bytes: &[u8]) -> Result<Vec<Token<'_>>, Utf8Error> {
    Ok(Segmenter::from_bytes(bytes)?.collect())
}

#[cfg(test)]
mod tests;
