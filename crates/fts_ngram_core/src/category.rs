//! Locale-independent byte classification.

use std::fmt;

/// Category of a single byte, and of the token built from it.
///
/// Classification follows the C locale: only ASCII bytes can be digits,
/// whitespace/control, letters or punctuation. Every byte `>= 0x80` is
/// [`Other`](TokenCategory::Other); such a byte starts (or continues) a
/// multi-byte character and is never merged into an ASCII run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenCategory {
    /// `0-9`.
    Digit,
    /// Space, `\t`, `\n`, `\v`, `\f`, `\r`, the other C0 controls and DEL.
    WhitespaceOrControl,
    /// `A-Z` and `a-z`.
    Alphabetic,
    /// Printable ASCII that is neither a letter, a digit nor a space.
    Punctuation,
    /// Non-ASCII: one multi-byte character per token.
    Other,
}

impl TokenCategory {
    /// Classify one byte.
    #[inline]
    pub const fn of(byte: u8) -> Self {
        match byte {
            b'0'..=b'9' => TokenCategory::Digit,
            0x00..=0x20 | 0x7F => TokenCategory::WhitespaceOrControl,
            b'A'..=b'Z' | b'a'..=b'z' => TokenCategory::Alphabetic,
            b'!'..=b'/' | b':'..=b'@' | b'['..=b'`' | b'{'..=b'~' => TokenCategory::Punctuation,
            0x80..=0xFF => TokenCategory::Other,
        }
    }

    /// Whether runs of this category become tokens.
    ///
    /// Whitespace and control runs only separate tokens.
    #[inline]
    pub const fn is_indexed(self) -> bool {
        !matches!(self, TokenCategory::WhitespaceOrControl)
    }

    /// Short lowercase name, used in logs and CLI output.
    pub const fn name(self) -> &'static str {
        match self {
            TokenCategory::Digit => "digit",
            TokenCategory::WhitespaceOrControl => "space",
            TokenCategory::Alphabetic => "alpha",
            TokenCategory::Punctuation => "punct",
            TokenCategory::Other => "other",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests;
