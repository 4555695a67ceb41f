//! Low-level text segmentation for the n-gram full-text tokenizer.
//!
//! This crate has no knowledge of n-grams, tokenizer options or highlighting.
//! It turns a byte buffer into an ordered stream of base [`Token`]s:
//!
//! ```text
//! bytes ──► utf8::validate ──► &str ──► Segmenter ──► Token, Token, ...
//! ```
//!
//! Each token is either a maximal run of ASCII bytes sharing one
//! [`TokenCategory`], or exactly one multi-byte character. Runs of whitespace
//! and control bytes separate tokens and are never emitted.

mod category;
mod cursor;
mod segmenter;
mod span;
mod token;
pub mod utf8;

pub use category::TokenCategory;
pub use cursor::Cursor;
pub use segmenter::{segment, Segmenter};
pub use span::Span;
pub use token::Token;
pub use utf8::{decode, Utf8Error, Utf8ErrorKind};
