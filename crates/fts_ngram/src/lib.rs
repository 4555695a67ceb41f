//! N-gram full-text tokenizer and phrase-match highlighter.
//!
//! Built on the base segmentation of [`fts_ngram_core`].
//!
//! # Indexing
//!
//! ```text
//! bytes ──► validate ──► Segmenter ──► Ngrams ──► NgramToken { text, span }
//! ```
//!
//! [`NgramTokenizer`] groups consecutive multi-byte characters into windows of
//! up to `gram` tokens. ASCII runs (words, numbers, punctuation) are always
//! emitted alone.
//!
//! # Highlighting
//!
//! ```text
//! phrase instances ──► Coalescer ──► CoalescedSpan
//!                                        │
//! text ──► Segmenter ────────────────────┴──► Highlighter ──► marked-up text
//! ```

mod config;
mod error;
mod highlight;
mod ngram;
mod tokenizer;

pub use config::{ConfigError, Gram, TokenizerConfig};
pub use error::{FtsError, ProviderError};
pub use highlight::{
    CoalescedSpan, Coalescer, Highlighter, InstanceProvider, PhraseInstance, PhraseMatches,
};
pub use ngram::{NgramToken, Ngrams};
pub use tokenizer::{NgramTokenizer, TokenizeError};

pub use fts_ngram_core::{Span, Token, TokenCategory, Utf8Error, Utf8ErrorKind};
