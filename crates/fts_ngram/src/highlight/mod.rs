//! Phrase-match highlighting.
//!
//! The column text is re-segmented with the base [`Segmenter`], independent of
//! the gram size used for indexing: phrase instances address base token
//! ordinals. Literal text is copied through unchanged and each coalesced span
//! is wrapped in the caller's markers.

mod coalescer;
mod provider;

pub use coalescer::{CoalescedSpan, Coalescer};
pub use provider::{InstanceProvider, PhraseInstance, PhraseMatches};

use fts_ngram_core::Segmenter;

use crate::FtsError;

/// Wraps matched token spans in open/close markers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlighter<'m> {
    open: &'m str,
    close: &'m str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MatchState {
    BeforeMatch,
    InsideMatch,
}

impl<'m> Highlighter<'m> {
    pub fn new(open: &'m str, close: &'m str) -> Self {
        Highlighter { open, close }
    }

    /// Mark up `text`, the full contents of `column`, using the phrase
    /// instances reported by `provider`.
    ///
    /// A span still open when the tokens run out is closed after the trailing
    /// text. Any error aborts the pass; no partial output is returned.
    #[tracing::instrument(level = "debug", skip_all, fields(column = column, len = text.len()))]
    pub fn highlight<P>(&self, text: &[u8], column: usize, provider: &P) -> Result<String, FtsError>
    where
        P: InstanceProvider + ?Sized,
    {
        let text = fts_ngram_core::decode(text)
            .inspect_err(|err| tracing::warn!(%err, "column text is not valid UTF-8"))?;

        let mut spans = Coalescer::new(provider, column);
        let mut current = spans.advance()?;
        let mut state = MatchState::BeforeMatch;
        let mut out = String::new();
        let mut offset = 0;

        for (ordinal, token) in Segmenter::new(text).enumerate() {
            let Some(span) = current else {
                break;
            };

            if state == MatchState::BeforeMatch && ordinal == span.start {
                append(&mut out, &text[offset..token.span.start])?;
                append(&mut out, self.open)?;
                offset = token.span.start;
                state = MatchState::InsideMatch;
            }
            if state == MatchState::InsideMatch && ordinal == span.end {
                append(&mut out, &text[offset..token.span.end])?;
                append(&mut out, self.close)?;
                offset = token.span.end;
                current = spans.advance()?;
                state = MatchState::BeforeMatch;
            }
        }

        append(&mut out, &text[offset..])?;
        if state == MatchState::InsideMatch {
            tracing::debug!("match runs past the last token, closing at end of text");
            append(&mut out, self.close)?;
        }
        Ok(out)
    }
}

/// Push `s` onto `out`, reporting allocation failure instead of aborting.
fn append(out: &mut String, s: &str) -> Result<(), FtsError> {
    out.try_reserve(s.len())
        .map_err(|_| FtsError::OutOfMemory { requested: s.len() })?;
    out.push_str(s);
    Ok(())
}
