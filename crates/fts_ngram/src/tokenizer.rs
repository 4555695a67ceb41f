//! The host-facing n-gram tokenizer.

use crate::{FtsError, NgramToken, Ngrams, TokenizerConfig};

/// N-gram tokenizer with a fixed configuration.
///
/// Holds no per-call state, so one instance can serve any number of
/// concurrent calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NgramTokenizer {
    config: TokenizerConfig,
}

/// Why [`NgramTokenizer::tokenize`] stopped early.
#[derive(Debug, thiserror::Error)]
pub enum TokenizeError<E> {
    /// The input could not be tokenized.
    #[error(transparent)]
    Fts(#[from] FtsError),
    /// The emit callback asked to stop; its value is passed through untouched.
    #[error("token consumer stopped tokenization")]
    Emit(E),
}

impl NgramTokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        tracing::debug!(
            gram = %config.gram(),
            case_sensitive = config.case_sensitive(),
            "creating n-gram tokenizer"
        );
        NgramTokenizer { config }
    }

    /// Build a tokenizer from the host's flat option list.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, FtsError> {
        Ok(Self::new(TokenizerConfig::from_args(args)?))
    }

    pub fn config(&self) -> TokenizerConfig {
        self.config
    }

    /// Lazily tokenize `bytes`.
    ///
    /// The whole buffer is validated up front: on malformed input nothing is
    /// produced at all.
    #[tracing::instrument(level = "debug", skip_all, fields(len = bytes.len(), gram = %self.config.gram()))]
    pub fn ngrams<'a>(&self, bytes: &'a [u8]) -> Result<Ngrams<'a>, FtsError> {
        let text = fts_ngram_core::decode(bytes)
            .inspect_err(|err| tracing::warn!(%err, "rejecting malformed input"))?;
        Ok(Ngrams::new(text, self.config))
    }

    /// Tokenize `bytes`, handing every n-gram to `emit` in order.
    ///
    /// The first `Err` returned by `emit` ends tokenization immediately and is
    /// returned as [`TokenizeError::Emit`].
    pub fn tokenize<E, F>(&self, bytes: &[u8], mut emit: F) -> Result<(), TokenizeError<E>>
    where
        F: FnMut(&NgramToken<'_>) -> Result<(), E>,
    {
        for token in self.ngrams(bytes)? {
            emit(&token).map_err(TokenizeError::Emit)?;
        }
        Ok(())
    }
}
