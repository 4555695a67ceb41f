//! Error types shared by the tokenizer and the highlighter.

use fts_ngram_core::Utf8Error;

use crate::ConfigError;

/// Any failure of a tokenizer or highlighter call.
///
/// Nothing is retried internally; a failed call produces no usable output.
#[derive(Debug, thiserror::Error)]
pub enum FtsError {
    /// Input text (or a highlighted column) is not well-formed UTF-8.
    #[error(transparent)]
    InvalidUtf8(#[from] Utf8Error),
    /// Unknown option or out-of-range value at construction.
    #[error("invalid tokenizer configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    /// The output buffer could not grow.
    #[error("out of memory while assembling output ({requested} more bytes requested)")]
    OutOfMemory { requested: usize },
    /// The host's phrase-instance stream reported a failure.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Failure reported by an [`InstanceProvider`](crate::InstanceProvider).
#[derive(Debug, thiserror::Error)]
#[error("phrase instance provider failed: {message}")]
pub struct ProviderError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        ProviderError {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap a host error.
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        ProviderError {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
