//! Phrase-match instances supplied by the host search engine.

use crate::ProviderError;

/// One reported occurrence of a query phrase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PhraseInstance {
    /// Index of the matched phrase within the query.
    pub phrase: usize,
    /// Column the match was found in.
    pub column: usize,
    /// Ordinal of the first matched token within the column.
    pub token_offset: usize,
}

/// Index-based access to the phrase instances of the current row.
///
/// Instances must be ordered by `token_offset` within each column. Phrase
/// lengths (in tokens) are looked up separately, as search engines store them
/// per phrase rather than per instance.
pub trait InstanceProvider {
    fn instance_count(&self) -> Result<usize, ProviderError>;

    fn instance(&self, index: usize) -> Result<PhraseInstance, ProviderError>;

    /// Number of tokens in phrase `phrase`.
    fn phrase_len(&self, phrase: usize) -> Result<usize, ProviderError>;
}

impl<P: InstanceProvider + ?Sized> InstanceProvider for &P {
    fn instance_count(&self) -> Result<usize, ProviderError> {
        (**self).instance_count()
    }

    fn instance(&self, index: usize) -> Result<PhraseInstance, ProviderError> {
        (**self).instance(index)
    }

    fn phrase_len(&self, phrase: usize) -> Result<usize, ProviderError> {
        (**self).phrase_len(phrase)
    }
}

/// In-memory instance list.
///
/// Keeps instances sorted by `(column, token_offset)` regardless of insertion
/// order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhraseMatches {
    phrase_lens: Vec<usize>,
    instances: Vec<PhraseInstance>,
}

impl PhraseMatches {
    /// Create an empty list for a query whose phrase `i` is
    /// `phrase_lens[i]` tokens long.
    pub fn new(phrase_lens: Vec<usize>) -> Self {
        PhraseMatches {
            phrase_lens,
            instances: Vec::new(),
        }
    }

    /// Record a match of `phrase` in `column` starting at `token_offset`.
    pub fn push(
        &mut self,
        phrase: usize,
        column: usize,
        token_offset: usize,
    ) -> Result<(), ProviderError> {
        if phrase >= self.phrase_lens.len() {
            return Err(ProviderError::new(format!(
                "phrase {phrase} is not part of the query ({} phrases)",
                self.phrase_lens.len()
            )));
        }
        let instance = PhraseInstance {
            phrase,
            column,
            token_offset,
        };
        let at = self
            .instances
            .partition_point(|i| (i.column, i.token_offset) <= (column, token_offset));
        self.instances.insert(at, instance);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl InstanceProvider for PhraseMatches {
    fn instance_count(&self) -> Result<usize, ProviderError> {
        Ok(self.instances.len())
    }

    fn instance(&self, index: usize) -> Result<PhraseInstance, ProviderError> {
        self.instances.get(index).copied().ok_or_else(|| {
            ProviderError::new(format!(
                "instance {index} out of range ({} instances)",
                self.instances.len()
            ))
        })
    }

    fn phrase_len(&self, phrase: usize) -> Result<usize, ProviderError> {
        self.phrase_lens
            .get(phrase)
            .copied()
            .ok_or_else(|| ProviderError::new(format!("unknown phrase {phrase}")))
    }
}
