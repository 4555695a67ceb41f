//! Merging of touching and overlapping phrase instances.

use std::fmt;

use super::InstanceProvider;
use crate::FtsError;

/// Inclusive range of token ordinals covered by one or more phrase instances.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoalescedSpan {
    pub start: usize,
    /// Ordinal of the last covered token (inclusive).
    pub end: usize,
}

impl CoalescedSpan {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "coalesced span start must not exceed end");
        CoalescedSpan { start, end }
    }

    /// Number of covered tokens; never zero.
    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start + 1
    }
}

impl fmt::Debug for CoalescedSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// Forward-only iterator over the coalesced spans of one column.
///
/// Instances are pulled from the provider in index order. An instance that
/// starts at most one token past the open span extends it; the first one that
/// does not is left unconsumed and opens the next span. The iterator cannot be
/// rewound: create a new `Coalescer` for another pass.
pub struct Coalescer<'p, P: ?Sized> {
    provider: &'p P,
    column: usize,
    next: usize,
    /// Instance count, fetched on first use.
    count: Option<usize>,
}

impl<'p, P: InstanceProvider + ?Sized> Coalescer<'p, P> {
    pub fn new(provider: &'p P, column: usize) -> Self {
        Coalescer {
            provider,
            column,
            next: 0,
            count: None,
        }
    }

    /// The next merged span, or `None` once the instances are exhausted.
    pub fn advance(&mut self) -> Result<Option<CoalescedSpan>, FtsError> {
        let count = match self.count {
            Some(count) => count,
            None => {
                let count = self.provider.instance_count()?;
                self.count = Some(count);
                count
            }
        };

        let mut open: Option<CoalescedSpan> = None;
        while self.next < count {
            let instance = self.provider.instance(self.next)?;
            if instance.column != self.column {
                self.next += 1;
                continue;
            }
            let phrase_len = self.provider.phrase_len(instance.phrase)?;
            if phrase_len == 0 {
                tracing::trace!(phrase = instance.phrase, "skipping empty phrase");
                self.next += 1;
                continue;
            }
            let end = instance.token_offset.saturating_add(phrase_len - 1);

            match open.as_mut() {
                None => open = Some(CoalescedSpan::new(instance.token_offset, end)),
                Some(span) if instance.token_offset <= span.end.saturating_add(1) => {
                    span.end = span.end.max(end);
                }
                Some(_) => break,
            }
            self.next += 1;
        }

        if let Some(span) = open {
            tracing::trace!(?span, column = self.column, "coalesced span");
        }
        Ok(open)
    }
}

impl<P: InstanceProvider + ?Sized> Iterator for Coalescer<'_, P> {
    type Item = Result<CoalescedSpan, FtsError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().transpose()
    }
}

impl<P: ?Sized> fmt::Debug for Coalescer<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coalescer")
            .field("column", &self.column)
            .field("next", &self.next)
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
