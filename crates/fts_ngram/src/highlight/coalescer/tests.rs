use super::*;
use crate::{PhraseInstance, PhraseMatches, ProviderError};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Helper: matches in column 0 for `(phrase_len, token_offset)` pairs, one
/// phrase per instance.
fn column_matches(instances: &[(usize, usize)]) -> PhraseMatches {
    let mut matches = PhraseMatches::new(instances.iter().map(|&(len, _)| len).collect());
    for (phrase, &(_, offset)) in instances.iter().enumerate() {
        matches.push(phrase, 0, offset).unwrap();
    }
    matches
}

fn spans(provider: &PhraseMatches, column: usize) -> Vec<CoalescedSpan> {
    Coalescer::new(provider, column)
        .collect::<Result<_, _>>()
        .unwrap()
}

// === CoalescedSpan ===

#[test]
fn span_len_is_inclusive() {
    assert_eq!(CoalescedSpan::new(3, 3).len(), 1);
    assert_eq!(CoalescedSpan::new(2, 5).len(), 4);
}

#[test]
fn span_debug_format() {
    assert_eq!(format!("{:?}", CoalescedSpan::new(1, 4)), "1..=4");
}

// === Merging ===

#[test]
fn disjoint_instances_stay_separate() {
    let matches = column_matches(&[(1, 0), (2, 3)]);
    assert_eq!(
        spans(&matches, 0),
        vec![CoalescedSpan::new(0, 0), CoalescedSpan::new(3, 4)]
    );
}

#[test]
fn adjacent_instances_merge() {
    let matches = column_matches(&[(2, 0), (1, 2)]);
    assert_eq!(spans(&matches, 0), vec![CoalescedSpan::new(0, 2)]);
}

#[test]
fn overlapping_instances_merge() {
    let matches = column_matches(&[(3, 1), (3, 2)]);
    assert_eq!(spans(&matches, 0), vec![CoalescedSpan::new(1, 4)]);
}

#[test]
fn contained_instance_does_not_shrink_span() {
    let matches = column_matches(&[(5, 0), (1, 2)]);
    assert_eq!(spans(&matches, 0), vec![CoalescedSpan::new(0, 4)]);
}

#[test]
fn chain_merges_through_middle_instance() {
    // C does not touch A, but B bridges them.
    let matches = column_matches(&[(2, 0), (2, 1), (2, 2)]);
    assert_eq!(spans(&matches, 0), vec![CoalescedSpan::new(0, 3)]);
}

#[test]
fn gap_of_one_token_splits() {
    let matches = column_matches(&[(1, 0), (1, 2)]);
    assert_eq!(spans(&matches, 0).len(), 2);
}

// === Filtering ===

#[test]
fn other_columns_are_skipped() {
    let mut matches = PhraseMatches::new(vec![1]);
    matches.push(0, 0, 0).unwrap();
    matches.push(0, 1, 1).unwrap();
    matches.push(0, 2, 2).unwrap();
    assert_eq!(spans(&matches, 1), vec![CoalescedSpan::new(1, 1)]);
    assert!(spans(&matches, 3).is_empty());
}

#[test]
fn empty_phrases_are_skipped() {
    let matches = column_matches(&[(0, 0), (1, 4)]);
    assert_eq!(spans(&matches, 0), vec![CoalescedSpan::new(4, 4)]);
}

#[test]
fn no_instances_yields_nothing() {
    let matches = PhraseMatches::new(Vec::new());
    let mut coalescer = Coalescer::new(&matches, 0);
    assert_eq!(coalescer.advance().unwrap(), None);
    assert_eq!(coalescer.advance().unwrap(), None);
}

// === Provider failures ===

struct FailingProvider {
    fail_at: usize,
}

impl InstanceProvider for FailingProvider {
    fn instance_count(&self) -> Result<usize, ProviderError> {
        Ok(4)
    }

    fn instance(&self, index: usize) -> Result<PhraseInstance, ProviderError> {
        if index == self.fail_at {
            return Err(ProviderError::new("row cursor closed"));
        }
        Ok(PhraseInstance {
            phrase: 0,
            column: 0,
            token_offset: index * 3,
        })
    }

    fn phrase_len(&self, _phrase: usize) -> Result<usize, ProviderError> {
        Ok(1)
    }
}

#[test]
fn provider_error_is_propagated() {
    let provider = FailingProvider { fail_at: 3 };
    let mut coalescer = Coalescer::new(&provider, 0);
    assert_eq!(coalescer.advance().unwrap(), Some(CoalescedSpan::new(0, 0)));
    assert_eq!(coalescer.advance().unwrap(), Some(CoalescedSpan::new(3, 3)));
    let err = coalescer.advance().unwrap_err();
    assert!(matches!(err, FtsError::Provider(ref e) if e.message() == "row cursor closed"));
}

// === Properties ===

proptest! {
    #[test]
    fn spans_are_disjoint_and_ordered(
        mut raw in prop::collection::vec((1usize..4, 0usize..40), 0..20),
    ) {
        raw.sort_by_key(|&(_, offset)| offset);
        let matches = column_matches(&raw);
        let merged = spans(&matches, 0);

        for pair in merged.windows(2) {
            // A gap of at least one token separates consecutive spans.
            prop_assert!(pair[0].end + 1 < pair[1].start);
        }
        for &(len, offset) in &raw {
            let end = offset + len - 1;
            prop_assert!(merged.iter().any(|s| s.start <= offset && end <= s.end));
        }
    }
}
