//! Immutable migration chain
//!
//! An ordered sequence of [`Step`]s with persistent append: `append` leaves
//! the receiver untouched and returns a new chain sharing structure with it.
//! The chain performs no version-ordering checks; a sequence can be
//! assembled by hand outside the builder, so well-formedness is validated
//! where the sequence is consumed.

use crate::step::Step;
use im::Vector;

/// Ordered, immutable sequence of migration steps
#[derive(Debug, Clone, Default)]
pub struct Chain {
    steps: Vector<Step>,
}

impl Chain {
    /// Create an empty chain
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Return a new chain with `step` appended
    ///
    /// The receiver is unaffected; both chains remain usable.
    #[must_use]
    pub fn append(&self, step: Step) -> Self {
        let mut steps = self.steps.clone();
        steps.push_back(step);
        Self { steps }
    }

    /// The chain's steps as a read-only ordered sequence
    #[must_use]
    pub fn finalize(&self) -> Vec<Step> {
        self.steps.iter().cloned().collect()
    }

    /// Number of steps
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the chain has no steps
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterate over the steps in order
    pub fn iter(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::{prop_assert_eq, proptest};
    use serde_json::{json, Value};
    use vershift_schema::TypedValidator;

    fn step(version: u64) -> Step {
        Step::raw(version, TypedValidator::<Value>::new(), |value| Ok(value))
    }

    #[test]
    fn empty_chain() {
        let chain = Chain::empty();
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
        assert!(chain.finalize().is_empty());
    }

    #[test]
    fn append_preserves_order() {
        let chain = Chain::empty()
            .append(step(1))
            .append(step(2))
            .append(step(3));

        let versions: Vec<u64> = chain.iter().map(Step::version).collect();
        assert_eq!(versions, vec![1, 2, 3]);
        assert_eq!(chain.finalize().len(), 3);
    }

    #[test]
    fn append_does_not_mutate_the_receiver() {
        let base = Chain::empty().append(step(1));
        let left = base.append(step(2));
        let right = base.append(step(5));

        assert_eq!(base.len(), 1);
        assert_eq!(left.len(), 2);
        assert_eq!(right.len(), 2);
        assert_eq!(left.finalize()[1].version(), 2);
        assert_eq!(right.finalize()[1].version(), 5);
    }

    #[test]
    fn unordered_appends_are_accepted() {
        // Ordering is the consumer's concern, not the builder's.
        let chain = Chain::empty().append(step(2)).append(step(1));
        let versions: Vec<u64> = chain.iter().map(Step::version).collect();
        assert_eq!(versions, vec![2, 1]);
    }

    #[test]
    fn finalize_round_trips_applications() {
        let chain = Chain::empty().append(step(1));
        let steps = chain.finalize();
        assert_eq!(steps[0].apply(json!({"a": 1})).unwrap(), json!({"a": 1}));
    }

    proptest! {
        #[test]
        fn prop_append_preserves_length_and_order(
            versions in proptest::collection::vec(1u64..1000, 0..20)
        ) {
            let chain = versions
                .iter()
                .fold(Chain::empty(), |chain, &version| chain.append(step(version)));

            prop_assert_eq!(chain.len(), versions.len());
            let seen: Vec<u64> = chain.iter().map(Step::version).collect();
            prop_assert_eq!(seen, versions);
        }
    }
}
