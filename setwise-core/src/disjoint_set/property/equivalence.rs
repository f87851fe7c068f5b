//! Property 1: Oracle equivalence.
//!
//! Applies the fixture's merges to both the store and the quick-find oracle
//! and requires identical partition counts after every merge, identical roots
//! (the minimum label of each partition) and identical canonical labels.

use proptest::prop_assert_eq;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::DisjointSet;

use super::oracle::QuickFind;
use super::types::SetFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &SetFixture) -> TestCaseResult {
    let mut sets = DisjointSet::new();
    sets.add_many(fixture.element_count);
    let mut oracle = QuickFind::new(fixture.element_count);

    for (step, &(left, right)) in fixture.merges.iter().enumerate() {
        sets.merge(left, right).map_err(|err| {
            TestCaseError::fail(format!(
                "merge({left}, {right}) failed at step {step}: {err} (pattern={:?})",
                fixture.pattern,
            ))
        })?;
        oracle.merge(left, right);
        prop_assert_eq!(
            sets.partition_count(),
            oracle.partition_count(),
            "partition count diverged at step {}",
            step,
        );
    }

    for label in 0..fixture.element_count {
        let root = sets
            .find(label)
            .map_err(|err| TestCaseError::fail(format!("find({label}) failed: {err}")))?;
        prop_assert_eq!(
            root,
            oracle.minimum(label),
            "root of {} is not its partition minimum (pattern={:?})",
            label,
            fixture.pattern,
        );
    }

    prop_assert_eq!(sets.flatten(), oracle.canonical_labels());
    Ok(())
}
