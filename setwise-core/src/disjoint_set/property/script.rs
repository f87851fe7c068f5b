//! Property 4: Interleaved operation scripts.
//!
//! Runs arbitrary sequences of `add`, `merge`, `find` and `flatten` against
//! both the store and the quick-find oracle. Growth after merges must create
//! fresh singletons, and every observable answer must match the oracle.

use proptest::prop_assert_eq;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{DisjointSet, DisjointSetError};

use super::oracle::QuickFind;
use super::types::Operation;

/// Runs the operation script property.
pub(super) fn run_operation_script_property(script: &[Operation]) -> TestCaseResult {
    let mut sets = DisjointSet::new();
    let mut oracle = QuickFind::default();

    for (step, operation) in script.iter().enumerate() {
        match *operation {
            Operation::Add => {
                prop_assert_eq!(sets.add(), oracle.add(), "add diverged at step {}", step);
            }
            Operation::Merge(left, right) => {
                let Some((left, right)) = resolve_pair(oracle.len(), left, right) else {
                    expect_out_of_range(sets.merge(usize::from(left), usize::from(right)))?;
                    continue;
                };
                sets.merge(left, right).map_err(|err| {
                    TestCaseError::fail(format!("merge failed at step {step}: {err}"))
                })?;
                oracle.merge(left, right);
            }
            Operation::Find(raw) => {
                let Some(label) = resolve(oracle.len(), raw) else {
                    expect_out_of_range(sets.find(usize::from(raw)))?;
                    continue;
                };
                let root = sets.find(label).map_err(|err| {
                    TestCaseError::fail(format!("find failed at step {step}: {err}"))
                })?;
                prop_assert_eq!(root, oracle.minimum(label), "find diverged at step {}", step);
            }
            Operation::Flatten => {
                prop_assert_eq!(
                    sets.flatten(),
                    oracle.canonical_labels(),
                    "flatten diverged at step {}",
                    step,
                );
            }
        }
        prop_assert_eq!(sets.len(), oracle.len());
        prop_assert_eq!(sets.partition_count(), oracle.partition_count());
    }
    Ok(())
}

/// Maps a raw operand onto an assigned label, or `None` for an empty store.
fn resolve(len: usize, raw: u16) -> Option<usize> {
    (len > 0).then(|| usize::from(raw) % len)
}

fn resolve_pair(len: usize, left: u16, right: u16) -> Option<(usize, usize)> {
    Some((resolve(len, left)?, resolve(len, right)?))
}

fn expect_out_of_range<T: std::fmt::Debug>(result: Result<T, DisjointSetError>) -> TestCaseResult {
    match result {
        Err(DisjointSetError::LabelOutOfRange { len: 0, .. }) => Ok(()),
        other => Err(TestCaseError::fail(format!(
            "empty store must reject labels, got {other:?}"
        ))),
    }
}
