//! Property-based tests for the disjoint-set store.
//!
//! Checks the store against a quick-find oracle, validates the structural
//! invariants (idempotent lookups, minimal roots, merge closure, partition
//! counting) and the canonical labelling produced by `flatten` across merge
//! patterns that stress compression in different ways.

mod equivalence;
mod oracle;
mod script;
