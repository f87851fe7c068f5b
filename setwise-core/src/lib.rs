//! Setwise core library.
//!
//! Provides [`DisjointSet`], a growable union-find store used to compute
//! connected components and equivalence classes over integer labels. Callers
//! add elements, merge the partitions of related elements, and finally call
//! [`DisjointSet::flatten`] to obtain dense canonical labels.
//!
//! The store performs no internal locking. Lookups compress paths and
//! therefore mutate state, so concurrent use requires a single exclusive lock
//! around the whole store.

mod disjoint_set;
mod error;
#[cfg(test)]
mod test_utils;

pub use crate::{
    disjoint_set::DisjointSet,
    error::{DisjointSetError, DisjointSetErrorCode, Result},
};
