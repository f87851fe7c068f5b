//! Benchmark support crate for setwise.
//!
//! Provides a synthetic connected-component labelling pass over random binary
//! grids, the kind of caller the disjoint-set store is built for, together
//! with the parameter types used by the Criterion benchmarks.

pub mod error;
pub mod grid;
pub mod params;
