//! Benchmark setup error type.
//!
//! Collects the failures that can occur while preparing benchmark inputs so
//! setup functions can propagate them with `?` instead of panicking.

use setwise_core::DisjointSetError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A grid dimension was zero.
    #[error("grid {dimension} must be non-zero")]
    ZeroDimension {
        /// Name of the offending dimension.
        dimension: &'static str,
    },
    /// The foreground fill ratio was outside `[0, 1]` or not a number.
    #[error("fill ratio {ratio} must lie within [0, 1]")]
    InvalidFillRatio {
        /// Ratio supplied by the caller.
        ratio: f64,
    },
    /// A textual grid row had a different width from the first row.
    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A textual grid contained a character other than `#` or `.`.
    #[error("unexpected grid cell `{cell}`; expected `#` or `.`")]
    UnknownCell {
        /// The unexpected character.
        cell: char,
    },
    /// The disjoint-set store rejected an operation.
    #[error("disjoint-set operation failed: {0}")]
    DisjointSet(#[from] DisjointSetError),
}
