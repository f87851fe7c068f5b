//! Benchmark parameter types.
//!
//! Groups benchmark inputs into structs whose `Display` output doubles as the
//! Criterion benchmark id.

use std::fmt;

use crate::grid::Connectivity;

/// Parameters for a grid labelling benchmark run.
#[derive(Clone, Debug)]
pub struct LabellingBenchParams {
    /// Grid side length; grids are square.
    pub side: usize,
    /// Foreground fill ratio in percent.
    pub fill_percent: u8,
    /// Neighbourhood used when joining cells.
    pub connectivity: Connectivity,
}

impl fmt::Display for LabellingBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{side}x{side},fill={fill}%,{connectivity}",
            side = self.side,
            fill = self.fill_percent,
            connectivity = self.connectivity,
        )
    }
}

/// Parameters for a store-level benchmark run.
#[derive(Clone, Debug)]
pub struct StoreBenchParams {
    /// Number of elements in the store.
    pub element_count: usize,
}

impl fmt::Display for StoreBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.element_count)
    }
}
