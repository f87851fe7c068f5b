//! Connected-component labelling over binary grids.
//!
//! A classic two-pass labeller: the first pass walks cells in row-major
//! order, gives each foreground cell without a labelled neighbour a fresh
//! provisional label and merges the labels of touching neighbours; the second
//! pass replaces provisional labels with dense component ids. Background
//! cells keep id `0`, so components are numbered from `1`.

use std::fmt;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use setwise_core::DisjointSet;

use crate::error::BenchSetupError;

/// Configuration for [`BinaryGrid::generate`].
#[derive(Clone, Debug)]
pub struct GridConfig {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Probability that a cell is foreground.
    pub fill_ratio: f64,
    /// Seed for the random number generator.
    pub seed: u64,
}

/// Row-major grid of foreground and background cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl BinaryGrid {
    /// Generates a random grid.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::ZeroDimension`] for an empty grid and
    /// [`BenchSetupError::InvalidFillRatio`] when the ratio is not within
    /// `[0, 1]`.
    pub fn generate(config: &GridConfig) -> Result<Self, BenchSetupError> {
        validate_dimensions(config.width, config.height)?;
        if !(0.0..=1.0).contains(&config.fill_ratio) {
            return Err(BenchSetupError::InvalidFillRatio {
                ratio: config.fill_ratio,
            });
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let cells = (0..config.width.saturating_mul(config.height))
            .map(|_| rng.gen_bool(config.fill_ratio))
            .collect();
        Ok(Self {
            width: config.width,
            height: config.height,
            cells,
        })
    }

    /// Parses a grid from rows of `#` (foreground) and `.` (background).
    ///
    /// # Errors
    /// Returns an error for empty input, rows of differing widths or
    /// unexpected characters.
    ///
    /// # Examples
    /// ```
    /// use setwise_benches::grid::BinaryGrid;
    ///
    /// let grid = BinaryGrid::from_rows(&["#.", ".#"])?;
    /// assert_eq!(grid.width(), 2);
    /// assert_eq!(grid.foreground_count(), 2);
    /// # Ok::<(), setwise_benches::error::BenchSetupError>(())
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self, BenchSetupError> {
        let width = rows.first().map_or(0, |row| row.chars().count());
        validate_dimensions(width, rows.len())?;

        let mut cells = Vec::with_capacity(width.saturating_mul(rows.len()));
        for (row, text) in rows.iter().enumerate() {
            let found = text.chars().count();
            if found != width {
                return Err(BenchSetupError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for cell in text.chars() {
                cells.push(match cell {
                    '#' => true,
                    '.' => false,
                    other => return Err(BenchSetupError::UnknownCell { cell: other }),
                });
            }
        }
        Ok(Self {
            width,
            height: rows.len(),
            cells,
        })
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of foreground cells.
    #[must_use]
    pub fn foreground_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Returns `true` when `(x, y)` lies inside the grid and is foreground.
    #[must_use]
    pub fn is_foreground(&self, x: usize, y: usize) -> bool {
        x < self.width
            && self
                .cells
                .get(y.saturating_mul(self.width).saturating_add(x))
                .copied()
                .unwrap_or(false)
    }
}

/// Neighbourhood used to decide whether two foreground cells touch.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Connectivity {
    /// Edge-adjacent cells only.
    Four,
    /// Edge- and corner-adjacent cells.
    Eight,
}

impl Connectivity {
    /// Offsets of neighbours already visited by a row-major scan, as
    /// `(dx, dy)` where `dx` is `-1`, `0` or `1` and `dy` is `0` or `-1`.
    const fn visited_neighbours(self) -> &'static [(isize, isize)] {
        match self {
            Self::Four => &[(-1, 0), (0, -1)],
            Self::Eight => &[(-1, 0), (-1, -1), (0, -1), (1, -1)],
        }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Four => "4-connected",
            Self::Eight => "8-connected",
        })
    }
}

/// Result of [`label_components`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentLabels {
    width: usize,
    labels: Vec<u32>,
    component_count: usize,
}

impl ComponentLabels {
    /// Row-major component ids; `0` marks background.
    #[must_use]
    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    /// Component id at `(x, y)`, or `None` outside the grid.
    #[must_use]
    pub fn label_at(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width {
            return None;
        }
        self.labels
            .get(y.saturating_mul(self.width).saturating_add(x))
            .copied()
    }

    /// Number of foreground components.
    #[must_use]
    pub const fn component_count(&self) -> usize {
        self.component_count
    }
}

/// Labels the connected foreground components of `grid`.
///
/// # Errors
/// Returns [`BenchSetupError::DisjointSet`] if the store rejects an operation
/// or the component count does not fit in `u32`.
///
/// # Examples
/// ```
/// use setwise_benches::grid::{BinaryGrid, Connectivity, label_components};
///
/// let grid = BinaryGrid::from_rows(&["#.#", "#.#", "###"])?;
/// let components = label_components(&grid, Connectivity::Four)?;
/// assert_eq!(components.component_count(), 1);
/// # Ok::<(), setwise_benches::error::BenchSetupError>(())
/// ```
pub fn label_components(
    grid: &BinaryGrid,
    connectivity: Connectivity,
) -> Result<ComponentLabels, BenchSetupError> {
    let mut sets = DisjointSet::with_capacity(grid.foreground_count());
    let mut provisional: Vec<Option<usize>> = Vec::with_capacity(grid.cells.len());

    for y in 0..grid.height {
        for x in 0..grid.width {
            if !grid.is_foreground(x, y) {
                provisional.push(None);
                continue;
            }
            let mut neighbours = connectivity
                .visited_neighbours()
                .iter()
                .filter_map(|&(dx, dy)| visited_label(&provisional, grid.width, (x, y), (dx, dy)));
            let label = match neighbours.next() {
                Some(first) => {
                    for other in neighbours {
                        sets.merge(first, other)?;
                    }
                    first
                }
                None => sets.add(),
            };
            provisional.push(Some(label));
        }
    }

    let canonical: Vec<u32> = sets.flatten_from(1)?;
    let labels = provisional
        .into_iter()
        .map(|cell| {
            cell.and_then(|label| canonical.get(label).copied())
                .unwrap_or(0)
        })
        .collect();
    Ok(ComponentLabels {
        width: grid.width,
        labels,
        component_count: sets.partition_count(),
    })
}

/// Provisional label of the neighbour at `origin + offset`, if that cell is
/// inside the grid, already scanned and foreground.
fn visited_label(
    provisional: &[Option<usize>],
    width: usize,
    (x, y): (usize, usize),
    (dx, dy): (isize, isize),
) -> Option<usize> {
    let nx = x.checked_add_signed(dx)?;
    let ny = y.checked_add_signed(dy)?;
    if nx >= width {
        return None;
    }
    provisional
        .get(ny.checked_mul(width)?.checked_add(nx)?)
        .copied()
        .flatten()
}

fn validate_dimensions(width: usize, height: usize) -> Result<(), BenchSetupError> {
    if width == 0 {
        return Err(BenchSetupError::ZeroDimension { dimension: "width" });
    }
    if height == 0 {
        return Err(BenchSetupError::ZeroDimension {
            dimension: "height",
        });
    }
    Ok(())
}
