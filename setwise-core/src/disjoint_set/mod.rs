//! Growable disjoint-set store with path compression.
//!
//! Elements are identified by dense labels assigned in insertion order. Each
//! element stores the label of a parent that is never larger than itself, so
//! the root of every partition is the smallest label it contains. Merges keep
//! that property by always attaching the larger root beneath the smaller one,
//! and [`DisjointSet::flatten`] relies on it to renumber partitions in a single
//! forward pass.
//!
//! The store is single-threaded: [`DisjointSet::find`] rewrites parent links
//! as it walks them, so even lookups need `&mut self`. Callers that share a
//! store between workers must wrap it in an exclusive lock.

use std::convert::Infallible;
use std::fmt;
use std::ops::Range;

use num_traits::{CheckedAdd, One};
use tracing::{debug, instrument, trace, warn};

use crate::error::{DisjointSetError, Result};

/// Disjoint-set (union-find) store over labels `0..len()`.
///
/// # Examples
/// ```
/// use setwise_core::DisjointSet;
///
/// let mut sets = DisjointSet::new();
/// let labels = sets.add_many(4);
/// assert_eq!(labels, 0..4);
///
/// sets.merge(2, 3)?;
/// assert_eq!(sets.find(3)?, 2);
/// sets.merge(1, 2)?;
/// sets.merge(0, 2)?;
/// assert_eq!(sets.find(3)?, 0);
/// assert_eq!(sets.flatten(), vec![0, 0, 0, 0]);
/// # Ok::<(), setwise_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DisjointSet {
    parents: Vec<usize>,
    partitions: usize,
}

impl DisjointSet {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            parents: Vec::new(),
            partitions: 0,
        }
    }

    /// Creates an empty store with room for `capacity` elements before it
    /// reallocates.
    ///
    /// # Examples
    /// ```
    /// use setwise_core::DisjointSet;
    ///
    /// let sets = DisjointSet::with_capacity(16);
    /// assert!(sets.is_empty());
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            parents: Vec::with_capacity(capacity),
            partitions: 0,
        }
    }

    /// Returns the number of elements added so far.
    #[must_use]
    #[rustfmt::skip]
    pub const fn len(&self) -> usize { self.parents.len() }

    /// Returns `true` when no element has been added.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_empty(&self) -> bool { self.parents.is_empty() }

    /// Returns the number of distinct partitions currently tracked.
    ///
    /// # Examples
    /// ```
    /// use setwise_core::DisjointSet;
    ///
    /// let mut sets = DisjointSet::new();
    /// sets.add_many(3);
    /// sets.merge(0, 2)?;
    /// assert_eq!(sets.partition_count(), 2);
    /// # Ok::<(), setwise_core::DisjointSetError>(())
    /// ```
    #[must_use]
    #[rustfmt::skip]
    pub const fn partition_count(&self) -> usize { self.partitions }

    /// Adds a new singleton partition and returns its label.
    ///
    /// Labels are assigned sequentially starting at zero and are never reused.
    ///
    /// # Examples
    /// ```
    /// use setwise_core::DisjointSet;
    ///
    /// let mut sets = DisjointSet::new();
    /// assert_eq!(sets.add(), 0);
    /// assert_eq!(sets.add(), 1);
    /// ```
    pub fn add(&mut self) -> usize {
        let label = self.parents.len();
        self.parents.push(label);
        self.partitions += 1;
        label
    }

    /// Adds `count` singleton partitions and returns the range of labels they
    /// received.
    ///
    /// # Panics
    /// Panics with `capacity overflow` when the store cannot grow by `count`
    /// elements, exactly as [`Vec::reserve`] does.
    pub fn add_many(&mut self, count: usize) -> Range<usize> {
        let start = self.parents.len();
        self.parents.reserve(count);
        // `reserve` guarantees `start + count` fits in the allocation.
        let end = start + count;
        self.parents.extend(start..end);
        self.partitions += count;
        start..end
    }

    /// Returns the root label of the partition containing `label`.
    ///
    /// Every label visited on the way to the root is rewired to point at the
    /// root directly, which is why the lookup needs mutable access.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::LabelOutOfRange`] when `label >= len()`.
    pub fn find(&mut self, label: usize) -> Result<usize> {
        self.ensure_contains(label)?;
        Ok(self.find_root(label))
    }

    /// Merges the partitions containing `left` and `right`.
    ///
    /// The partition whose root has the smaller label absorbs the other one.
    /// Merging a label with itself, or two labels already sharing a root,
    /// leaves the store unchanged.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::LabelOutOfRange`] when either label is
    /// `>= len()`. Both labels are checked before anything is modified.
    pub fn merge(&mut self, left: usize, right: usize) -> Result<()> {
        self.ensure_contains(left)?;
        self.ensure_contains(right)?;
        if left == right {
            return Ok(());
        }

        let left_root = self.find_root(left);
        let right_root = self.find_root(right);
        if left_root == right_root {
            return Ok(());
        }

        let (root, absorbed) = if left_root < right_root {
            (left_root, right_root)
        } else {
            (right_root, left_root)
        };
        self.parents[absorbed] = root;
        self.partitions -= 1;
        trace!(root, absorbed, "merged partitions");
        Ok(())
    }

    /// Returns `true` when `left` and `right` belong to the same partition.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::LabelOutOfRange`] when either label is
    /// `>= len()`.
    pub fn same_partition(&mut self, left: usize, right: usize) -> Result<bool> {
        self.ensure_contains(left)?;
        self.ensure_contains(right)?;
        Ok(self.find_root(left) == self.find_root(right))
    }

    /// Maps every label to a dense canonical label starting at zero.
    ///
    /// Roots receive consecutive values in increasing label order and every
    /// other label inherits the value of its root. The table goes stale after
    /// the next successful [`Self::merge`] that joins two partitions.
    ///
    /// # Examples
    /// ```
    /// use setwise_core::DisjointSet;
    ///
    /// let mut sets = DisjointSet::new();
    /// sets.add_many(4);
    /// sets.merge(1, 2)?;
    /// assert_eq!(sets.flatten(), vec![0, 1, 1, 2]);
    /// # Ok::<(), setwise_core::DisjointSetError>(())
    /// ```
    #[instrument(
        name = "disjoint_set.flatten",
        level = "debug",
        skip(self),
        fields(elements = self.len()),
    )]
    pub fn flatten(&mut self) -> Vec<usize> {
        let Ok(canonical) = self.relabel(|assigned| Ok::<_, Infallible>(assigned));
        canonical
    }

    /// Maps every label to a dense canonical label starting at `min_label`,
    /// using `T` as the output type.
    ///
    /// Canonical values are produced on demand, so a narrow `T` only fails
    /// when a partition actually needs a value past `T`'s maximum.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::CanonicalLabelOverflow`] when `T` cannot
    /// represent a label for every partition.
    ///
    /// # Examples
    /// ```
    /// use setwise_core::DisjointSet;
    ///
    /// let mut sets = DisjointSet::new();
    /// sets.add_many(4);
    /// sets.merge(1, 2)?;
    /// let labels: Vec<u8> = sets.flatten_from(1)?;
    /// assert_eq!(labels, vec![1, 2, 2, 3]);
    /// # Ok::<(), setwise_core::DisjointSetError>(())
    /// ```
    #[instrument(
        name = "disjoint_set.flatten",
        level = "debug",
        err,
        skip_all,
        fields(elements = self.len(), min_label = ?min_label),
    )]
    pub fn flatten_from<T>(&mut self, min_label: T) -> Result<Vec<T>>
    where
        T: Copy + CheckedAdd + One + fmt::Debug,
    {
        let mut next = Some(min_label);
        self.relabel(|assigned| {
            let Some(value) = next else {
                warn!(assigned, "canonical label type exhausted");
                return Err(DisjointSetError::CanonicalLabelOverflow { assigned });
            };
            next = value.checked_add(&T::one());
            Ok(value)
        })
    }

    /// Single forward pass shared by the flatten entry points. `issue` is
    /// called once per root, in increasing label order, with the number of
    /// roots already numbered.
    fn relabel<T, E>(
        &mut self,
        mut issue: impl FnMut(usize) -> core::result::Result<T, E>,
    ) -> core::result::Result<Vec<T>, E>
    where
        T: Copy,
    {
        let mut canonical: Vec<T> = Vec::with_capacity(self.len());
        let mut assigned = 0usize;
        for label in 0..self.len() {
            let root = self.find_root(label);
            if root == label {
                canonical.push(issue(assigned)?);
                assigned += 1;
            } else {
                // Roots never exceed their members, so `root` is already mapped.
                canonical.push(canonical[root]);
            }
        }
        debug!(partitions = assigned, "flatten completed");
        Ok(canonical)
    }

    const fn ensure_contains(&self, label: usize) -> Result<()> {
        if label < self.parents.len() {
            Ok(())
        } else {
            Err(DisjointSetError::LabelOutOfRange {
                label,
                len: self.parents.len(),
            })
        }
    }

    /// Two-pass find: locate the root, then point every visited label at it.
    /// Stack usage stays constant regardless of chain depth.
    fn find_root(&mut self, label: usize) -> usize {
        let mut root = label;
        while self.parents[root] != root {
            root = self.parents[root];
        }

        let mut node = label;
        while self.parents[node] != root {
            let parent = self.parents[node];
            self.parents[node] = root;
            node = parent;
        }

        root
    }
}

#[cfg(test)]
mod property;
