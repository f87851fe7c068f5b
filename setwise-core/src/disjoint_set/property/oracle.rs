//! Quick-find oracle for disjoint-set property verification.
//!
//! Stores the minimum label of each element's partition directly, so merges
//! are linear but every answer is trivially correct. Because the store always
//! keeps the smaller root, its roots must equal these minima exactly.

/// Reference partition tracker with linear-time merges.
#[derive(Clone, Debug, Default)]
pub(super) struct QuickFind {
    minima: Vec<usize>,
}

impl QuickFind {
    /// Creates an oracle with `element_count` singleton partitions.
    pub(super) fn new(element_count: usize) -> Self {
        Self {
            minima: (0..element_count).collect(),
        }
    }

    pub(super) fn len(&self) -> usize {
        self.minima.len()
    }

    pub(super) fn add(&mut self) -> usize {
        let label = self.minima.len();
        self.minima.push(label);
        label
    }

    /// Returns the smallest label in the partition containing `label`.
    pub(super) fn minimum(&self, label: usize) -> usize {
        self.minima[label]
    }

    pub(super) fn merge(&mut self, left: usize, right: usize) {
        let left_min = self.minima[left];
        let right_min = self.minima[right];
        if left_min == right_min {
            return;
        }
        let (keep, replace) = if left_min < right_min {
            (left_min, right_min)
        } else {
            (right_min, left_min)
        };
        for minimum in &mut self.minima {
            if *minimum == replace {
                *minimum = keep;
            }
        }
    }

    pub(super) fn partition_count(&self) -> usize {
        self.minima
            .iter()
            .enumerate()
            .filter(|(label, minimum)| label == *minimum)
            .count()
    }

    /// Dense relabelling in order of each partition's smallest label.
    pub(super) fn canonical_labels(&self) -> Vec<usize> {
        let mut canonical = Vec::with_capacity(self.minima.len());
        let mut next = 0;
        for (label, &minimum) in self.minima.iter().enumerate() {
            if minimum == label {
                canonical.push(next);
                next += 1;
            } else {
                canonical.push(canonical[minimum]);
            }
        }
        canonical
    }
}
