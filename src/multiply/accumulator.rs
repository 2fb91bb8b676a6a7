//! Accumulation of partial products keyed by destination cell

use std::collections::HashMap;

use crate::matrix::Scalar;

/// Collects partial products `a[i, k] * b[k, j]` by destination `(i, j)`
///
/// Insertion order is irrelevant; results are extracted in row-major order.
/// Cells whose partial products cancel out are dropped on extraction.
pub struct ProductAccumulator<T> {
    sums: HashMap<(usize, usize), T>,
}

impl<T> ProductAccumulator<T>
where
    T: Scalar,
{
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self {
            sums: HashMap::new(),
        }
    }

    /// Create an accumulator sized for roughly `capacity` destination cells
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sums: HashMap::with_capacity(capacity),
        }
    }

    /// Add `val` to the running sum of `(row, col)`
    pub fn accumulate(&mut self, row: usize, col: usize, val: T) {
        *self.sums.entry((row, col)).or_insert_with(T::zero) += val;
    }

    /// Number of distinct cells touched so far, zero sums included
    pub fn len(&self) -> usize {
        self.sums.len()
    }

    /// Returns true if nothing was accumulated
    pub fn is_empty(&self) -> bool {
        self.sums.is_empty()
    }

    /// Extract the non-zero sums as `(row, col, value)` triples in row-major order
    pub fn extract_result(self) -> Vec<(usize, usize, T)> {
        let mut entries: Vec<_> = self
            .sums
            .into_iter()
            .filter(|(_, val)| !val.is_zero())
            .map(|((row, col), val)| (row, col, val))
            .collect();
        entries.sort_unstable_by_key(|&(row, col, _)| (row, col));
        entries
    }
}

impl<T> Default for ProductAccumulator<T>
where
    T: Scalar,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate_merges_cells() {
        let mut acc = ProductAccumulator::new();
        acc.accumulate(1, 0, 2);
        acc.accumulate(0, 3, 5);
        acc.accumulate(1, 0, 4);

        assert_eq!(acc.len(), 2);
        assert_eq!(acc.extract_result(), vec![(0, 3, 5), (1, 0, 6)]);
    }

    #[test]
    fn test_cancellation_is_dropped() {
        let mut acc = ProductAccumulator::new();
        acc.accumulate(0, 0, 3);
        acc.accumulate(0, 0, -3);
        acc.accumulate(0, 1, 1);

        assert_eq!(acc.extract_result(), vec![(0, 1, 1)]);
    }

    #[test]
    fn test_empty() {
        let acc = ProductAccumulator::<f64>::default();
        assert!(acc.is_empty());
        assert!(acc.extract_result().is_empty());
    }
}
