//! Coordinate-keyed sparse matrix storage
//!
//! A matrix is its declared dimensions plus a map from (row, col) to a
//! non-zero value. Anything absent from the map reads as zero, and writing a
//! zero removes the key, so the map never holds a zero entry.

use hashbrown::HashMap;

/// Sparse two-dimensional integer matrix
///
/// Dimensions are fixed at construction; only the entry map mutates, and only
/// through [`SparseMatrix::set_element`]. Entry iteration order is
/// unspecified and never affects results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseMatrix {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) entries: HashMap<(usize, usize), i64>,
}

impl SparseMatrix {
    /// Create an empty matrix with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: HashMap::new(),
        }
    }

    /// Build a matrix from (row, col, value) triples
    ///
    /// Zero values are skipped; duplicate coordinates are last-write-wins.
    pub fn from_triples<I>(rows: usize, cols: usize, triples: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, i64)>,
    {
        let mut matrix = Self::new(rows, cols);
        for (row, col, value) in triples {
            matrix.set_element(row, col, value);
        }
        matrix
    }

    /// Get the value at the specified position
    ///
    /// Returns the stored value, or 0 for any coordinate not present in the
    /// entry map. Out-of-range coordinates also read as 0; bounds are not
    /// checked here.
    pub fn get_element(&self, row: usize, col: usize) -> i64 {
        self.entries.get(&(row, col)).copied().unwrap_or(0)
    }

    /// Set the value at the specified position
    ///
    /// A zero value removes the entry if present; a non-zero value inserts or
    /// overwrites it. Bounds are not checked here; strict enforcement is
    /// available at the loader layer.
    pub fn set_element(&mut self, row: usize, col: usize, value: i64) {
        if value != 0 {
            self.entries.insert((row, col), value);
        } else {
            self.entries.remove(&(row, col));
        }
    }

    /// Get matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of declared rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of declared columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of non-zero entries stored
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// True if no non-zero entry is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over stored (row, col, value) triples in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, i64)> + '_ {
        self.entries.iter().map(|(&(row, col), &value)| (row, col, value))
    }
}

impl core::fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "SparseMatrix {}x{} ({} non-zero)",
            self.rows,
            self.cols,
            self.nnz()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn test_new_matrix_is_all_zero() {
        let matrix = SparseMatrix::new(3, 4);
        assert_eq!(matrix.dimensions(), (3, 4));
        assert_eq!(matrix.nnz(), 0);
        for row in 0..3 {
            for col in 0..4 {
                assert_eq!(matrix.get_element(row, col), 0);
            }
        }
    }

    #[test]
    fn test_read_your_write() {
        let mut matrix = SparseMatrix::new(5, 5);
        matrix.set_element(2, 3, 42);
        assert_eq!(matrix.get_element(2, 3), 42);
        assert_eq!(matrix.nnz(), 1);

        matrix.set_element(2, 3, -7);
        assert_eq!(matrix.get_element(2, 3), -7);
        assert_eq!(matrix.nnz(), 1);
    }

    #[test]
    fn test_zero_suppression() {
        let mut matrix = SparseMatrix::new(5, 5);
        matrix.set_element(1, 1, 9);
        assert_eq!(matrix.nnz(), 1);

        matrix.set_element(1, 1, 0);
        assert_eq!(matrix.get_element(1, 1), 0);
        assert_eq!(matrix.nnz(), 0);

        // Writing zero to an absent coordinate is a no-op
        matrix.set_element(4, 4, 0);
        assert_eq!(matrix.nnz(), 0);
    }

    #[test]
    fn test_out_of_range_reads_as_zero() {
        let matrix = SparseMatrix::new(2, 2);
        assert_eq!(matrix.get_element(100, 100), 0);
    }

    #[test]
    fn test_from_triples_skips_zeros_and_keeps_last_write() {
        let matrix = SparseMatrix::from_triples(
            3,
            3,
            vec![(0, 0, 1), (1, 1, 0), (0, 0, 5), (2, 2, -3)],
        );
        assert_eq!(matrix.get_element(0, 0), 5);
        assert_eq!(matrix.get_element(1, 1), 0);
        assert_eq!(matrix.get_element(2, 2), -3);
        assert_eq!(matrix.nnz(), 2);
    }

    #[test]
    fn test_iter_yields_stored_triples() {
        let matrix = SparseMatrix::from_triples(2, 2, vec![(0, 1, 7), (1, 0, -1)]);
        let mut triples: alloc::vec::Vec<_> = matrix.iter().collect();
        triples.sort_unstable();
        assert_eq!(triples, vec![(0, 1, 7), (1, 0, -1)]);
    }

    #[test]
    fn test_display_summary() {
        let matrix = SparseMatrix::from_triples(3, 4, vec![(0, 0, 1), (2, 3, 2)]);
        assert_eq!(matrix.to_string(), "SparseMatrix 3x4 (2 non-zero)");
    }
}
