//! Algebraic operations over sparse matrices
//!
//! All three operations check dimension compatibility before touching any
//! entry, never mutate their inputs, and write results through
//! [`SparseMatrix::set_element`] so zeros are pruned from storage.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::error::{MatrixError, Operation, Result};
use crate::matrix::SparseMatrix;

impl SparseMatrix {
    /// Element-wise sum of two matrices with equal dimensions
    ///
    /// Traverses the union of both operands' entry keys rather than the dense
    /// grid; coordinates absent from both read as zero and contribute nothing.
    pub fn add(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        self.zip_union(other, Operation::Addition, |a, b| a + b)
    }

    /// Element-wise difference of two matrices with equal dimensions
    pub fn subtract(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        self.zip_union(other, Operation::Subtraction, |a, b| a - b)
    }

    fn zip_union<F>(&self, other: &SparseMatrix, op: Operation, combine: F) -> Result<SparseMatrix>
    where
        F: Fn(i64, i64) -> i64,
    {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrixError::DimensionMismatch(op));
        }
        let mut result = SparseMatrix::new(self.rows, self.cols);
        for (&(row, col), &value) in &self.entries {
            result.set_element(row, col, combine(value, other.get_element(row, col)));
        }
        for (&(row, col), &value) in &other.entries {
            if !self.entries.contains_key(&(row, col)) {
                result.set_element(row, col, combine(0, value));
            }
        }
        Ok(result)
    }

    /// Matrix product; requires `self.cols == other.rows`
    ///
    /// Iterates only over stored entries: `other` is indexed by row once, then
    /// each stored `(i, k)` of `self` is paired with the non-zero columns of
    /// row `k` in `other`. All contributions to a given result coordinate are
    /// accumulated before a single `set_element`, so a running sum that
    /// crosses zero mid-accumulation never churns the entry map.
    pub fn multiply(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch(Operation::Multiplication));
        }

        let mut other_by_row: HashMap<usize, Vec<(usize, i64)>> = HashMap::new();
        for (&(row, col), &value) in &other.entries {
            other_by_row.entry(row).or_default().push((col, value));
        }

        let mut sums: HashMap<(usize, usize), i64> = HashMap::new();
        for (&(i, k), &value) in &self.entries {
            if let Some(row) = other_by_row.get(&k) {
                for &(j, w) in row {
                    *sums.entry((i, j)).or_insert(0) += value * w;
                }
            }
        }

        let mut result = SparseMatrix::new(self.rows, other.cols);
        for ((row, col), sum) in sums {
            result.set_element(row, col, sum);
        }
        Ok(result)
    }
}
