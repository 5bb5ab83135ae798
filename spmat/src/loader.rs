//! Loader for the line-oriented matrix text format
//!
//! The first two lines declare the dimensions (`rows=N`, `cols=M`); every
//! following non-blank line is a `(row,col,value)` triple. Parsing of the
//! individual lines lives in spmat-core; this module adds file I/O and the
//! load-time policy knobs.

use std::fs;
use std::path::Path;

use spmat_core::{parse_dimension, parse_triple, validate_entry_bounds, MatrixError, SparseMatrix};

use crate::error::{Error, Result};

/// Policy knobs applied while loading a matrix
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Upper bound on stored entries; `None` means unbounded
    pub max_entries: Option<usize>,
    /// Reject entries whose coordinates fall outside the declared dimensions
    ///
    /// Off by default: the reference behavior accepts out-of-range entries,
    /// which then read back as written while every in-range absent coordinate
    /// reads as zero.
    pub strict_bounds: bool,
}

impl LoadOptions {
    /// Bound the number of stored entries
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = Some(max_entries);
        self
    }

    /// Enforce declared dimensions on every entry
    pub fn with_strict_bounds(mut self, strict_bounds: bool) -> Self {
        self.strict_bounds = strict_bounds;
        self
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max_entries: None,
            strict_bounds: false,
        }
    }
}

/// Parse a matrix from its textual description with default options
pub fn parse_matrix(text: &str) -> Result<SparseMatrix> {
    parse_matrix_with(text, &LoadOptions::default())
}

/// Parse a matrix from its textual description
///
/// Blank entry lines are skipped. Any other line that fails to parse
/// propagates [`MatrixError::Format`] unchanged; nothing is silently dropped.
pub fn parse_matrix_with(text: &str, options: &LoadOptions) -> Result<SparseMatrix> {
    let mut lines = text.lines();
    let rows = parse_dimension(lines.next().ok_or(MatrixError::Format)?, "rows")?;
    let cols = parse_dimension(lines.next().ok_or(MatrixError::Format)?, "cols")?;

    let mut matrix = SparseMatrix::new(rows, cols);
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let (row, col, value) = parse_triple(line)?;
        if options.strict_bounds {
            validate_entry_bounds(rows, cols, row, col)?;
        }
        matrix.set_element(row, col, value);
        if let Some(limit) = options.max_entries {
            if matrix.nnz() > limit {
                return Err(Error::TooManyEntries {
                    limit,
                    found: matrix.nnz(),
                });
            }
        }
    }
    Ok(matrix)
}

/// Load a matrix from a text file with default options
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<SparseMatrix> {
    load_matrix_with(path, &LoadOptions::default())
}

/// Load a matrix from a text file
pub fn load_matrix_with<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<SparseMatrix> {
    let text = fs::read_to_string(path)?;
    parse_matrix_with(&text, options)
}
