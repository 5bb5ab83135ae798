//! Presenter for the line-oriented matrix text format
//!
//! Renders a matrix into the same format the loader reads, so a matrix
//! round-trips through render and parse with an identical entry set. Entries
//! are written sorted by (row, col) to keep the output stable.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use spmat_core::SparseMatrix;

use crate::error::Result;

/// Render a matrix into its textual description
pub fn render(matrix: &SparseMatrix) -> String {
    let (rows, cols) = matrix.dimensions();
    let mut entries: Vec<_> = matrix.iter().collect();
    entries.sort_unstable();

    let mut out = String::new();
    let _ = writeln!(out, "rows={rows}");
    let _ = writeln!(out, "cols={cols}");
    for (row, col, value) in entries {
        let _ = writeln!(out, "({row}, {col}, {value})");
    }
    out
}

/// Render a matrix and write it to a text file
pub fn write_matrix<P: AsRef<Path>>(path: P, matrix: &SparseMatrix) -> Result<()> {
    fs::write(path, render(matrix))?;
    Ok(())
}
