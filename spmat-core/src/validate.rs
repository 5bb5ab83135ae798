//! Bounds validation for matrix entries
//!
//! The core accessors are deliberately permissive: out-of-range reads return
//! zero and writes are accepted regardless of declared shape. Callers that
//! want strict enforcement of the declared dimensions (the loader's strict
//! mode) validate through this function instead.

use crate::error::{MatrixError, Result};

/// Validate that a coordinate lies inside the declared dimensions
pub const fn validate_entry_bounds(
    rows: usize,
    cols: usize,
    row: usize,
    col: usize,
) -> Result<()> {
    if row >= rows || col >= cols {
        return Err(MatrixError::IndexOutOfBounds);
    }
    Ok(())
}
