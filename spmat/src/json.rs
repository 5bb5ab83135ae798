//! JSON interchange form for matrices
//!
//! A matrix serializes as `{"rows": N, "cols": M, "entries": [[r, c, v], …]}`.
//! This is a machine-readable dump for other tooling; the canonical on-disk
//! form remains the text format.

use serde::{Deserialize, Serialize};
use spmat_core::SparseMatrix;

use crate::error::Result;

#[derive(Serialize, Deserialize)]
struct MatrixDoc {
    rows: usize,
    cols: usize,
    entries: Vec<(usize, usize, i64)>,
}

/// Serialize a matrix to a JSON string, entries sorted by (row, col)
pub fn to_json(matrix: &SparseMatrix) -> Result<String> {
    let (rows, cols) = matrix.dimensions();
    let mut entries: Vec<_> = matrix.iter().collect();
    entries.sort_unstable();
    let doc = MatrixDoc {
        rows,
        cols,
        entries,
    };
    Ok(serde_json::to_string(&doc)?)
}

/// Deserialize a matrix from its JSON form
///
/// Zero values are suppressed and duplicate coordinates are last-write-wins,
/// same as every other construction path.
pub fn from_json(text: &str) -> Result<SparseMatrix> {
    let doc: MatrixDoc = serde_json::from_str(text)?;
    Ok(SparseMatrix::from_triples(doc.rows, doc.cols, doc.entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_to_json_shape() {
        let matrix = SparseMatrix::from_triples(2, 3, vec![(1, 2, -4), (0, 0, 1)]);
        assert_eq!(
            to_json(&matrix).unwrap(),
            r#"{"rows":2,"cols":3,"entries":[[0,0,1],[1,2,-4]]}"#
        );
    }

    #[test]
    fn test_json_round_trip() {
        let matrix = SparseMatrix::from_triples(5, 5, vec![(0, 4, 2), (4, 0, -2), (2, 2, 11)]);
        let restored = from_json(&to_json(&matrix).unwrap()).unwrap();
        assert_eq!(restored, matrix);
    }

    #[test]
    fn test_from_json_suppresses_zeros() {
        let restored = from_json(r#"{"rows":2,"cols":2,"entries":[[0,0,0],[1,1,3]]}"#).unwrap();
        assert_eq!(restored.nnz(), 1);
        assert_eq!(restored.get_element(1, 1), 3);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        match from_json("not json") {
            Err(Error::Json(_)) => {}
            other => panic!("expected json error, got {other:?}"),
        }
    }
}
