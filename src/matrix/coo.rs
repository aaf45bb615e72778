//! Coordinate-list (COO) matrix snapshot

use num_traits::Num;

/// A sparse matrix snapshot in coordinate-list (COO) format
///
/// The COO format stores one entry per active position as parallel arrays:
/// - row_idx: row index of each non-zero element
/// - col_idx: column index of each non-zero element
/// - values: the non-zero values
///
/// Entry order is unspecified unless the snapshot was requested sorted, in
/// which case entries ascend by linear key (row-major, columns ascending
/// within a row). Snapshots are read-only and are not kept in sync with
/// later mutation of the source matrix.
#[derive(Debug, Clone)]
pub struct SparseMatrixCOO<T> {
    /// Number of rows in the source matrix
    pub n_rows: usize,

    /// Number of columns in the source matrix
    pub n_cols: usize,

    /// Row indices (size: nnz)
    pub row_idx: Vec<usize>,

    /// Column indices (size: nnz)
    pub col_idx: Vec<usize>,

    /// Non-zero values (size: nnz)
    pub values: Vec<T>,
}

impl<T> SparseMatrixCOO<T>
where
    T: Copy + Num,
{
    /// Creates a new COO snapshot from the given parallel arrays
    ///
    /// # Panics
    ///
    /// Panics if the input arrays are inconsistent:
    /// - row_idx, col_idx and values must have equal lengths
    /// - every index must be within the matrix dimensions
    pub fn new(
        n_rows: usize,
        n_cols: usize,
        row_idx: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        assert_eq!(
            row_idx.len(),
            col_idx.len(),
            "row_idx.len() must equal col_idx.len()"
        );
        assert_eq!(
            col_idx.len(),
            values.len(),
            "col_idx.len() must equal values.len()"
        );

        for &row in &row_idx {
            assert!(row < n_rows, "Row index {} out of bounds (n_rows = {})", row, n_rows);
        }
        for &col in &col_idx {
            assert!(col < n_cols, "Column index {} out of bounds (n_cols = {})", col, n_cols);
        }

        Self {
            n_rows,
            n_cols,
            row_idx,
            col_idx,
            values,
        }
    }

    /// Returns the number of non-zero elements in the snapshot
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns an iterator over `(row, col, value)` triples
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        self.row_idx
            .iter()
            .zip(&self.col_idx)
            .zip(&self.values)
            .map(|((&row, &col), val)| (row, col, val))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snapshot() {
        let coo = SparseMatrixCOO::new(2, 3, vec![0, 1], vec![2, 0], vec![1.0, 4.0]);

        assert_eq!(coo.nnz(), 2);
        let triples: Vec<_> = coo.iter().map(|(r, c, &v)| (r, c, v)).collect();
        assert_eq!(triples, vec![(0, 2, 1.0), (1, 0, 4.0)]);
    }

    #[test]
    #[should_panic(expected = "row_idx.len() must equal col_idx.len()")]
    fn test_inconsistent_lengths() {
        SparseMatrixCOO::new(2, 2, vec![0], vec![0, 1], vec![1.0, 2.0]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_out_of_bounds_index() {
        SparseMatrixCOO::new(2, 2, vec![0, 2], vec![0, 1], vec![1.0, 2.0]);
    }
}
