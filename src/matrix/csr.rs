//! Compressed Sparse Row (CSR) matrix snapshot

use num_traits::Num;

use crate::matrix::SparseMatrixCSC;

/// A sparse matrix snapshot in Compressed Sparse Row (CSR) format
///
/// The CSR format stores a sparse matrix using three arrays:
/// - row_ptr: Array of size n_rows + 1 containing indices into col_idx and values arrays
/// - col_idx: Array of size nnz containing column indices of non-zero elements
/// - values: Array of size nnz containing the non-zero values
///
/// The multiplication engine walks row slices of this snapshot for its
/// medium-density strategy. Snapshots are read-only and are not kept in sync
/// with later mutation of the source matrix.
#[derive(Debug, Clone)]
pub struct SparseMatrixCSR<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Row pointers (size: n_rows + 1)
    /// row_ptr[i] is the index in col_idx and values where row i starts
    /// row_ptr[n_rows] is equal to nnz
    pub row_ptr: Vec<usize>,

    /// Column indices (size: nnz)
    pub col_idx: Vec<usize>,

    /// Non-zero values (size: nnz)
    pub values: Vec<T>,
}

impl<T> SparseMatrixCSR<T>
where
    T: Copy + Num,
{
    /// Creates a new CSR snapshot with the given dimensions and data
    ///
    /// # Panics
    ///
    /// Panics if the input arrays are inconsistent:
    /// - row_ptr.len() must be n_rows + 1
    /// - col_idx.len() must equal values.len()
    /// - row_ptr[n_rows] must equal col_idx.len()
    pub fn new(
        n_rows: usize,
        n_cols: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        assert_eq!(row_ptr.len(), n_rows + 1, "row_ptr.len() must be n_rows + 1");
        assert_eq!(
            col_idx.len(),
            values.len(),
            "col_idx.len() must equal values.len()"
        );
        assert_eq!(
            row_ptr[n_rows],
            col_idx.len(),
            "row_ptr[n_rows] must equal col_idx.len()"
        );

        for &col in &col_idx {
            assert!(col < n_cols, "Column index {} out of bounds (n_cols = {})", col, n_cols);
        }

        Self {
            n_rows,
            n_cols,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Returns the number of non-zero elements in the matrix
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns an iterator over the non-zero elements in row i
    ///
    /// Each item is a tuple (col_idx, value) representing a non-zero element
    pub fn row_iter(&self, i: usize) -> impl Iterator<Item = (usize, &T)> {
        assert!(i < self.n_rows, "Row index out of bounds");

        let start = self.row_ptr[i];
        let end = self.row_ptr[i + 1];

        self.col_idx[start..end]
            .iter()
            .zip(&self.values[start..end])
            .map(|(&col, val)| (col, val))
    }

    /// Converts this CSR snapshot to CSC format
    ///
    /// A counting-sort pass over the columns, O(n_cols + nnz).
    pub fn to_csc(&self) -> SparseMatrixCSC<T> {
        // Count non-zeros per column
        let mut col_counts = vec![0; self.n_cols];
        for &col in &self.col_idx {
            col_counts[col] += 1;
        }

        let col_ptr = crate::utils::exclusive_scan(&col_counts);

        // Scatter entries into their column slices
        let nnz = self.nnz();
        let mut row_idx = vec![0; nnz];
        let mut values = vec![T::zero(); nnz];
        let mut next_free = col_ptr.clone();

        for i in 0..self.n_rows {
            for idx in self.row_ptr[i]..self.row_ptr[i + 1] {
                let col = self.col_idx[idx];
                let pos = next_free[col];

                row_idx[pos] = i;
                values[pos] = self.values[idx];

                next_free[col] += 1;
            }
        }

        SparseMatrixCSC::new(self.n_rows, self.n_cols, col_ptr, row_idx, values)
    }
}
