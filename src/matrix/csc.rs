//! Compressed Sparse Column (CSC) matrix snapshot

use num_traits::Num;

use crate::matrix::SparseMatrixCSR;

/// A sparse matrix snapshot in Compressed Sparse Column (CSC) format
///
/// The CSC format stores a sparse matrix using three arrays:
/// - col_ptr: Array of size n_cols + 1 containing indices into row_idx and values arrays
/// - row_idx: Array of size nnz containing row indices of non-zero elements
/// - values: Array of size nnz containing the non-zero values
///
/// Column-major analogue of [`SparseMatrixCSR`], efficient for column-wise
/// scans. Snapshots are read-only and are not kept in sync with later
/// mutation of the source matrix.
#[derive(Debug, Clone)]
pub struct SparseMatrixCSC<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Column pointers (size: n_cols + 1)
    /// col_ptr[j] is the index in row_idx and values where column j starts
    /// col_ptr[n_cols] is equal to nnz
    pub col_ptr: Vec<usize>,

    /// Row indices (size: nnz)
    pub row_idx: Vec<usize>,

    /// Non-zero values (size: nnz)
    pub values: Vec<T>,
}

impl<T> SparseMatrixCSC<T>
where
    T: Copy + Num,
{
    /// Creates a new CSC snapshot with the given dimensions and data
    ///
    /// # Panics
    ///
    /// Panics if the input arrays are inconsistent:
    /// - col_ptr.len() must be n_cols + 1
    /// - row_idx.len() must equal values.len()
    /// - col_ptr[n_cols] must equal row_idx.len()
    pub fn new(
        n_rows: usize,
        n_cols: usize,
        col_ptr: Vec<usize>,
        row_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        assert_eq!(col_ptr.len(), n_cols + 1, "col_ptr.len() must be n_cols + 1");
        assert_eq!(
            row_idx.len(),
            values.len(),
            "row_idx.len() must equal values.len()"
        );
        assert_eq!(
            col_ptr[n_cols],
            row_idx.len(),
            "col_ptr[n_cols] must equal row_idx.len()"
        );

        for &row in &row_idx {
            assert!(row < n_rows, "Row index {} out of bounds (n_rows = {})", row, n_rows);
        }

        Self {
            n_rows,
            n_cols,
            col_ptr,
            row_idx,
            values,
        }
    }

    /// Returns the number of non-zero elements in the matrix
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns an iterator over the non-zero elements in column j
    ///
    /// Each item is a tuple (row_idx, value) representing a non-zero element
    pub fn col_iter(&self, j: usize) -> impl Iterator<Item = (usize, &T)> {
        assert!(j < self.n_cols, "Column index out of bounds");

        let start = self.col_ptr[j];
        let end = self.col_ptr[j + 1];

        self.row_idx[start..end]
            .iter()
            .zip(&self.values[start..end])
            .map(|(&row, val)| (row, val))
    }

    /// Converts this CSC snapshot to CSR format
    ///
    /// A counting-sort pass over the rows, O(n_rows + nnz).
    pub fn to_csr(&self) -> SparseMatrixCSR<T> {
        // Count non-zeros per row
        let mut row_counts = vec![0; self.n_rows];
        for &row in &self.row_idx {
            row_counts[row] += 1;
        }

        let row_ptr = crate::utils::exclusive_scan(&row_counts);

        // Scatter entries into their row slices
        let nnz = self.nnz();
        let mut col_idx = vec![0; nnz];
        let mut values = vec![T::zero(); nnz];
        let mut next_free = row_ptr.clone();

        for j in 0..self.n_cols {
            for idx in self.col_ptr[j]..self.col_ptr[j + 1] {
                let row = self.row_idx[idx];
                let pos = next_free[row];

                col_idx[pos] = j;
                values[pos] = self.values[idx];

                next_free[row] += 1;
            }
        }

        SparseMatrixCSR::new(self.n_rows, self.n_cols, row_ptr, col_idx, values)
    }
}
