//! Conversions between our matrix container and the sprs library

use num_traits::Float;
use sprs::CsMat;

use crate::matrix::{MatrixOptions, SparseMatrix};

/// Converts a sparse matrix to a sprs CSR matrix
pub fn to_sprs<T: Float>(matrix: &SparseMatrix<T>) -> CsMat<T> {
    let csr = matrix.to_csr();
    CsMat::new(
        (csr.n_rows, csr.n_cols),
        csr.row_ptr,
        csr.col_idx,
        csr.values,
    )
}

/// Builds a sparse matrix from a sprs matrix
///
/// Entries flow through `set`, so the options' threshold filters them the
/// same way dense construction does.
pub fn from_sprs<T: Float>(matrix: &CsMat<T>, options: MatrixOptions<T>) -> SparseMatrix<T> {
    let mut result = SparseMatrix::with_options(matrix.rows(), matrix.cols(), options);
    for (&value, (row, col)) in matrix.iter() {
        result.set(row, col, value);
    }
    result
}
