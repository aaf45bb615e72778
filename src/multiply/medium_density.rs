//! Medium-density multiplication strategy

use num_traits::Float;

use crate::matrix::SparseMatrix;

/// Multiplies two sparse matrices through a CSR snapshot of the right operand
///
/// For each non-zero `(i, j, v1)` of the left operand, the matching inner
/// products live exactly in the right operand's row `j`, reachable through
/// the `row_ptr[j]..row_ptr[j+1]` slice. O(nnz(left) * avg-row-nnz(right)),
/// which beats the nested scans once the right operand's non-zeros are
/// spread across many rows.
///
/// Callers must ensure `left.columns() == right.rows()`; the dispatching
/// [`mmul`](crate::multiply::mmul) front door checks this.
pub fn mmul_medium_density<T: Float>(
    left: &SparseMatrix<T>,
    right: &SparseMatrix<T>,
) -> SparseMatrix<T> {
    let this = left.to_coo(false);
    let other = right.to_csr();

    let nb_this_active = this.nnz();

    let mut result = SparseMatrix::zeros(left.rows(), right.columns());
    for t in 0..nb_this_active {
        let i = this.row_idx[t];
        let j = this.col_idx[t];
        let v1 = this.values[t];

        for idx in other.row_ptr[j]..other.row_ptr[j + 1] {
            let l = other.col_idx[idx];
            let sum = result.get(i, l) + other.values[idx] * v1;
            result.set(i, l, sum);
        }
    }
    result
}
