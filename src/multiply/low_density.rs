//! Low-density multiplication strategy

use num_traits::Float;

use crate::matrix::SparseMatrix;

/// Multiplies two sparse matrices where the right operand is large but holds
/// very few non-zeros
///
/// Both operands are snapshotted to COO up front, so the nested scan runs
/// over flat arrays instead of repeated live-store traversals.
/// O(nnz(left) * nnz(right)).
///
/// Callers must ensure `left.columns() == right.rows()`; the dispatching
/// [`mmul`](crate::multiply::mmul) front door checks this.
pub fn mmul_low_density<T: Float>(
    left: &SparseMatrix<T>,
    right: &SparseMatrix<T>,
) -> SparseMatrix<T> {
    let this = left.to_coo(false);
    let other = right.to_coo(false);

    let nb_this_active = this.nnz();
    let nb_other_active = other.nnz();

    let mut output = SparseMatrix::zeros(left.rows(), right.columns());
    for t in 0..nb_this_active {
        let i = this.row_idx[t];
        let j = this.col_idx[t];
        for o in 0..nb_other_active {
            if j == other.row_idx[o] {
                let l = other.col_idx[o];
                let sum = output.get(i, l) + other.values[o] * this.values[t];
                output.set(i, l, sum);
            }
        }
    }
    output
}
