//! Small-operand multiplication strategy

use num_traits::Float;

use crate::matrix::SparseMatrix;

/// Multiplies two very small sparse matrices
///
/// Takes a COO snapshot of the right operand and scans it once per live
/// non-zero of the left operand, accumulating `C[i,l] += v1 * v2` for every
/// matching inner index. O(nnz(left) * nnz(right)); only worth it when both
/// operand cardinalities are tiny.
///
/// Callers must ensure `left.columns() == right.rows()`; the dispatching
/// [`mmul`](crate::multiply::mmul) front door checks this.
pub fn mmul_small<T: Float>(left: &SparseMatrix<T>, right: &SparseMatrix<T>) -> SparseMatrix<T> {
    let other = right.to_coo(false);
    let nb_other_active = other.nnz();

    let mut output = SparseMatrix::zeros(left.rows(), right.columns());
    left.for_each_non_zero(|i, j, v1| {
        for o in 0..nb_other_active {
            if j == other.row_idx[o] {
                let l = other.col_idx[o];
                let sum = output.get(i, l) + other.values[o] * v1;
                output.set(i, l, sum);
            }
        }
    });
    output
}
