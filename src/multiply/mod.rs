//! # Adaptive sparse-by-sparse multiplication engine
//!
//! The engine picks one of three strategies from the operands' cardinality
//! and dimensions, tuned for the common case of very sparse operands:
//!
//! 1. **Small**: both cardinalities are tiny. Nested scan of the left
//!    operand's live entries against a COO snapshot of the right.
//!
//! 2. **LowDensity**: the right operand is large (many rows) but nearly
//!    empty. The same nested scan, but over COO snapshots of both operands
//!    so the inner loop runs on flat arrays.
//!
//! 3. **MediumDensity** (default): the right operand is snapshotted to CSR
//!    and its row slices are walked per left non-zero, asymptotically better
//!    when the right operand's non-zeros are spread across rows.
//!
//! All strategies accumulate into a fresh zero matrix of shape
//! `left.rows x right.columns` and never mutate an operand. The dimension
//! check runs before any other work, so a mismatch can never leave a partial
//! result behind.

pub mod config;
pub mod low_density;
pub mod medium_density;
pub mod small;

use num_traits::Float;

use crate::error::{Error, Result};
use crate::matrix::SparseMatrix;

pub use config::{MulConfig, MulStrategy};
pub use low_density::mmul_low_density;
pub use medium_density::mmul_medium_density;
pub use small::mmul_small;

/// Chooses the multiplication strategy for a pair of operands
///
/// Pure inspection of cardinalities and dimensions; does not touch the
/// operands' entries.
pub fn select_strategy<T: Float>(
    left: &SparseMatrix<T>,
    right: &SparseMatrix<T>,
    config: &MulConfig,
) -> MulStrategy {
    if left.cardinality() < config.small_cardinality_limit
        && right.cardinality() < config.small_cardinality_limit
    {
        MulStrategy::Small
    } else if right.rows() > config.low_density_min_rows
        && right.cardinality() < config.low_density_cardinality_limit
    {
        MulStrategy::LowDensity
    } else {
        MulStrategy::MediumDensity
    }
}

/// Multiplies `left * right` with the default dispatch tuning
pub fn mmul<T: Float>(
    left: &SparseMatrix<T>,
    right: &SparseMatrix<T>,
) -> Result<SparseMatrix<T>> {
    mmul_with_config(left, right, &MulConfig::default())
}

/// Multiplies `left * right`, dispatching by the given tuning
///
/// Fails with `Error::DimensionMismatch` when
/// `left.columns != right.rows`, before any result is allocated.
pub fn mmul_with_config<T: Float>(
    left: &SparseMatrix<T>,
    right: &SparseMatrix<T>,
    config: &MulConfig,
) -> Result<SparseMatrix<T>> {
    if left.columns() != right.rows() {
        return Err(Error::DimensionMismatch {
            left_rows: left.rows(),
            left_cols: left.columns(),
            right_rows: right.rows(),
            right_cols: right.columns(),
        });
    }

    Ok(match select_strategy(left, right, config) {
        MulStrategy::Small => mmul_small(left, right),
        MulStrategy::LowDensity => mmul_low_density(left, right),
        MulStrategy::MediumDensity => mmul_medium_density(left, right),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_dimension_mismatch_fails_fast() {
        let a = SparseMatrix::from_dense(array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]].view());
        let b = SparseMatrix::from_dense(array![[1.0, 2.0], [3.0, 4.0]].view());

        let err = mmul(&a, &b).unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                left_rows: 2,
                left_cols: 3,
                right_rows: 2,
                right_cols: 2,
            }
        );
    }

    #[test]
    fn test_dispatch_agrees_with_forced_strategies() {
        let a = SparseMatrix::from_dense(array![[2.0, 0.0, 1.0], [0.0, 0.0, 3.0]].view());
        let b = SparseMatrix::from_dense(array![[0.0, 1.0], [2.0, 0.0], [0.0, 0.0]].view());

        let dispatched = mmul(&a, &b).unwrap();
        for forced in [
            mmul_small(&a, &b),
            mmul_low_density(&a, &b),
            mmul_medium_density(&a, &b),
        ] {
            assert_eq!(forced.to_dense(), dispatched.to_dense());
        }
    }

    #[test]
    fn test_small_selected_for_tiny_operands() {
        let a = SparseMatrix::from_dense(array![[1.0, 0.0], [0.0, 1.0]].view());
        let b = SparseMatrix::from_dense(array![[0.0, 2.0], [3.0, 0.0]].view());

        let strategy = select_strategy(&a, &b, &MulConfig::default());
        assert_eq!(strategy, MulStrategy::Small);
    }
}
