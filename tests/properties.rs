//! Property-based tests for container and engine invariants

use ndarray::Array2;
use proptest::collection::vec;
use proptest::prelude::*;
use sparmat::{
    coo_to_csr, mmul_low_density, mmul_medium_density, mmul_small, SparseMatrix,
};

/// Mostly-zero values on a quarter-integer grid, keeping arithmetic exact
fn sparse_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        3 => Just(0.0),
        1 => (1u32..100).prop_map(|n| n as f64 / 4.0),
        1 => (1u32..100).prop_map(|n| -(n as f64) / 4.0),
    ]
}

fn dense_grid() -> impl Strategy<Value = Array2<f64>> {
    (1usize..8, 1usize..8).prop_flat_map(|(rows, cols)| {
        vec(sparse_value(), rows * cols)
            .prop_map(move |values| Array2::from_shape_vec((rows, cols), values).unwrap())
    })
}

fn mmul_pair() -> impl Strategy<Value = (Array2<f64>, Array2<f64>)> {
    (1usize..7, 1usize..7, 1usize..7).prop_flat_map(|(m, k, p)| {
        (vec(sparse_value(), m * k), vec(sparse_value(), k * p)).prop_map(move |(a, b)| {
            (
                Array2::from_shape_vec((m, k), a).unwrap(),
                Array2::from_shape_vec((k, p), b).unwrap(),
            )
        })
    })
}

proptest! {
    #[test]
    fn round_trip_preserves_entries(grid in dense_grid()) {
        let matrix = SparseMatrix::from_dense(grid.view());
        let rebuilt = SparseMatrix::from_dense(matrix.to_dense().view());

        prop_assert_eq!(rebuilt.cardinality(), matrix.cardinality());
        prop_assert_eq!(rebuilt.to_dense(), grid);
    }

    #[test]
    fn transpose_is_an_involution(grid in dense_grid()) {
        let matrix = SparseMatrix::from_dense(grid.view());
        let back = matrix.transpose().transpose();

        prop_assert_eq!(back.rows(), matrix.rows());
        prop_assert_eq!(back.columns(), matrix.columns());
        prop_assert_eq!(back.cardinality(), matrix.cardinality());
        prop_assert_eq!(back.to_dense(), matrix.to_dense());
    }

    #[test]
    fn all_strategies_match_dense_multiplication((a_grid, b_grid) in mmul_pair()) {
        let a = SparseMatrix::from_dense(a_grid.view());
        let b = SparseMatrix::from_dense(b_grid.view());

        let expected = a_grid.dot(&b_grid);

        let dispatched = a.mmul(&b).unwrap();
        let small = mmul_small(&a, &b);
        let low = mmul_low_density(&a, &b);
        let medium = mmul_medium_density(&a, &b);

        for result in [dispatched, small, low, medium] {
            let dense = result.to_dense();
            prop_assert_eq!(dense.dim(), expected.dim());
            for (got, want) in dense.iter().zip(expected.iter()) {
                prop_assert!((got - want).abs() < 1.0e-9);
            }
        }
    }

    #[test]
    fn threshold_application_is_idempotent(
        grid in dense_grid(),
        threshold in 0.1f64..30.0,
    ) {
        let mut matrix = SparseMatrix::from_dense(grid.view());
        matrix.set_threshold(threshold);
        let once = matrix.to_dense();
        let cardinality = matrix.cardinality();

        matrix.set_threshold(threshold);
        prop_assert_eq!(matrix.to_dense(), once);
        prop_assert_eq!(matrix.cardinality(), cardinality);
    }

    #[test]
    fn kronecker_cardinality_bound(a_grid in dense_grid(), b_grid in dense_grid()) {
        let a = SparseMatrix::from_dense(a_grid.view());
        let b = SparseMatrix::from_dense(b_grid.view());

        let product = a.kronecker_product(&b);
        prop_assert_eq!(product.rows(), a.rows() * b.rows());
        prop_assert_eq!(product.columns(), a.columns() * b.columns());
        prop_assert!(product.cardinality() <= a.cardinality() * b.cardinality());
    }

    #[test]
    fn conversion_chain_matches_direct_extraction(grid in dense_grid()) {
        let matrix = SparseMatrix::from_dense(grid.view());

        let chained = coo_to_csr(&matrix.to_coo(true)).to_csc();
        let direct = matrix.to_csc();

        prop_assert_eq!(chained.col_ptr, direct.col_ptr);
        prop_assert_eq!(chained.row_idx, direct.row_idx);
        prop_assert_eq!(chained.values, direct.values);
    }
}
