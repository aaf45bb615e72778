//! Tests for elementwise operators and structural operators

use ndarray::array;
use sparmat::{operator_by_name, ops, ElementOp, Operand, SparseMatrix, OPERATOR_TABLE};

#[test]
fn test_add_matrices() {
    let mut m1 = SparseMatrix::from_dense(
        array![[2.0, 0.0, 1.0], [0.0, 0.0, 3.0], [2.0, 0.0, 1.0]].view(),
    );
    let m2 = SparseMatrix::from_dense(
        array![[0.0, 1.0, 5.0], [2.0, 0.0, 0.0], [-2.0, 0.0, -1.0]].view(),
    );

    m1.add(&m2);
    assert_eq!(
        m1.to_dense(),
        array![[2.0, 1.0, 6.0], [2.0, 0.0, 3.0], [0.0, 0.0, 0.0]]
    );
}

#[test]
fn test_scalar_and_matrix_dispatch() {
    let mut by_scalar = SparseMatrix::from_dense(array![[1.0, 2.0]].view());
    by_scalar.mul(3.0);
    assert_eq!(by_scalar.to_dense(), array![[3.0, 6.0]]);

    let mut by_matrix = SparseMatrix::from_dense(array![[1.0, 2.0]].view());
    let other = SparseMatrix::from_dense(array![[5.0, 0.0]].view());
    by_matrix.add(&other);
    assert_eq!(by_matrix.to_dense(), array![[6.0, 2.0]]);
}

#[test]
fn test_named_variants_match_dispatch() {
    let mut dispatched = SparseMatrix::from_dense(array![[4.0, 6.0]].view());
    dispatched.div(2.0);

    let mut named = SparseMatrix::from_dense(array![[4.0, 6.0]].view());
    named.div_scalar(2.0);

    assert_eq!(dispatched.to_dense(), named.to_dense());

    let rhs = SparseMatrix::from_dense(array![[1.0, 1.0]].view());
    let mut dispatched = SparseMatrix::from_dense(array![[4.0, 6.0]].view());
    dispatched.sub(&rhs);

    let mut named = SparseMatrix::from_dense(array![[4.0, 6.0]].view());
    named.sub_matrix(&rhs);

    assert_eq!(dispatched.to_dense(), named.to_dense());
}

#[test]
fn test_aliases() {
    let mut a = SparseMatrix::from_dense(array![[9.0, 4.0]].view());
    a.subtract(1.0);
    assert_eq!(a.to_dense(), array![[8.0, 3.0]]);

    let mut b = SparseMatrix::from_dense(array![[9.0, 4.0]].view());
    b.multiply(2.0).divide(4.0);
    assert_eq!(b.to_dense(), array![[4.5, 2.0]]);

    let mut c = SparseMatrix::from_dense(array![[9.0, 10.0]].view());
    c.modulus(5.0);
    assert_eq!(c.to_dense(), array![[4.0, 0.0]]);
    assert_eq!(c.cardinality(), 1);
}

#[test]
fn test_bitwise_family() {
    let mut matrix = SparseMatrix::from_dense(array![[5.0, 12.0]].view());
    matrix.and(6.0);
    assert_eq!(matrix.to_dense(), array![[4.0, 4.0]]);

    let mut matrix = SparseMatrix::from_dense(array![[1.0, 2.0]].view());
    matrix.left_shift(3.0);
    assert_eq!(matrix.to_dense(), array![[8.0, 16.0]]);

    let mut matrix = SparseMatrix::from_dense(array![[-8.0, 8.0]].view());
    matrix.sign_propagating_right_shift(1.0);
    assert_eq!(matrix.to_dense(), array![[-4.0, 4.0]]);

    let mut matrix = SparseMatrix::from_dense(array![[-8.0, 8.0]].view());
    matrix.right_shift(1.0);
    assert_eq!(matrix.to_dense(), array![[2147483644.0, 4.0]]);

    let mut matrix = SparseMatrix::from_dense(array![[5.0]].view());
    matrix.not();
    assert_eq!(matrix.to_dense(), array![[-6.0]]);
}

#[test]
fn test_unary_family() {
    let mut matrix = SparseMatrix::from_dense(array![[-4.0, 2.25]].view());
    matrix.abs().sqrt();
    assert_eq!(matrix.to_dense(), array![[2.0, 1.5]]);

    let mut matrix = SparseMatrix::from_dense(array![[1.4, -1.4]].view());
    matrix.trunc();
    assert_eq!(matrix.to_dense(), array![[1.0, -1.0]]);
}

#[test]
fn test_non_mutating_constructors() {
    let matrix = SparseMatrix::from_dense(array![[1.0, 2.0], [0.0, 3.0]].view());
    let before = matrix.to_dense();

    let shifted = ops::add(&matrix, 10.0);
    assert_eq!(shifted.to_dense(), array![[11.0, 12.0], [0.0, 13.0]]);
    assert_eq!(matrix.to_dense(), before);

    let rooted = ops::sqrt(&matrix);
    assert_eq!(rooted.get(1, 1), 3.0_f64.sqrt());
    assert_eq!(matrix.to_dense(), before);
}

#[test]
fn test_operator_table_is_complete() {
    // Every entry resolves by each of its names, and the whole table applies
    // cleanly through the generic path.
    for entry in OPERATOR_TABLE {
        for &name in entry.names {
            let resolved = operator_by_name(name).unwrap();
            assert_eq!(resolved.op, entry.op);
        }

        let mut matrix = SparseMatrix::from_dense(array![[0.5, 0.25]].view());
        let operand = match entry.op {
            ElementOp::Binary(_) => Some(Operand::Scalar(2.0)),
            ElementOp::Unary(_) => None,
        };
        matrix.apply(entry.op, operand).unwrap();
    }
}

#[test]
fn test_zeros_are_skipped_by_scalar_ops() {
    // Scalar application only touches stored entries; zeros stay zero even
    // for operators where op(0, s) != 0.
    let mut matrix = SparseMatrix::from_dense(array![[1.0, 0.0]].view());
    matrix.add(5.0);

    assert_eq!(matrix.to_dense(), array![[6.0, 0.0]]);
    assert_eq!(matrix.cardinality(), 1);
}

#[test]
fn test_kronecker_product() {
    let a = SparseMatrix::from_dense(array![[1.0, 2.0], [3.0, 4.0]].view());
    let b = SparseMatrix::from_dense(array![[0.0, 5.0], [6.0, 7.0]].view());

    let product = a.kronecker_product(&b);
    assert_eq!(product.rows(), 4);
    assert_eq!(product.columns(), 4);
    assert_eq!(
        product.to_dense(),
        array![
            [0.0, 5.0, 0.0, 10.0],
            [6.0, 7.0, 12.0, 14.0],
            [0.0, 15.0, 0.0, 20.0],
            [18.0, 21.0, 24.0, 28.0]
        ]
    );

    assert_eq!(a.cardinality(), 4);
    assert_eq!(b.cardinality(), 3);
    assert_eq!(product.cardinality(), 12);

    let aliased = a.tensor_product(&b);
    assert_eq!(aliased.to_dense(), product.to_dense());
}

#[test]
fn test_transpose() {
    let matrix = SparseMatrix::from_dense(array![[1.0, 2.0], [3.0, 4.0]].view());
    assert_eq!(
        matrix.transpose().to_dense(),
        array![[1.0, 3.0], [2.0, 4.0]]
    );

    let rect = SparseMatrix::from_dense(array![[0.0, 7.0, 0.0], [1.0, 0.0, 0.0]].view());
    let transposed = rect.transpose();
    assert_eq!(transposed.rows(), 3);
    assert_eq!(transposed.columns(), 2);
    assert_eq!(transposed.cardinality(), rect.cardinality());
    assert_eq!(transposed.get(1, 0), 7.0);
}
