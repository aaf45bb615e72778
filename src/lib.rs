//! # sparmat: sparse matrices with adaptive sparse-by-sparse multiplication
//!
//! A sparse matrix stores only the non-zero (or above-threshold) entries of
//! an otherwise dense rows x columns grid, trading lookup cost for memory
//! and multiplication cost.
//!
//! ## Overview
//!
//! This library implements:
//!
//! - A hash-backed sparse matrix container keyed by linear coordinates, with
//!   a zero-snapping threshold and a shrink-on-demand store
//! - A non-zero iteration protocol whose transform flavor doubles as an
//!   in-place map/filter primitive
//! - Lossless COO, CSR and CSC snapshot conversions
//! - An adaptive multiplication engine that chooses between three strategies
//!   by operand cardinality and dimensions
//! - Structural operators: transpose, Kronecker product, and a table of
//!   elementwise operators applied through the iteration protocol
//!
//! ## Usage
//!
//! Basic matrix multiplication:
//!
//! ```
//! use ndarray::array;
//! use sparmat::SparseMatrix;
//!
//! let a = SparseMatrix::from_dense(array![[2.0, 0.0, 1.0], [0.0, 0.0, 3.0]].view());
//! let b = SparseMatrix::from_dense(array![[0.0, 1.0], [2.0, 0.0], [0.0, 0.0]].view());
//!
//! let c = a.mmul(&b)?;
//! assert_eq!(c.cardinality(), 1);
//! assert_eq!(c.get(0, 1), 2.0);
//! # Ok::<(), sparmat::Error>(())
//! ```
//!
//! Elementwise operators mutate in place and accept a scalar or a matrix:
//!
//! ```
//! use ndarray::array;
//! use sparmat::SparseMatrix;
//!
//! let mut m = SparseMatrix::from_dense(array![[1.0, 0.0], [0.0, 4.0]].view());
//! m.mul(10.0).sqrt();
//! assert_eq!(m.to_dense(), array![[10.0_f64.sqrt(), 0.0], [0.0, 40.0_f64.sqrt()]]);
//! ```

pub mod constants;
pub mod coord;
pub mod error;
pub mod matrix;
pub mod multiply;
pub mod ops;
pub mod store;
pub mod utils;

// Re-export primary components
pub use error::{Error, Result};
pub use matrix::{
    coo_to_csc, coo_to_csr, MatrixOptions, NonZeros, NonZerosOptions, SparseMatrix,
    SparseMatrixCOO, SparseMatrixCSC, SparseMatrixCSR, ViewFormat, Visit,
};
pub use multiply::{
    mmul, mmul_low_density, mmul_medium_density, mmul_small, mmul_with_config, select_strategy,
    MulConfig, MulStrategy,
};
pub use ops::{
    operator_by_name, BinaryOp, ElementOp, Operand, OperatorEntry, UnaryOp, OPERATOR_TABLE,
};
pub use store::SparseStore;
pub use utils::{from_sprs, to_sprs};

/// Version information for the sparmat library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
