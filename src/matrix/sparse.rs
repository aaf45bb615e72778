//! Hash-backed sparse matrix container
//!
//! `SparseMatrix` stores only the non-zero (or above-threshold) entries of an
//! otherwise dense rows x columns grid. Positions map to 64-bit linear keys
//! through the coordinate codec and land in a `SparseStore` owned exclusively
//! by the matrix.

use std::fmt;

use ndarray::{Array2, ArrayView2};
use num_traits::Float;

use crate::coord::{decode, encode};
use crate::error::Result;
use crate::multiply;
use crate::store::SparseStore;

/// Construction options for a sparse matrix
///
/// `threshold` is the magnitude below which a value is treated as zero
/// (0 accepts any non-zero value). `initial_capacity` pre-sizes the backing
/// store; it is purely a performance hint with no observable semantic effect.
#[derive(Debug, Clone, Copy)]
pub struct MatrixOptions<T> {
    /// Magnitude below which values are snapped to zero
    pub threshold: T,
    /// Pre-sizing hint for the backing store
    pub initial_capacity: usize,
}

impl<T: Float> Default for MatrixOptions<T> {
    fn default() -> Self {
        Self {
            threshold: T::zero(),
            initial_capacity: 0,
        }
    }
}

/// A sparse matrix backed by a linear-key hash store
///
/// Invariants:
/// - every stored value has magnitude >= the threshold (or the threshold is
///   zero, accepting any non-zero value);
/// - no stored value is exactly zero;
/// - `cardinality() <= rows * columns`.
///
/// `get` and `set` do not bounds-check their coordinates; callers own the
/// `row < rows`, `column < columns` contract. This is a deliberate
/// performance trade-off of the container.
#[derive(Clone)]
pub struct SparseMatrix<T> {
    pub(crate) rows: usize,
    pub(crate) columns: usize,
    pub(crate) threshold: T,
    pub(crate) elements: SparseStore<T>,
}

impl<T: Float> SparseMatrix<T> {
    /// Creates an empty matrix with the given dimensions and options
    pub fn with_options(rows: usize, columns: usize, options: MatrixOptions<T>) -> Self {
        Self {
            rows,
            columns,
            threshold: options.threshold,
            elements: SparseStore::with_capacity(options.initial_capacity),
        }
    }

    /// Creates an empty matrix with the given dimensions
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self::with_options(rows, columns, MatrixOptions::default())
    }

    /// Builds a matrix from a dense 2-D view, dimensions taken from its shape
    ///
    /// Values with magnitude below the threshold are treated as zero and
    /// never stored.
    pub fn from_dense_with_options(grid: ArrayView2<'_, T>, options: MatrixOptions<T>) -> Self {
        let (rows, columns) = grid.dim();
        let mut matrix = Self::with_options(rows, columns, options);
        for ((i, j), &value) in grid.indexed_iter() {
            if matrix.snap(value) != T::zero() {
                matrix.elements.insert(encode(i, j, columns), value);
            }
        }
        matrix
    }

    /// Builds a matrix from a dense 2-D view with default options
    pub fn from_dense(grid: ArrayView2<'_, T>) -> Self {
        Self::from_dense_with_options(grid, MatrixOptions::default())
    }

    /// Creates a matrix with ones on the main diagonal
    pub fn eye(rows: usize, columns: usize) -> Self {
        let min = rows.min(columns);
        let mut matrix = Self::with_options(
            rows,
            columns,
            MatrixOptions {
                initial_capacity: min,
                ..MatrixOptions::default()
            },
        );
        for i in 0..min {
            matrix.set(i, i, T::one());
        }
        matrix
    }

    /// Creates a square identity matrix
    pub fn identity(n: usize) -> Self {
        Self::eye(n, n)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The zero-snapping threshold
    pub fn threshold(&self) -> T {
        self.threshold
    }

    /// Count of stored (non-zero, above-threshold) entries
    pub fn cardinality(&self) -> usize {
        self.elements.len()
    }

    /// Total number of positions, `rows * columns`
    pub fn size(&self) -> usize {
        self.rows * self.columns
    }

    /// Whether the matrix has a zero extent in either dimension
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }

    /// Whether the matrix is square
    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Returns the value at (row, column), zero when no entry is stored
    pub fn get(&self, row: usize, column: usize) -> T {
        self.elements
            .get(encode(row, column, self.columns))
            .unwrap_or_else(T::zero)
    }

    /// Writes the value at (row, column)
    ///
    /// Values snapped to zero by the threshold (or exactly zero) remove the
    /// entry instead of storing it.
    pub fn set(&mut self, row: usize, column: usize, value: T) -> &mut Self {
        let value = self.snap(value);
        let key = encode(row, column, self.columns);
        if value == T::zero() {
            self.elements.remove(key);
        } else {
            self.elements.insert(key, value);
        }
        self
    }

    /// Snaps a value against the threshold: below-magnitude values become zero
    pub(crate) fn snap(&self, value: T) -> T {
        if self.threshold > T::zero() && value.abs() < self.threshold {
            T::zero()
        } else {
            value
        }
    }

    /// Materializes the matrix as a dense 2-D array
    pub fn to_dense(&self) -> Array2<T> {
        Array2::from_shape_fn((self.rows, self.columns), |(i, j)| self.get(i, j))
    }

    /// Whether the matrix equals its own transpose
    ///
    /// A non-square matrix is never symmetric. The scan short-circuits on the
    /// first mismatched pair.
    pub fn is_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        self.elements.iter().all(|(&key, &value)| {
            let (i, j) = decode(key, self.columns);
            self.get(j, i) == value
        })
    }

    /// Span of diagonal offsets `row - column` covered by non-zero entries
    ///
    /// For a matrix without entries this returns the sentinel
    /// `-1 - columns as isize` (the fold identities `max = -1` and
    /// `min = columns` untouched); callers decide whether an empty matrix
    /// counts as banded.
    pub fn band_width(&self) -> isize {
        let mut min = self.columns as isize;
        let mut max = -1isize;
        for (&key, _) in self.elements.iter() {
            let (i, j) = decode(key, self.columns);
            let diff = i as isize - j as isize;
            min = min.min(diff);
            max = max.max(diff);
        }
        max - min
    }

    /// Whether all non-zero entries fit within a band of the given width
    pub fn is_banded(&self, width: isize) -> bool {
        self.band_width() <= width
    }

    /// Updates the threshold and re-filters the stored entries
    ///
    /// Only acts when the new threshold is non-zero and different from the
    /// current one. Thresholding is a one-way filter applied at write time:
    /// entries dropped by an earlier, higher threshold are not restored when
    /// the threshold decreases.
    pub fn set_threshold(&mut self, new_threshold: T) -> &mut Self {
        if new_threshold != T::zero() && new_threshold != self.threshold {
            self.threshold = new_threshold;
            self.visit_non_zeros(|_, _, value| crate::matrix::Visit::SetTo(value));
        }
        self
    }

    /// Returns a new matrix with rows and columns exchanged
    pub fn transpose(&self) -> Self {
        let mut transposed = Self::with_options(
            self.columns,
            self.rows,
            MatrixOptions {
                initial_capacity: self.cardinality(),
                ..MatrixOptions::default()
            },
        );
        self.for_each_non_zero(|i, j, value| {
            transposed.set(j, i, value);
        });
        transposed
    }

    /// Kronecker product of two matrices
    ///
    /// The result has shape `(rows * other.rows, columns * other.columns)`
    /// and at most `cardinality * other.cardinality` entries.
    pub fn kronecker_product(&self, other: &SparseMatrix<T>) -> Self {
        let p = other.rows;
        let q = other.columns;
        let mut result = Self::with_options(
            self.rows * p,
            self.columns * q,
            MatrixOptions {
                initial_capacity: self.cardinality() * other.cardinality(),
                ..MatrixOptions::default()
            },
        );
        self.for_each_non_zero(|i, j, v1| {
            other.for_each_non_zero(|k, l, v2| {
                result.set(p * i + k, q * j + l, v1 * v2);
            });
        });
        result
    }

    /// Alias for [`kronecker_product`](Self::kronecker_product)
    pub fn tensor_product(&self, other: &SparseMatrix<T>) -> Self {
        self.kronecker_product(other)
    }

    /// Multiplies `self * other` with strategy dispatch and default tuning
    ///
    /// Fails with `Error::DimensionMismatch` when `self.columns != other.rows`
    /// before any work is done.
    pub fn mmul(&self, other: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
        multiply::mmul(self, other)
    }
}

impl<T: Float + fmt::Debug> fmt::Debug for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.rows, self.columns)?;
        writeln!(f, "  cardinality: {}", self.cardinality())?;

        let max_entries_to_print = 5.min(self.cardinality());
        if max_entries_to_print > 0 {
            writeln!(f, "  content sample:")?;
            for (&key, value) in self.elements.iter().take(max_entries_to_print) {
                let (i, j) = decode(key, self.columns);
                writeln!(f, "    ({}, {}): {:?}", i, j, value)?;
            }
            if self.cardinality() > max_entries_to_print {
                writeln!(
                    f,
                    "    ... ({} more entries)",
                    self.cardinality() - max_entries_to_print
                )?;
            }
        }

        write!(f, "}}")
    }
}
