//! Conversions between the hash-backed container and snapshot formats
//!
//! All compressed forms are produced by counting-sort passes: tally the
//! per-row (or per-column) populations, prefix-sum them into pointers, then
//! scatter the entries into their slices. Every conversion is O(dim + nnz).

use std::str::FromStr;

use num_traits::Float;
use num_traits::Num;

use crate::coord::decode;
use crate::error::{Error, Result};
use crate::matrix::{SparseMatrix, SparseMatrixCOO, SparseMatrixCSC, SparseMatrixCSR};
use crate::utils::exclusive_scan;

/// Snapshot format selector for [`SparseMatrix::non_zeros`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewFormat {
    /// Coordinate list
    Coo,
    /// Compressed sparse row
    Csr,
    /// Compressed sparse column
    Csc,
}

impl FromStr for ViewFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "coo" => Ok(ViewFormat::Coo),
            "csr" => Ok(ViewFormat::Csr),
            "csc" => Ok(ViewFormat::Csc),
            other => Err(Error::UnsupportedFormat {
                format: other.to_string(),
            }),
        }
    }
}

/// Options for [`SparseMatrix::non_zeros`]
#[derive(Debug, Clone)]
pub struct NonZerosOptions {
    /// Requested snapshot format: "coo", "csr" or "csc"
    pub format: String,
    /// For COO, order entries by ascending linear key
    pub sorted: bool,
}

impl Default for NonZerosOptions {
    fn default() -> Self {
        Self {
            format: "coo".to_string(),
            sorted: false,
        }
    }
}

/// A snapshot of a matrix's active entries in the requested format
#[derive(Debug, Clone)]
pub enum NonZeros<T> {
    /// Coordinate-list snapshot
    Coo(SparseMatrixCOO<T>),
    /// Compressed-sparse-row snapshot
    Csr(SparseMatrixCSR<T>),
    /// Compressed-sparse-column snapshot
    Csc(SparseMatrixCSC<T>),
}

impl<T: Float> SparseMatrix<T> {
    /// Takes a COO snapshot of the active entries
    ///
    /// With `sorted`, entries ascend by linear key (row-major order, columns
    /// ascending within each row); otherwise the order is the store's
    /// natural one. Taking a snapshot never mutates the matrix.
    pub fn to_coo(&self, sorted: bool) -> SparseMatrixCOO<T> {
        let mut pairs: Vec<(u64, T)> = self.elements.iter().map(|(&k, &v)| (k, v)).collect();
        if sorted {
            pairs.sort_unstable_by_key(|&(key, _)| key);
        }

        let mut row_idx = Vec::with_capacity(pairs.len());
        let mut col_idx = Vec::with_capacity(pairs.len());
        let mut values = Vec::with_capacity(pairs.len());
        for (key, value) in pairs {
            let (i, j) = decode(key, self.columns);
            row_idx.push(i);
            col_idx.push(j);
            values.push(value);
        }

        SparseMatrixCOO::new(self.rows, self.columns, row_idx, col_idx, values)
    }

    /// Takes a CSR snapshot of the active entries
    ///
    /// Entries within each row ascend by column.
    pub fn to_csr(&self) -> SparseMatrixCSR<T> {
        coo_to_csr(&self.to_coo(true))
    }

    /// Takes a CSC snapshot of the active entries
    ///
    /// Entries within each column ascend by row.
    pub fn to_csc(&self) -> SparseMatrixCSC<T> {
        coo_to_csc(&self.to_coo(true))
    }

    /// Takes a snapshot in the format named by `options.format`
    ///
    /// Formats outside {"coo", "csr", "csc"} fail with
    /// `Error::UnsupportedFormat`.
    pub fn non_zeros(&self, options: &NonZerosOptions) -> Result<NonZeros<T>> {
        let format: ViewFormat = options.format.parse()?;
        Ok(match format {
            ViewFormat::Coo => NonZeros::Coo(self.to_coo(options.sorted)),
            ViewFormat::Csr => NonZeros::Csr(self.to_csr()),
            ViewFormat::Csc => NonZeros::Csc(self.to_csc()),
        })
    }
}

/// Converts a COO snapshot to CSR via counting sort on the rows
///
/// Entry order within a row follows the order of the source COO, so a
/// key-sorted COO yields column-ascending rows.
pub fn coo_to_csr<T: Copy + Num>(coo: &SparseMatrixCOO<T>) -> SparseMatrixCSR<T> {
    let mut row_counts = vec![0; coo.n_rows];
    for &row in &coo.row_idx {
        row_counts[row] += 1;
    }

    let row_ptr = exclusive_scan(&row_counts);

    let nnz = coo.nnz();
    let mut col_idx = vec![0; nnz];
    let mut values = vec![T::zero(); nnz];
    let mut next_free = row_ptr.clone();

    for idx in 0..nnz {
        let row = coo.row_idx[idx];
        let pos = next_free[row];

        col_idx[pos] = coo.col_idx[idx];
        values[pos] = coo.values[idx];

        next_free[row] += 1;
    }

    SparseMatrixCSR::new(coo.n_rows, coo.n_cols, row_ptr, col_idx, values)
}

/// Converts a COO snapshot to CSC via counting sort on the columns
pub fn coo_to_csc<T: Copy + Num>(coo: &SparseMatrixCOO<T>) -> SparseMatrixCSC<T> {
    let mut col_counts = vec![0; coo.n_cols];
    for &col in &coo.col_idx {
        col_counts[col] += 1;
    }

    let col_ptr = exclusive_scan(&col_counts);

    let nnz = coo.nnz();
    let mut row_idx = vec![0; nnz];
    let mut values = vec![T::zero(); nnz];
    let mut next_free = col_ptr.clone();

    for idx in 0..nnz {
        let col = coo.col_idx[idx];
        let pos = next_free[col];

        row_idx[pos] = coo.row_idx[idx];
        values[pos] = coo.values[idx];

        next_free[col] += 1;
    }

    SparseMatrixCSC::new(coo.n_rows, coo.n_cols, col_ptr, row_idx, values)
}
