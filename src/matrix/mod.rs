// Matrix data structures and operations

pub mod conversion;
pub mod coo;
pub mod csc;
pub mod csr;
pub mod iter;
pub mod sparse;

pub use conversion::{coo_to_csc, coo_to_csr, NonZeros, NonZerosOptions, ViewFormat};
pub use coo::SparseMatrixCOO;
pub use csc::SparseMatrixCSC;
pub use csr::SparseMatrixCSR;
pub use iter::Visit;
pub use sparse::{MatrixOptions, SparseMatrix};
