// Matrix data structures and operations

pub mod conversion;
pub mod display;
pub mod element;
pub mod sparse;
pub mod store;

pub use conversion::{from_ndarray, from_sprs, to_ndarray, to_sprs_csr};
pub use element::{Element, Scalar};
pub use sparse::SparseMatrix;
pub use store::ElementStore;
