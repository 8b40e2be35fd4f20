//! Matrix module: sorted sparse rows, dot products, and the `RowMat` type.

pub mod row;
pub use row::{Entry, Row};
pub mod dot;
pub use dot::{basic_dot, binary_dot, merge_dot};
pub mod sparse;
pub use sparse::{EPSILON, LoneEntry, RowMat};
