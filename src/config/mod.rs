//! Configuration structs for construction and solving.

pub mod options;
pub use options::{BuildOptions, SolveOptions};
