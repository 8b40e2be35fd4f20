//! rowmat: row-sparse square matrices with a Gauss-Seidel solver
//!
//! This crate stores square matrices as one column-sorted sparse row per
//! index, supports construction from coordinate triplets or dense input,
//! sparse arithmetic (addition, multiplication, tolerance-based comparison),
//! dense-vector products, and an iterative Gauss-Seidel linear solver.

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod solver;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use core::*;
pub use error::*;
pub use matrix::*;
pub use solver::*;
pub use utils::*;

// Re-export SolveStats at the crate root for convenience
pub use utils::convergence::SolveStats;
