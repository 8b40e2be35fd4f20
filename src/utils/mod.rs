//! Shared utilities: convergence tracking.

pub mod convergence;
pub use convergence::{Convergence, SolveStats, SweepOutcome};
