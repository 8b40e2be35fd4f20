//! Iterative solver interfaces.

use crate::utils::convergence::SolveStats;

/// Common interface for any iterative solver.
pub trait LinearSolver<M, V> {
    type Error;
    /// Solve A·x = b, writing result into `x`.
    /// Returns iteration stats (including convergence info).
    fn solve(
        &mut self,
        a: &M,
        b: &V,
        x: &mut V,
    ) -> Result<SolveStats<<Self as LinearSolver<M, V>>::Scalar>, Self::Error>;
    type Scalar: Copy + PartialOrd;
}

pub mod gauss_seidel;
pub use gauss_seidel::GaussSeidelSolver;
