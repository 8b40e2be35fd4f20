//! Convergence tracking & tolerance checks for iterative solvers.

/// Stopping criteria for sweep-based iteration.
pub struct Convergence<T> {
    pub tol: T,
    pub threshold: T,
    pub max_sweeps: usize,
}

/// Outcome of one sweep's delta-norm check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepOutcome {
    /// Delta norm fell below the tolerance.
    Converged,
    /// Delta norm exceeded the divergence threshold.
    Diverged,
    /// Neither terminal condition reached.
    Continue,
}

#[derive(Clone, Debug)]
pub struct SolveStats<T> {
    pub sweeps: usize,
    pub final_delta: T,
    pub converged: bool,
}

impl<T: Copy + num_traits::Float> Convergence<T> {
    /// Classify the delta norm between two successive sweeps.
    pub fn check(&self, delta_norm: T) -> SweepOutcome {
        if delta_norm < self.tol {
            SweepOutcome::Converged
        } else if delta_norm > self.threshold {
            SweepOutcome::Diverged
        } else {
            SweepOutcome::Continue
        }
    }

    pub fn stats(&self, sweeps: usize, final_delta: T, converged: bool) -> SolveStats<T> {
        SolveStats { sweeps, final_delta, converged }
    }
}
