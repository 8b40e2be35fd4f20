//! Gauss-Seidel iteration over row-sparse matrices.
//!
//! Each sweep updates the solution in place, so row `i + 1` already sees
//! row `i`'s fresh value (true Gauss-Seidel, not Jacobi). The sweep loop
//! is inherently sequential; parallelizing it would change the method.

use std::fmt;

use log::trace;
use num_traits::Float;

use crate::config::SolveOptions;
use crate::error::RmError;
use crate::matrix::sparse::RowMat;
use crate::solver::LinearSolver;
use crate::utils::convergence::{Convergence, SolveStats, SweepOutcome};

pub struct GaussSeidelSolver<T> {
    pub conv: Convergence<T>,
}

impl<T: Copy + Float> GaussSeidelSolver<T> {
    pub fn new(tol: T, threshold: T, max_sweeps: usize) -> Self {
        Self { conv: Convergence { tol, threshold, max_sweeps } }
    }

    pub fn from_options(opts: SolveOptions<T>) -> Self {
        Self::new(opts.tol, opts.threshold, opts.max_sweeps)
    }

    /// Every row must store a diagonal coefficient strictly above `tol`.
    /// The comparison is on the raw value, not its magnitude: a negative
    /// diagonal is rejected no matter how large.
    fn check_diagonal(&self, a: &RowMat<T>) -> Result<(), RmError> {
        for i in 0..a.size() {
            let ok = a.row(i).iter().any(|e| e.col == i && e.value > self.conv.tol);
            if !ok {
                return Err(RmError::ZeroDiagonal(i));
            }
        }
        Ok(())
    }
}

impl<T> LinearSolver<RowMat<T>, Vec<T>> for GaussSeidelSolver<T>
where
    T: Float + fmt::Debug,
{
    type Error = RmError;
    type Scalar = T;

    fn solve(
        &mut self,
        a: &RowMat<T>,
        b: &Vec<T>,
        x: &mut Vec<T>,
    ) -> Result<SolveStats<T>, RmError> {
        assert_eq!(b.len(), a.size());
        self.check_diagonal(a)?;

        let n = a.size();
        let mut solution = vec![T::zero(); n];
        // First delta is measured against b, matching the classical
        // bootstrap where the previous iterate is the right-hand side.
        let mut previous = b.clone();

        for k in 0..self.conv.max_sweeps {
            for i in 0..n {
                let mut aii = T::zero();
                let mut off_diag = T::zero();
                for e in a.row(i) {
                    if e.col == i {
                        aii = e.value;
                    } else {
                        off_diag = off_diag + e.value * solution[e.col];
                    }
                }
                solution[i] = (b[i] - off_diag) / aii;
            }

            let delta = previous
                .iter()
                .zip(&solution)
                .fold(T::zero(), |acc, (&p, &s)| acc + (p - s) * (p - s))
                .sqrt();
            trace!("sweep {}: delta = {:?}", k, delta);

            match self.conv.check(delta) {
                SweepOutcome::Converged => {
                    *x = solution;
                    return Ok(self.conv.stats(k + 1, delta, true));
                }
                SweepOutcome::Diverged => return Err(RmError::Divergence { sweeps: k + 1 }),
                SweepOutcome::Continue => previous.copy_from_slice(&solution),
            }
        }
        Err(RmError::NonConvergence { sweeps: self.conv.max_sweeps })
    }
}

impl<T: Float + fmt::Debug> RowMat<T> {
    /// Solve `self · x = b` for this matrix's own right-hand side.
    pub fn solve_gauss_seidel(
        &self,
        opts: SolveOptions<T>,
    ) -> Result<(Vec<T>, SolveStats<T>), RmError> {
        let mut solver = GaussSeidelSolver::from_options(opts);
        let b = self.b().to_vec();
        let mut x = vec![T::zero(); self.size()];
        let stats = solver.solve(self, &b, &mut x)?;
        Ok((x, stats))
    }
}
