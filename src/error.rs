use thiserror::Error;

// Unified error type for rowmat

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RmError {
    #[error("no diagonal coefficient above tolerance at row {0}")]
    ZeroDiagonal(usize),
    #[error("divergence detected after {sweeps} sweeps")]
    Divergence { sweeps: usize },
    #[error("no convergence after {sweeps} sweeps")]
    NonConvergence { sweeps: usize },
}
