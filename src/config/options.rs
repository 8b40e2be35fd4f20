//! API options for matrix construction and solving.
//!
//! This module provides the `BuildOptions` struct controlling how dense
//! input is imported into the row-sparse representation, and the
//! `SolveOptions` struct bundling the Gauss-Seidel stopping parameters.

/// Dense-import parameters.
#[derive(Debug, Clone, Copy)]
pub struct BuildOptions {
    /// Skip cells equal to zero when importing a dense matrix.
    ///
    /// When `false`, every cell of the dense source is stored, zeros
    /// included, which makes the stored zeros structurally present (they
    /// participate in equality and difference like any other entry).
    pub skip_zeros: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self { skip_zeros: true }
    }
}

/// Gauss-Seidel stopping parameters.
#[derive(Debug, Clone, Copy)]
pub struct SolveOptions<T> {
    /// Convergence tolerance on the sweep-to-sweep delta norm.
    pub tol: T,

    /// Divergence threshold on the sweep-to-sweep delta norm.
    pub threshold: T,

    /// Maximum number of sweeps before giving up.
    pub max_sweeps: usize,
}
