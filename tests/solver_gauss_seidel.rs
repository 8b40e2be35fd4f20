//! Integration tests for the Gauss-Seidel solver.
//!
//! Covers the diagonal-system scenario, the diagonal precondition, a
//! deliberately divergent system, and convergence on random diagonally
//! dominant matrices checked against the matrix-vector product.

use approx::assert_abs_diff_eq;
use rand::Rng;
use rowmat::{GaussSeidelSolver, LinearSolver, RmError, RowMat, SolveOptions};

/// Strictly diagonally dominant random system: the diagonal exceeds the
/// absolute row sum of the off-diagonal entries, so Gauss-Seidel converges.
fn random_dominant(n: usize, per_row: usize) -> RowMat<f64> {
    let mut rng = rand::thread_rng();
    let b: Vec<f64> = (0..n).map(|_| rng.gen_range(-10.0..10.0)).collect();
    let mut m = RowMat::new(n, b);
    for i in 0..n {
        let mut off_sum = 0.0;
        for _ in 0..per_row {
            let j = rng.gen_range(0..n);
            if j == i {
                continue;
            }
            let v: f64 = rng.gen_range(-1.0..1.0);
            off_sum += v.abs();
            m.merge_append(i, v, j);
        }
        m.merge_append(i, off_sum + 1.0 + rng.r#gen::<f64>(), i);
    }
    m
}

#[test]
fn diagonal_system_returns_exact_solution() {
    let a = RowMat::from_triplets(2, vec![4.0, 9.0], &[(0, 0, 2.0), (1, 1, 3.0)]);
    let opts = SolveOptions { tol: 1e-6, threshold: 1e6, max_sweeps: 10 };
    let (x, stats) = a.solve_gauss_seidel(opts).unwrap();
    assert_eq!(x, vec![2.0, 3.0]);
    assert!(stats.converged);
}

#[test]
fn solver_trait_accepts_external_rhs() {
    let a = RowMat::from_triplets(2, vec![0.0; 2], &[(0, 0, 2.0), (1, 1, 4.0)]);
    let mut solver = GaussSeidelSolver::new(1e-10, 1e6, 50);
    let b = vec![2.0, 8.0];
    let mut x = vec![0.0; 2];
    let stats = solver.solve(&a, &b, &mut x).unwrap();
    assert!(stats.converged);
    assert_abs_diff_eq!(x[0], 1.0, epsilon = 1e-8);
    assert_abs_diff_eq!(x[1], 2.0, epsilon = 1e-8);
}

#[test]
fn converges_on_random_dominant_systems() {
    for _ in 0..10 {
        let a = random_dominant(25, 4);
        let opts = SolveOptions { tol: 1e-10, threshold: 1e8, max_sweeps: 1000 };
        let (x, stats) = a.solve_gauss_seidel(opts).unwrap();
        assert!(stats.converged);
        let ax = a.multiply_vector(&x);
        for (axi, bi) in ax.iter().zip(a.b()) {
            assert_abs_diff_eq!(*axi, *bi, epsilon = 1e-6);
        }
    }
}

#[test]
fn weak_diagonal_diverges() {
    // Off-diagonal mass dwarfs the diagonal; the sweep delta grows by
    // roughly two orders of magnitude per sweep.
    let a = RowMat::from_triplets(
        2,
        vec![1.0, 1.0],
        &[(0, 0, 1.0), (0, 1, 10.0), (1, 0, 10.0), (1, 1, 1.0)],
    );
    let opts = SolveOptions { tol: 1e-10, threshold: 1e3, max_sweeps: 50 };
    let err = a.solve_gauss_seidel(opts).unwrap_err();
    assert!(matches!(err, RmError::Divergence { .. }));
}

#[test]
fn row_without_diagonal_fails_before_any_sweep() {
    let a = RowMat::from_triplets(
        3,
        vec![1.0; 3],
        &[(0, 0, 5.0), (1, 0, 2.0), (1, 2, 3.0), (2, 2, 4.0)],
    );
    let opts = SolveOptions { tol: 1e-6, threshold: 1e6, max_sweeps: 10 };
    assert_eq!(a.solve_gauss_seidel(opts).unwrap_err(), RmError::ZeroDiagonal(1));
}

#[test]
fn sub_tolerance_diagonal_counts_as_missing() {
    let a = RowMat::from_triplets(1, vec![1.0], &[(0, 0, 1.0e-8)]);
    let opts = SolveOptions { tol: 1e-6, threshold: 1e6, max_sweeps: 10 };
    assert_eq!(a.solve_gauss_seidel(opts).unwrap_err(), RmError::ZeroDiagonal(0));
}
