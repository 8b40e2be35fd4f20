//! Row-sparse square matrix: construction, arithmetic, vector products.
//!
//! A `RowMat` stores one column-sorted sparse row per index plus the
//! right-hand-side vector `b` of the associated linear system. Only
//! intentionally stored entries exist: a stored `0.0` is structurally
//! present and participates in equality and difference, while an absent
//! column does not.

use std::fmt;
use std::ops::{Add, Mul};

use num_traits::Float;

use crate::config::BuildOptions;
use crate::core::traits::{Indexing, MatVec};
use crate::matrix::dot::merge_dot;
use crate::matrix::row::Row;

/// Default tolerance for approximate comparisons.
pub const EPSILON: f64 = 1.0e-7;

/// A stored entry with no counterpart on the other side of a
/// [`RowMat::difference_with`] comparison.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoneEntry<T> {
    pub row: usize,
    pub col: usize,
    pub value: T,
}

/// Square row-sparse matrix with its right-hand side.
#[derive(Clone, Debug)]
pub struct RowMat<T> {
    size: usize,
    rows: Vec<Row<T>>,
    b: Vec<T>,
}

impl<T: Float> RowMat<T> {
    /// Empty matrix of the given dimension. `b.len()` must equal `size`.
    pub fn new(size: usize, b: Vec<T>) -> Self {
        assert_eq!(b.len(), size);
        Self {
            size,
            rows: (0..size).map(|_| Row::new()).collect(),
            b,
        }
    }

    /// Build from `(row, col, value)` triplets. Repeated coordinates
    /// accumulate by summation.
    pub fn from_triplets(size: usize, b: Vec<T>, triplets: &[(usize, usize, T)]) -> Self {
        let mut mat = Self::new(size, b);
        for &(row, col, value) in triplets {
            mat.merge_append(row, value, col);
        }
        mat
    }

    /// Build from pre-transposed `(value, col, row)` triplets: the *third*
    /// field selects the physical row and the first two are the stored
    /// `(value, column)` pair.
    ///
    /// Feeding column-major triplets of a matrix M through this
    /// constructor therefore stores Mᵀ, which is the layout
    /// [`Mul`] expects for its right-hand operand. Do not pass row-major
    /// triplets here; use [`RowMat::from_triplets`] for those.
    pub fn from_transposed_triplets(size: usize, b: Vec<T>, triplets: &[(T, usize, usize)]) -> Self {
        let mut mat = Self::new(size, b);
        for &(value, col, row) in triplets {
            mat.merge_append(row, value, col);
        }
        mat
    }

    /// Build from a dense square matrix, skipping zero cells
    /// (`BuildOptions::default()`).
    pub fn from_dense(b: Vec<T>, a: &faer::Mat<T>) -> Self {
        Self::from_dense_with(b, a, BuildOptions::default())
    }

    /// Build from a dense square matrix under an explicit zero policy.
    /// With `skip_zeros = false` every cell is stored, zeros included.
    pub fn from_dense_with(b: Vec<T>, a: &faer::Mat<T>, opts: BuildOptions) -> Self {
        assert_eq!(a.nrows(), a.ncols());
        let size = a.nrows();
        let mut mat = Self::new(size, b);
        for i in 0..size {
            for j in 0..size {
                let v = a[(i, j)];
                if opts.skip_zeros && v == T::zero() {
                    continue;
                }
                mat.merge_append(i, v, j);
            }
        }
        mat
    }

    /// Matrix dimension N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The right-hand-side vector.
    pub fn b(&self) -> &[T] {
        &self.b
    }

    /// Row `i`, sorted by column.
    pub fn row(&self, i: usize) -> &Row<T> {
        &self.rows[i]
    }

    /// Total number of stored entries.
    pub fn nnz(&self) -> usize {
        self.rows.iter().map(Row::len).sum()
    }

    /// Value stored at `(i, j)`, if any.
    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        self.rows[i].get(j)
    }

    /// Accumulate `value` at `(row, col)`. The sole growth path of the
    /// matrix; keeps every row sorted with unique columns.
    pub fn merge_append(&mut self, row: usize, value: T, col: usize) {
        assert!(row < self.size && col < self.size);
        self.rows[row].merge_append(value, col);
    }

    /// Dense vector product: entry `i` is Σ value · v[col] over row `i`.
    pub fn multiply_vector(&self, v: &[T]) -> Vec<T> {
        assert_eq!(v.len(), self.size);
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .fold(T::zero(), |acc, e| acc + e.value * v[e.col])
            })
            .collect()
    }

    /// Tolerance-based equality: every stored entry of either side must
    /// have a counterpart within `eps` on the other. An entry stored with
    /// value zero is still a stored entry; its absence on the other side
    /// breaks equality.
    pub fn approx_eq(&self, other: &Self, eps: T) -> bool {
        self.one_sided_eq(other, eps) && other.one_sided_eq(self, eps)
    }

    fn one_sided_eq(&self, other: &Self, eps: T) -> bool {
        if self.size != other.size {
            return false;
        }
        for (i, row) in self.rows.iter().enumerate() {
            for e in row {
                match other.rows[i].get(e.col) {
                    Some(v) if (e.value - v).abs() <= eps => {}
                    _ => return false,
                }
            }
        }
        true
    }

    /// Accumulated error energy between two matrices.
    ///
    /// Walks the stored entries of `self` against `other` and then of
    /// `other` against `self`; a column present on both sides contributes
    /// its absolute value difference from each walk, a lone entry
    /// contributes its own magnitude and fires `on_anomaly`. Not a matrix
    /// norm.
    pub fn difference_with<F>(&self, other: &Self, mut on_anomaly: F) -> T
    where
        F: FnMut(LoneEntry<T>),
    {
        let mut diff = self.one_sided_difference(other, &mut on_anomaly);
        diff = diff + other.one_sided_difference(self, &mut on_anomaly);
        diff
    }

    fn one_sided_difference<F>(&self, other: &Self, on_anomaly: &mut F) -> T
    where
        F: FnMut(LoneEntry<T>),
    {
        let mut diff = T::zero();
        for (i, row) in self.rows.iter().enumerate() {
            for e in row {
                match other.rows[i].get(e.col) {
                    Some(v) => diff = diff + (e.value - v).abs(),
                    None => {
                        on_anomaly(LoneEntry { row: i, col: e.col, value: e.value });
                        diff = diff + e.value.abs();
                    }
                }
            }
        }
        diff
    }
}

impl<T: Float + fmt::Debug> RowMat<T> {
    /// [`RowMat::difference_with`] with anomalies routed to the log.
    pub fn difference(&self, other: &Self) -> T {
        self.difference_with(other, |lone| {
            log::debug!(
                "unmatched entry {:?} at ({}, {})",
                lone.value,
                lone.row,
                lone.col
            );
        })
    }
}

impl<T: Float> MatVec<Vec<T>> for RowMat<T> {
    fn matvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        assert_eq!(x.len(), self.size);
        assert_eq!(y.len(), self.size);
        for (yi, row) in y.iter_mut().zip(&self.rows) {
            *yi = row.iter().fold(T::zero(), |acc, e| acc + e.value * x[e.col]);
        }
    }
}

impl<T> Indexing for RowMat<T> {
    fn nrows(&self) -> usize {
        self.size
    }
}

impl<T: Float> Add for &RowMat<T> {
    type Output = RowMat<T>;

    /// Entrywise sum; `b` vectors add elementwise. Overlapping columns
    /// accumulate through `merge_append`.
    fn add(self, rhs: &RowMat<T>) -> RowMat<T> {
        assert_eq!(self.size, rhs.size);
        let b = self.b.iter().zip(&rhs.b).map(|(&x, &y)| x + y).collect();
        let mut out = RowMat::new(self.size, b);
        for (i, row) in self.rows.iter().enumerate() {
            for e in row {
                out.rows[i].merge_append(e.value, e.col);
            }
        }
        for (i, row) in rhs.rows.iter().enumerate() {
            for e in row {
                out.rows[i].merge_append(e.value, e.col);
            }
        }
        out
    }
}

impl<T: Float> Mul for &RowMat<T> {
    type Output = RowMat<T>;

    /// Row-by-row product: `C[i][j] = rowI(self) · rowJ(rhs)`. The
    /// right-hand operand is consumed by rows, so it must hold the
    /// transposed factor (see [`RowMat::from_transposed_triplets`]).
    ///
    /// The outer loop covers the full N×N index space regardless of
    /// sparsity; only nonzero products are stored. The result's `b` is
    /// zero.
    fn mul(self, rhs: &RowMat<T>) -> RowMat<T> {
        assert_eq!(self.size, rhs.size);
        let mut out = RowMat::new(self.size, vec![T::zero(); self.size]);
        for i in 0..self.size {
            for j in 0..rhs.size {
                let product = merge_dot(self.rows[i].entries(), rhs.rows[j].entries());
                if product != T::zero() {
                    out.rows[i].merge_append(product, j);
                }
            }
        }
        out
    }
}

/// One `(value, row, column)` line per stored entry, rows in index order,
/// columns ascending within a row.
impl<T: Float + fmt::Display> fmt::Display for RowMat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            for e in row {
                writeln!(f, "({}, {}, {})", e.value, i, e.col)?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "rayon")]
use rayon::prelude::*;

#[cfg(feature = "rayon")]
impl<T: Float + Send + Sync> RowMat<T> {
    /// Parallel vector product using Rayon. Rows are independent, so the
    /// result is identical to `multiply_vector`.
    pub fn multiply_vector_parallel(&self, v: &[T]) -> Vec<T> {
        assert_eq!(v.len(), self.size);
        self.rows
            .par_iter()
            .map(|row| {
                row.iter()
                    .fold(T::zero(), |acc, e| acc + e.value * v[e.col])
            })
            .collect()
    }
}
