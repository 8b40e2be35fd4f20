//! Sparse dot products over column-sorted rows.
//!
//! Three value-equivalent algorithms. `merge_dot` is the production path;
//! the other two serve as correctness oracles in tests.

use crate::matrix::row::Entry;
use num_traits::Float;

/// Merge-join dot product: two-pointer walk over both sorted rows,
/// advancing the side with the smaller column. O(k1 + k2).
pub fn merge_dot<T: Float>(a: &[Entry<T>], b: &[Entry<T>]) -> T {
    let mut acc = T::zero();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        let c1 = a[i].col;
        let c2 = b[j].col;
        if c1 == c2 {
            acc = acc + a[i].value * b[j].value;
            i += 1;
            j += 1;
        } else if c1 > c2 {
            j += 1;
        } else {
            i += 1;
        }
    }
    acc
}

/// Binary-search dot product: looks up each column of `a` in `b`.
/// O(k1 · log k2).
pub fn binary_dot<T: Float>(a: &[Entry<T>], b: &[Entry<T>]) -> T {
    let mut acc = T::zero();
    for e in a {
        if let Ok(pos) = b.binary_search_by_key(&e.col, |x| x.col) {
            acc = acc + e.value * b[pos].value;
        }
    }
    acc
}

/// Brute-force dot product: nested scan. O(k1 · k2).
pub fn basic_dot<T: Float>(a: &[Entry<T>], b: &[Entry<T>]) -> T {
    let mut acc = T::zero();
    for e1 in a {
        for e2 in b {
            if e1.col == e2.col {
                acc = acc + e1.value * e2.value;
            }
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::row::Row;
    use approx::assert_abs_diff_eq;
    use rand::Rng;

    fn random_row(max_col: usize, nnz: usize) -> Row<f64> {
        let mut rng = rand::thread_rng();
        let mut row = Row::new();
        for _ in 0..nnz {
            row.merge_append(rng.gen_range(-10.0..10.0), rng.gen_range(0..max_col));
        }
        row
    }

    #[test]
    fn all_three_agree_on_random_rows() {
        for _ in 0..100 {
            let a = random_row(50, 12);
            let b = random_row(50, 12);
            let m = merge_dot(a.entries(), b.entries());
            let s = binary_dot(a.entries(), b.entries());
            let n = basic_dot(a.entries(), b.entries());
            assert_abs_diff_eq!(m, s, epsilon = 1e-10);
            assert_abs_diff_eq!(m, n, epsilon = 1e-10);
        }
    }

    #[test]
    fn disjoint_rows_dot_to_zero() {
        let mut a = Row::new();
        let mut b = Row::new();
        for c in 0..5 {
            a.merge_append(1.0, 2 * c);
            b.merge_append(1.0, 2 * c + 1);
        }
        assert_eq!(merge_dot(a.entries(), b.entries()), 0.0);
        assert_eq!(binary_dot(a.entries(), b.entries()), 0.0);
        assert_eq!(basic_dot(a.entries(), b.entries()), 0.0);
    }

    #[test]
    fn shared_columns_accumulate() {
        let mut a = Row::new();
        let mut b = Row::new();
        a.merge_append(2.0, 1);
        a.merge_append(3.0, 4);
        a.merge_append(1.0, 7);
        b.merge_append(5.0, 4);
        b.merge_append(4.0, 7);
        assert_eq!(merge_dot(a.entries(), b.entries()), 19.0);
    }
}
