//! Naive pairwise dominance evaluation.

use crate::matrix::AttributeMatrix;

use super::types::{dominance_cmp, Dominance, Frontier};

/// Partitions rows by comparing every pair once.
pub(crate) fn frontier(oriented: &AttributeMatrix) -> Frontier {
    let n = oriented.rows();
    let mut dominated = vec![false; n];

    for i in 0..n {
        for j in (i + 1)..n {
            match dominance_cmp(oriented.row(i), oriented.row(j)) {
                Dominance::Left => dominated[j] = true,
                Dominance::Right => dominated[i] = true,
                Dominance::Neither => {}
            }
        }
    }

    Frontier::from_flags(&dominated)
}

/// For each row, the ascending indices of the rows that dominate it.
///
/// Frontier rows get an empty list.
///
/// # Examples
///
/// ```
/// use u_pareto::dominance::dominators;
/// use u_pareto::matrix::AttributeMatrix;
///
/// let m = AttributeMatrix::from_rows(&[
///     vec![1.0, 1.0],
///     vec![2.0, 2.0],
///     vec![3.0, 0.0],
/// ]);
/// let by = dominators(&m);
/// assert_eq!(by[0], vec![1]);
/// assert!(by[1].is_empty());
/// assert!(by[2].is_empty());
/// ```
pub fn dominators(oriented: &AttributeMatrix) -> Vec<Vec<usize>> {
    let n = oriented.rows();
    let mut by: Vec<Vec<usize>> = vec![Vec::new(); n];

    for i in 0..n {
        for j in (i + 1)..n {
            match dominance_cmp(oriented.row(i), oriented.row(j)) {
                Dominance::Left => by[j].push(i),
                Dominance::Right => by[i].push(j),
                Dominance::Neither => {}
            }
        }
    }

    // by[k] receives smaller indices first (outer loops i < k), then larger
    // ones (inner loop of i == k), so every list is already ascending.
    by
}
