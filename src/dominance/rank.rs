//! Layered Pareto ranking.

use crate::matrix::AttributeMatrix;

use super::types::{dominance_cmp, Dominance};

/// Result of layered non-dominated sorting.
///
/// Each element of `ranks` is the Pareto rank of the item at the same
/// index. Rank 0 is the frontier; rank k is the frontier that remains once
/// all items of rank < k are removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParetoRanks {
    /// Pareto rank for each item (0 = frontier).
    pub ranks: Vec<usize>,

    /// Indices grouped by layer, ascending within each layer.
    pub fronts: Vec<Vec<usize>>,
}

/// Assigns a Pareto rank to every row of an oriented matrix.
///
/// # Algorithm (Deb et al., 2002)
///
/// 1. For each pair of rows, determine dominance
/// 2. Rows dominated by no other belong to front 0
/// 3. Remove front 0, repeat to find subsequent fronts
///
/// # Complexity
///
/// O(m * n²) where m = number of criteria, n = number of items
///
/// # Example
///
/// ```
/// use u_pareto::dominance::pareto_ranks;
/// use u_pareto::matrix::AttributeMatrix;
///
/// let m = AttributeMatrix::from_rows(&[
///     vec![3.0, 3.0],
///     vec![2.0, 2.0], // dominated by 0
///     vec![1.0, 1.0], // dominated by 0 and 1
///     vec![4.0, 0.0],
/// ]);
/// let result = pareto_ranks(&m);
/// assert_eq!(result.ranks, vec![0, 1, 2, 0]);
/// assert_eq!(result.fronts, vec![vec![0, 3], vec![1], vec![2]]);
/// ```
pub fn pareto_ranks(oriented: &AttributeMatrix) -> ParetoRanks {
    let n = oriented.rows();
    if n == 0 {
        return ParetoRanks::default();
    }

    let mut domination_count = vec![0usize; n];
    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut ranks = vec![0usize; n];

    for i in 0..n {
        for j in (i + 1)..n {
            match dominance_cmp(oriented.row(i), oriented.row(j)) {
                Dominance::Left => {
                    dominated_by[i].push(j);
                    domination_count[j] += 1;
                }
                Dominance::Right => {
                    dominated_by[j].push(i);
                    domination_count[i] += 1;
                }
                Dominance::Neither => {}
            }
        }
    }

    let front_0: Vec<usize> = (0..n).filter(|&i| domination_count[i] == 0).collect();

    let mut fronts = vec![front_0];
    loop {
        let Some(current) = fronts.last() else {
            break;
        };
        let mut next_front = Vec::new();

        for &i in current {
            for &j in &dominated_by[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    ranks[j] = fronts.len();
                    next_front.push(j);
                }
            }
        }

        if next_front.is_empty() {
            break;
        }
        next_front.sort_unstable();
        fronts.push(next_front);
    }

    ParetoRanks { ranks, fronts }
}
