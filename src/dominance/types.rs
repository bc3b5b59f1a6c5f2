//! Dominance comparison primitives.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::matrix::AttributeMatrix;

use super::{pairwise, skyline};

/// Outcome of comparing two oriented rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// Left dominates right.
    Left,
    /// Right dominates left.
    Right,
    /// Neither dominates the other (trade-off, exact tie, or NaN).
    Neither,
}

/// Compares two rows for Pareto dominance (higher is better).
///
/// Uses exact float comparison: values that differ by one ulp are
/// different. Any NaN coordinate makes the pair incomparable.
pub fn dominance_cmp(a: &[f64], b: &[f64]) -> Dominance {
    debug_assert_eq!(a.len(), b.len(), "rows must have the same length");

    let mut a_better_in_some = false;
    let mut b_better_in_some = false;

    for (va, vb) in a.iter().zip(b.iter()) {
        match va.partial_cmp(vb) {
            Some(Ordering::Greater) => a_better_in_some = true,
            Some(Ordering::Less) => b_better_in_some = true,
            Some(Ordering::Equal) => {}
            None => return Dominance::Neither,
        }
    }

    match (a_better_in_some, b_better_in_some) {
        (true, false) => Dominance::Left,
        (false, true) => Dominance::Right,
        _ => Dominance::Neither,
    }
}

/// Returns `true` if row `a` dominates row `b`.
pub fn dominates(a: &[f64], b: &[f64]) -> bool {
    dominance_cmp(a, b) == Dominance::Left
}

/// Pareto-optimal and dominated item indices, both ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontier {
    pub pareto: Vec<usize>,
    pub dominated: Vec<usize>,
}

impl Frontier {
    /// Builds a frontier from per-item "is dominated" flags.
    pub(crate) fn from_flags(dominated_flags: &[bool]) -> Self {
        let (dominated, pareto): (Vec<usize>, Vec<usize>) =
            (0..dominated_flags.len()).partition(|&i| dominated_flags[i]);
        Self { pareto, dominated }
    }

    pub fn len(&self) -> usize {
        self.pareto.len() + self.dominated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Algorithm used to split items into frontier and dominated sets.
///
/// Both strategies return identical results on every input, ties and NaN
/// included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DominanceStrategy {
    /// Every pair is compared. O(n² · m).
    Pairwise,

    /// Sort-filter skyline: rows are sorted lexicographically (descending)
    /// and each row is checked only against the frontier found so far.
    /// O(n log n · m) for the sort plus O(n · f · m) for the sweep, where
    /// f is the frontier size.
    #[default]
    Skyline,
}

impl DominanceStrategy {
    /// Partitions the rows of an oriented matrix.
    pub fn evaluate(&self, oriented: &AttributeMatrix) -> Frontier {
        match self {
            DominanceStrategy::Pairwise => pairwise::frontier(oriented),
            DominanceStrategy::Skyline => skyline::frontier(oriented),
        }
    }
}
