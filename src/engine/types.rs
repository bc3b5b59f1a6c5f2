//! Engine result types.

use serde::{Deserialize, Serialize};

use crate::criteria::Criterion;
use crate::normalize::composite_score;
use crate::scoring::ScoreMap;

/// Result of one Pareto evaluation.
///
/// `pareto_indices` and `dominated_indices` are ascending and together
/// partition `0..n`. `normalized_scores` has one entry per item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParetoResult {
    /// Items not dominated by any other item.
    pub pareto_indices: Vec<usize>,

    /// Items dominated by at least one other item.
    pub dominated_indices: Vec<usize>,

    /// Item index → attribute name → normalized score in `[0, weight]`.
    pub normalized_scores: ScoreMap,
}

impl ParetoResult {
    /// Number of items evaluated.
    pub fn len(&self) -> usize {
        self.pareto_indices.len() + self.dominated_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if item `index` is on the frontier.
    pub fn is_pareto_optimal(&self, index: usize) -> bool {
        self.pareto_indices.binary_search(&index).is_ok()
    }

    /// Ranks items by [`composite_score`], best first.
    ///
    /// Ties keep ascending index order.
    pub fn ranking(&self, criteria: &[Criterion]) -> Vec<(usize, f64)> {
        let mut ranked: Vec<(usize, f64)> = self
            .normalized_scores
            .iter()
            .map(|(&i, scores)| (i, composite_score(scores, criteria)))
            .collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        ranked
    }
}
