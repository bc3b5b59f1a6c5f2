//! Pareto evaluation pipeline.
//!
//! [`ParetoEngine`] orchestrates one evaluation:
//! matrix construction → orientation → dominance → score normalization.

use crate::criteria::{Criterion, CriterionSpec};
use crate::dominance::{self, ParetoRanks};
use crate::error::ParetoError;
use crate::matrix::{AttributeMatrix, ItemRecord};
use crate::scoring::normalize_scores;

use super::config::EngineConfig;
use super::types::ParetoResult;

/// Evaluates item sets against a fixed list of criteria.
///
/// The engine holds no mutable state: every call is a pure function of
/// its inputs and may run concurrently from any number of threads.
///
/// # Examples
///
/// ```
/// use u_pareto::criteria::Criterion;
/// use u_pareto::engine::ParetoEngine;
/// use u_pareto::matrix::ItemRecord;
///
/// let engine = ParetoEngine::new(vec![
///     Criterion::minimize("price"),
///     Criterion::maximize("rating"),
/// ]);
///
/// let items = vec![
///     ItemRecord::new().with("price", 10).with("rating", 4),
///     ItemRecord::new().with("price", 8).with("rating", 4),
///     ItemRecord::new().with("price", 8).with("rating", 5),
/// ];
///
/// let result = engine.calculate(&items);
/// assert_eq!(result.pareto_indices, vec![2]);
/// assert_eq!(result.dominated_indices, vec![0, 1]);
/// assert_eq!(result.normalized_scores.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ParetoEngine {
    criteria: Vec<Criterion>,
    config: EngineConfig,
}

impl ParetoEngine {
    /// Creates an engine with the default configuration.
    pub fn new(criteria: Vec<Criterion>) -> Self {
        Self {
            criteria,
            config: EngineConfig::default(),
        }
    }

    /// Creates an engine with an explicit configuration.
    pub fn with_config(criteria: Vec<Criterion>, config: EngineConfig) -> Result<Self, ParetoError> {
        config.validate()?;
        Ok(Self { criteria, config })
    }

    /// Resolves wire-form criteria under `config`'s direction policy and
    /// default weight.
    pub fn from_specs(specs: &[CriterionSpec], config: EngineConfig) -> Result<Self, ParetoError> {
        config.validate()?;
        let criteria = specs
            .iter()
            .map(|spec| spec.resolve(config.default_weight, config.direction_policy))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { criteria, config })
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Computes the Pareto frontier and normalized scores for `items`.
    ///
    /// An empty item list yields an empty result.
    ///
    /// An empty criteria list does *not* yield an empty result when there
    /// are items: no item can be strictly better than another, so every
    /// index is on the frontier and `normalized_scores` holds an empty map
    /// per item. `pareto_indices` and `dominated_indices` always partition
    /// `0..items.len()`.
    pub fn calculate(&self, items: &[ItemRecord]) -> ParetoResult {
        if items.is_empty() {
            return ParetoResult::default();
        }

        let matrix = AttributeMatrix::build(items, &self.criteria);
        let oriented = matrix.oriented(&self.criteria);
        let frontier = self.config.dominance.evaluate(&oriented);
        let normalized_scores = normalize_scores(&matrix, &self.criteria);

        tracing::debug!(
            items = items.len(),
            criteria = self.criteria.len(),
            pareto = frontier.pareto.len(),
            dominated = frontier.dominated.len(),
            strategy = ?self.config.dominance,
            "computed pareto frontier"
        );

        ParetoResult {
            pareto_indices: frontier.pareto,
            dominated_indices: frontier.dominated,
            normalized_scores,
        }
    }

    /// For each item, the ascending indices of the items that dominate it.
    pub fn dominators(&self, items: &[ItemRecord]) -> Vec<Vec<usize>> {
        dominance::dominators(&self.oriented(items))
    }

    /// Layered Pareto ranks (0 = frontier).
    pub fn ranks(&self, items: &[ItemRecord]) -> ParetoRanks {
        dominance::pareto_ranks(&self.oriented(items))
    }

    fn oriented(&self, items: &[ItemRecord]) -> AttributeMatrix {
        AttributeMatrix::build(items, &self.criteria).oriented(&self.criteria)
    }
}

/// Computes the Pareto result for `items` under `criteria` with the
/// default configuration.
pub fn pareto_frontier(items: &[ItemRecord], criteria: &[Criterion]) -> ParetoResult {
    ParetoEngine::new(criteria.to_vec()).calculate(items)
}
