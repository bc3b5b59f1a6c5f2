//! Weighted aggregation and multi-attribute batch normalization.

use std::collections::{BTreeMap, HashMap};

use crate::criteria::{Criterion, Direction};
use crate::matrix::ItemRecord;

use super::stats::min_max;

/// Weighted average of attribute scores: `Σ(score × weight) / Σ(weight)`.
///
/// Attributes missing from `weights` weigh 1.0. Returns 0.0 when the
/// weights sum to exactly zero.
///
/// # Examples
///
/// ```
/// use std::collections::{BTreeMap, HashMap};
/// use u_pareto::normalize::weighted_sum;
///
/// let scores = BTreeMap::from([("price".to_string(), 1.0), ("rating".to_string(), 0.5)]);
/// let weights = HashMap::from([("price".to_string(), 3.0)]);
///
/// // (1.0 * 3 + 0.5 * 1) / 4
/// assert!((weighted_sum(&scores, &weights) - 0.875).abs() < 1e-10);
/// ```
pub fn weighted_sum(scores: &BTreeMap<String, f64>, weights: &HashMap<String, f64>) -> f64 {
    let mut total = 0.0;
    let mut weight_sum = 0.0;

    for (attribute, score) in scores {
        let weight = weights.get(attribute).copied().unwrap_or(1.0);
        total += score * weight;
        weight_sum += weight;
    }

    if weight_sum == 0.0 {
        return 0.0;
    }
    total / weight_sum
}

/// Composite ranking score of an item's normalized scores.
///
/// Scores produced by [`crate::scoring::normalize_scores`] already carry
/// their criterion's weight, so this sums the scores of every criterion
/// present in `scores` and divides by the sum of those criteria's weights.
/// Returns 0.0 when that weight sum is not positive.
pub fn composite_score(scores: &BTreeMap<String, f64>, criteria: &[Criterion]) -> f64 {
    let mut total = 0.0;
    let mut weight_sum = 0.0;

    for criterion in criteria {
        if let Some(score) = scores.get(criterion.attribute()) {
            total += score;
            weight_sum += criterion.weight();
        }
    }

    if weight_sum > 0.0 {
        total / weight_sum
    } else {
        0.0
    }
}

/// Min-max normalizes each attribute independently across `items`.
///
/// Missing and non-numeric values count as 0.0. Attributes absent from
/// `directions` are maximized; minimized attributes are inverted so lower
/// raw values score higher. Returns one score record per item, or an empty
/// vector when `items` or `attributes` is empty.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use u_pareto::criteria::Direction;
/// use u_pareto::matrix::ItemRecord;
/// use u_pareto::normalize::normalize_attributes;
///
/// let items = vec![
///     ItemRecord::new().with("price", 10).with("rating", 4),
///     ItemRecord::new().with("price", 20).with("rating", 4),
/// ];
/// let directions = HashMap::from([("price".to_string(), Direction::Minimize)]);
///
/// let out = normalize_attributes(&items, &["price", "rating"], &directions);
/// assert_eq!(out[0]["price"], 1.0);
/// assert_eq!(out[1]["price"], 0.0);
/// assert_eq!(out[0]["rating"], 0.5); // constant attribute
/// ```
pub fn normalize_attributes<S: AsRef<str>>(
    items: &[ItemRecord],
    attributes: &[S],
    directions: &HashMap<String, Direction>,
) -> Vec<BTreeMap<String, f64>> {
    if items.is_empty() || attributes.is_empty() {
        return Vec::new();
    }

    let mut out = vec![BTreeMap::new(); items.len()];

    for attribute in attributes {
        let attribute = attribute.as_ref();
        let values: Vec<f64> = items
            .iter()
            .map(|item| item.numeric(attribute).unwrap_or(0.0))
            .collect();
        let invert = directions.get(attribute).copied().unwrap_or_default() == Direction::Minimize;

        for (record, value) in out.iter_mut().zip(min_max(&values, invert)) {
            record.insert(attribute.to_string(), value);
        }
    }

    out
}
