//! Per-criterion min-max score normalization.

use std::collections::BTreeMap;

use crate::criteria::{Criterion, Direction};
use crate::matrix::AttributeMatrix;

/// Normalized scores keyed by item index, then by attribute name.
pub type ScoreMap = BTreeMap<usize, BTreeMap<String, f64>>;

/// Minimum, maximum, and effective range of one matrix column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnBounds {
    pub min: f64,
    pub max: f64,
    /// `max - min`, or 1.0 when the column is constant.
    pub range: f64,
}

impl ColumnBounds {
    /// Computes bounds over a column, skipping NaN cells.
    ///
    /// A column with no comparable values gets `min = max = 0.0`.
    pub fn of(values: impl IntoIterator<Item = f64>) -> Self {
        let (min, max) = values
            .into_iter()
            .filter(|v| !v.is_nan())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        let (min, max) = if min > max { (0.0, 0.0) } else { (min, max) };

        let range = max - min;
        let range = if range == 0.0 { 1.0 } else { range };
        Self { min, max, range }
    }

    /// Rescales `value` into `[0, 1]`.
    pub fn unit(&self, value: f64) -> f64 {
        (value - self.min) / self.range
    }
}

/// Weighted, direction-corrected score of one value.
///
/// Maximize: `unit × weight`. Minimize: `weight − unit × weight`, so both
/// directions land in `[0, weight]` and the minimum raw value scores
/// `weight`.
pub fn criterion_score(bounds: &ColumnBounds, value: f64, criterion: &Criterion) -> f64 {
    let weighted = bounds.unit(value) * criterion.weight();
    match criterion.direction() {
        Direction::Maximize => weighted,
        Direction::Minimize => criterion.weight() - weighted,
    }
}

/// Scores every item on every criterion.
///
/// Each column is normalized independently over all rows, frontier and
/// dominated items together. A constant column (including any column of a
/// single-item matrix) normalizes to 0 before weighting, so it scores 0 on
/// maximize criteria and `weight` on minimize criteria.
///
/// When several criteria share an attribute name, the last one's score is
/// kept in the item's map.
///
/// # Examples
///
/// ```
/// use u_pareto::criteria::Criterion;
/// use u_pareto::matrix::{AttributeMatrix, ItemRecord};
/// use u_pareto::scoring::normalize_scores;
///
/// let items = vec![
///     ItemRecord::new().with("price", 10).with("rating", 3),
///     ItemRecord::new().with("price", 20).with("rating", 5),
/// ];
/// let criteria = vec![
///     Criterion::minimize("price").with_weight(2.0),
///     Criterion::maximize("rating"),
/// ];
/// let matrix = AttributeMatrix::build(&items, &criteria);
/// let scores = normalize_scores(&matrix, &criteria);
///
/// assert_eq!(scores[&0]["price"], 2.0);
/// assert_eq!(scores[&1]["price"], 0.0);
/// assert_eq!(scores[&0]["rating"], 0.0);
/// assert_eq!(scores[&1]["rating"], 1.0);
/// ```
pub fn normalize_scores(matrix: &AttributeMatrix, criteria: &[Criterion]) -> ScoreMap {
    assert_eq!(
        criteria.len(),
        matrix.cols(),
        "criteria count must match matrix columns"
    );

    let bounds: Vec<ColumnBounds> = (0..matrix.cols())
        .map(|j| ColumnBounds::of(matrix.column(j)))
        .collect();

    (0..matrix.rows())
        .map(|i| {
            let scores: BTreeMap<String, f64> = criteria
                .iter()
                .zip(&bounds)
                .enumerate()
                .map(|(j, (criterion, b))| {
                    (
                        criterion.attribute().to_string(),
                        criterion_score(b, matrix.get(i, j), criterion),
                    )
                })
                .collect();
            (i, scores)
        })
        .collect()
}
