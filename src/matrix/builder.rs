//! Dense numeric attribute matrix.

use crate::criteria::Criterion;

use super::value::ItemRecord;

/// Row-major `n × m` matrix of attribute values.
///
/// Rows follow item insertion order and columns follow criteria order.
/// Cells whose attribute is missing or non-numeric hold 0.0.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl AttributeMatrix {
    /// Builds the matrix for `items` against `criteria`.
    ///
    /// Lookup is by exact attribute key. Integer and float values are cast
    /// to `f64` and booleans become 1.0 or 0.0; anything else, including
    /// numeric-looking strings, becomes 0.0.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_pareto::criteria::Criterion;
    /// use u_pareto::matrix::{AttributeMatrix, ItemRecord};
    ///
    /// let items = vec![
    ///     ItemRecord::new().with("price", 10).with("rating", 4),
    ///     ItemRecord::new().with("price", "8").with("rating", 4.5),
    /// ];
    /// let criteria = vec![Criterion::minimize("price"), Criterion::maximize("rating")];
    ///
    /// let m = AttributeMatrix::build(&items, &criteria);
    /// assert_eq!(m.row(0), &[10.0, 4.0]);
    /// assert_eq!(m.row(1), &[0.0, 4.5]); // text price defaults to 0.0
    /// ```
    pub fn build(items: &[ItemRecord], criteria: &[Criterion]) -> Self {
        let rows = items.len();
        let cols = criteria.len();
        let mut data = Vec::with_capacity(rows * cols);

        for (i, item) in items.iter().enumerate() {
            for criterion in criteria {
                let value = match item.numeric(criterion.attribute()) {
                    Some(v) => v,
                    None => {
                        tracing::trace!(
                            item = i,
                            attribute = criterion.attribute(),
                            "missing or non-numeric attribute, using 0.0"
                        );
                        0.0
                    }
                };
                data.push(value);
            }
        }

        Self { rows, cols, data }
    }

    /// Builds a matrix from explicit rows.
    ///
    /// # Panics
    ///
    /// Panics if the rows have inconsistent lengths.
    pub fn from_rows(rows: &[Vec<f64>]) -> Self {
        let cols = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|r| r.len() == cols),
            "all rows must have the same length"
        );
        Self {
            rows: rows.len(),
            cols,
            data: rows.iter().flatten().copied().collect(),
        }
    }

    /// Number of items.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of criteria.
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(col < self.cols, "column {col} out of bounds ({})", self.cols);
        self.data[row * self.cols + col]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        assert!(col < self.cols, "column {col} out of bounds ({})", self.cols);
        self.data.iter().skip(col).step_by(self.cols).copied()
    }

    /// Returns a copy with every column mapped to "higher is better".
    pub fn oriented(&self, criteria: &[Criterion]) -> Self {
        assert_eq!(
            criteria.len(),
            self.cols,
            "criteria count must match matrix columns"
        );
        let mut data = self.data.clone();
        if self.cols > 0 {
            for row in data.chunks_mut(self.cols) {
                for (cell, criterion) in row.iter_mut().zip(criteria) {
                    *cell = criterion.direction().orient(*cell);
                }
            }
        }
        Self {
            rows: self.rows,
            cols: self.cols,
            data,
        }
    }
}
