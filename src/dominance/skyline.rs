//! Sort-filter skyline evaluation.
//!
//! If row A dominates row B then A is lexicographically greater than B
//! (the first coordinate where they differ must favour A). Visiting rows
//! in descending lexicographic order therefore guarantees every dominator
//! is seen before the rows it dominates, and because dominance is
//! transitive, each row only needs checking against the frontier window
//! collected so far.
//!
//! # References
//!
//! - Chomicki, Godfrey, Gryz & Liang (2003), "Skyline with Presorting"

use std::cmp::Ordering;

use crate::matrix::AttributeMatrix;

use super::types::{dominates, Frontier};

/// Partitions rows with a presorted sweep.
pub(crate) fn frontier(oriented: &AttributeMatrix) -> Frontier {
    let n = oriented.rows();
    let mut dominated = vec![false; n];

    // NaN rows are incomparable with everything; they stay on the frontier
    // and are kept out of the sort, whose order they would break.
    let mut order: Vec<usize> = (0..n)
        .filter(|&i| !oriented.row(i).iter().any(|v| v.is_nan()))
        .collect();

    order.sort_by(|&a, &b| {
        oriented
            .row(b)
            .partial_cmp(oriented.row(a))
            .unwrap_or(Ordering::Equal)
    });

    let mut window: Vec<usize> = Vec::new();
    for idx in order {
        let row = oriented.row(idx);
        if window.iter().any(|&w| dominates(oriented.row(w), row)) {
            dominated[idx] = true;
        } else {
            window.push(idx);
        }
    }

    Frontier::from_flags(&dominated)
}
