//! Score normalization for ranking.
//!
//! Turns the raw attribute matrix into per-criterion scores in
//! `[0, weight]`, where a higher score is always better regardless of the
//! criterion's direction.
//!
//! Note the degenerate-column convention: a constant column normalizes to
//! 0.0 here, whereas [`crate::normalize::min_max`] yields 0.5. Downstream
//! ranking depends on both, so they are intentionally not unified.

mod normalizer;

pub use normalizer::{criterion_score, normalize_scores, ColumnBounds, ScoreMap};
