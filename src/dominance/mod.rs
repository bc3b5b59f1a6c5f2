//! Pareto dominance evaluation.
//!
//! All functions here operate on an **oriented** [`AttributeMatrix`]
//! (see [`AttributeMatrix::oriented`]) in which every column is
//! "higher is better".
//!
//! Row A dominates row B iff A ≥ B on every column and A > B on at least
//! one. Comparison is exact: there is no epsilon, so rows that differ by
//! rounding noise are treated as different. Rows that tie on every column
//! do not dominate each other and may both sit on the frontier.
//!
//! # Algorithms
//!
//! - [`DominanceStrategy::Pairwise`]: naive O(n² · m) comparison
//! - [`DominanceStrategy::Skyline`]: sort-filter skyline, identical output
//! - [`dominators`]: who dominates whom
//! - [`pareto_ranks`]: layered non-dominated sorting
//!
//! [`AttributeMatrix`]: crate::matrix::AttributeMatrix
//! [`AttributeMatrix::oriented`]: crate::matrix::AttributeMatrix::oriented

mod pairwise;
mod rank;
mod skyline;
mod types;

pub use pairwise::dominators;
pub use rank::{pareto_ranks, ParetoRanks};
pub use types::{dominance_cmp, dominates, Dominance, DominanceStrategy, Frontier};
