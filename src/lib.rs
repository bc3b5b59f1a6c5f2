//! Multi-criteria Pareto frontier and scoring engine.
//!
//! Given items carrying numeric attributes and a list of weighted,
//! directional criteria, determines which items are non-dominated and
//! produces normalized per-criterion scores for ranking:
//!
//! - **Criteria**: comparison axes (attribute, weight, maximize/minimize).
//! - **Matrix**: item records → dense numeric matrix, lossy 0.0 default
//!   for missing or non-numeric values.
//! - **Dominance**: Pareto frontier via pairwise comparison or a
//!   sort-filter skyline, plus dominator lists and layered ranks.
//! - **Scoring**: per-column min-max normalization, weighted and
//!   direction-corrected into `[0, weight]`.
//! - **Normalize**: standalone z-score, min-max, weighted-sum, and batch
//!   normalization helpers.
//! - **Engine**: configuration, orchestration, and task-payload entry points.
//! - **Source**: the producer trait for upstream record extraction.
//!
//! # Example
//!
//! ```
//! use u_pareto::criteria::Criterion;
//! use u_pareto::engine::pareto_frontier;
//! use u_pareto::matrix::ItemRecord;
//!
//! let items = vec![
//!     ItemRecord::new().with("price", 10).with("rating", 4),
//!     ItemRecord::new().with("price", 8).with("rating", 4),
//!     ItemRecord::new().with("price", 8).with("rating", 5),
//! ];
//! let criteria = vec![Criterion::minimize("price"), Criterion::maximize("rating")];
//!
//! let result = pareto_frontier(&items, &criteria);
//! assert_eq!(result.pareto_indices, vec![2]);
//! assert_eq!(result.dominated_indices, vec![0, 1]);
//! ```
//!
//! # Architecture
//!
//! Evaluation is a pure, synchronous computation with no shared state.
//! Queueing, retries, timeouts, and transport belong to the caller.

pub mod criteria;
pub mod dominance;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod normalize;
pub mod scoring;
pub mod source;

pub use error::ParetoError;
