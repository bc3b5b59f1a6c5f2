//! Pareto evaluation engine.
//!
//! Ties the pipeline together: item records and criteria go in, the
//! frontier, the dominated set, and per-criterion scores come out.
//!
//! # Key Types
//!
//! - [`ParetoEngine`]: holds the criteria and configuration, runs evaluations
//! - [`EngineConfig`]: dominance strategy, direction policy, default weight
//! - [`ParetoResult`]: the evaluation output
//! - [`ParetoRequest`]: the serde task payload used by a dispatch layer
//!
//! # Entry Points
//!
//! - [`ParetoEngine::calculate`] / [`pareto_frontier`]: direct calls
//! - [`calculate_pareto`], [`calculate_pareto_json`], [`calculate_pareto_batch`]:
//!   task-payload calls for a job queue or RPC handler

mod config;
mod runner;
mod task;
mod types;

pub use config::EngineConfig;
pub use runner::{pareto_frontier, ParetoEngine};
pub use task::{calculate_pareto, calculate_pareto_batch, calculate_pareto_json, ParetoRequest};
pub use types::ParetoResult;
