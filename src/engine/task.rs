//! Dispatch-layer entry points.
//!
//! A job queue hands the engine a [`ParetoRequest`] (usually as JSON) and
//! forwards the resulting [`ParetoResult`]. Nothing here knows about
//! queues, retries, or transport.

use serde::{Deserialize, Serialize};

use crate::criteria::CriterionSpec;
use crate::error::ParetoError;
use crate::matrix::ItemRecord;

use super::config::EngineConfig;
use super::runner::ParetoEngine;
use super::types::ParetoResult;

/// Task payload: products to compare and the criteria to compare them on.
///
/// ```json
/// {
///   "products": [{"price": 10, "rating": 4}, {"price": 8, "rating": 5}],
///   "criteria": [{"attribute": "price", "direction": "minimize"}, {"attribute": "rating"}]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParetoRequest {
    #[serde(default)]
    pub products: Vec<ItemRecord>,

    #[serde(default)]
    pub criteria: Vec<CriterionSpec>,
}

/// Runs one request.
pub fn calculate_pareto(
    request: &ParetoRequest,
    config: &EngineConfig,
) -> Result<ParetoResult, ParetoError> {
    let engine = ParetoEngine::from_specs(&request.criteria, config.clone())?;
    Ok(engine.calculate(&request.products))
}

/// Runs one JSON-encoded request and returns the JSON-encoded result.
///
/// # Examples
///
/// ```
/// use u_pareto::engine::{calculate_pareto_json, EngineConfig};
///
/// let request = r#"{
///     "products": [
///         {"price": 10, "rating": 4},
///         {"price": 8, "rating": 4},
///         {"price": 8, "rating": 5}
///     ],
///     "criteria": [
///         {"attribute": "price", "weight": 1.0, "direction": "minimize"},
///         {"attribute": "rating", "weight": 1.0, "direction": "maximize"}
///     ]
/// }"#;
///
/// let out = calculate_pareto_json(request, &EngineConfig::default()).unwrap();
/// let value: serde_json::Value = serde_json::from_str(&out).unwrap();
/// assert_eq!(value["pareto_indices"], serde_json::json!([2]));
/// assert_eq!(value["dominated_indices"], serde_json::json!([0, 1]));
/// ```
pub fn calculate_pareto_json(request: &str, config: &EngineConfig) -> Result<String, ParetoError> {
    let request: ParetoRequest = serde_json::from_str(request)?;
    let result = calculate_pareto(&request, config)?;
    Ok(serde_json::to_string(&result)?)
}

/// Runs independent requests, one result per request in input order.
///
/// With the `parallel` feature the requests are spread across the rayon
/// thread pool; each request is still evaluated sequentially.
pub fn calculate_pareto_batch(
    requests: &[ParetoRequest],
    config: &EngineConfig,
) -> Vec<Result<ParetoResult, ParetoError>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        requests
            .par_iter()
            .map(|request| calculate_pareto(request, config))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        requests
            .iter()
            .map(|request| calculate_pareto(request, config))
            .collect()
    }
}
