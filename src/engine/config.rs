//! Engine configuration.
//!
//! [`EngineConfig`] holds the knobs that change how an evaluation runs
//! without changing its inputs.

use serde::{Deserialize, Serialize};

use crate::criteria::DirectionPolicy;
use crate::dominance::DominanceStrategy;
use crate::error::ParetoError;

/// Configuration for [`ParetoEngine`](super::ParetoEngine).
///
/// # Defaults
///
/// ```
/// use u_pareto::criteria::DirectionPolicy;
/// use u_pareto::dominance::DominanceStrategy;
/// use u_pareto::engine::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.dominance, DominanceStrategy::Skyline);
/// assert_eq!(config.direction_policy, DirectionPolicy::Lenient);
/// assert!((config.default_weight - 1.0).abs() < 1e-10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_pareto::criteria::DirectionPolicy;
/// use u_pareto::dominance::DominanceStrategy;
/// use u_pareto::engine::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_dominance(DominanceStrategy::Pairwise)
///     .with_direction_policy(DirectionPolicy::Strict);
/// assert!(config.validate().is_ok());
/// ```
///
/// # Loading
///
/// Every field is optional when deserializing:
///
/// ```
/// use u_pareto::engine::EngineConfig;
///
/// let config: EngineConfig = serde_json::from_str(r#"{"direction_policy":"strict"}"#).unwrap();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Algorithm used to split items into frontier and dominated sets.
    ///
    /// Both strategies produce identical results; `Skyline` avoids the full
    /// pairwise comparison on large inputs.
    pub dominance: DominanceStrategy,

    /// Handling of direction strings other than `maximize`/`minimize` in
    /// [`CriterionSpec`](crate::criteria::CriterionSpec)s.
    ///
    /// `Lenient` (the default) falls back to maximize; `Strict` rejects
    /// the request.
    pub direction_policy: DirectionPolicy,

    /// Weight given to criteria that arrive without one.
    pub default_weight: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dominance: DominanceStrategy::default(),
            direction_policy: DirectionPolicy::default(),
            default_weight: 1.0,
        }
    }
}

impl EngineConfig {
    /// Sets the dominance strategy.
    pub fn with_dominance(mut self, strategy: DominanceStrategy) -> Self {
        self.dominance = strategy;
        self
    }

    /// Sets the direction policy.
    pub fn with_direction_policy(mut self, policy: DirectionPolicy) -> Self {
        self.direction_policy = policy;
        self
    }

    /// Sets the default criterion weight.
    pub fn with_default_weight(mut self, weight: f64) -> Self {
        self.default_weight = weight;
        self
    }

    /// Validates the configuration.
    ///
    /// Explicit criterion weights are never checked; only the default
    /// weight must be finite.
    pub fn validate(&self) -> Result<(), ParetoError> {
        if !self.default_weight.is_finite() {
            return Err(ParetoError::InvalidConfig(format!(
                "default_weight must be finite, got {}",
                self.default_weight
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.dominance, DominanceStrategy::Skyline);
        assert_eq!(config.direction_policy, DirectionPolicy::Lenient);
        assert!((config.default_weight - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_ok() {
        assert!(EngineConfig::default().validate().is_ok());
        assert!(EngineConfig::default()
            .with_default_weight(-2.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_non_finite_weight() {
        let config = EngineConfig::default().with_default_weight(f64::NAN);
        assert!(matches!(config.validate(), Err(ParetoError::InvalidConfig(_))));
        let config = EngineConfig::default().with_default_weight(f64::INFINITY);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_defaults() {
        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());

        let config: EngineConfig =
            serde_json::from_str(r#"{"dominance":"pairwise","default_weight":0.5}"#).unwrap();
        assert_eq!(config.dominance, DominanceStrategy::Pairwise);
        assert!((config.default_weight - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let result = serde_json::from_str::<EngineConfig>(r#"{"epsilon":1e-9}"#);
        assert!(result.is_err());
    }
}
