//! Wire form of a criterion, as supplied by the dispatch layer.

use serde::{Deserialize, Serialize};

use super::types::{Criterion, Direction};
use crate::error::ParetoError;

/// How direction strings outside `maximize`/`minimize` are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionPolicy {
    /// Only the exact strings `maximize` and `minimize` are recognised;
    /// anything else becomes [`Direction::Maximize`] with a warning.
    #[default]
    Lenient,

    /// Directions are matched case-insensitively after trimming; unknown
    /// ones are rejected with [`ParetoError::UnknownDirection`].
    Strict,
}

/// Unvalidated criterion as it arrives in a task payload.
///
/// ```json
/// { "attribute": "price", "weight": 2.0, "direction": "minimize" }
/// ```
///
/// `weight` and `direction` are optional; missing values take the
/// engine's default weight and [`Direction::Maximize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionSpec {
    pub attribute: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
}

impl CriterionSpec {
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            weight: None,
            direction: None,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = Some(direction.into());
        self
    }

    /// Resolves this spec into a validated [`Criterion`].
    pub fn resolve(
        &self,
        default_weight: f64,
        policy: DirectionPolicy,
    ) -> Result<Criterion, ParetoError> {
        let direction = match (&self.direction, policy) {
            (None, _) => Direction::Maximize,
            (Some(s), DirectionPolicy::Lenient) => Direction::parse_lenient(s),
            (Some(s), DirectionPolicy::Strict) => s.parse()?,
        };
        Criterion::new(
            self.attribute.clone(),
            self.weight.unwrap_or(default_weight),
            direction,
        )
    }
}

impl From<&Criterion> for CriterionSpec {
    fn from(c: &Criterion) -> Self {
        Self {
            attribute: c.attribute().to_string(),
            weight: Some(c.weight()),
            direction: Some(c.direction().as_str().to_string()),
        }
    }
}
