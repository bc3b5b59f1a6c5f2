//! Criterion and direction types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParetoError;

/// Preferred direction of a criterion's raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Higher raw values are better.
    #[default]
    Maximize,

    /// Lower raw values are better.
    Minimize,
}

impl Direction {
    /// Parses a direction, falling back to [`Direction::Maximize`] for
    /// anything other than the exact wire names `"maximize"` and
    /// `"minimize"`.
    ///
    /// Unlike [`FromStr`], no case folding or trimming is applied, so
    /// `"MINIMIZE"` falls back to maximize. A warning is logged whenever
    /// the fallback is taken.
    ///
    /// ```
    /// use u_pareto::criteria::Direction;
    ///
    /// assert_eq!(Direction::parse_lenient("minimize"), Direction::Minimize);
    /// assert_eq!(Direction::parse_lenient("lowest"), Direction::Maximize);
    /// ```
    pub fn parse_lenient(s: &str) -> Direction {
        match s {
            "maximize" => Direction::Maximize,
            "minimize" => Direction::Minimize,
            _ => {
                tracing::warn!(direction = s, "unknown criterion direction, using maximize");
                Direction::Maximize
            }
        }
    }

    /// Returns the lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Maximize => "maximize",
            Direction::Minimize => "minimize",
        }
    }

    /// Maps a raw value onto the "higher is better" axis.
    ///
    /// Minimize values are negated. Negative zero is folded into positive
    /// zero so that sorting and equality agree.
    pub(crate) fn orient(&self, value: f64) -> f64 {
        let oriented = match self {
            Direction::Maximize => value,
            Direction::Minimize => -value,
        };
        if oriented == 0.0 {
            0.0
        } else {
            oriented
        }
    }
}

impl FromStr for Direction {
    type Err = ParetoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "maximize" => Ok(Direction::Maximize),
            "minimize" => Ok(Direction::Minimize),
            _ => Err(ParetoError::UnknownDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One comparison axis: attribute key, weight, and direction.
///
/// Criteria are immutable once built. The weight is taken as given; zero,
/// negative, and non-finite weights are not rejected.
///
/// # Examples
///
/// ```
/// use u_pareto::criteria::{Criterion, Direction};
///
/// let price = Criterion::minimize("price").with_weight(2.0);
/// assert_eq!(price.attribute(), "price");
/// assert_eq!(price.direction(), Direction::Minimize);
/// assert!((price.weight() - 2.0).abs() < 1e-10);
///
/// assert!(Criterion::new("", 1.0, Direction::Maximize).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Criterion {
    attribute: String,
    weight: f64,
    direction: Direction,
}

impl Criterion {
    /// Default weight applied when none is given.
    pub const DEFAULT_WEIGHT: f64 = 1.0;

    /// Creates a criterion, rejecting an empty attribute key.
    pub fn new(
        attribute: impl Into<String>,
        weight: f64,
        direction: Direction,
    ) -> Result<Self, ParetoError> {
        let attribute = attribute.into();
        if attribute.is_empty() {
            return Err(ParetoError::EmptyAttribute);
        }
        Ok(Self {
            attribute,
            weight,
            direction,
        })
    }

    /// Creates a maximize criterion with weight 1.0.
    ///
    /// # Panics
    ///
    /// Panics if `attribute` is empty.
    pub fn maximize(attribute: impl Into<String>) -> Self {
        Self::new(attribute, Self::DEFAULT_WEIGHT, Direction::Maximize)
            .expect("criterion attribute must not be empty")
    }

    /// Creates a minimize criterion with weight 1.0.
    ///
    /// # Panics
    ///
    /// Panics if `attribute` is empty.
    pub fn minimize(attribute: impl Into<String>) -> Self {
        Self::new(attribute, Self::DEFAULT_WEIGHT, Direction::Minimize)
            .expect("criterion attribute must not be empty")
    }

    /// Returns a copy of this criterion with a different weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_default_is_maximize() {
        assert_eq!(Direction::default(), Direction::Maximize);
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!("maximize".parse::<Direction>().unwrap(), Direction::Maximize);
        assert_eq!("minimize".parse::<Direction>().unwrap(), Direction::Minimize);
        assert_eq!(" Minimize ".parse::<Direction>().unwrap(), Direction::Minimize);
        assert!(matches!(
            "min".parse::<Direction>(),
            Err(ParetoError::UnknownDirection(s)) if s == "min"
        ));
    }

    #[test]
    fn test_direction_parse_lenient_falls_back() {
        assert_eq!(Direction::parse_lenient("maximize"), Direction::Maximize);
        assert_eq!(Direction::parse_lenient("MINIMIZE"), Direction::Maximize);
        assert_eq!(Direction::parse_lenient(" minimize "), Direction::Maximize);
        assert_eq!(Direction::parse_lenient(""), Direction::Maximize);
        assert_eq!(Direction::parse_lenient("descending"), Direction::Maximize);
    }

    #[test]
    fn test_direction_serde() {
        let json = serde_json::to_string(&Direction::Minimize).unwrap();
        assert_eq!(json, "\"minimize\"");
        let parsed: Direction = serde_json::from_str("\"maximize\"").unwrap();
        assert_eq!(parsed, Direction::Maximize);
    }

    #[test]
    fn test_orient() {
        assert!((Direction::Maximize.orient(3.5) - 3.5).abs() < 1e-10);
        assert!((Direction::Minimize.orient(3.5) + 3.5).abs() < 1e-10);
        // -0.0 folds to +0.0
        let zero = Direction::Minimize.orient(0.0);
        assert!(zero.is_sign_positive());
        assert!(Direction::Maximize.orient(-0.0).is_sign_positive());
    }

    #[test]
    fn test_criterion_new_rejects_empty_attribute() {
        assert!(matches!(
            Criterion::new("", 1.0, Direction::Minimize),
            Err(ParetoError::EmptyAttribute)
        ));
    }

    #[test]
    fn test_criterion_weight_unchecked() {
        let c = Criterion::new("rating", -3.0, Direction::Maximize).unwrap();
        assert!((c.weight() + 3.0).abs() < 1e-10);
        let c = Criterion::maximize("rating").with_weight(0.0);
        assert_eq!(c.weight(), 0.0);
    }

    #[test]
    fn test_convenience_constructors() {
        let c = Criterion::maximize("rating");
        assert_eq!(c.direction(), Direction::Maximize);
        assert!((c.weight() - 1.0).abs() < 1e-10);
        let c = Criterion::minimize("price");
        assert_eq!(c.direction(), Direction::Minimize);
    }
}
