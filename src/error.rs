//! Error types for the Pareto engine.

use thiserror::Error;

/// Errors raised while building criteria, loading configuration, or
/// decoding task payloads.
///
/// Item-level data problems are never errors: missing or non-numeric
/// attribute values default to 0.0 in the attribute matrix.
#[derive(Debug, Error)]
pub enum ParetoError {
    #[error("criterion attribute must not be empty")]
    EmptyAttribute,

    #[error("unknown criterion direction '{0}' (expected 'maximize' or 'minimize')")]
    UnknownDirection(String),

    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record source '{source_name}' failed: {message}")]
    Source {
        source_name: String,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ParetoError::EmptyAttribute.to_string(),
            "criterion attribute must not be empty"
        );
        assert_eq!(
            ParetoError::UnknownDirection("upward".into()).to_string(),
            "unknown criterion direction 'upward' (expected 'maximize' or 'minimize')"
        );
        let err = ParetoError::Source {
            source_name: "json".into(),
            message: "not an object".into(),
        };
        assert_eq!(err.to_string(), "record source 'json' failed: not an object");
    }

    #[test]
    fn test_from_serde_json() {
        let err: ParetoError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, ParetoError::Json(_)));
    }
}
