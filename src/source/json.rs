//! JSON record source.

use serde_json::{Map, Value};

use super::types::RecordSource;
use crate::error::ParetoError;
use crate::matrix::ItemRecord;

/// Reads records from a JSON object or an array of JSON objects.
///
/// Array elements that are not objects are skipped with a warning. When an
/// attributes key is configured, the object found under that key is
/// flattened into the record; top-level fields win on name clashes.
///
/// # Examples
///
/// ```
/// use u_pareto::source::{JsonRecordSource, RecordSource};
///
/// let source = JsonRecordSource::new().with_attributes_key("attributes");
/// let records = source
///     .extract(r#"[{"price": 19.9, "attributes": {"battery_mah": 5000}}]"#)
///     .unwrap();
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].numeric("price"), Some(19.9));
/// assert_eq!(records[0].numeric("battery_mah"), Some(5000.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonRecordSource {
    attributes_key: Option<String>,
}

impl JsonRecordSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flattens the nested object stored under `key` into each record.
    pub fn with_attributes_key(mut self, key: impl Into<String>) -> Self {
        self.attributes_key = Some(key.into());
        self
    }

    fn record(&self, mut object: Map<String, Value>) -> ItemRecord {
        let nested = self
            .attributes_key
            .as_deref()
            .and_then(|key| object.remove(key));

        let mut record: ItemRecord = object.into_iter().collect();

        match nested {
            Some(Value::Object(attributes)) => {
                for (name, value) in attributes {
                    if record.get(&name).is_none() {
                        record.insert(name, value);
                    }
                }
            }
            Some(other) => {
                tracing::warn!(
                    source = self.name(),
                    kind = json_kind(&other),
                    "attributes field is not an object, ignoring"
                );
            }
            None => {}
        }

        record
    }
}

impl RecordSource for JsonRecordSource {
    fn name(&self) -> &str {
        "json"
    }

    fn extract(&self, document: &str) -> Result<Vec<ItemRecord>, ParetoError> {
        match serde_json::from_str::<Value>(document)? {
            Value::Object(object) => Ok(vec![self.record(object)]),
            Value::Array(elements) => Ok(elements
                .into_iter()
                .enumerate()
                .filter_map(|(i, element)| match element {
                    Value::Object(object) => Some(self.record(object)),
                    other => {
                        tracing::warn!(
                            source = self.name(),
                            index = i,
                            kind = json_kind(&other),
                            "skipping non-object element"
                        );
                        None
                    }
                })
                .collect()),
            other => Err(ParetoError::Source {
                source_name: self.name().to_string(),
                message: format!("expected an object or array, got {}", json_kind(&other)),
            }),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::AttributeValue;

    #[test]
    fn test_single_object() {
        let records = JsonRecordSource::new()
            .extract(r#"{"price": 10, "name": "Widget"}"#)
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].numeric("price"), Some(10.0));
        assert_eq!(records[0].get("name"), Some(&AttributeValue::Text("Widget".into())));
    }

    #[test]
    fn test_array_skips_non_objects() {
        let records = JsonRecordSource::new()
            .extract(r#"[{"price": 1}, 42, "x", {"price": 2}]"#)
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].numeric("price"), Some(2.0));
    }

    #[test]
    fn test_empty_array() {
        assert!(JsonRecordSource::new().extract("[]").unwrap().is_empty());
    }

    #[test]
    fn test_scalar_document_is_error() {
        let err = JsonRecordSource::new().extract("12").unwrap_err();
        assert!(matches!(err, ParetoError::Source { ref source_name, .. } if source_name == "json"));
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = JsonRecordSource::new().extract("[{").unwrap_err();
        assert!(matches!(err, ParetoError::Json(_)));
    }

    #[test]
    fn test_attributes_flattened_top_level_wins() {
        let source = JsonRecordSource::new().with_attributes_key("attributes");
        let records = source
            .extract(r#"{"price": 10, "attributes": {"price": 99, "screen_in": 6.1}}"#)
            .unwrap();
        assert_eq!(records[0].numeric("price"), Some(10.0));
        assert_eq!(records[0].numeric("screen_in"), Some(6.1));
        assert!(records[0].get("attributes").is_none());
    }

    #[test]
    fn test_attributes_not_object_ignored() {
        let source = JsonRecordSource::new().with_attributes_key("attributes");
        let records = source.extract(r#"{"price": 3, "attributes": [1, 2]}"#).unwrap();
        assert_eq!(records[0].len(), 1);
    }

    #[test]
    fn test_without_attributes_key_nested_is_opaque() {
        let records = JsonRecordSource::new()
            .extract(r#"{"attributes": {"weight": 2}}"#)
            .unwrap();
        assert_eq!(records[0].get("attributes"), Some(&AttributeValue::Other));
        assert_eq!(records[0].numeric("weight"), None);
    }
}
