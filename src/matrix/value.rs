//! Attribute values and item records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single attribute value as produced by upstream extraction.
///
/// [`AttributeValue::Integer`] and [`AttributeValue::Float`] are numeric,
/// and [`AttributeValue::Bool`] counts as 1.0 or 0.0. Text is never
/// parsed: `"12.5"` contributes 0.0 just like a missing value.
///
/// Deserialization accepts any JSON value and never fails; arrays and
/// objects become [`AttributeValue::Other`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum AttributeValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    Null,
    /// Arrays, objects, and anything else without a scalar meaning.
    Other,
}

impl AttributeValue {
    /// Returns the value as `f64` if it is numeric. Booleans map to 1.0
    /// and 0.0.
    ///
    /// ```
    /// use u_pareto::matrix::AttributeValue;
    ///
    /// assert_eq!(AttributeValue::Integer(4).as_f64(), Some(4.0));
    /// assert_eq!(AttributeValue::Text("4".into()).as_f64(), None);
    /// assert_eq!(AttributeValue::Bool(true).as_f64(), Some(1.0));
    /// assert_eq!(AttributeValue::Bool(false).as_f64(), Some(0.0));
    /// ```
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            AttributeValue::Integer(i) => Some(i as f64),
            AttributeValue::Float(f) => Some(f),
            AttributeValue::Bool(b) => Some(if b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.as_f64().is_some()
    }
}

impl From<Value> for AttributeValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(n) => match n.as_i64() {
                Some(i) => AttributeValue::Integer(i),
                None => n
                    .as_f64()
                    .map(AttributeValue::Float)
                    .unwrap_or(AttributeValue::Other),
            },
            Value::String(s) => AttributeValue::Text(s),
            Value::Bool(b) => AttributeValue::Bool(b),
            Value::Null => AttributeValue::Null,
            Value::Array(_) | Value::Object(_) => AttributeValue::Other,
        }
    }
}

impl From<AttributeValue> for Value {
    fn from(value: AttributeValue) -> Self {
        match value {
            AttributeValue::Integer(i) => Value::from(i),
            // Non-finite floats have no JSON form and serialize as null.
            AttributeValue::Float(f) => Value::from(f),
            AttributeValue::Text(s) => Value::String(s),
            AttributeValue::Bool(b) => Value::Bool(b),
            AttributeValue::Null | AttributeValue::Other => Value::Null,
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Integer(v)
    }
}

impl From<i32> for AttributeValue {
    fn from(v: i32) -> Self {
        AttributeValue::Integer(i64::from(v))
    }
}

impl From<f64> for AttributeValue {
    fn from(v: f64) -> Self {
        AttributeValue::Float(v)
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        AttributeValue::Bool(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Text(v.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::Text(v)
    }
}

/// Attribute record for one item: attribute name → value.
///
/// # Examples
///
/// ```
/// use u_pareto::matrix::ItemRecord;
///
/// let item = ItemRecord::new()
///     .with("price", 10)
///     .with("rating", 4.5)
///     .with("brand", "Acme");
///
/// assert_eq!(item.numeric("price"), Some(10.0));
/// assert_eq!(item.numeric("brand"), None);
/// assert_eq!(item.numeric("weight"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemRecord {
    attributes: HashMap<String, AttributeValue>,
}

impl ItemRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an attribute.
    pub fn with(mut self, attribute: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.insert(attribute, value);
        self
    }

    pub fn insert(&mut self, attribute: impl Into<String>, value: impl Into<AttributeValue>) {
        self.attributes.insert(attribute.into(), value.into());
    }

    pub fn get(&self, attribute: &str) -> Option<&AttributeValue> {
        self.attributes.get(attribute)
    }

    /// Returns the attribute as `f64` when it is present and numeric.
    pub fn numeric(&self, attribute: &str) -> Option<f64> {
        self.get(attribute).and_then(AttributeValue::as_f64)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Iterates over `(attribute, value)` pairs in arbitrary order.
    ///
    /// ```
    /// use u_pareto::matrix::ItemRecord;
    ///
    /// let item = ItemRecord::new().with("price", 10).with("brand", "Acme");
    /// let mut numeric: Vec<&str> = item
    ///     .iter()
    ///     .filter(|(_, v)| v.is_numeric())
    ///     .map(|(k, _)| k)
    ///     .collect();
    /// numeric.sort_unstable();
    /// assert_eq!(numeric, vec!["price"]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for ItemRecord
where
    K: Into<String>,
    V: Into<AttributeValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            attributes: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
