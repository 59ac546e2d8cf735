//! AttributeMap - Opaque host configuration object
//!
//! The host delivers model configuration as an untyped attribute struct.
//! Values keep JSON semantics: numbers arrive as floats from some hosts,
//! so integer lookups accept integral floats and numeric strings.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key-value configuration attributes supplied by the host.
///
/// # Examples
/// ```
/// use contracts::AttributeMap;
///
/// let mut attrs = AttributeMap::new();
/// attrs.insert("limit", 100);
/// attrs.insert("secret_path", "/etc/app/secret.json");
/// assert_eq!(attrs.get_i64("limit"), Some(100));
/// assert_eq!(attrs.get_str("secret_path"), Some("/etc/app/secret.json"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeMap(Map<String, Value>);

impl AttributeMap {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute, replacing any prior value under the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Raw value lookup.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Integer lookup.
    ///
    /// Accepts native integers, integral floats (hosts that transport
    /// attributes as protobuf structs deliver all numbers as f64), and
    /// strings holding a base-10 integer. Returns `None` when the key is
    /// absent or the value is not integer-convertible.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        match self.0.get(key)? {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(i)
                } else {
                    n.as_f64()
                        .filter(|f| f.fract() == 0.0 && f.is_finite())
                        .map(|f| f as i64)
                }
            }
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// String lookup. Returns `None` when absent or not a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for AttributeMap {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for AttributeMap {
    type Error = crate::SensorError;

    /// Accepts only a JSON object.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(crate::SensorError::configuration(format!(
                "attributes must be an object, got {other}"
            ))),
        }
    }
}
