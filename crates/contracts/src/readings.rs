//! Readings - named scalar values returned to the host.

use std::collections::BTreeMap;

use serde::Serialize;

/// A single scalar reading value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReadingValue {
    /// Integer reading
    Int(i64),
    /// Floating-point reading
    Float(f64),
}

impl ReadingValue {
    /// Integer view; `None` for float readings.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Float(_) => None,
        }
    }

    /// Numeric view, widening integers.
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Int(v) => *v as f64,
            Self::Float(v) => *v,
        }
    }
}

impl From<i64> for ReadingValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for ReadingValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

/// Named readings map, the host's generic "string key -> scalar" contract.
///
/// Produced and discarded per reading call; no history retained.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Readings(BTreeMap<String, ReadingValue>);

impl Readings {
    /// Create an empty readings map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a reading under a name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ReadingValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Look up a reading by name.
    pub fn get(&self, name: &str) -> Option<&ReadingValue> {
        self.0.get(name)
    }

    /// Number of readings.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map holds no readings.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate readings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReadingValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}
