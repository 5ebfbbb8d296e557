use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single column scalar carried by a [`Record`](super::Record).
///
/// Equality is per-variant value equality: values of different variants are
/// never equal, so both sides of a stream pair must use a consistent column
/// schema for comparisons to be meaningful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Absent/unset column
    Null,
    /// Boolean flag
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// UTF-8 text
    Text(String),
    /// UTC timestamp
    Time(DateTime<Utc>),
}

impl Value {
    /// Check whether this value is the `Null` variant.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Time(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_variant_equality() {
        assert_eq!(Value::Int(42), Value::Int(42));
        assert_ne!(Value::Int(42), Value::Int(43));
        assert_eq!(Value::from("x"), Value::Text("x".to_string()));
        assert_ne!(Value::from("x"), Value::from("X"));
        assert_eq!(Value::Null, Value::Null);
    }

    #[test]
    fn test_cross_variant_inequality() {
        // Typed columns: numeric values of different variants never compare equal.
        assert_ne!(Value::Int(0), Value::Float(0.0));
        assert_ne!(Value::Null, Value::Int(0));
        assert_ne!(Value::Bool(false), Value::Int(0));
    }

    #[test]
    fn test_is_null() {
        assert!(Value::Null.is_null());
        assert!(!Value::Int(0).is_null());
    }
}
