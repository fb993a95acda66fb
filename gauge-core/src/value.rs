//! Runtime values in Gauge
//!
//! Values can be numbers, text, booleans, objects, lists, null, or errors.
//! Errors are ordinary values so a failed conversion never aborts a session.

use crate::GaugeError;
use std::collections::HashMap;
use thiserror::Error;

/// Error produced when numeric input text cannot be read as a real number
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumberParseError {
    #[error("invalid number format: '{0}'")]
    Invalid(String),

    #[error("value must be finite, got '{0}'")]
    NotFinite(String),
}

/// Parse user-entered numeric text ("12", "-3.5", "1e3") into a finite f64
pub fn parse_number(s: &str) -> Result<f64, NumberParseError> {
    let trimmed = s.trim();
    let n: f64 = trimmed
        .parse()
        .map_err(|_| NumberParseError::Invalid(trimmed.to_string()))?;
    if !n.is_finite() {
        return Err(NumberParseError::NotFinite(trimmed.to_string()));
    }
    Ok(n)
}

/// Runtime value in Gauge
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Bool(bool),
    Object(HashMap<String, Value>),
    List(Vec<Value>),
    Null,
    Error(GaugeError),
}

impl Value {
    // ========== Safe Accessors (never panic) ==========

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&GaugeError> {
        match self {
            Value::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Text(_) => "Text",
            Value::Bool(_) => "Bool",
            Value::Object(_) => "Object",
            Value::List(_) => "List",
            Value::Null => "Null",
            Value::Error(_) => "Error",
        }
    }

    // ========== Type Coercion ==========

    /// Convert to number (may return Error)
    pub fn to_number(&self) -> Value {
        match self {
            Value::Number(n) => Value::Number(*n),
            Value::Text(s) => match parse_number(s) {
                Ok(n) => Value::Number(n),
                Err(e) => Value::Error(GaugeError::from(e)),
            },
            Value::Error(e) => Value::Error(e.clone()),
            _ => Value::Error(GaugeError::type_error("Number", self.type_name())),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Object(_) => write!(f, "[Object]"),
            Value::List(items) => {
                let contents: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", contents.join(", "))
            }
            Value::Null => write!(f, "null"),
            Value::Error(e) => write!(f, "#ERROR: {}", e.code),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<GaugeError> for Value {
    fn from(e: GaugeError) -> Self {
        Value::Error(e)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes;

    #[test]
    fn test_parse_number_accepts_common_forms() {
        assert_eq!(parse_number("42"), Ok(42.0));
        assert_eq!(parse_number(" -3.5 "), Ok(-3.5));
        assert_eq!(parse_number("1e3"), Ok(1000.0));
    }

    #[test]
    fn test_parse_number_rejects_garbage() {
        assert!(matches!(parse_number("12 km"), Err(NumberParseError::Invalid(_))));
        assert!(matches!(parse_number("inf"), Err(NumberParseError::NotFinite(_))));
        assert!(matches!(parse_number("NaN"), Err(NumberParseError::NotFinite(_))));
    }

    #[test]
    fn test_to_number_from_text() {
        assert_eq!(Value::from("2.5").to_number(), Value::Number(2.5));
        let err = Value::from("abc").to_number();
        assert_eq!(err.as_error().map(|e| e.code.as_str()), Some(codes::PARSE_ERROR));
    }

    #[test]
    fn test_to_number_wrong_type() {
        let err = Value::Bool(true).to_number();
        assert_eq!(err.as_error().map(|e| e.code.as_str()), Some(codes::TYPE_ERROR));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Number(1.5).to_string(), "1.5");
        assert_eq!(Value::from(vec!["a", "b"]).to_string(), "[a, b]");
        assert_eq!(Value::Null.to_string(), "null");
    }
}
