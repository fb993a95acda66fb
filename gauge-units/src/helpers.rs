//! Argument extraction shared by the unit functions

use gauge_core::{GaugeError, Value};

/// Extract a number; numeric text such as "2.5" is accepted too
pub fn extract_number(value: &Value, func: &str, arg: &str) -> Result<f64, GaugeError> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::Text(_) => match value.to_number() {
            Value::Number(n) => Ok(n),
            Value::Error(e) => Err(e),
            other => Err(GaugeError::arg_type(func, arg, "Number", other.type_name())),
        },
        Value::Error(e) => Err(e.clone()),
        other => Err(GaugeError::arg_type(func, arg, "Number", other.type_name())),
    }
}

/// Extract a Text string from a Value
pub fn extract_text<'a>(value: &'a Value, func: &str, arg: &str) -> Result<&'a str, GaugeError> {
    match value {
        Value::Text(s) => Ok(s),
        Value::Error(e) => Err(e.clone()),
        other => Err(GaugeError::arg_type(func, arg, "Text", other.type_name())),
    }
}

/// Fail with ARG_COUNT unless at least `expected` arguments were passed
pub fn require_args(args: &[Value], func: &str, expected: usize) -> Result<(), GaugeError> {
    if args.len() < expected {
        return Err(GaugeError::arg_count(func, expected, args.len()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauge_core::codes;

    #[test]
    fn test_extract_number() {
        assert_eq!(extract_number(&Value::Number(4.0), "f", "x"), Ok(4.0));
        assert_eq!(extract_number(&Value::from("4.5"), "f", "x"), Ok(4.5));
        let err = extract_number(&Value::from("four"), "f", "x").unwrap_err();
        assert_eq!(err.code, codes::PARSE_ERROR);
        let err = extract_number(&Value::Null, "f", "x").unwrap_err();
        assert_eq!(err.code, codes::ARG_TYPE);
    }

    #[test]
    fn test_extract_text() {
        assert_eq!(extract_text(&Value::from("meter"), "f", "unit"), Ok("meter"));
        let err = extract_text(&Value::Number(1.0), "f", "unit").unwrap_err();
        assert_eq!(err.code, codes::ARG_TYPE);
    }

    #[test]
    fn test_require_args() {
        assert!(require_args(&[Value::Null], "f", 1).is_ok());
        assert_eq!(require_args(&[], "f", 2).unwrap_err().code, codes::ARG_COUNT);
    }
}
