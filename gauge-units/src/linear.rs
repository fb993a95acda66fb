//! Linear conversion through a category's base unit

use crate::{Category, ConversionError};

/// Convert `value` between two units of the same linear category.
///
/// The value is scaled up to the base unit with the source factor and back
/// down with the destination factor. No rounding is applied.
pub fn convert_linear(
    value: f64,
    unit_from: &str,
    unit_to: &str,
    category: &str,
) -> Result<f64, ConversionError> {
    if unit_from == unit_to {
        return Ok(value);
    }

    let cat = Category::from_name(category)?;
    if !cat.is_linear() {
        // Temperature is a known category but has no factor table
        return Err(ConversionError::UnknownCategory {
            category: category.to_string(),
        });
    }

    let from = cat
        .factor(unit_from)
        .ok_or_else(|| ConversionError::unknown_unit(unit_from, cat))?;
    let to = cat
        .factor(unit_to)
        .ok_or_else(|| ConversionError::unknown_unit(unit_to, cat))?;

    let value_in_base = value * from;
    Ok(value_in_base / to)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let tol = 1e-9 * expected.abs().max(1.0);
        assert!((actual - expected).abs() <= tol, "expected {}, got {}", expected, actual);
    }

    #[test]
    fn test_spot_checks() {
        assert_eq!(convert_linear(1.0, "kilometer", "meter", "Length").unwrap(), 1000.0);
        assert_eq!(convert_linear(1.0, "kilogram", "gram", "Mass").unwrap(), 1000.0);
        assert_eq!(
            convert_linear(1024.0, "kilobyte", "byte", "Digital Storage").unwrap(),
            1048576.0
        );
        assert_eq!(convert_linear(1.0, "hour", "second", "Time").unwrap(), 3600.0);
    }

    #[test]
    fn test_through_base() {
        assert_close(convert_linear(1.0, "mile", "kilometer", "Length").unwrap(), 1.60934);
        assert_close(convert_linear(1.0, "foot", "inch", "Length").unwrap(), 12.0);
        assert_close(convert_linear(1.0, "pound", "ounce", "Mass").unwrap(), 453.592 / 28.3495);
        assert_close(convert_linear(1.0, "gallon (US)", "quart (US)", "Volume").unwrap(), 3.78541 / 0.946353);
        assert_close(convert_linear(1.0, "cubic meter", "liter", "Volume").unwrap(), 1000.0);
        assert_close(convert_linear(1.0, "week", "day", "Time").unwrap(), 7.0);
        assert_close(convert_linear(36.0, "kilometer/hour", "meter/second", "Speed").unwrap(), 10.0);
        assert_close(convert_linear(1.0, "knot", "kilometer/hour", "Speed").unwrap(), 1.852);
    }

    #[test]
    fn test_storage_is_binary() {
        assert_eq!(convert_linear(1.0, "megabyte", "kilobyte", "Digital Storage").unwrap(), 1024.0);
        assert_eq!(convert_linear(1.0, "byte", "bit", "Digital Storage").unwrap(), 8.0);
        assert_eq!(convert_linear(1.0, "terabyte", "gigabyte", "Digital Storage").unwrap(), 1024.0);
    }

    #[test]
    fn test_identity_short_circuit() {
        // Identity never consults the tables
        assert_eq!(convert_linear(0.1, "anything", "anything", "Nowhere").unwrap(), 0.1);
        assert_eq!(convert_linear(-7.25, "inch", "inch", "Length").unwrap(), -7.25);
    }

    #[test]
    fn test_unknown_unit() {
        let err = convert_linear(1.0, "parsec", "meter", "Length").unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnknownUnit { unit: "parsec".to_string(), category: "Length".to_string() }
        );

        let err = convert_linear(1.0, "meter", "gram", "Length").unwrap_err();
        assert!(matches!(err, ConversionError::UnknownUnit { ref unit, .. } if unit == "gram"));
    }

    #[test]
    fn test_unknown_category() {
        let err = convert_linear(1.0, "x", "y", "Wizardry").unwrap_err();
        assert!(matches!(err, ConversionError::UnknownCategory { .. }));

        // No factor table for temperature
        let err = convert_linear(1.0, "celsius", "kelvin", "Temperature").unwrap_err();
        assert!(matches!(err, ConversionError::UnknownCategory { .. }));
    }
}
