//! Single entry point for conversions

use tracing::trace;
use crate::{convert_linear, convert_temperature, Category, ConversionError};

/// Convert `value` from `unit_from` to `unit_to` within `category`.
///
/// Temperature is routed to the affine converter, every other category to
/// the factor tables.
pub fn convert(value: f64, unit_from: &str, unit_to: &str, category: &str) -> Result<f64, ConversionError> {
    if unit_from == unit_to {
        return Ok(value);
    }

    let result = if category == Category::Temperature.name() {
        convert_temperature(value, unit_from, unit_to)
    } else {
        convert_linear(value, unit_from, unit_to, category)
    };
    trace!(value, unit_from, unit_to, category, ?result, "convert");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALUES: [f64; 7] = [0.0, 1.0, -1.0, 0.1, 123.456, -98765.4321, 1.0e12];

    #[test]
    fn test_identity_for_every_unit() {
        for cat in Category::ALL {
            for unit in cat.units() {
                for v in VALUES {
                    assert_eq!(convert(v, unit, unit, cat.name()).unwrap(), v, "{} {}", cat, unit);
                }
            }
        }
    }

    #[test]
    fn test_round_trip_linear_pairs() {
        for cat in Category::ALL.iter().filter(|c| c.is_linear()) {
            let units = cat.units();
            for a in &units {
                for b in &units {
                    for v in VALUES {
                        let there = convert(v, a, b, cat.name()).unwrap();
                        let back = convert(there, b, a, cat.name()).unwrap();
                        let tol = 1e-9 * v.abs().max(f64::MIN_POSITIVE);
                        assert!((back - v).abs() <= tol,
                            "{}: {} {} -> {} -> {} gave {}", cat, v, a, b, a, back);
                    }
                }
            }
        }
    }

    #[test]
    fn test_temperature_routing() {
        assert_eq!(convert(0.0, "celsius", "fahrenheit", "Temperature").unwrap(), 32.0);
        assert_eq!(convert(100.0, "celsius", "fahrenheit", "Temperature").unwrap(), 212.0);
        assert_eq!(convert(0.0, "celsius", "kelvin", "Temperature").unwrap(), 273.15);
        assert_eq!(convert(-40.0, "celsius", "fahrenheit", "Temperature").unwrap(), -40.0);
    }

    #[test]
    fn test_linear_spot_checks() {
        assert_eq!(convert(1.0, "kilometer", "meter", "Length").unwrap(), 1000.0);
        assert_eq!(convert(1.0, "kilogram", "gram", "Mass").unwrap(), 1000.0);
        assert_eq!(convert(1024.0, "kilobyte", "byte", "Digital Storage").unwrap(), 1048576.0);
        assert_eq!(convert(1.0, "hour", "second", "Time").unwrap(), 3600.0);
    }

    #[test]
    fn test_unknown_inputs() {
        assert!(matches!(
            convert(5.0, "parsec", "meter", "Length"),
            Err(ConversionError::UnknownUnit { .. })
        ));
        assert!(matches!(
            convert(5.0, "x", "y", "Wizardry"),
            Err(ConversionError::UnknownCategory { .. })
        ));
        // A unit from another category is just as unknown
        assert!(matches!(
            convert(5.0, "kelvin", "meter", "Length"),
            Err(ConversionError::UnknownUnit { .. })
        ));
        assert!(matches!(
            convert(5.0, "meter", "kelvin", "Temperature"),
            Err(ConversionError::UnknownUnit { .. })
        ));
    }
}
