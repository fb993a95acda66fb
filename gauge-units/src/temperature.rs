//! Temperature conversion
//!
//! Temperature scales are affine, not proportional, so they cannot share the
//! factor tables. Every conversion goes through celsius. Values below
//! absolute zero are accepted as-is.

use crate::{Category, ConversionError};

/// The three supported temperature scales
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub fn from_name(name: &str) -> Result<TemperatureUnit, ConversionError> {
        match name {
            "celsius" => Ok(TemperatureUnit::Celsius),
            "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            "kelvin" => Ok(TemperatureUnit::Kelvin),
            _ => Err(ConversionError::unknown_unit(name, Category::Temperature)),
        }
    }

    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            TemperatureUnit::Kelvin => value - 273.15,
        }
    }

    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            TemperatureUnit::Kelvin => celsius + 273.15,
        }
    }
}

/// Convert `value` between celsius, fahrenheit and kelvin
pub fn convert_temperature(value: f64, unit_from: &str, unit_to: &str) -> Result<f64, ConversionError> {
    if unit_from == unit_to {
        return Ok(value);
    }

    let celsius = TemperatureUnit::from_name(unit_from)?.to_celsius(value);
    let target = TemperatureUnit::from_name(unit_to)?;
    Ok(target.from_celsius(celsius))
}
