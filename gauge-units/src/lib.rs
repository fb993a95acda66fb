//! Gauge Units - Unit catalog and conversion
//!
//! Converts values between units of a fixed set of categories:
//! - Length (meter, kilometer, mile, inch, ...)
//! - Mass (gram, kilogram, pound, ounce, ...)
//! - Temperature (celsius, fahrenheit, kelvin)
//! - Volume (liter, cubic meter, gallon (US), ...)
//! - Digital Storage (bit, byte, kilobyte, ... in 1024 steps)
//! - Time (second, minute, hour, day, week)
//! - Speed (meter/second, kilometer/hour, mile/hour, knot)
//!
//! Linear categories convert through their base unit with fixed factors.
//! Temperature converts through celsius.

mod catalog;
mod error;
mod linear;
mod temperature;
mod convert;
mod helpers;
mod functions;

pub use catalog::{Category, categories, units_for, base_unit_for};
pub use error::ConversionError;
pub use linear::convert_linear;
pub use temperature::{convert_temperature, TemperatureUnit};
pub use convert::convert;

use gauge_plugin::PluginRegistry;

/// Load unit functions into registry
pub fn load_units_library(registry: PluginRegistry) -> PluginRegistry {
    registry
        // Conversion
        .with_function(functions::Convert)

        // Catalog inspection
        .with_function(functions::Categories)
        .with_function(functions::Units)
        .with_function(functions::BaseUnit)
}
