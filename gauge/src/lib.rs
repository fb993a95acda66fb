//! Gauge - unit conversion sessions
//!
//! `Gauge` owns one session: a plugin registry and the context that holds
//! the display precision and the conversion history. Every successful
//! conversion is recorded; duplicates are not.

mod commands;
mod config;

pub use config::{GaugeConfig, ConfigError, PRECISION_VAR, MAX_PRECISION};

use gauge_core::{ConversionRecord, GaugeError, Value};
use gauge_plugin::{EvalContext, PluginRegistry};
use std::sync::Arc;
use tracing::{debug, info};

/// Registry with the unit functions and the history commands
pub fn standard_registry() -> PluginRegistry {
    gauge_units::load_units_library(PluginRegistry::new())
        .with_command(commands::ShowHistory)
        .with_command(commands::ClearHistory)
}

/// Main Gauge engine
pub struct Gauge {
    ctx: EvalContext,
}

impl Gauge {
    pub fn new(registry: PluginRegistry) -> Self {
        Self {
            ctx: EvalContext::new(Arc::new(registry)),
        }
    }

    pub fn with_standard_library() -> Self {
        Self::new(standard_registry())
    }

    pub fn from_config(config: &GaugeConfig) -> Self {
        info!(precision = config.precision, "starting conversion session");
        Self::with_standard_library().with_precision(config.precision)
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.ctx.precision = precision;
        self
    }

    pub fn precision(&self) -> usize {
        self.ctx.precision
    }

    /// Convert a value and record it in history.
    ///
    /// Failures are returned to the caller and leave history untouched.
    pub fn convert(
        &mut self,
        value: f64,
        unit_from: &str,
        unit_to: &str,
        category: &str,
    ) -> Result<ConversionRecord, GaugeError> {
        let args = [
            Value::Number(value),
            Value::from(unit_from),
            Value::from(unit_to),
            Value::from(category),
        ];
        let result = match self.call("convert", &args) {
            Value::Number(n) => n,
            Value::Error(e) => {
                debug!(code = %e.code, "conversion failed");
                return Err(e);
            }
            other => {
                return Err(GaugeError::internal(format!(
                    "convert returned {} instead of Number",
                    other.type_name()
                )))
            }
        };

        let record = ConversionRecord::new(value, unit_from, result, unit_to, category);
        let inserted = self.ctx.history.record(&record, self.ctx.precision);
        debug!(inserted, history_len = self.ctx.history.len(), "conversion recorded");
        Ok(record)
    }

    /// Call a registered function
    pub fn call(&self, name: &str, args: &[Value]) -> Value {
        self.ctx.registry.call_function(name, args, &self.ctx)
    }

    /// Execute a registered command against this session
    pub fn execute(&mut self, name: &str, args: &[Value]) -> Value {
        let registry = Arc::clone(&self.ctx.registry);
        registry.execute_command(name, args, &mut self.ctx)
    }

    pub fn categories(&self) -> Value {
        self.call("categories", &[])
    }

    pub fn units(&self, category: &str) -> Value {
        self.call("units", &[Value::from(category)])
    }

    pub fn base_unit(&self, category: &str) -> Value {
        self.call("base_unit", &[Value::from(category)])
    }

    /// History entries, most recent first
    pub fn history(&self) -> Vec<String> {
        self.ctx.history.entries().map(str::to_string).collect()
    }

    /// Empty the history; returns how many entries were removed
    pub fn clear_history(&mut self) -> usize {
        let removed = self.ctx.history.clear();
        info!(removed, "history cleared");
        removed
    }

    pub fn help(&self, name: Option<&str>) -> Value {
        self.ctx.registry.help(name)
    }

    pub fn list_functions(&self, category: Option<&str>) -> Value {
        self.ctx.registry.list_functions(category)
    }

    pub fn list_commands(&self) -> Value {
        self.ctx.registry.list_commands()
    }
}

impl Default for Gauge {
    fn default() -> Self {
        Self::with_standard_library()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauge_core::codes;

    #[test]
    fn test_convert_records_history() {
        let mut gauge = Gauge::default();
        let record = gauge.convert(1.0, "kilometer", "meter", "Length").unwrap();
        assert_eq!(record.result, 1000.0);
        assert_eq!(gauge.history(), vec!["1.000000 kilometer = 1000.000000 meter (Length)"]);
    }

    #[test]
    fn test_history_is_newest_first_and_counts_distinct() {
        let mut gauge = Gauge::default();
        gauge.convert(1.0, "kilogram", "gram", "Mass").unwrap();
        gauge.convert(0.0, "celsius", "fahrenheit", "Temperature").unwrap();
        gauge.convert(1.0, "hour", "second", "Time").unwrap();
        let history = gauge.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0], "1.000000 hour = 3600.000000 second (Time)");
        assert_eq!(history[2], "1.000000 kilogram = 1000.000000 gram (Mass)");
    }

    #[test]
    fn test_duplicate_conversion_recorded_once() {
        let mut gauge = Gauge::default();
        gauge.convert(5.0, "mile", "kilometer", "Length").unwrap();
        gauge.convert(2.0, "mile", "kilometer", "Length").unwrap();
        gauge.convert(5.0, "mile", "kilometer", "Length").unwrap();
        assert_eq!(gauge.history().len(), 2);
    }

    #[test]
    fn test_identity_conversion_is_recorded() {
        let mut gauge = Gauge::default();
        let record = gauge.convert(3.5, "byte", "byte", "Digital Storage").unwrap();
        assert_eq!(record.result, 3.5);
        assert_eq!(gauge.history().len(), 1);
    }

    #[test]
    fn test_failures_leave_history_alone() {
        let mut gauge = Gauge::default();
        let err = gauge.convert(1.0, "parsec", "meter", "Length").unwrap_err();
        assert_eq!(err.code, codes::UNKNOWN_UNIT);
        let err = gauge.convert(1.0, "x", "y", "Wizardry").unwrap_err();
        assert_eq!(err.code, codes::UNKNOWN_CATEGORY);
        assert!(gauge.history().is_empty());
    }

    #[test]
    fn test_clear_history() {
        let mut gauge = Gauge::default();
        gauge.convert(1.0, "week", "day", "Time").unwrap();
        gauge.convert(1.0, "knot", "kilometer/hour", "Speed").unwrap();
        assert_eq!(gauge.clear_history(), 2);
        assert!(gauge.history().is_empty());
    }

    #[test]
    fn test_history_commands() {
        let mut gauge = Gauge::default();
        gauge.convert(1.0, "liter", "milliliter", "Volume").unwrap();
        let listed = gauge.execute("history", &[]);
        assert_eq!(listed.as_list().unwrap().len(), 1);
        assert_eq!(gauge.execute("clear_history", &[]), Value::Number(1.0));
        assert!(gauge.history().is_empty());
    }

    #[test]
    fn test_precision_changes_entry_width() {
        let mut gauge = Gauge::default().with_precision(2);
        gauge.convert(1.0, "foot", "inch", "Length").unwrap();
        assert_eq!(gauge.history(), vec!["1.00 foot = 12.00 inch (Length)"]);
    }

    #[test]
    fn test_catalog_queries() {
        let gauge = Gauge::default();
        assert_eq!(gauge.categories().as_list().unwrap().len(), 7);
        assert_eq!(gauge.units("Mass").as_list().unwrap().len(), 5);
        assert_eq!(gauge.base_unit("Temperature"), Value::from("none"));
        assert!(gauge.units("Wizardry").is_error());
    }

    #[test]
    fn test_from_config() {
        let gauge = Gauge::from_config(&GaugeConfig { precision: 3 });
        assert_eq!(gauge.precision(), 3);
    }

    #[test]
    fn test_help_and_listings() {
        let gauge = Gauge::default();
        assert!(gauge.help(Some("convert")).as_object().is_some());
        assert_eq!(gauge.list_functions(Some("units")).as_list().unwrap().len(), 4);
        assert_eq!(gauge.list_commands().as_list().unwrap().len(), 2);
    }
}
