//! Unit catalog: the fixed categories, their units and base-unit factors
//!
//! Each linear category lists, for every unit, how many base units one of
//! that unit equals. Temperature has no factors; it is converted through
//! celsius by the temperature module.

use std::fmt;
use crate::ConversionError;

/// The fixed, disjoint set of measurement categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Length,
    Mass,
    Temperature,
    Volume,
    DigitalStorage,
    Time,
    Speed,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 7] = [
        Category::Length,
        Category::Mass,
        Category::Temperature,
        Category::Volume,
        Category::DigitalStorage,
        Category::Time,
        Category::Speed,
    ];

    /// Display name, which is also the identifier callers pass in
    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Mass => "Mass",
            Category::Temperature => "Temperature",
            Category::Volume => "Volume",
            Category::DigitalStorage => "Digital Storage",
            Category::Time => "Time",
            Category::Speed => "Speed",
        }
    }

    /// Look up a category by its exact name
    pub fn from_name(name: &str) -> Result<Category, ConversionError> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.name() == name)
            .ok_or_else(|| ConversionError::UnknownCategory {
                category: name.to_string(),
            })
    }

    /// Factor table for linear categories, `None` for temperature
    pub fn factors(&self) -> Option<&'static [(&'static str, f64)]> {
        match self {
            Category::Length => Some(&LENGTH[..]),
            Category::Mass => Some(&MASS[..]),
            Category::Temperature => None,
            Category::Volume => Some(&VOLUME[..]),
            Category::DigitalStorage => Some(&DIGITAL_STORAGE[..]),
            Category::Time => Some(&TIME[..]),
            Category::Speed => Some(&SPEED[..]),
        }
    }

    pub fn is_linear(&self) -> bool {
        self.factors().is_some()
    }

    /// Unit names in display order
    pub fn units(&self) -> Vec<&'static str> {
        match self.factors() {
            Some(table) => table.iter().map(|(name, _)| *name).collect(),
            None => TEMPERATURE_UNITS.to_vec(),
        }
    }

    /// Base unit of a linear category; temperature has none
    pub fn base_unit(&self) -> Option<&'static str> {
        self.factors()
            .and_then(|table| table.iter().find(|(_, f)| *f == 1.0))
            .map(|(name, _)| *name)
    }

    /// Multiplier from `unit` to this category's base unit
    pub fn factor(&self, unit: &str) -> Option<f64> {
        self.factors()?
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, f)| *f)
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.units().iter().any(|u| *u == unit)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Category names in display order
pub fn categories() -> Vec<&'static str> {
    Category::ALL.iter().map(|c| c.name()).collect()
}

/// Units offered for `category`
pub fn units_for(category: &str) -> Result<Vec<&'static str>, ConversionError> {
    Ok(Category::from_name(category)?.units())
}

/// Base unit of `category`, `Ok(None)` for non-linear categories
pub fn base_unit_for(category: &str) -> Result<Option<&'static str>, ConversionError> {
    Ok(Category::from_name(category)?.base_unit())
}

// ============ Tables ============

static LENGTH: [(&str, f64); 8] = [
    ("meter", 1.0),
    ("kilometer", 1000.0),
    ("centimeter", 0.01),
    ("millimeter", 0.001),
    ("mile", 1609.34),
    ("yard", 0.9144),
    ("foot", 0.3048),
    ("inch", 0.0254),
];

static MASS: [(&str, f64); 5] = [
    ("gram", 1.0),
    ("kilogram", 1000.0),
    ("milligram", 0.001),
    ("pound", 453.592),
    ("ounce", 28.3495),
];

/// Temperature pivots through the first entry
static TEMPERATURE_UNITS: [&str; 3] = ["celsius", "fahrenheit", "kelvin"];

static VOLUME: [(&str, f64); 7] = [
    ("liter", 1.0),
    ("milliliter", 0.001),
    ("cubic meter", 1000.0),
    ("cubic centimeter", 0.001),
    ("gallon (US)", 3.78541),
    ("quart (US)", 0.946353),
    ("pint (US)", 0.473176),
];

// Binary multiples: a kilobyte is 1024 bytes here, not 1000.
static DIGITAL_STORAGE: [(&str, f64); 6] = [
    ("bit", 1.0 / 8.0),
    ("byte", 1.0),
    ("kilobyte", 1024.0),
    ("megabyte", 1024.0 * 1024.0),
    ("gigabyte", 1024.0 * 1024.0 * 1024.0),
    ("terabyte", 1024.0 * 1024.0 * 1024.0 * 1024.0),
];

static TIME: [(&str, f64); 5] = [
    ("second", 1.0),
    ("minute", 60.0),
    ("hour", 3600.0),
    ("day", 86400.0),
    ("week", 604800.0),
];

static SPEED: [(&str, f64); 4] = [
    ("meter/second", 1.0),
    ("kilometer/hour", 1000.0 / 3600.0),
    ("mile/hour", 1609.34 / 3600.0),
    ("knot", 1852.0 / 3600.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order() {
        assert_eq!(
            categories(),
            vec!["Length", "Mass", "Temperature", "Volume", "Digital Storage", "Time", "Speed"]
        );
    }

    #[test]
    fn test_from_name_is_exact() {
        assert_eq!(Category::from_name("Digital Storage").unwrap(), Category::DigitalStorage);
        assert!(Category::from_name("length").is_err());
        assert!(matches!(
            Category::from_name("Wizardry"),
            Err(ConversionError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn test_units_for() {
        assert_eq!(
            units_for("Length").unwrap(),
            vec!["meter", "kilometer", "centimeter", "millimeter", "mile", "yard", "foot", "inch"]
        );
        assert_eq!(units_for("Temperature").unwrap(), vec!["celsius", "fahrenheit", "kelvin"]);
        assert_eq!(units_for("Speed").unwrap().len(), 4);
        assert!(units_for("Wizardry").is_err());
    }

    #[test]
    fn test_base_units() {
        assert_eq!(base_unit_for("Length").unwrap(), Some("meter"));
        assert_eq!(base_unit_for("Mass").unwrap(), Some("gram"));
        assert_eq!(base_unit_for("Volume").unwrap(), Some("liter"));
        assert_eq!(base_unit_for("Digital Storage").unwrap(), Some("byte"));
        assert_eq!(base_unit_for("Time").unwrap(), Some("second"));
        assert_eq!(base_unit_for("Speed").unwrap(), Some("meter/second"));
        assert_eq!(base_unit_for("Temperature").unwrap(), None);
        assert!(base_unit_for("Wizardry").is_err());
    }

    #[test]
    fn test_every_linear_table_has_one_base() {
        for cat in Category::ALL.iter().filter(|c| c.is_linear()) {
            let bases = cat.factors().unwrap().iter().filter(|(_, f)| *f == 1.0).count();
            assert_eq!(bases, 1, "{} should have exactly one base unit", cat);
        }
    }

    #[test]
    fn test_factors_are_positive() {
        for cat in Category::ALL {
            for unit in cat.units() {
                if let Some(f) = cat.factor(unit) {
                    assert!(f > 0.0, "{}/{} factor must be positive", cat, unit);
                }
            }
        }
    }

    #[test]
    fn test_reference_factors() {
        assert_eq!(Category::Length.factor("mile"), Some(1609.34));
        assert_eq!(Category::Mass.factor("ounce"), Some(28.3495));
        assert_eq!(Category::Volume.factor("gallon (US)"), Some(3.78541));
        assert_eq!(Category::DigitalStorage.factor("bit"), Some(0.125));
        assert_eq!(Category::DigitalStorage.factor("terabyte"), Some(1099511627776.0));
        assert_eq!(Category::Speed.factor("knot"), Some(1852.0 / 3600.0));
        assert_eq!(Category::Temperature.factor("kelvin"), None);
    }

    #[test]
    fn test_units_are_disjoint_within_category() {
        for cat in Category::ALL {
            let mut units = cat.units();
            let total = units.len();
            units.sort();
            units.dedup();
            assert_eq!(units.len(), total);
        }
    }

    #[test]
    fn test_contains() {
        assert!(Category::Temperature.contains("kelvin"));
        assert!(!Category::Length.contains("parsec"));
    }
}
