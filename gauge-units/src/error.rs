//! Conversion errors

use gauge_core::GaugeError;
use thiserror::Error;
use crate::Category;

/// Why a conversion could not be carried out
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Category is not one of the fixed set
    #[error("unknown category: {category}")]
    UnknownCategory { category: String },

    /// Unit is not valid for the given category
    #[error("unit '{unit}' not found in category {category}")]
    UnknownUnit { unit: String, category: String },
}

impl ConversionError {
    pub(crate) fn unknown_unit(unit: &str, category: Category) -> Self {
        ConversionError::UnknownUnit {
            unit: unit.to_string(),
            category: category.name().to_string(),
        }
    }
}

impl From<ConversionError> for GaugeError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::UnknownCategory { category } => {
                GaugeError::unknown_category(&category, &crate::categories())
            }
            ConversionError::UnknownUnit { unit, category } => {
                let valid = crate::units_for(&category).unwrap_or_default();
                GaugeError::unknown_unit(&unit, &category, &valid)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauge_core::codes;

    #[test]
    fn test_messages() {
        let err = ConversionError::UnknownCategory { category: "Wizardry".to_string() };
        assert_eq!(err.to_string(), "unknown category: Wizardry");

        let err = ConversionError::unknown_unit("parsec", Category::Length);
        assert_eq!(err.to_string(), "unit 'parsec' not found in category Length");
    }

    #[test]
    fn test_into_structured_error() {
        let err: GaugeError = ConversionError::unknown_unit("parsec", Category::Length).into();
        assert_eq!(err.code, codes::UNKNOWN_UNIT);
        assert!(err.suggestion.unwrap().contains("kilometer"));

        let err: GaugeError = ConversionError::UnknownCategory { category: "x".to_string() }.into();
        assert_eq!(err.code, codes::UNKNOWN_CATEGORY);
        assert!(err.suggestion.unwrap().contains("Digital Storage"));
    }
}
