//! Gauge Core - Fundamental types
//!
//! This crate provides the core types used throughout Gauge:
//! - `Value`: Runtime values (numbers, text, objects, errors)
//! - `GaugeError`: Structured errors that travel as values
//! - `ConversionRecord` / `History`: the per-session log of conversions

mod value;
mod error;
mod history;

pub use value::{Value, parse_number, NumberParseError};
pub use error::{GaugeError, Severity, codes};
pub use history::{ConversionRecord, History, format_fixed, DEFAULT_PRECISION};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Value, GaugeError, Severity};
    pub use crate::error::codes;
}
