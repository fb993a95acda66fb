//! Conversion records and the per-session history list

use serde::Serialize;
use std::collections::VecDeque;
use tracing::debug;

/// Decimal places used when a caller does not choose a display precision
pub const DEFAULT_PRECISION: usize = 6;

/// Format a number with a fixed count of decimal places
pub fn format_fixed(n: f64, precision: usize) -> String {
    format!("{:.*}", precision, n)
}

/// Render an entered value with its decimal point kept (`1.0`, `0.25`), and
/// as `1e+16` / `1e-05` outside the range 1e-4 to 1e16
fn format_entered(n: f64) -> String {
    let debug = format!("{:?}", n);
    match debug.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => debug,
    }
}

/// One successful conversion, frozen at the moment it happened
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionRecord {
    pub value: f64,
    pub unit_from: String,
    pub result: f64,
    pub unit_to: String,
    pub category: String,
}

impl ConversionRecord {
    pub fn new(
        value: f64,
        unit_from: impl Into<String>,
        result: f64,
        unit_to: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            value,
            unit_from: unit_from.into(),
            result,
            unit_to: unit_to.into(),
            category: category.into(),
        }
    }

    /// History line, e.g. `1.000000 kilometer = 1000.000000 meter (Length)`
    pub fn entry(&self, precision: usize) -> String {
        format!(
            "{} {} = {} {} ({})",
            format_fixed(self.value, precision),
            self.unit_from,
            format_fixed(self.result, precision),
            self.unit_to,
            self.category,
        )
    }

    /// Result line, e.g. `1.0 kilometer is equal to 1000.000000 meter`
    pub fn summary(&self, precision: usize) -> String {
        format!(
            "{} {} is equal to {} {}",
            format_entered(self.value),
            self.unit_from,
            format_fixed(self.result, precision),
            self.unit_to,
        )
    }

    /// The bare result as a user would copy it
    pub fn copy_text(&self, precision: usize) -> String {
        format_fixed(self.result, precision)
    }
}

/// Newest-first list of formatted conversion entries.
///
/// An entry is never stored twice: if its display string is already present
/// anywhere in the list, recording it again is a no-op.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a conversion; returns `true` if a new entry was added
    pub fn record(&mut self, record: &ConversionRecord, precision: usize) -> bool {
        self.push_entry(record.entry(precision))
    }

    /// Insert an already formatted entry at the front unless it is present
    pub fn push_entry(&mut self, entry: String) -> bool {
        if self.entries.contains(&entry) {
            debug!(%entry, "history entry already present, skipped");
            return false;
        }
        debug!(%entry, "history entry recorded");
        self.entries.push_front(entry);
        true
    }

    /// Entries, most recent first
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry; returns how many were removed
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        debug!(removed, "history cleared");
        removed
    }
}
