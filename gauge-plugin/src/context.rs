//! Session context

use gauge_core::{History, DEFAULT_PRECISION};
use crate::PluginRegistry;
use std::sync::Arc;

/// Context passed to plugins.
///
/// Owned by whoever drives a session; it carries the display precision and
/// the conversion history, so no process-wide state is needed.
pub struct EvalContext {
    pub precision: usize,
    pub history: History,
    pub registry: Arc<PluginRegistry>,
}

impl EvalContext {
    pub fn new(registry: Arc<PluginRegistry>) -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            history: History::new(),
            registry,
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}
