//! Gauge Plugin System
//!
//! Provides traits for extending Gauge with custom:
//! - Functions (pure computation)
//! - Commands (act on the session context)

mod traits;
mod registry;
mod context;

pub use traits::{
    FunctionPlugin, CommandPlugin,
    PluginMeta, PluginKind,
    Param, ParamKind,
};
pub use registry::PluginRegistry;
pub use context::EvalContext;

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{
        FunctionPlugin, CommandPlugin,
        PluginMeta, Param,
        PluginRegistry, EvalContext,
    };
    pub use gauge_core::prelude::*;
}
