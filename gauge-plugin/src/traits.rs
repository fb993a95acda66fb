//! Plugin traits
//!
//! Functions and commands describe themselves with the same `PluginMeta`.
//! The registry uses it for help output and to reject calls with the wrong
//! number of arguments before the plugin runs.

use gauge_core::Value;
use crate::EvalContext;

/// What a positional parameter accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// A real number, or text that parses as one
    Number,
    /// A name such as a unit or category
    Text,
}

impl ParamKind {
    pub fn name(self) -> &'static str {
        match self {
            ParamKind::Number => "Number",
            ParamKind::Text => "Text",
        }
    }
}

/// One positional parameter; every parameter is required
#[derive(Debug, Clone, Copy)]
pub struct Param {
    pub name: &'static str,
    pub kind: ParamKind,
    pub description: &'static str,
}

impl Param {
    pub const fn number(name: &'static str, description: &'static str) -> Self {
        Self { name, kind: ParamKind::Number, description }
    }

    pub const fn text(name: &'static str, description: &'static str) -> Self {
        Self { name, kind: ParamKind::Text, description }
    }
}

/// Whether a plugin only reads the session or may change it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginKind {
    Function,
    Command,
}

impl PluginKind {
    pub fn name(self) -> &'static str {
        match self {
            PluginKind::Function => "function",
            PluginKind::Command => "command",
        }
    }
}

/// Static description of a function or command
#[derive(Debug, Clone)]
pub struct PluginMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub params: &'static [Param],
    pub returns: &'static str,
    pub examples: &'static [&'static str],
    pub category: &'static str,
    pub related: &'static [&'static str],
}

impl PluginMeta {
    /// Number of arguments a call must pass
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Pure function plugin
pub trait FunctionPlugin: Send + Sync {
    fn meta(&self) -> PluginMeta;
    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value;
}

/// Command plugin; may change the session context
pub trait CommandPlugin: Send + Sync {
    fn meta(&self) -> PluginMeta;
    fn execute(&self, args: &[Value], ctx: &mut EvalContext) -> Value;
}

#[cfg(test)]
mod tests {
    use super::*;

    static PARAMS: [Param; 2] = [
        Param::number("value", "Value to convert"),
        Param::text("unit", "Unit name"),
    ];

    #[test]
    fn test_arity_follows_params() {
        let meta = PluginMeta {
            name: "f",
            description: "",
            usage: "f(value, unit)",
            params: &PARAMS,
            returns: "Number",
            examples: &[],
            category: "test",
            related: &[],
        };
        assert_eq!(meta.arity(), 2);
        assert_eq!(meta.params[0].kind.name(), "Number");
        assert_eq!(meta.params[1].kind, ParamKind::Text);
    }
}
