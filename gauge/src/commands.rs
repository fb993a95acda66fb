//! Session commands: reading and clearing conversion history

use gauge_plugin::prelude::*;

// ============ history ============

pub struct ShowHistory;

static HISTORY_EXAMPLES: [&str; 1] = [
    "history() → [\"1.000000 kilometer = 1000.000000 meter (Length)\", ...]",
];

impl CommandPlugin for ShowHistory {
    fn meta(&self) -> PluginMeta {
        PluginMeta {
            name: "history",
            description: "List past conversions of this session, most recent first",
            usage: "history()",
            params: &[],
            returns: "List<Text>",
            examples: &HISTORY_EXAMPLES,
            category: "history",
            related: &["clear_history", "convert"],
        }
    }

    fn execute(&self, _args: &[Value], ctx: &mut EvalContext) -> Value {
        Value::List(ctx.history.entries().map(Value::from).collect())
    }
}

// ============ clear_history ============

pub struct ClearHistory;

static CLEAR_HISTORY_EXAMPLES: [&str; 1] = ["clear_history() → 3"];

impl CommandPlugin for ClearHistory {
    fn meta(&self) -> PluginMeta {
        PluginMeta {
            name: "clear_history",
            description: "Remove every history entry; returns how many were removed",
            usage: "clear_history()",
            params: &[],
            returns: "Number",
            examples: &CLEAR_HISTORY_EXAMPLES,
            category: "history",
            related: &["history"],
        }
    }

    fn execute(&self, _args: &[Value], ctx: &mut EvalContext) -> Value {
        Value::Number(ctx.history.clear() as f64)
    }
}
