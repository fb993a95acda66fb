//! Plugin Registry

use crate::{CommandPlugin, EvalContext, FunctionPlugin, Param, PluginKind, PluginMeta};
use gauge_core::{GaugeError, Value};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

/// Central plugin registry
pub struct PluginRegistry {
    functions: HashMap<String, Arc<dyn FunctionPlugin>>,
    commands: HashMap<String, Arc<dyn CommandPlugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
            commands: HashMap::new(),
        }
    }

    pub fn with_function<F: FunctionPlugin + 'static>(mut self, f: F) -> Self {
        let name = f.meta().name.to_lowercase();
        self.functions.insert(name, Arc::new(f));
        self
    }

    pub fn with_command<C: CommandPlugin + 'static>(mut self, c: C) -> Self {
        let name = c.meta().name.to_lowercase();
        self.commands.insert(name, Arc::new(c));
        self
    }

    pub fn get_function(&self, name: &str) -> Option<&dyn FunctionPlugin> {
        self.functions.get(&name.to_lowercase()).map(|f| f.as_ref())
    }

    pub fn get_command(&self, name: &str) -> Option<&dyn CommandPlugin> {
        self.commands.get(&name.to_lowercase()).map(|c| c.as_ref())
    }

    /// Call a function; unknown names and wrong argument counts become errors
    pub fn call_function(&self, name: &str, args: &[Value], ctx: &EvalContext) -> Value {
        let Some(f) = self.get_function(name) else {
            return Value::Error(self.unknown_name(name));
        };
        if let Err(e) = check_arity(&f.meta(), args) {
            return Value::Error(e);
        }
        debug!(function = name, args = args.len(), "calling function");
        f.call(args, ctx)
    }

    /// Execute a command against the session context
    pub fn execute_command(&self, name: &str, args: &[Value], ctx: &mut EvalContext) -> Value {
        let Some(c) = self.get_command(name) else {
            return Value::Error(self.unknown_name(name));
        };
        if let Err(e) = check_arity(&c.meta(), args) {
            return Value::Error(e);
        }
        debug!(command = name, "executing command");
        c.execute(args, ctx)
    }

    fn unknown_name(&self, name: &str) -> GaugeError {
        let similar = self.find_similar(name);
        let err = GaugeError::undefined_func(name);
        if similar.is_empty() {
            return err;
        }
        let shown: Vec<&str> = similar.iter().take(5).map(String::as_str).collect();
        err.with_suggestion(format!("Similar: {}. Use help() for full list.", shown.join(", ")))
    }

    /// Registered names resembling `name`, best match first
    fn find_similar(&self, name: &str) -> Vec<String> {
        let query = name.to_lowercase();
        let mut scored: Vec<(&String, usize)> = self.functions.keys()
            .chain(self.commands.keys())
            .map(|candidate| (candidate, similarity_score(&query, candidate)))
            .filter(|(_, score)| *score > 0)
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        scored.into_iter().map(|(name, _)| name.clone()).collect()
    }

    /// Help object for one plugin, or an overview when `name` is `None`
    pub fn help(&self, name: Option<&str>) -> Value {
        let Some(name) = name else {
            return self.overview();
        };
        let key = name.to_lowercase();
        if let Some(f) = self.functions.get(&key) {
            return Value::Object(detail(&f.meta(), PluginKind::Function));
        }
        if let Some(c) = self.commands.get(&key) {
            return Value::Object(detail(&c.meta(), PluginKind::Command));
        }
        Value::Error(GaugeError::not_found(name))
    }

    fn overview(&self) -> Value {
        let mut by_category: HashMap<String, Vec<&str>> = HashMap::new();
        for (name, f) in &self.functions {
            by_category.entry(f.meta().category.to_string()).or_default().push(name);
        }
        let functions = by_category.into_iter()
            .map(|(category, mut names)| {
                names.sort_unstable();
                (category, Value::from(names))
            })
            .collect();

        let mut commands: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        commands.sort_unstable();

        let mut help = HashMap::new();
        help.insert("functions".to_string(), Value::Object(functions));
        help.insert("commands".to_string(), Value::from(commands));
        help.insert("usage".to_string(), Value::from("Call help('name') for details on one function or command."));
        Value::Object(help)
    }

    /// Functions sorted by name, optionally restricted to one category
    pub fn list_functions(&self, category: Option<&str>) -> Value {
        let metas = self.functions.values()
            .map(|f| f.meta())
            .filter(|m| category.map_or(true, |c| m.category == c));
        sorted_summaries(metas)
    }

    /// Commands sorted by name
    pub fn list_commands(&self) -> Value {
        sorted_summaries(self.commands.values().map(|c| c.meta()))
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn check_arity(meta: &PluginMeta, args: &[Value]) -> Result<(), GaugeError> {
    if args.len() != meta.arity() {
        return Err(GaugeError::arg_count(meta.name, meta.arity(), args.len()));
    }
    Ok(())
}

/// Prefix and substring matches dominate; shared letters and close length break ties
fn similarity_score(query: &str, candidate: &str) -> usize {
    let mut score = if candidate.starts_with(query) {
        100
    } else if candidate.contains(query) {
        50
    } else if query.contains(candidate) {
        30
    } else {
        0
    };

    let query_chars: HashSet<char> = query.chars().collect();
    let candidate_chars: HashSet<char> = candidate.chars().collect();
    score += query_chars.intersection(&candidate_chars).count() * 2;

    let len_diff = query.len().abs_diff(candidate.len());
    if len_diff < 5 && score > 0 {
        score += 5 - len_diff;
    }
    score
}

fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

fn param_help(param: &Param) -> Value {
    let mut obj = HashMap::new();
    obj.insert("name".to_string(), text(param.name));
    obj.insert("type".to_string(), text(param.kind.name()));
    obj.insert("description".to_string(), text(param.description));
    Value::Object(obj)
}

fn detail(meta: &PluginMeta, kind: PluginKind) -> HashMap<String, Value> {
    let mut help = summary(meta);
    help.insert("type".to_string(), text(kind.name()));
    help.insert("returns".to_string(), text(meta.returns));
    help.insert("args".to_string(), Value::List(meta.params.iter().map(param_help).collect()));
    help.insert("examples".to_string(), Value::from(meta.examples.to_vec()));
    help.insert("related".to_string(), Value::from(meta.related.to_vec()));
    help
}

fn summary(meta: &PluginMeta) -> HashMap<String, Value> {
    let mut obj = HashMap::new();
    obj.insert("name".to_string(), text(meta.name));
    obj.insert("description".to_string(), text(meta.description));
    obj.insert("usage".to_string(), text(meta.usage));
    obj.insert("category".to_string(), text(meta.category));
    obj
}

fn sorted_summaries(metas: impl Iterator<Item = PluginMeta>) -> Value {
    let mut metas: Vec<PluginMeta> = metas.collect();
    metas.sort_by_key(|m| m.name);
    Value::List(metas.iter().map(|m| Value::Object(summary(m))).collect())
}
