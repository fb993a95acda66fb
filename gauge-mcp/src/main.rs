//! Gauge MCP Server
//!
//! Line-delimited JSON-RPC 2.0 over stdio. One process is one session: the
//! conversion history lives as long as the connection.
//!
//! Tools:
//! - convert: Convert a value between two units of a category
//! - list_categories: Categories with their units and base unit
//! - list_units: Units of one category
//! - history: Past conversions, most recent first
//! - clear_history: Forget past conversions
//! - help: Documentation for a function or command
//! - list_functions: Available functions

use gauge::{Gauge, GaugeConfig};
use gauge_core::{GaugeError, Value};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

const PROTOCOL_VERSION: &str = "2025-11-25";
const SERVER_NAME: &str = "gauge";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

// MCP Protocol types
#[derive(Debug, Deserialize)]
struct McpRequest {
    #[allow(dead_code)]
    jsonrpc: String,
    id: Option<JsonValue>,
    method: String,
    #[serde(default)]
    params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
struct McpResponse {
    jsonrpc: String,
    // JSON-RPC requires `"id": null` when the request id could not be read
    id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<McpError>,
}

#[derive(Debug, Serialize)]
struct McpError {
    code: i32,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<JsonValue>,
}

impl McpError {
    fn parse_error(message: impl Into<String>) -> Self {
        McpError { code: -32700, message: message.into(), data: None }
    }

    fn invalid_params(message: impl Into<String>) -> Self {
        McpError { code: -32602, message: message.into(), data: None }
    }
}

fn init_logging() {
    // stdout carries protocol frames, so logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn main() {
    init_logging();

    let config = GaugeConfig::from_env();
    let mut gauge = Gauge::from_config(&config);

    info!(version = SERVER_VERSION, protocol = PROTOCOL_VERSION, "Gauge MCP server started");
    debug!(
        stdin_terminal = io::stdin().is_terminal(),
        stdout_terminal = io::stdout().is_terminal(),
        "stdio"
    );

    let stdin = io::stdin();
    let reader = io::BufReader::new(stdin.lock());
    let stdout = io::stdout();

    info!("Server ready, waiting for requests...");
    serve(reader, stdout.lock(), &mut gauge);
    info!("Server shutting down");
}

/// Read requests line by line until EOF, answering each on `writer`.
///
/// Undecodable lines are answered with a parse error; only I/O failures end
/// the session.
fn serve<R: BufRead, W: Write>(mut reader: R, mut writer: W, gauge: &mut Gauge) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => {
                info!("Client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let Some(response) = respond(gauge, &buf) else {
                    continue;
                };
                if let Err(e) = write_response(&mut writer, &response) {
                    error!(error = %e, "error writing response");
                    break;
                }
            }
            Err(e) => {
                error!(error = %e, "error reading input");
                break;
            }
        }
    }
}

/// Answer one raw input line; `None` for blank lines and notifications
fn respond(gauge: &mut Gauge, raw: &[u8]) -> Option<McpResponse> {
    let line = match std::str::from_utf8(raw) {
        Ok(line) => line.trim(),
        Err(e) => {
            warn!(error = %e, "request is not valid UTF-8");
            return Some(error_response(None, McpError::parse_error(format!("Parse error: {}", e))));
        }
    };
    if line.is_empty() {
        return None;
    }
    debug!(bytes = line.len(), "received");

    match serde_json::from_str::<McpRequest>(line) {
        Ok(request) => {
            debug!(method = %request.method, "processing");
            let response = handle_request(gauge, &request);
            // Notifications (no id) should NOT receive a response
            if request.id.is_none() {
                debug!(method = %request.method, "notification processed");
                return None;
            }
            Some(response)
        }
        Err(e) => {
            warn!(error = %e, "unparseable request");
            Some(error_response(None, McpError::parse_error(format!("Parse error: {}", e))))
        }
    }
}

fn error_response(id: Option<JsonValue>, error: McpError) -> McpResponse {
    McpResponse {
        jsonrpc: "2.0".to_string(),
        id,
        result: None,
        error: Some(error),
    }
}

fn write_response<W: Write>(writer: &mut W, response: &McpResponse) -> io::Result<()> {
    let response_json = serde_json::to_string(response)?;
    writeln!(writer, "{}", response_json)?;
    writer.flush()
}

fn handle_request(gauge: &mut Gauge, request: &McpRequest) -> McpResponse {
    let result = match request.method.as_str() {
        // Lifecycle
        "initialize" => handle_initialize(&request.params),
        "initialized" | "notifications/initialized" => Ok(json!({})),
        "ping" => Ok(json!({})),

        // Tools
        "tools/list" => handle_tools_list(),
        "tools/call" => handle_tool_call(gauge, &request.params),

        _ => Err(McpError {
            code: -32601,
            message: format!("Method not found: {}", request.method),
            data: None,
        }),
    };

    match result {
        Ok(r) => McpResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id.clone(),
            result: Some(r),
            error: None,
        },
        Err(e) => error_response(request.id.clone(), e),
    }
}

fn handle_initialize(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client_info = params.as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Use client's protocol version for compatibility
    let client_protocol = params.as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    info!(client = client_info, protocol = client_protocol, "client connected");

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Unit conversion across length, mass, temperature, volume, digital storage, time and speed"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "instructions": "Use list_categories to see the categories and their units, then convert. Units must come from the chosen category. Past conversions are kept for this session; see history."
    }))
}

fn handle_tools_list() -> Result<JsonValue, McpError> {
    let categories = gauge_units::categories();
    Ok(json!({
        "tools": [
            {
                "name": "convert",
                "description": "Convert a value from one unit to another within a category.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "value": {
                            "type": ["number", "string"],
                            "description": "Value to convert"
                        },
                        "from_unit": {
                            "type": "string",
                            "description": "Source unit, e.g. \"kilometer\""
                        },
                        "to_unit": {
                            "type": "string",
                            "description": "Target unit, e.g. \"mile\""
                        },
                        "category": {
                            "type": "string",
                            "description": "Category both units belong to",
                            "enum": categories
                        }
                    },
                    "required": ["value", "from_unit", "to_unit", "category"]
                }
            },
            {
                "name": "list_categories",
                "description": "List categories with their units and base unit.",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            },
            {
                "name": "list_units",
                "description": "List the units of one category.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "description": "Category name",
                            "enum": categories
                        }
                    },
                    "required": ["category"]
                }
            },
            {
                "name": "history",
                "description": "Past conversions of this session, most recent first.",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            },
            {
                "name": "clear_history",
                "description": "Forget every past conversion of this session.",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            },
            {
                "name": "help",
                "description": "Documentation for a function or command. Omit name for an overview.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "name": {
                            "type": "string",
                            "description": "Function or command name"
                        }
                    }
                }
            },
            {
                "name": "list_functions",
                "description": "List available functions, optionally by category.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "description": "Filter by function category, e.g. units"
                        }
                    }
                }
            }
        ]
    }))
}

fn handle_tool_call(gauge: &mut Gauge, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = params.as_ref().ok_or_else(|| McpError::invalid_params("Missing params"))?;

    let name = params.get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    match name {
        "convert" => tool_convert(gauge, &args),
        "list_categories" => tool_list_categories(gauge),
        "list_units" => tool_list_units(gauge, &args),
        "history" => tool_history(gauge),
        "clear_history" => tool_clear_history(gauge),
        "help" => tool_help(gauge, &args),
        "list_functions" => tool_list_functions(gauge, &args),
        _ => Err(McpError::invalid_params(format!("Unknown tool: {}", name))),
    }
}

fn required_str<'a>(args: &'a JsonValue, key: &str) -> Result<&'a str, McpError> {
    args.get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params(format!("Missing {} argument", key)))
}

fn tool_error(err: &GaugeError) -> JsonValue {
    json!({
        "content": [{ "type": "text", "text": format!("Error: {}", err) }],
        "error": error_to_json(err),
        "isError": true
    })
}

fn tool_convert(gauge: &mut Gauge, args: &JsonValue) -> Result<JsonValue, McpError> {
    let raw_value = args.get("value")
        .ok_or_else(|| McpError::invalid_params("Missing value argument"))?;
    let from = required_str(args, "from_unit")?;
    let to = required_str(args, "to_unit")?;
    let category = required_str(args, "category")?;

    let value = match json_to_value(raw_value).to_number() {
        Value::Number(n) => n,
        Value::Error(e) => return Ok(tool_error(&e)),
        other => return Ok(tool_error(&GaugeError::type_error("Number", other.type_name()))),
    };

    let record = match gauge.convert(value, from, to, category) {
        Ok(r) => r,
        Err(e) => return Ok(tool_error(&e)),
    };

    let precision = gauge.precision();
    Ok(json!({
        "content": [{ "type": "text", "text": record.summary(precision) }],
        "record": record,
        "copy": record.copy_text(precision),
        "entry": record.entry(precision),
        "isError": false
    }))
}

fn tool_list_categories(gauge: &Gauge) -> Result<JsonValue, McpError> {
    let mut text = String::new();
    let mut data = Vec::new();
    for category in gauge_units::categories() {
        let units = gauge.units(category);
        let base = gauge.base_unit(category);
        text.push_str(&format!("- {} (base: {}): {}\n", category, base, units));
        data.push(json!({
            "name": category,
            "base_unit": value_to_json(&base),
            "units": value_to_json(&units)
        }));
    }
    Ok(json!({ "content": [{ "type": "text", "text": text }], "data": data }))
}

fn tool_list_units(gauge: &Gauge, args: &JsonValue) -> Result<JsonValue, McpError> {
    let category = required_str(args, "category")?;
    match gauge.units(category) {
        Value::Error(e) => Ok(tool_error(&e)),
        units => Ok(json!({
            "content": [{ "type": "text", "text": format!("{}: {}", category, units) }],
            "data": value_to_json(&units)
        })),
    }
}

fn tool_history(gauge: &Gauge) -> Result<JsonValue, McpError> {
    let entries = gauge.history();
    let text = if entries.is_empty() {
        "No conversions yet. Start converting!".to_string()
    } else {
        entries.iter()
            .enumerate()
            .map(|(i, e)| format!("{}. {}", i + 1, e))
            .collect::<Vec<_>>()
            .join("\n")
    };
    Ok(json!({ "content": [{ "type": "text", "text": text }], "data": entries }))
}

fn tool_clear_history(gauge: &mut Gauge) -> Result<JsonValue, McpError> {
    let removed = gauge.clear_history();
    Ok(json!({
        "content": [{ "type": "text", "text": format!("Cleared {} entries", removed) }],
        "removed": removed
    }))
}

fn tool_help(gauge: &Gauge, args: &JsonValue) -> Result<JsonValue, McpError> {
    let name = args.get("name").and_then(|v| v.as_str());
    let help = gauge.help(name);

    Ok(json!({
        "content": [{ "type": "text", "text": format_help(&help) }],
        "data": value_to_json(&help)
    }))
}

fn format_help(help: &Value) -> String {
    match help {
        Value::Object(map) => {
            let mut out = String::new();
            if let Some(Value::Text(n)) = map.get("name") { out.push_str(&format!("# {}\n\n", n)); }
            if let Some(Value::Text(d)) = map.get("description") { out.push_str(&format!("{}\n\n", d)); }
            if let Some(Value::Text(u)) = map.get("usage") { out.push_str(&format!("**Usage:** `{}`\n\n", u)); }
            if out.is_empty() {
                out.push_str("Call help with a name for details.");
            }
            out
        }
        Value::Error(e) => format!("Error: {}", e.message),
        _ => help.to_string(),
    }
}

fn tool_list_functions(gauge: &Gauge, args: &JsonValue) -> Result<JsonValue, McpError> {
    let category = args.get("category").and_then(|v| v.as_str());
    let functions = gauge.list_functions(category);
    Ok(json!({ "content": [{ "type": "text", "text": "Functions listed" }], "data": value_to_json(&functions) }))
}

fn json_to_value(json: &JsonValue) -> Value {
    match json {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => match n.as_f64() {
            Some(f) => Value::Number(f),
            None => Value::Text(n.to_string()),
        },
        JsonValue::String(s) => Value::Text(s.clone()),
        JsonValue::Array(arr) => Value::List(arr.iter().map(json_to_value).collect()),
        JsonValue::Object(obj) => Value::Object(obj.iter().map(|(k, v)| (k.clone(), json_to_value(v))).collect()),
    }
}

fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Number(n) => json!(n),
        Value::Text(s) => JsonValue::String(s.clone()),
        Value::List(l) => JsonValue::Array(l.iter().map(value_to_json).collect()),
        Value::Object(o) => JsonValue::Object(o.iter().map(|(k, v)| (k.clone(), value_to_json(v))).collect()),
        Value::Error(e) => json!({ "_error": error_to_json(e) }),
    }
}

fn error_to_json(err: &GaugeError) -> JsonValue {
    serde_json::to_value(err)
        .unwrap_or_else(|_| json!({ "code": err.code, "message": err.message }))
}
