//! uconv MCP Server
//!
//! MCP server over stdio, protocol revision 2025-11-25
//!
//! Tools:
//! - convert: Convert a value between two units of a category
//! - convert_all: Convert a value into every unit of its category
//! - format_number: Render a number the way results are displayed
//! - list_categories: List categories with their conversion strategy
//! - list_units: List the units of a category

use std::env;
use std::io::{self, BufRead, Write};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;
use uconv_core::{format_number, ConvertError, ErrorReport, Unit};
use uconv_units::{
    convert, input_constraints, render_all, try_convert, try_convert_to_all_units, Catalog,
    Strategy,
};

const PROTOCOL_VERSION: &str = "2025-11-25";
const SERVER_NAME: &str = "uconv";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Conversion state shared by every request
struct Server {
    catalog: Catalog,
    /// Report unknown units and category mismatches instead of degrading
    strict: bool,
}

impl Server {
    fn from_env() -> Result<Self, ConvertError> {
        let catalog = match env::var("UCONV_CATALOG_PATH") {
            Ok(path) => {
                info!(path = %path, "loading unit catalog from file");
                Catalog::from_path(path)?
            }
            Err(_) => Catalog::builtin()?,
        };
        let strict = env::var("UCONV_STRICT")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true"))
            .unwrap_or(false);

        Ok(Server { catalog, strict })
    }

    /// Resolve a unit id. Lenient mode stands in a unit-scale placeholder for
    /// ids the catalog does not have, and lets the strategy fall back.
    fn resolve(&self, category: &str, id: &str) -> Result<Unit, ConvertError> {
        if self.strict {
            return self.catalog.try_unit(category, id).cloned();
        }
        Ok(self.catalog.unit(category, id).cloned().unwrap_or_else(|| {
            debug!(category, unit = id, "unit not in catalog, using placeholder");
            Unit::new(id, id, id, 1.0)
        }))
    }
}

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
    #[serde(skip_serializing_if = "Option::is_none")]
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
    fn invalid_params(message: impl Into<String>) -> Self {
        McpError {
            code: -32602,
            message: message.into(),
            data: None,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries the protocol
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("uconv=info".parse()?))
        .with_writer(io::stderr)
        .init();

    let server = Server::from_env().map_err(|e| {
        error!("{}", ErrorReport::from(&e));
        e
    })?;

    info!(version = SERVER_VERSION, protocol = PROTOCOL_VERSION, strict = server.strict, "uconv MCP server started");

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let request: McpRequest = match serde_json::from_str(line) {
                    Ok(r) => r,
                    Err(e) => {
                        warn!("error parsing request: {}", e);
                        let response = McpResponse {
                            jsonrpc: "2.0".to_string(),
                            id: None,
                            result: None,
                            error: Some(McpError {
                                code: -32700,
                                message: format!("Parse error: {}", e),
                                data: None,
                            }),
                        };
                        if write_response(&response).is_err() {
                            break;
                        }
                        continue;
                    }
                };

                debug!(method = %request.method, "processing request");
                let response = handle_request(&server, &request);

                // Notifications (no id) get no response
                if request.id.is_none() {
                    continue;
                }

                if let Err(e) = write_response(&response) {
                    error!("error writing response: {}", e);
                    break;
                }
            }
            Err(e) => {
                error!("error reading input: {}", e);
                break;
            }
        }
    }

    info!("server shutting down");
    Ok(())
}

fn write_response(response: &McpResponse) -> io::Result<()> {
    let response_json = serde_json::to_string(response)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", response_json)?;
    stdout.flush()
}

fn handle_request(server: &Server, request: &McpRequest) -> McpResponse {
    let result = match request.method.as_str() {
        // Lifecycle
        "initialize" => handle_initialize(&request.params),
        "initialized" => Ok(json!({})),
        "ping" => Ok(json!({})),

        // Tools
        "tools/list" => handle_tools_list(),
        "tools/call" => handle_tool_call(server, &request.params),

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
        Err(e) => McpResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id.clone(),
            result: None,
            error: Some(e),
        },
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
            "description": "Unit conversion across length, temperature, fuel economy, ring and shoe sizes and more"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "instructions": "Use list_categories and list_units to find unit ids, then convert or convert_all. Units are only comparable within one category."
    }))
}

fn handle_tools_list() -> Result<JsonValue, McpError> {
    let value_schema = json!({
        "type": ["number", "string"],
        "description": "Value to convert; numeric strings are accepted"
    });

    Ok(json!({
        "tools": [
            {
                "name": "convert",
                "description": "Convert a value from one unit to another within a category.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "value": value_schema,
                        "category": { "type": "string", "description": "Category id, e.g. length" },
                        "from": { "type": "string", "description": "Source unit id" },
                        "to": { "type": "string", "description": "Target unit id" }
                    },
                    "required": ["value", "category", "from", "to"]
                }
            },
            {
                "name": "convert_all",
                "description": "Convert a value into every unit of its category, in catalog order.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "value": value_schema,
                        "category": { "type": "string", "description": "Category id" },
                        "from": { "type": "string", "description": "Source unit id" }
                    },
                    "required": ["value", "category", "from"]
                }
            },
            {
                "name": "format_number",
                "description": "Format a number for display (8 significant digits, scientific notation for very large or small values).",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "value": value_schema
                    },
                    "required": ["value"]
                }
            },
            {
                "name": "list_categories",
                "description": "List unit categories with their unit counts and conversion strategy.",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            },
            {
                "name": "list_units",
                "description": "List the units of a category, with input ranges for size charts.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": { "type": "string", "description": "Category id" }
                    },
                    "required": ["category"]
                }
            }
        ]
    }))
}

fn handle_tool_call(server: &Server, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = params.as_ref().ok_or_else(|| McpError::invalid_params("Missing params"))?;

    let name = params.get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    let result = match name {
        "convert" => tool_convert(server, &args)?,
        "convert_all" => tool_convert_all(server, &args)?,
        "format_number" => tool_format_number(&args)?,
        "list_categories" => Ok(tool_list_categories(server)),
        "list_units" => tool_list_units(server, &args)?,
        _ => return Err(McpError::invalid_params(format!("Unknown tool: {}", name))),
    };

    Ok(result.unwrap_or_else(|e| tool_error(&e)))
}

/// A failed tool call is still a successful JSON-RPC result
fn tool_error(err: &ConvertError) -> JsonValue {
    let report = ErrorReport::from(err);
    warn!(code = %report.code, "{}", report.message);
    json!({
        "content": [{ "type": "text", "text": report.to_string() }],
        "error": report.to_json(),
        "isError": true
    })
}

type ToolResult = Result<Result<JsonValue, ConvertError>, McpError>;

fn str_arg<'a>(args: &'a JsonValue, name: &str) -> Result<&'a str, McpError> {
    args.get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params(format!("Missing {} argument", name)))
}

/// Accept a JSON number or numeric text. Text that does not parse to a
/// finite number never reaches the engine.
fn parse_value(value: &JsonValue) -> Result<f64, ConvertError> {
    let parsed = match value {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(ConvertError::InvalidInput(format!("'{}' is not a number", value_text(value)))),
    }
}

fn value_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn value_arg(args: &JsonValue) -> Result<&JsonValue, McpError> {
    args.get("value").ok_or_else(|| McpError::invalid_params("Missing value argument"))
}

fn tool_convert(server: &Server, args: &JsonValue) -> ToolResult {
    let raw = value_arg(args)?;
    let category = str_arg(args, "category")?;
    let from = str_arg(args, "from")?;
    let to = str_arg(args, "to")?;
    Ok(run_convert(server, raw, category, from, to))
}

fn run_convert(
    server: &Server,
    raw: &JsonValue,
    category: &str,
    from_id: &str,
    to_id: &str,
) -> Result<JsonValue, ConvertError> {
    let value = parse_value(raw)?;
    let from = server.resolve(category, from_id)?;
    let to = server.resolve(category, to_id)?;

    let converted = if server.strict {
        try_convert(value, &from, &to, category)?
    } else {
        convert(value, &from, &to, category)
    };
    let display = format_number(converted);

    Ok(json!({
        "content": [{
            "type": "text",
            "text": format!("{} {} = {} {}", format_number(value), from.symbol, display, to.symbol)
        }],
        "value": converted,
        "display": display
    }))
}

fn tool_convert_all(server: &Server, args: &JsonValue) -> ToolResult {
    let raw = value_arg(args)?;
    let category = str_arg(args, "category")?;
    let from = str_arg(args, "from")?;
    Ok(run_convert_all(server, raw, category, from))
}

fn run_convert_all(
    server: &Server,
    raw: &JsonValue,
    category: &str,
    from_id: &str,
) -> Result<JsonValue, ConvertError> {
    let value = parse_value(raw)?;
    let from = server.resolve(category, from_id)?;
    let units = server.catalog.units(category);

    if server.strict {
        try_convert_to_all_units(value, &from, units, category)?;
    }
    let rows = render_all(value, &from, units, category);

    let text = rows
        .iter()
        .map(|r| format!("{} {}", r.display, r.symbol))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(json!({
        "content": [{ "type": "text", "text": text }],
        "category": category,
        "from": from.id,
        "units": rows
    }))
}

fn tool_format_number(args: &JsonValue) -> ToolResult {
    let raw = value_arg(args)?;
    Ok(parse_value(raw).map(|value| {
        let display = format_number(value);
        json!({
            "content": [{ "type": "text", "text": display }],
            "display": display
        })
    }))
}

fn tool_list_categories(server: &Server) -> JsonValue {
    let categories: Vec<JsonValue> = server.catalog.categories()
        .map(|id| json!({
            "id": id,
            "units": server.catalog.units(id).len(),
            "strategy": Strategy::for_category(id).kind()
        }))
        .collect();

    let text = server.catalog.categories().collect::<Vec<_>>().join(", ");

    json!({
        "content": [{ "type": "text", "text": text }],
        "categories": categories
    })
}

fn tool_list_units(server: &Server, args: &JsonValue) -> ToolResult {
    let category = str_arg(args, "category")?;

    if !server.catalog.has_category(category) {
        return Ok(Err(ConvertError::UnknownCategory(category.to_string())));
    }

    let units: Vec<JsonValue> = server.catalog.units(category)
        .iter()
        .map(|u| {
            let mut entry = json!({ "id": u.id, "name": u.name, "symbol": u.symbol });
            if let Some(c) = input_constraints(category, &u.id) {
                entry["constraints"] = json!(c);
            }
            entry
        })
        .collect();

    let text = server.catalog.units(category)
        .iter()
        .map(|u| format!("{} ({})", u.id, u.symbol))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(Ok(json!({
        "content": [{ "type": "text", "text": text }],
        "category": category,
        "units": units
    })))
}
