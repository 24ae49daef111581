#![forbid(unsafe_code)]

use crate::diag::DiagnosticsSink;
use crate::envelope::{ToolError, ToolRequest, response_error, response_ok};
use crate::registry::ToolRegistry;
use serde_json::{Value, json};
use std::panic::{AssertUnwindSafe, catch_unwind};

/// Route one request: look up the tool, validate arguments, run the handler,
/// and wrap the outcome. Every failure mode becomes a structured response
/// error; nothing here is allowed to take the process down.
pub(crate) fn dispatch(
    registry: &ToolRegistry,
    diag: &dyn DiagnosticsSink,
    request: &ToolRequest,
) -> Value {
    match run_tool(registry, request) {
        Ok(result) => {
            diag.append(diag_record(request, "ok", None));
            response_ok(&request.id, result)
        }
        Err(error) => {
            diag.append(diag_record(
                request,
                error.kind.as_str(),
                error.detail.as_deref(),
            ));
            response_error(&request.id, &error)
        }
    }
}

fn run_tool(registry: &ToolRegistry, request: &ToolRequest) -> Result<Value, ToolError> {
    let Some(definition) = registry.get(request.tool.trim()) else {
        return Err(ToolError::unknown_tool(&request.tool));
    };

    let arguments = definition
        .schema
        .validate(&request.arguments)
        .map_err(|problems| {
            ToolError::invalid_argument(format!("invalid arguments: {}", problems.join("; ")))
        })?;

    let handler = definition.handler;
    match catch_unwind(AssertUnwindSafe(|| handler(&arguments))) {
        Ok(outcome) => outcome,
        Err(panic) => Err(ToolError::handler(panic_detail(panic))),
    }
}

fn panic_detail(panic: Box<dyn std::any::Any + Send>) -> String {
    if let Some(text) = panic.downcast_ref::<&str>() {
        format!("handler panicked: {text}")
    } else if let Some(text) = panic.downcast_ref::<String>() {
        format!("handler panicked: {text}")
    } else {
        "handler panicked with a non-string payload".to_string()
    }
}

fn diag_record(request: &ToolRequest, outcome: &str, detail: Option<&str>) -> Value {
    let mut record = serde_json::Map::new();
    record.insert("ts".to_string(), json!(hb_core::clock::now_rfc3339()));
    record.insert("id".to_string(), request.id.clone());
    record.insert("tool".to_string(), json!(request.tool));
    record.insert("outcome".to_string(), json!(outcome));
    if let Some(detail) = detail {
        record.insert("detail".to_string(), json!(detail));
    }
    Value::Object(record)
}
