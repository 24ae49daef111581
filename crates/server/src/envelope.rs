#![forbid(unsafe_code)]

use serde::Deserialize;
use serde_json::{Map, Value, json};

/// One request line: `{ "id": ..., "tool": ..., "arguments": {...} }`.
#[derive(Debug, Deserialize)]
pub(crate) struct ToolRequest {
    #[serde(default)]
    pub(crate) id: Value,
    pub(crate) tool: String,
    #[serde(default)]
    pub(crate) arguments: Map<String, Value>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ErrorKind {
    InvalidArgument,
    UnknownTool,
    DuplicateTool,
    Handler,
}

impl ErrorKind {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "InvalidArgumentError",
            ErrorKind::UnknownTool => "UnknownToolError",
            ErrorKind::DuplicateTool => "DuplicateToolError",
            ErrorKind::Handler => "HandlerError",
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct ToolError {
    pub(crate) kind: ErrorKind,
    pub(crate) message: String,
    /// Internal detail for diagnostics only; never echoed to the caller.
    pub(crate) detail: Option<String>,
}

impl ToolError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidArgument,
            message: message.into(),
            detail: None,
        }
    }

    pub(crate) fn unknown_tool(name: &str) -> Self {
        Self {
            kind: ErrorKind::UnknownTool,
            message: format!("unknown tool: {name}"),
            detail: None,
        }
    }

    pub(crate) fn duplicate_tool(name: &str) -> Self {
        Self {
            kind: ErrorKind::DuplicateTool,
            message: format!("tool registered twice: {name}"),
            detail: None,
        }
    }

    pub(crate) fn handler(detail: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Handler,
            message: "tool handler failed; detail retained in diagnostics".to_string(),
            detail: Some(detail.into()),
        }
    }
}

pub(crate) fn response_ok(id: &Value, result: Value) -> Value {
    json!({ "id": id, "result": result })
}

pub(crate) fn response_error(id: &Value, error: &ToolError) -> Value {
    json!({
        "id": id,
        "error": { "kind": error.kind.as_str(), "message": error.message }
    })
}
