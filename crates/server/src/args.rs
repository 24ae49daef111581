#![forbid(unsafe_code)]

//! Typed accessors for schema-validated argument maps. The schema layer has
//! already checked presence, type, and range; a miss here means the tool's
//! schema and its handler disagree, which is reported as a handler failure
//! rather than blamed on the caller.

use crate::envelope::ToolError;
use serde_json::{Map, Value};

fn missing(name: &str) -> ToolError {
    ToolError::handler(format!("argument {name} absent after schema validation"))
}

pub(crate) fn req_str<'a>(args: &'a Map<String, Value>, name: &str) -> Result<&'a str, ToolError> {
    args.get(name).and_then(|v| v.as_str()).ok_or_else(|| missing(name))
}

pub(crate) fn req_f64(args: &Map<String, Value>, name: &str) -> Result<f64, ToolError> {
    args.get(name).and_then(|v| v.as_f64()).ok_or_else(|| missing(name))
}

pub(crate) fn req_usize(args: &Map<String, Value>, name: &str) -> Result<usize, ToolError> {
    args.get(name)
        .and_then(|v| v.as_i64())
        .and_then(|v| usize::try_from(v).ok())
        .ok_or_else(|| missing(name))
}

pub(crate) fn req_usize_list(
    args: &Map<String, Value>,
    name: &str,
) -> Result<Vec<usize>, ToolError> {
    args.get(name)
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_i64())
                .filter_map(|item| usize::try_from(item).ok())
                .collect::<Vec<_>>()
        })
        .ok_or_else(|| missing(name))
}

pub(crate) fn opt_str<'a>(args: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    args.get(name).and_then(|v| v.as_str())
}

pub(crate) fn opt_f64(args: &Map<String, Value>, name: &str) -> Option<f64> {
    args.get(name).and_then(|v| v.as_f64())
}

pub(crate) fn bool_or(args: &Map<String, Value>, name: &str, fallback: bool) -> bool {
    args.get(name).and_then(|v| v.as_bool()).unwrap_or(fallback)
}
