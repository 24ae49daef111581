#![forbid(unsafe_code)]

use crate::args;
use crate::envelope::ToolError;
use crate::registry::ToolDefinition;
use crate::schema::{ParamKind, ParamSpec, ToolSchema};
use serde_json::{Map, Value, json};
use time::OffsetDateTime;

pub(crate) fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "compute_convergence",
        description: "Elapsed/remaining days and clamped progress between two calendar anchors.",
        schema: ToolSchema::new(vec![
            ParamSpec::required("epochStart", ParamKind::Str).non_empty(),
            ParamSpec::required("epochEnd", ParamKind::Str).non_empty(),
            ParamSpec::optional("now", ParamKind::Str).non_empty(),
            ParamSpec::optional("includeTrace", ParamKind::Bool).with_default(json!(false)),
        ]),
        handler: handle,
    }
}

fn handle(arguments: &Map<String, Value>) -> Result<Value, ToolError> {
    let mut problems = Vec::new();
    let start = parse_anchor(arguments, "epochStart", &mut problems);
    let end = parse_anchor(arguments, "epochEnd", &mut problems);
    let now = match args::opt_str(arguments, "now") {
        Some(raw) => {
            let parsed = hb_core::clock::parse_rfc3339(raw);
            if parsed.is_none() {
                problems.push("now: must be an RFC 3339 timestamp".to_string());
            }
            parsed
        }
        None => Some(hb_core::clock::now_utc()),
    };
    if !problems.is_empty() {
        return Err(ToolError::invalid_argument(format!(
            "invalid arguments: {}",
            problems.join("; ")
        )));
    }
    let (Some(start), Some(end), Some(now)) = (start, end, now) else {
        return Err(ToolError::handler("anchor parsing lost a value"));
    };

    let include_trace = args::bool_or(arguments, "includeTrace", false);
    let result = hb_core::convergence::compute(start, end, now, include_trace)
        .map_err(|err| ToolError::invalid_argument(err.message()))?;

    let mut body = serde_json::Map::new();
    body.insert("daysElapsed".to_string(), json!(result.days_elapsed));
    body.insert("daysRemaining".to_string(), json!(result.days_remaining));
    body.insert(
        "fractionComplete".to_string(),
        json!(result.fraction_complete),
    );
    if let Some(trace) = &result.trace {
        body.insert(
            "trace".to_string(),
            json!(
                trace
                    .iter()
                    .map(|s| json!({ "day": s.day, "fractionComplete": s.fraction_complete }))
                    .collect::<Vec<_>>()
            ),
        );
    }
    Ok(Value::Object(body))
}

fn parse_anchor(
    arguments: &Map<String, Value>,
    name: &str,
    problems: &mut Vec<String>,
) -> Option<OffsetDateTime> {
    let raw = args::opt_str(arguments, name)?;
    let parsed = hb_core::clock::parse_rfc3339(raw);
    if parsed.is_none() {
        problems.push(format!("{name}: must be an RFC 3339 timestamp"));
    }
    parsed
}
