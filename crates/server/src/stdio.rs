#![forbid(unsafe_code)]

use crate::diag::DiagnosticsSink;
use crate::envelope::{ToolError, ToolRequest, response_error};
use crate::registry::ToolRegistry;
use serde_json::Value;
use std::io::{BufRead, BufReader, Write};

/// Newline-JSON loop: one request object per stdin line, one response object
/// per stdout line, no sub-line framing. Blank lines are skipped; EOF ends
/// the process cleanly. Malformed input produces an error response and the
/// loop keeps serving.
pub(crate) fn run_stdio(
    registry: &ToolRegistry,
    diag: &dyn DiagnosticsSink,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = std::io::stdin();
    let mut reader = BufReader::new(stdin.lock());
    let mut stdout = std::io::stdout().lock();

    loop {
        let mut line = String::new();
        let read = reader.read_line(&mut line)?;
        if read == 0 {
            break;
        }
        let raw = line.trim();
        if raw.is_empty() {
            continue;
        }
        let response = handle_line(registry, diag, raw);
        write_newline_json(&mut stdout, &response)?;
    }

    Ok(())
}

fn write_newline_json(
    stdout: &mut std::io::StdoutLock<'_>,
    response: &Value,
) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(stdout, "{}", serde_json::to_string(response)?)?;
    stdout.flush()?;
    Ok(())
}

fn handle_line(registry: &ToolRegistry, diag: &dyn DiagnosticsSink, raw: &str) -> Value {
    let parsed: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            return response_error(
                &Value::Null,
                &ToolError::invalid_argument(format!("invalid JSON: {err}")),
            );
        }
    };

    // Keep the id for correlation even when the envelope itself is rejected.
    let id = parsed.get("id").cloned().unwrap_or(Value::Null);
    let request: ToolRequest = match serde_json::from_value(parsed) {
        Ok(request) => request,
        Err(err) => {
            return response_error(
                &id,
                &ToolError::invalid_argument(format!("invalid request envelope: {err}")),
            );
        }
    };

    crate::dispatch::dispatch(registry, diag, &request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::NullSink;
    use crate::registry::build_registry;

    #[test]
    fn malformed_json_yields_an_error_with_null_id() {
        let registry = build_registry().expect("registry");
        let response = handle_line(&registry, &NullSink, "{not json");
        assert!(response.get("id").expect("id").is_null());
        assert_eq!(
            response
                .get("error")
                .and_then(|e| e.get("kind"))
                .and_then(|v| v.as_str()),
            Some("InvalidArgumentError")
        );
    }

    #[test]
    fn envelope_without_tool_keeps_the_request_id() {
        let registry = build_registry().expect("registry");
        let response = handle_line(&registry, &NullSink, r#"{"id": "r7", "arguments": {}}"#);
        assert_eq!(response.get("id").and_then(|v| v.as_str()), Some("r7"));
        assert_eq!(
            response
                .get("error")
                .and_then(|e| e.get("kind"))
                .and_then(|v| v.as_str()),
            Some("InvalidArgumentError")
        );
    }
}
