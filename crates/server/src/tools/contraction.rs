#![forbid(unsafe_code)]

use crate::args;
use crate::envelope::ToolError;
use crate::registry::ToolDefinition;
use crate::schema::{ParamKind, ParamSpec, ToolSchema};
use serde_json::{Map, Value, json};

pub(crate) fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "iterate_contraction",
        description: "Trajectory of x ← 1 − (1 − x)/k, converging geometrically toward 1.",
        schema: ToolSchema::new(vec![
            ParamSpec::required("initial", ParamKind::Num)
                .min_exclusive(0.0)
                .max(1.0),
            ParamSpec::required("iterations", ParamKind::Int)
                .min(0.0)
                .max(super::MAX_ITERATIONS as f64),
            ParamSpec::required("k", ParamKind::Num).min_exclusive(1.0),
        ]),
        handler: handle,
    }
}

fn handle(arguments: &Map<String, Value>) -> Result<Value, ToolError> {
    let initial = args::req_f64(arguments, "initial")?;
    let iterations = args::req_usize(arguments, "iterations")?;
    let k = args::req_f64(arguments, "k")?;

    let trajectory = hb_core::contraction::iterate(initial, iterations, k)
        .map_err(|err| ToolError::invalid_argument(err.message()))?;

    let initial = trajectory.initial();
    let final_value = trajectory.final_value();
    Ok(json!({
        "initial": initial,
        "iterations": iterations,
        "k": k,
        "trajectory": trajectory.values,
        "finalValue": final_value,
    }))
}
