#![forbid(unsafe_code)]

use crate::args;
use crate::envelope::ToolError;
use crate::registry::ToolDefinition;
use crate::schema::{ParamKind, ParamSpec, ToolSchema};
use hb_core::defaults::COHERENCE_FLOOR;
use hb_core::scorer::CoherenceResult;
use serde_json::{Map, Value, json};

pub(crate) fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "score_sequence",
        description: "Windowed coherence score of a symbol sequence, bounded to [0.777, 1.0].",
        schema: ToolSchema::new(vec![
            ParamSpec::required("sequence", ParamKind::Str).non_empty(),
            ParamSpec::required("windowSizes", ParamKind::IntList)
                .min(1.0)
                .non_empty(),
        ]),
        handler: handle,
    }
}

fn handle(arguments: &Map<String, Value>) -> Result<Value, ToolError> {
    let sequence = args::req_str(arguments, "sequence")?;
    let window_sizes = args::req_usize_list(arguments, "windowSizes")?;

    let result = hb_core::scorer::score(sequence, &window_sizes)
        .map_err(|err| ToolError::invalid_argument(err.message()))?;

    Ok(coherence_json(&result))
}

pub(crate) fn coherence_json(result: &CoherenceResult) -> Value {
    json!({
        "overall": result.overall,
        "aggregate": result.aggregate,
        "floor": COHERENCE_FLOOR,
        "windows": result
            .windows
            .iter()
            .map(|w| json!({ "size": w.size, "dispersion": w.dispersion }))
            .collect::<Vec<_>>(),
    })
}
