#![forbid(unsafe_code)]

use crate::args;
use crate::envelope::ToolError;
use crate::registry::ToolDefinition;
use crate::schema::{ParamKind, ParamSpec, ToolSchema};
use hb_core::defaults::SEED;
use serde_json::{Map, Value, json};

pub(crate) fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "build_bridge",
        description: "Composite document: sequence + coherence + growth, with a validated verdict.",
        schema: ToolSchema::new(vec![
            ParamSpec::required("label", ParamKind::Str).non_empty(),
            ParamSpec::optional("seed", ParamKind::Str)
                .with_default(json!(SEED))
                .non_empty(),
        ]),
        handler: handle,
    }
}

fn handle(arguments: &Map<String, Value>) -> Result<Value, ToolError> {
    let label = args::req_str(arguments, "label")?;
    let seed = args::req_str(arguments, "seed")?;

    let document = hb_core::bridge::build(label, seed, hb_core::clock::now_utc())
        .map_err(|err| ToolError::invalid_argument(err.message()))?;

    Ok(json!({
        "label": document.label,
        "seed": document.sequence.seed(),
        "sequence": {
            "length": document.sequence.len(),
            "symbols": document.sequence.symbols(),
        },
        "coherence": super::score::coherence_json(&document.coherence),
        "growth": super::growth::growth_json(&document.growth),
        "validated": document.validated,
    }))
}
