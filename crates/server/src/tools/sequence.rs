#![forbid(unsafe_code)]

use crate::args;
use crate::envelope::ToolError;
use crate::registry::ToolDefinition;
use crate::schema::{ParamKind, ParamSpec, ToolSchema};
use hb_core::defaults::{ALPHABET, SEQUENCE_LENGTH};
use serde_json::{Map, Value, json};

pub(crate) fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "generate_sequence",
        description: "Deterministic hash-chained symbol sequence derived from (seed, label).",
        schema: ToolSchema::new(vec![
            ParamSpec::required("seed", ParamKind::Str).non_empty(),
            ParamSpec::required("label", ParamKind::Str).non_empty(),
            ParamSpec::optional("length", ParamKind::Int)
                .with_default(json!(SEQUENCE_LENGTH))
                .min(1.0)
                .max(super::MAX_SEQUENCE_LENGTH as f64),
        ]),
        handler: handle,
    }
}

fn handle(arguments: &Map<String, Value>) -> Result<Value, ToolError> {
    let seed = args::req_str(arguments, "seed")?;
    let label = args::req_str(arguments, "label")?;
    let length = args::req_usize(arguments, "length")?;

    let sequence = hb_core::sequence::generate(seed, label, length)
        .map_err(|err| ToolError::invalid_argument(err.message()))?;

    Ok(json!({
        "seed": sequence.seed(),
        "label": sequence.label(),
        "length": sequence.len(),
        "alphabet": ALPHABET.iter().collect::<String>(),
        "sequence": sequence.symbols(),
    }))
}
