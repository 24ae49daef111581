#![forbid(unsafe_code)]

use crate::args;
use crate::envelope::ToolError;
use crate::registry::ToolDefinition;
use crate::schema::{ParamKind, ParamSpec, ToolSchema};
use hb_core::growth::{Amplified, Elapsed, GrowthResult};
use serde_json::{Map, Value, json};

pub(crate) fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "evaluate_growth",
        description: "Exponential projection R(t) = R0 * base^(t/tau) * M, with log-scale overflow guard.",
        schema: ToolSchema::new(vec![
            ParamSpec::required("baseline", ParamKind::Num).min_exclusive(0.0),
            ParamSpec::required("growthBase", ParamKind::Num).min_exclusive(0.0),
            ParamSpec::required("characteristicTime", ParamKind::Num).min_exclusive(0.0),
            ParamSpec::required("multiplier", ParamKind::Num).min_exclusive(0.0),
            ParamSpec::optional("elapsedTime", ParamKind::Num),
            ParamSpec::optional("epoch", ParamKind::Str).non_empty(),
        ]),
        handler: handle,
    }
}

fn handle(arguments: &Map<String, Value>) -> Result<Value, ToolError> {
    let baseline = args::req_f64(arguments, "baseline")?;
    let growth_base = args::req_f64(arguments, "growthBase")?;
    let characteristic_time = args::req_f64(arguments, "characteristicTime")?;
    let multiplier = args::req_f64(arguments, "multiplier")?;

    let elapsed = if let Some(days) = args::opt_f64(arguments, "elapsedTime") {
        Elapsed::Days(days)
    } else if let Some(raw) = args::opt_str(arguments, "epoch") {
        let epoch = hb_core::clock::parse_rfc3339(raw).ok_or_else(|| {
            ToolError::invalid_argument("epoch: must be an RFC 3339 timestamp")
        })?;
        Elapsed::SinceEpoch {
            epoch,
            now: hb_core::clock::now_utc(),
        }
    } else {
        return Err(ToolError::invalid_argument(
            "elapsedTime, epoch: one of the two is required",
        ));
    };

    let result = hb_core::growth::evaluate(
        baseline,
        growth_base,
        characteristic_time,
        multiplier,
        elapsed,
    )
    .map_err(|err| ToolError::invalid_argument(err.message()))?;

    Ok(growth_json(&result))
}

pub(crate) fn growth_json(result: &GrowthResult) -> Value {
    match result.amplified {
        Amplified::Value {
            growth_factor,
            amplified,
        } => json!({
            "baseline": result.baseline,
            "elapsedDays": result.elapsed_days,
            "growthFactor": growth_factor,
            "amplifiedValue": amplified,
            "logScale": false,
        }),
        Amplified::Log10 { log10_amplified } => json!({
            "baseline": result.baseline,
            "elapsedDays": result.elapsed_days,
            "log10Amplified": log10_amplified,
            "logScale": true,
        }),
    }
}
