#![forbid(unsafe_code)]

use crate::defaults::{
    BASELINE, CHARACTERISTIC_DAYS, COHERENCE_FLOOR, EPOCH, GROWTH_BASE, MULTIPLIER,
    SEQUENCE_LENGTH, WINDOWS,
};
use crate::growth::{self, Elapsed, GrowthError, GrowthResult};
use crate::scorer::{self, CoherenceResult, ScoreError};
use crate::sequence::{self, SequenceError, SymbolSequence};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq)]
pub struct BridgeDocument {
    pub label: String,
    pub sequence: SymbolSequence,
    pub coherence: CoherenceResult,
    pub growth: GrowthResult,
    pub validated: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum BridgeError {
    Sequence(SequenceError),
    Score(ScoreError),
    Growth(GrowthError),
}

impl BridgeError {
    pub fn message(&self) -> String {
        match self {
            BridgeError::Sequence(err) => err.message().to_string(),
            BridgeError::Score(err) => err.message(),
            BridgeError::Growth(err) => err.message(),
        }
    }
}

/// Pure orchestration: generator → scorer → growth (auto-elapsed from the
/// default epoch), bundled with a `validated` verdict. Nothing is shared or
/// mutated across calls; determinism is inherited from the components (the
/// growth leg varies with `now` by contract).
pub fn build(label: &str, seed: &str, now: OffsetDateTime) -> Result<BridgeDocument, BridgeError> {
    let sequence =
        sequence::generate(seed, label, SEQUENCE_LENGTH).map_err(BridgeError::Sequence)?;
    let coherence = scorer::score(sequence.symbols(), &WINDOWS).map_err(BridgeError::Score)?;
    let growth = growth::evaluate(
        BASELINE,
        GROWTH_BASE,
        CHARACTERISTIC_DAYS,
        MULTIPLIER,
        Elapsed::SinceEpoch { epoch: EPOCH, now },
    )
    .map_err(BridgeError::Growth)?;

    let validated = coherence.overall >= COHERENCE_FLOOR && sequence.len() == SEQUENCE_LENGTH;

    Ok(BridgeDocument {
        label: label.to_string(),
        sequence,
        coherence,
        growth,
        validated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::SEED;
    use time::macros::datetime;

    const NOW: OffsetDateTime = datetime!(2025-06-01 00:00 UTC);

    #[test]
    fn bridge_document_validates_under_defaults() {
        let doc = build("Gateway", SEED, NOW).expect("build");
        assert!(doc.validated);
        assert_eq!(doc.sequence.len(), SEQUENCE_LENGTH);
        assert!(doc.coherence.overall >= COHERENCE_FLOOR && doc.coherence.overall <= 1.0);
        assert_eq!(doc.growth.baseline, BASELINE);
    }

    #[test]
    fn same_inputs_and_clock_build_the_same_document() {
        let a = build("Gateway", SEED, NOW).expect("build");
        let b = build("Gateway", SEED, NOW).expect("build");
        assert_eq!(a, b);
    }

    #[test]
    fn blank_label_is_rejected() {
        assert_eq!(
            build("", SEED, NOW),
            Err(BridgeError::Sequence(SequenceError::EmptyLabel))
        );
    }
}
