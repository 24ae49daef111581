#![forbid(unsafe_code)]

use crate::defaults::{ALPHABET, COHERENCE_FLOOR};

// Population variance of window symbol indices is at most span²/4 (half the
// window at each extreme), which for indices 0..=3 is 2.25.
const MAX_INDEX_VARIANCE: f64 = 2.25;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowScore {
    pub size: usize,
    pub dispersion: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CoherenceResult {
    /// Remapped score, always within `[COHERENCE_FLOOR, 1.0]`.
    pub overall: f64,
    /// Size-weighted mean of per-window dispersion metrics, in `[0, 1]`.
    pub aggregate: f64,
    pub windows: Vec<WindowScore>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScoreError {
    EmptyWindows,
    NonPositiveWindow { index: usize },
    DescendingWindows { index: usize },
    WindowsExceedSequence { sum: usize, len: usize },
    UnknownSymbol { ch: char, index: usize },
}

impl ScoreError {
    pub fn message(&self) -> String {
        match self {
            ScoreError::EmptyWindows => {
                "windowSizes: must contain at least one window".to_string()
            }
            ScoreError::NonPositiveWindow { index } => {
                format!("windowSizes: window at index {index} must be positive")
            }
            ScoreError::DescendingWindows { index } => format!(
                "windowSizes: must be ascending, window at index {index} is smaller than its predecessor"
            ),
            ScoreError::WindowsExceedSequence { sum, len } => format!(
                "windowSizes: windows sum to {sum} but the sequence has only {len} symbols"
            ),
            ScoreError::UnknownSymbol { ch, index } => {
                format!("sequence: symbol {ch:?} at index {index} is outside the alphabet")
            }
        }
    }
}

/// Partition `sequence` into consecutive windows and aggregate a bounded
/// coherence score.
///
/// Length-mismatch policy (deterministic by design): windows that sum to more
/// than the sequence length are an error; a shorter sum truncates the
/// sequence to the covered prefix before partitioning.
pub fn score(sequence: &str, window_sizes: &[usize]) -> Result<CoherenceResult, ScoreError> {
    if window_sizes.is_empty() {
        return Err(ScoreError::EmptyWindows);
    }
    for (index, pair) in window_sizes.windows(2).enumerate() {
        if pair[1] < pair[0] {
            return Err(ScoreError::DescendingWindows { index: index + 1 });
        }
    }
    if let Some(index) = window_sizes.iter().position(|size| *size == 0) {
        return Err(ScoreError::NonPositiveWindow { index });
    }

    let indices = symbol_indices(sequence)?;
    let sum: usize = window_sizes.iter().sum();
    if sum > indices.len() {
        return Err(ScoreError::WindowsExceedSequence {
            sum,
            len: indices.len(),
        });
    }

    let mut windows = Vec::with_capacity(window_sizes.len());
    let mut cursor = 0usize;
    for &size in window_sizes {
        let window = &indices[cursor..cursor + size];
        windows.push(WindowScore {
            size,
            dispersion: dispersion_metric(window),
        });
        cursor += size;
    }

    let weighted: f64 = windows
        .iter()
        .map(|w| w.dispersion * w.size as f64)
        .sum::<f64>();
    let aggregate = (weighted / sum as f64).clamp(0.0, 1.0);
    let overall =
        (COHERENCE_FLOOR + (1.0 - COHERENCE_FLOOR) * aggregate).clamp(COHERENCE_FLOOR, 1.0);

    Ok(CoherenceResult {
        overall,
        aggregate,
        windows,
    })
}

fn symbol_indices(sequence: &str) -> Result<Vec<f64>, ScoreError> {
    sequence
        .chars()
        .enumerate()
        .map(|(index, ch)| {
            ALPHABET
                .iter()
                .position(|candidate| *candidate == ch)
                .map(|idx| idx as f64)
                .ok_or(ScoreError::UnknownSymbol { ch, index })
        })
        .collect()
}

/// "1 − normalized variance" over the window's symbol indices: a constant
/// window has zero variance and scores 1.0, a window split between the two
/// alphabet extremes has maximal variance and scores 0.0.
fn dispersion_metric(window: &[f64]) -> f64 {
    if window.is_empty() {
        return 1.0;
    }
    let mean = window.iter().sum::<f64>() / window.len() as f64;
    let variance =
        window.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / window.len() as f64;
    (1.0 - variance / MAX_INDEX_VARIANCE).clamp(0.0, 1.0)
}
