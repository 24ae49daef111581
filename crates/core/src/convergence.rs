#![forbid(unsafe_code)]

use crate::defaults::TRACE_MAX_SAMPLES;
use time::{Duration, OffsetDateTime};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceSample {
    pub day: i64,
    pub fraction_complete: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConvergenceResult {
    pub days_elapsed: i64,
    pub days_remaining: i64,
    /// Always clamped to `[0, 1]`, even for `now` outside the interval.
    pub fraction_complete: f64,
    pub trace: Option<Vec<TraceSample>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConvergenceError {
    EmptyInterval,
}

impl ConvergenceError {
    pub fn message(self) -> &'static str {
        match self {
            ConvergenceError::EmptyInterval => "epochEnd: must be after epochStart",
        }
    }
}

/// Elapsed/remaining whole days and clamped progress between two anchors.
///
/// The optional trace holds one `fraction_complete` sample per whole day from
/// `start` to `min(now, end)`, capped at [`TRACE_MAX_SAMPLES`] entries so the
/// response stays bounded regardless of the interval length.
pub fn compute(
    start: OffsetDateTime,
    end: OffsetDateTime,
    now: OffsetDateTime,
    include_trace: bool,
) -> Result<ConvergenceResult, ConvergenceError> {
    if end <= start {
        return Err(ConvergenceError::EmptyInterval);
    }

    let total_seconds = (end - start).as_seconds_f64();
    let days_elapsed = (now - start).whole_days().max(0);
    let days_remaining = (end - now).whole_days().max(0);
    let fraction_complete = ((now - start).as_seconds_f64() / total_seconds).clamp(0.0, 1.0);

    let trace = include_trace.then(|| {
        let horizon = if now < end { now } else { end };
        let trace_days = (horizon - start).whole_days().max(0);
        let samples = (trace_days + 1).min(TRACE_MAX_SAMPLES as i64);
        (0..samples)
            .map(|day| {
                let at = start + Duration::days(day);
                TraceSample {
                    day,
                    fraction_complete: ((at - start).as_seconds_f64() / total_seconds)
                        .clamp(0.0, 1.0),
                }
            })
            .collect()
    });

    Ok(ConvergenceResult {
        days_elapsed,
        days_remaining,
        fraction_complete,
        trace,
    })
}
