#![forbid(unsafe_code)]

use time::OffsetDateTime;

// f64 can represent magnitudes up to a little under 1e309; past this the
// evaluation switches to base-10 log space instead of producing infinity.
const MAX_LOG10_MAGNITUDE: f64 = f64::MAX_10_EXP as f64;

/// How elapsed time reaches the model: either given directly in days, or
/// derived as whole days between an epoch anchor and `now`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Elapsed {
    Days(f64),
    SinceEpoch {
        epoch: OffsetDateTime,
        now: OffsetDateTime,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Amplified {
    Value { growth_factor: f64, amplified: f64 },
    /// Overflow-guarded degraded result: the base-10 magnitude of the value
    /// the linear form could not represent.
    Log10 { log10_amplified: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowthResult {
    pub baseline: f64,
    pub elapsed_days: f64,
    pub amplified: Amplified,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrowthError {
    NonPositive { field: &'static str },
    NonFiniteElapsed,
}

impl GrowthError {
    pub fn message(self) -> String {
        match self {
            GrowthError::NonPositive { field } => {
                format!("{field}: must be a finite number greater than 0")
            }
            GrowthError::NonFiniteElapsed => "elapsedTime: must be a finite number".to_string(),
        }
    }
}

/// Evaluate `R(t) = R₀ · k^(t/τ) · M`.
///
/// All four shape parameters must be positive, which keeps the log-space
/// overflow guard total: when `log10(R(t))` would leave f64's exponent range
/// the result degrades to its base-10 magnitude rather than infinity.
pub fn evaluate(
    baseline: f64,
    growth_base: f64,
    characteristic_days: f64,
    multiplier: f64,
    elapsed: Elapsed,
) -> Result<GrowthResult, GrowthError> {
    check_positive("baseline", baseline)?;
    check_positive("growthBase", growth_base)?;
    check_positive("characteristicTime", characteristic_days)?;
    check_positive("multiplier", multiplier)?;

    let elapsed_days = match elapsed {
        Elapsed::Days(days) => {
            if !days.is_finite() {
                return Err(GrowthError::NonFiniteElapsed);
            }
            days
        }
        Elapsed::SinceEpoch { epoch, now } => (now - epoch).whole_days() as f64,
    };

    let exponent = elapsed_days / characteristic_days;
    let log10_amplified =
        baseline.log10() + exponent * growth_base.log10() + multiplier.log10();

    let amplified = if log10_amplified > MAX_LOG10_MAGNITUDE {
        Amplified::Log10 { log10_amplified }
    } else {
        let growth_factor = growth_base.powf(exponent);
        let amplified = baseline * growth_factor * multiplier;
        if growth_factor.is_finite() && amplified.is_finite() {
            Amplified::Value {
                growth_factor,
                amplified,
            }
        } else {
            Amplified::Log10 { log10_amplified }
        }
    };

    Ok(GrowthResult {
        baseline,
        elapsed_days,
        amplified,
    })
}

fn check_positive(field: &'static str, value: f64) -> Result<(), GrowthError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GrowthError::NonPositive { field })
    }
}
