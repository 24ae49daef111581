#![forbid(unsafe_code)]

/// Ordered iterate values of the contraction map, initial value included.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    pub values: Vec<f64>,
}

impl Trajectory {
    pub fn initial(&self) -> f64 {
        self.values.first().copied().unwrap_or(0.0)
    }

    pub fn final_value(&self) -> f64 {
        self.values.last().copied().unwrap_or(0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContractionError {
    InitialOutOfRange,
    RateNotContracting,
}

impl ContractionError {
    pub fn message(self) -> &'static str {
        match self {
            ContractionError::InitialOutOfRange => {
                "initial: must be a finite number in (0, 1]"
            }
            ContractionError::RateNotContracting => "k: must be a finite number greater than 1",
        }
    }
}

/// Apply `x ← 1 − (1 − x) / k` exactly `iterations` times.
///
/// For `initial ∈ (0, 1)` and `k > 1` the residual `1 − x` shrinks by a
/// factor of `1/k` per step, so the trajectory is strictly increasing and
/// converges geometrically to the fixed point 1.
pub fn iterate(initial: f64, iterations: usize, k: f64) -> Result<Trajectory, ContractionError> {
    if !initial.is_finite() || initial <= 0.0 || initial > 1.0 {
        return Err(ContractionError::InitialOutOfRange);
    }
    if !k.is_finite() || k <= 1.0 {
        return Err(ContractionError::RateNotContracting);
    }

    let mut values = Vec::with_capacity(iterations + 1);
    let mut x = initial;
    values.push(x);
    for _ in 0..iterations {
        x = 1.0 - (1.0 - x) / k;
        values.push(x);
    }

    Ok(Trajectory { values })
}
