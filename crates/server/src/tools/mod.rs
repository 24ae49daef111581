#![forbid(unsafe_code)]

pub(crate) mod bridge;
pub(crate) mod contraction;
pub(crate) mod convergence;
pub(crate) mod growth;
pub(crate) mod score;
pub(crate) mod sequence;

/// Upper bound on requested sequence length. Keeps per-request hashing cost
/// bounded; the default of 144 is nowhere near it.
pub(crate) const MAX_SEQUENCE_LENGTH: usize = 100_000;

/// Upper bound on contraction iterations; the map converges to within f64
/// resolution in well under a hundred steps for any k > 1 + 1e-3.
pub(crate) const MAX_ITERATIONS: usize = 100_000;
