#![forbid(unsafe_code)]

//! Tuning constants for the bridge formulas.
//!
//! These values carry no semantics beyond their numeric role: they are the
//! documented defaults the tool surface exposes, collected in one place so
//! that the formulas in the sibling modules stay free of magic numbers.

/// The four-symbol alphabet every sequence is drawn from, in digest order.
pub const ALPHABET: [char; 4] = ['A', 'B', 'C', 'D'];

/// Default symbol-sequence length.
pub const SEQUENCE_LENGTH: usize = 144;

/// Lower bound of the remapped coherence score.
pub const COHERENCE_FLOOR: f64 = 0.777;

/// Default window partition used by the bridge builder. Sums to
/// [`SEQUENCE_LENGTH`], so the default path never truncates.
pub const WINDOWS: [usize; 4] = [12, 24, 36, 72];

/// Default growth baseline R₀.
pub const BASELINE: f64 = 144_000.0;

/// Default growth base k (the golden ratio).
pub const GROWTH_BASE: f64 = 1.618_033_988_749_895;

/// Default characteristic time τ, in days.
pub const CHARACTERISTIC_DAYS: f64 = 144.0;

/// Default growth multiplier M.
pub const MULTIPLIER: f64 = 3.0;

/// Default epoch anchor for auto-elapsed growth evaluation.
pub const EPOCH: time::OffsetDateTime = time::macros::datetime!(2024-12-21 00:00 UTC);

/// The same anchor as [`EPOCH`], as shown in tool documentation.
pub const EPOCH_RFC3339: &str = "2024-12-21T00:00:00Z";

/// Default seed for the bridge builder.
pub const SEED: &str = "prime-resonance";

/// Hard cap on convergence trace samples, regardless of interval length.
pub const TRACE_MAX_SAMPLES: usize = 366;
