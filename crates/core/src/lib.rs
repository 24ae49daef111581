#![forbid(unsafe_code)]

pub mod bridge;
pub mod clock;
pub mod contraction;
pub mod convergence;
pub mod defaults;
pub mod growth;
pub mod scorer;
pub mod sequence;
