use thiserror::Error;

pub mod friis;
pub mod units;

/// Physically invalid input, rejected before it reaches a log or a divisor.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidInput {
    #[error("frequency must be positive, got {0} Hz")]
    NonPositiveFrequency(f64),
    #[error("distance must be positive, got {0} m")]
    NonPositiveDistance(f64),
    #[error("power must be positive, got {0} W")]
    NonPositivePower(f64),
    #[error("antennas must be at least {min_m:.1} m apart, got {separation_m:.1} m")]
    SeparationTooClose { separation_m: f64, min_m: f64 },
}
