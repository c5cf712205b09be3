//! Input validation errors.
//!
//! Validation happens once, synchronously, before any scoring math runs.
//! A rejected input produces no partial result. Defined-result cases
//! (zero total mentions, empty remediation candidate set) are *not* errors
//! and never appear here.

use thiserror::Error;

/// Rejection reasons for caller-supplied feature and citation inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A share or ratio field fell outside the unit interval.
    #[error("{field} must be within [0, 1], got {value}")]
    RatioOutOfRange { field: &'static str, value: f64 },

    /// Verifiable mentions can never exceed the total mention count.
    #[error("verifiable mentions ({verifiable}) exceed total mentions ({total})")]
    VerifiableExceedsTotal { verifiable: u32, total: u32 },

    /// The defensive weight is a dampening divisor and must be at least 1.0.
    #[error("defensive weight must be at least 1.0, got {0}")]
    DefensiveWeightBelowFloor(f64),

    /// Attributable gross profit is a currency amount, never negative.
    #[error("gross profit must be non-negative, got {0}")]
    NegativeGrossProfit(f64),

    /// Velocity is a signed growth fraction; below -1.0 the growth factor
    /// would flip the score's sign.
    #[error("velocity must be at least -1.0, got {0}")]
    VelocityBelowFloor(f64),
}
