//! Competitive position classification.
//!
//! Two variants exist on purpose and are chosen by what the call site has
//! available:
//!
//! - **Benchmark-relative**: used when a competitor benchmark score is
//!   supplied per call. Dominant means clearing the benchmark by the
//!   margin; behind means trailing it by more than the margin.
//! - **Fixed-band**: used for single-score classification with no
//!   benchmark context (85 / 70 bands by default).
//!
//! Ties at an exact boundary always favor the higher category.

use crate::types::{CompetitivePosition, ScoringConfig};

/// Classify a score against a caller-supplied competitor benchmark.
pub fn classify_against_benchmark(
    config: &ScoringConfig,
    score: f64,
    benchmark: f64,
) -> CompetitivePosition {
    let margin = config.benchmark_margin;
    if score >= benchmark + margin {
        CompetitivePosition::Dominant
    } else if score >= benchmark - margin {
        CompetitivePosition::Competitive
    } else {
        CompetitivePosition::Behind
    }
}

/// Classify a score into the fixed absolute bands.
pub fn classify_fixed_band(config: &ScoringConfig, score: f64) -> CompetitivePosition {
    if score >= config.dominant_band {
        CompetitivePosition::Dominant
    } else if score >= config.competitive_band {
        CompetitivePosition::Competitive
    } else {
        CompetitivePosition::Behind
    }
}
