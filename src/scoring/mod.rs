//! Scoring pipeline - from raw signals to an authority score.
//!
//! The pipeline combines:
//! - Quality-risk multiplier and trust penalty from the feature counts
//! - Per-surface visibility blending with fixed platform weights
//! - Risk-adjusted composite authority score with a velocity factor
//! - Fixed-band competitive position classification

mod composite;
mod position;
mod risk;

pub use composite::{CompositeScorer, Surface};
pub use position::{classify_against_benchmark, classify_fixed_band};
pub use risk::{RiskCalculator, RiskProfile};

use crate::error::ValidationError;
use crate::types::{CitationMetrics, ContentFeatureSet, ScoreResult, ScoringConfig};

/// Score one content item.
///
/// Validates both inputs up front (fail fast, no partial result), then
/// runs risk calculation, composite scoring, and fixed-band position
/// classification. The fixed-band variant is used here because no
/// competitor benchmark exists at this boundary; callers holding one
/// should reclassify with [`classify_against_benchmark`].
pub fn evaluate(
    config: &ScoringConfig,
    features: &ContentFeatureSet,
    metrics: &CitationMetrics,
) -> Result<ScoreResult, ValidationError> {
    features.validate()?;
    metrics.validate()?;

    let risk = RiskCalculator::new(config.clone()).assess(features, metrics);
    let scorer = CompositeScorer::new(config.clone());
    let visibility_score = scorer.visibility_score(metrics, &risk);
    let authority_score = scorer.authority_score(features, metrics, &risk);

    Ok(ScoreResult {
        quality_risk_multiplier: risk.multiplier,
        trust_risk_penalty: risk.trust_penalty,
        visibility_score,
        authority_score,
        position: classify_fixed_band(config, authority_score),
        hard_failure_count: risk.hard_failures,
        warning_count: risk.warnings,
    })
}
