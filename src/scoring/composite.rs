//! Composite visibility and authority score calculation.
//!
//! The pipeline from raw citation shares to the final authority score:
//!
//! ```text
//! per-surface blend -> weighted sum -> PAA engagement factor
//!     -> / quality-risk multiplier          (risk discounts visibility)
//!     -> 0.30 baseline + 0.70 visibility    (authority blend)
//!     -> x (1 + velocity)                   (short-term trend)
//!     -> - trust_penalty x 0.20             (unverifiable citation)
//!     -> x 100, clamp [0, 100]
//! ```
//!
//! Risk only ever discounts visibility, never the reverse: the multiplier
//! divides the weighted visibility sum before it enters the blend.

use crate::scoring::risk::RiskProfile;
use crate::types::{CitationMetrics, ContentFeatureSet, ScoringConfig};

/// Tracked AI-search surfaces with fixed relative importance weights.
///
/// Weights sum to 1.0. Each surface derives its visibility estimate from a
/// deterministic blend of the featured-snippet and AI-overview shares; a
/// conversational surface leans on the AI-overview share, a classic web
/// surface averages both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    GoogleSearch,
    AiOverview,
    Perplexity,
    Copilot,
}

impl Surface {
    /// All tracked surfaces in weighting order.
    pub const ALL: [Surface; 4] = [
        Surface::GoogleSearch,
        Surface::AiOverview,
        Surface::Perplexity,
        Surface::Copilot,
    ];

    /// Relative platform-importance weight. Weights sum to 1.0.
    pub fn weight(&self) -> f64 {
        match self {
            Surface::GoogleSearch => 0.30,
            Surface::AiOverview => 0.30,
            Surface::Perplexity => 0.25,
            Surface::Copilot => 0.15,
        }
    }

    /// Per-surface visibility estimate from the two citation shares.
    pub fn visibility(&self, featured_snippet: f64, ai_overview: f64) -> f64 {
        match self {
            Surface::GoogleSearch => (featured_snippet + ai_overview) / 2.0,
            Surface::AiOverview => ai_overview,
            Surface::Perplexity => 0.7 * ai_overview + 0.3 * featured_snippet,
            Surface::Copilot => 0.6 * featured_snippet + 0.4 * ai_overview,
        }
    }
}

/// Calculator for the composite visibility and final authority score.
pub struct CompositeScorer {
    config: ScoringConfig,
}

impl CompositeScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Weighted visibility across all surfaces, on the unit scale, with
    /// the PAA engagement factor applied. Not yet risk-adjusted.
    pub fn weighted_visibility(&self, metrics: &CitationMetrics) -> f64 {
        let blended: f64 = Surface::ALL
            .iter()
            .map(|surface| {
                surface.weight()
                    * surface.visibility(metrics.featured_snippet_share, metrics.ai_overview_share)
            })
            .sum();

        blended * self.paa_engagement(metrics.paa_ownership)
    }

    /// Owning several "People Also Ask" boxes amplifies presence on every
    /// other surface. Capped so box farming cannot dominate the score.
    fn paa_engagement(&self, paa_ownership: f64) -> f64 {
        (1.0 + self.config.paa_engagement_coefficient * paa_ownership)
            .min(self.config.paa_engagement_cap)
    }

    /// Baseline content-quality score on the unit scale, derived from the
    /// E-E-A-T features of the item itself.
    pub fn baseline_quality(&self, features: &ContentFeatureSet) -> f64 {
        let media_ratio =
            (f64::from(features.media_count) / f64::from(self.config.media_floor)).min(1.0);
        0.4 * features.trust_factor
            + 0.4 * features.expertise_factor
            + 0.1 * media_ratio
            + 0.1 * (1.0 - features.duplication_ratio)
    }

    /// Risk-adjusted visibility score on the 0-100 scale.
    pub fn visibility_score(&self, metrics: &CitationMetrics, risk: &RiskProfile) -> f64 {
        (self.weighted_visibility(metrics) / risk.multiplier * 100.0).clamp(0.0, 100.0)
    }

    /// Final authority score on the 0-100 scale, clamped.
    pub fn authority_score(
        &self,
        features: &ContentFeatureSet,
        metrics: &CitationMetrics,
        risk: &RiskProfile,
    ) -> f64 {
        let visibility = self.weighted_visibility(metrics) / risk.multiplier;
        let raw = self.config.baseline_weight * self.baseline_quality(features)
            + self.config.visibility_weight * visibility;

        let with_trend = raw * (1.0 + metrics.velocity);
        let deducted = with_trend - risk.trust_penalty * self.config.trust_penalty_deduction;

        (deducted * 100.0).clamp(0.0, 100.0)
    }
}
