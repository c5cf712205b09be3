//! Risk multiplier calculation for vaigate.
//!
//! Two independent risk signals are derived from the raw feature counts:
//!
//! - **Quality-risk multiplier** (PIQR): degrades the visibility score.
//!   Hard compliance failures add a flat penalty each; warning signals
//!   stack multiplicatively on top:
//!   ```text
//!   raw = (1 + 0.25 x failures) x deceptive x duplication x trust_shortfall
//!   ```
//!   The caller-supplied defensive weight dampens amplification above the
//!   1.0 baseline, so known-defensible categories are not over-penalized:
//!   ```text
//!   effective = 1 + (raw - 1) / defensive_weight
//!   ```
//!   Guarantees: effective >= 1.0 always, monotonically non-decreasing in
//!   every risk input.
//!
//! - **Trust/hallucination penalty** (HRP): the unverifiable fraction of
//!   mentions scaled by a severity factor. Zero total mentions is a defined
//!   zero-penalty case - absence of citable content is not risk by itself,
//!   only unverifiable citation is.

use crate::types::{CitationMetrics, ContentFeatureSet, ScoringConfig};

/// Derived risk signals for one content item.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskProfile {
    /// Quality-risk multiplier before defensive damping.
    pub raw_multiplier: f64,
    /// Quality-risk multiplier after defensive damping (>= 1.0).
    pub multiplier: f64,
    /// Trust/hallucination-risk penalty (>= 0).
    pub trust_penalty: f64,
    /// Failing hard compliance checks (0-3).
    pub hard_failures: u32,
    /// Active warning signals.
    pub warnings: u32,
}

/// Calculator for quality-risk and trust-risk signals.
///
/// Holds the scoring configuration by value; all methods are pure
/// functions of their inputs.
pub struct RiskCalculator {
    config: ScoringConfig,
}

impl RiskCalculator {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Compute the full risk profile for one item.
    pub fn assess(&self, features: &ContentFeatureSet, metrics: &CitationMetrics) -> RiskProfile {
        let raw = self.quality_multiplier(features);
        let multiplier = dampen(raw, metrics.defensive_weight);
        let trust_penalty = self.hallucination_penalty(metrics);
        RiskProfile {
            raw_multiplier: raw,
            multiplier,
            trust_penalty,
            hard_failures: self.hard_failure_count(features),
            warnings: self.warning_count(features, trust_penalty),
        }
    }

    /// Quality-risk multiplier before defensive damping.
    ///
    /// Starts at 1.0, adds a flat penalty per failing hard check, then
    /// stacks the three warning factors multiplicatively.
    pub fn quality_multiplier(&self, features: &ContentFeatureSet) -> f64 {
        let failure_sum =
            self.config.compliance_failure_penalty * f64::from(self.hard_failure_count(features));

        let deceptive = 1.0
            + self.config.deceptive_factor_weight * f64::from(u8::from(features.deceptive_pricing));
        let duplication =
            1.0 + self.config.duplication_factor_weight * features.duplication_ratio;
        let trust_shortfall =
            1.0 + self.config.trust_shortfall_weight * (1.0 - features.trust_factor);

        (1.0 + failure_sum) * deceptive * duplication * trust_shortfall
    }

    /// Count failing hard compliance checks: media below the floor, zero
    /// attributable profit, trust below the floor.
    pub fn hard_failure_count(&self, features: &ContentFeatureSet) -> u32 {
        let mut count = 0;
        if features.media_count < self.config.media_floor {
            count += 1;
        }
        if features.gross_profit == 0.0 {
            count += 1;
        }
        if features.trust_factor < self.config.trust_floor {
            count += 1;
        }
        count
    }

    /// Count active warning signals. These do not block scoring on their
    /// own; the compliance gate limits how many are tolerable.
    pub fn warning_count(&self, features: &ContentFeatureSet, trust_penalty: f64) -> u32 {
        let mut count = 0;
        if features.deceptive_pricing {
            count += 1;
        }
        if features.duplication_ratio > self.config.duplication_warning_threshold {
            count += 1;
        }
        if features.trust_factor < self.config.trust_warning_threshold {
            count += 1;
        }
        if trust_penalty > self.config.penalty_warning_threshold {
            count += 1;
        }
        count
    }

    /// Trust/hallucination-risk penalty.
    ///
    /// ```text
    /// penalty = (total - verifiable) / total x (1 + severity)
    /// ```
    ///
    /// Defined as exactly 0 when no mentions exist.
    pub fn hallucination_penalty(&self, metrics: &CitationMetrics) -> f64 {
        if metrics.total_mentions == 0 {
            return 0.0;
        }
        let unverifiable =
            f64::from(metrics.total_mentions - metrics.verifiable_mentions);
        unverifiable / f64::from(metrics.total_mentions) * (1.0 + self.config.severity_multiplier)
    }
}

/// Dampen amplification above the 1.0 baseline by the defensive weight.
/// A weight of 1.0 leaves the multiplier untouched.
fn dampen(raw: f64, defensive_weight: f64) -> f64 {
    1.0 + (raw - 1.0) / defensive_weight
}
