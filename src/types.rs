//! Core types for vaigate - authority scoring and compliance gating.
//!
//! Everything that crosses the engine boundary lives here: the two raw
//! signal sets supplied per content item, the derived score result, the
//! content payload and subject context consumed by the compliance gate,
//! and the tunable configuration for scoring and gating.
//!
//! Design decisions:
//! - All boundary types are plain serde-enabled values. They are created
//!   fresh for each evaluation from caller inputs and discarded afterwards;
//!   the engine holds no state between calls.
//! - Validation is explicit and fail-fast: `validate()` runs before any
//!   scoring math and rejects the whole input on the first violation.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Per-item content-quality signals, produced by the external generation
/// step. Immutable for the duration of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentFeatureSet {
    /// Number of media items attached to the listing (photos, videos).
    pub media_count: u32,
    /// Whether the required hero photo is present.
    pub has_required_photo: bool,
    /// Whether the price is framed with deceptive or conditional language.
    pub deceptive_pricing: bool,
    /// Fraction of the copy duplicated from other items (0-1).
    pub duplication_ratio: f64,
    /// Trustworthiness factor of the content's claims (0-1).
    pub trust_factor: f64,
    /// Expertise factor of the content's voice (0-1).
    pub expertise_factor: f64,
    /// Gross profit attributable to this item, in currency units.
    pub gross_profit: f64,
    /// Share of the local competitive segment this item holds (0-1).
    pub competitive_share: f64,
}

impl ContentFeatureSet {
    /// Reject out-of-range inputs before any scoring proceeds.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_ratio("duplication_ratio", self.duplication_ratio)?;
        check_ratio("trust_factor", self.trust_factor)?;
        check_ratio("expertise_factor", self.expertise_factor)?;
        check_ratio("competitive_share", self.competitive_share)?;
        if self.gross_profit < 0.0 {
            return Err(ValidationError::NegativeGrossProfit(self.gross_profit));
        }
        Ok(())
    }
}

/// Per-item visibility signals from answer-engine citation tracking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitationMetrics {
    /// Share of tracked queries where this item captures the featured
    /// snippet (0-1).
    pub featured_snippet_share: f64,
    /// Share of AI-overview answers citing this item (0-1).
    pub ai_overview_share: f64,
    /// "People Also Ask" box ownership count. Can exceed 1.0 when the item
    /// owns several boxes for one query cluster.
    pub paa_ownership: f64,
    /// Total mentions observed across surfaces.
    pub total_mentions: u32,
    /// Mentions that could be verified against the item's actual facts.
    /// Never exceeds `total_mentions`.
    pub verifiable_mentions: u32,
    /// Short-term growth rate of citation volume, signed fraction.
    pub velocity: f64,
    /// Dampening divisor for risk amplification (>= 1.0). Known-defensible
    /// content categories are scored with a higher weight.
    pub defensive_weight: f64,
}

impl CitationMetrics {
    /// Reject out-of-range inputs before any scoring proceeds.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_ratio("featured_snippet_share", self.featured_snippet_share)?;
        check_ratio("ai_overview_share", self.ai_overview_share)?;
        if self.paa_ownership < 0.0 {
            return Err(ValidationError::RatioOutOfRange {
                field: "paa_ownership",
                value: self.paa_ownership,
            });
        }
        if self.verifiable_mentions > self.total_mentions {
            return Err(ValidationError::VerifiableExceedsTotal {
                verifiable: self.verifiable_mentions,
                total: self.total_mentions,
            });
        }
        if self.defensive_weight < 1.0 {
            return Err(ValidationError::DefensiveWeightBelowFloor(
                self.defensive_weight,
            ));
        }
        if self.velocity < -1.0 {
            return Err(ValidationError::VelocityBelowFloor(self.velocity));
        }
        Ok(())
    }
}

fn check_ratio(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ValidationError::RatioOutOfRange { field, value });
    }
    Ok(())
}

/// Derived scoring outcome for one content item. Never persisted by the
/// engine; the caller owns any storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Quality-risk multiplier after defensive damping (>= 1.0).
    pub quality_risk_multiplier: f64,
    /// Trust/hallucination-risk penalty (>= 0).
    pub trust_risk_penalty: f64,
    /// Composite visibility score after risk adjustment (0-100).
    pub visibility_score: f64,
    /// Final authority score, clamped (0-100).
    pub authority_score: f64,
    /// Fixed-band competitive position for this score.
    pub position: CompetitivePosition,
    /// Hard compliance failures counted during risk calculation.
    pub hard_failure_count: u32,
    /// Warning signals counted during risk calculation.
    pub warning_count: u32,
}

/// Three-way ordinal position against the competitive field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitivePosition {
    /// Clearly ahead of the benchmark or in the top fixed band.
    Dominant,
    /// Within striking distance of the benchmark.
    Competitive,
    /// Trailing the benchmark by more than the margin.
    Behind,
}

impl CompetitivePosition {
    pub fn label(&self) -> &'static str {
        match self {
            CompetitivePosition::Dominant => "dominant",
            CompetitivePosition::Competitive => "competitive",
            CompetitivePosition::Behind => "behind",
        }
    }
}

/// Derived content-quality bucket used in batch summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityBucket {
    Excellent,
    Good,
    NeedsImprovement,
}

impl QualityBucket {
    pub fn label(&self) -> &'static str {
        match self {
            QualityBucket::Excellent => "excellent",
            QualityBucket::Good => "good",
            QualityBucket::NeedsImprovement => "needs-improvement",
        }
    }
}

/// Mandatory downstream action attached to a selected remediation.
/// The external action queue owns execution and lifecycle; the engine only
/// names what must follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUp {
    /// The fix changes copy, so the text must be regenerated through the
    /// compliant generation path before republishing.
    RegenerateCompliantText,
    /// The fix adds or replaces media assets.
    RefreshMediaPipeline,
    /// The fix needs a named expert to re-review the claims.
    ScheduleExpertReview,
}

impl FollowUp {
    pub fn label(&self) -> &'static str {
        match self {
            FollowUp::RegenerateCompliantText => "regenerate-compliant-text",
            FollowUp::RefreshMediaPipeline => "refresh-media-pipeline",
            FollowUp::ScheduleExpertReview => "schedule-expert-review",
        }
    }
}

/// A selected remediation action with its cost-benefit estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemediationAction {
    /// Human-readable action label.
    pub label: String,
    /// What the action changes about the content.
    pub impact: String,
    /// Estimated authority-score gain fraction.
    pub estimated_gain: f64,
    /// Estimated execution cost in currency units.
    pub estimated_cost: f64,
    /// Net profit gain: gain x gross_profit - cost.
    pub net_profit: f64,
    /// One-sentence justification for the selection.
    pub justification: String,
    /// Mandatory downstream action, when the fix forces one.
    pub follow_up: Option<FollowUp>,
}

impl RemediationAction {
    /// Whether this is the "no action required" sentinel.
    pub fn is_noop(&self) -> bool {
        self.estimated_gain == 0.0 && self.estimated_cost == 0.0
    }
}

/// One outbound reference link in the content payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLink {
    pub anchor: String,
    pub target: String,
}

/// The four named text blocks plus reference links, produced by the
/// external generation step and passed by value into the gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentPayload {
    /// Direct answer block quoted by answer engines. Kept short.
    pub short_answer: String,
    /// Mid-length authority block carrying verifiable facts.
    pub authority_block: String,
    /// Long-form description.
    pub description: String,
    /// Related-questions block.
    pub faq: String,
    /// Outbound reference links.
    pub links: Vec<ReferenceLink>,
}

/// Named seller/service facts used for verifiable-fact matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerFacts {
    pub seller_name: String,
    pub locality: String,
    /// Named expert the authority block may cite.
    pub named_expert: String,
    /// Service-reference endpoint (inspection reports, service history).
    pub service_reference: String,
}

/// Read-only context for one subject. Used only for string matching in the
/// gate; never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectContext {
    /// Stable identifier for the subject (e.g. an inventory id).
    pub subject_id: String,
    /// Audience segment the content targets.
    pub audience: String,
    /// Target sentiment label for the copy.
    pub target_sentiment: String,
    pub seller: SellerFacts,
}

/// Admit/reject outcome of the compliance gate.
///
/// `can_publish` is stricter than `is_compliant`: a hard-failure phrase
/// forces `can_publish = false` even when every numeric threshold passes.
/// Findings surfaced only through the recommendation channel never block
/// publication; hard-failure findings always do, even when they are the
/// only finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceVerdict {
    /// True iff the issue list is empty.
    pub is_compliant: bool,
    /// False on any threshold breach or hard-failure phrase.
    pub can_publish: bool,
    /// Ordered issues, each naming the measured value and the limit.
    pub issues: Vec<String>,
    /// Ordered non-blocking recommendations.
    pub recommendations: Vec<String>,
    /// 100 x (1 - min(issues / 10, 1)).
    pub health_score: f64,
}

/// Configuration for the scoring pipeline.
/// All values are tunable at runtime for calibration experiments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    // Quality-risk multiplier
    /// Additive penalty per failing hard compliance check.
    pub compliance_failure_penalty: f64,
    /// Minimum media items before the media check fails.
    pub media_floor: u32,
    /// Trust factor below this is a hard compliance failure.
    pub trust_floor: f64,
    /// Weight of the deceptive-pricing warning factor.
    pub deceptive_factor_weight: f64,
    /// Weight of the duplication warning factor.
    pub duplication_factor_weight: f64,
    /// Weight of the trust-shortfall warning factor.
    pub trust_shortfall_weight: f64,

    // Warning tallies (consumed by the gate)
    /// Duplication ratio above this counts as a warning signal.
    pub duplication_warning_threshold: f64,
    /// Trust factor below this counts as a warning signal.
    pub trust_warning_threshold: f64,
    /// Trust penalty above this counts as a warning signal.
    pub penalty_warning_threshold: f64,

    // Trust/hallucination penalty
    /// Severity multiplier for unverifiable mentions. The penalty scale
    /// factor is 1 + this value.
    pub severity_multiplier: f64,

    // Composite authority score
    /// Weight of the baseline content-quality score in the final blend.
    pub baseline_weight: f64,
    /// Weight of the risk-adjusted visibility score in the final blend.
    pub visibility_weight: f64,
    /// Fraction of the trust penalty deducted from the blended score.
    pub trust_penalty_deduction: f64,
    /// Per-box coefficient of the PAA engagement factor.
    pub paa_engagement_coefficient: f64,
    /// Upper cap on the PAA engagement factor.
    pub paa_engagement_cap: f64,

    // Competitive position bands
    /// Fixed-band floor for the dominant position.
    pub dominant_band: f64,
    /// Fixed-band floor for the competitive position.
    pub competitive_band: f64,
    /// Margin for benchmark-relative classification.
    pub benchmark_margin: f64,

    // Trend analysis
    /// Average score delta within +/- this value classifies as stable.
    pub trend_epsilon: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            // Multiplier: three hard checks at 0.25 each, three
            // multiplicative warning factors
            compliance_failure_penalty: 0.25,
            media_floor: 12,
            trust_floor: 0.3,
            deceptive_factor_weight: 0.5,
            duplication_factor_weight: 0.3,
            trust_shortfall_weight: 0.2,

            // Warnings
            duplication_warning_threshold: 0.3,
            trust_warning_threshold: 0.7,
            penalty_warning_threshold: 0.15,

            // Penalty scale factor 3.0
            severity_multiplier: 2.0,

            // Authority blend 30/70, small absolute deduction for
            // unverifiable citation
            baseline_weight: 0.30,
            visibility_weight: 0.70,
            trust_penalty_deduction: 0.20,

            // Owning several PAA boxes amplifies every other surface
            paa_engagement_coefficient: 0.08,
            paa_engagement_cap: 1.40,

            // Position bands
            dominant_band: 85.0,
            competitive_band: 70.0,
            benchmark_margin: 10.0,

            // Half a point of average drift is noise
            trend_epsilon: 0.5,
        }
    }
}

/// Configurable limits for the compliance gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Maximum allowed quality-risk multiplier.
    pub max_risk_multiplier: f64,
    /// Maximum allowed trust/hallucination penalty.
    pub max_trust_penalty: f64,
    /// Minimum required authority score.
    pub min_authority_score: f64,
    /// Maximum allowed hard compliance failures.
    pub max_hard_failures: u32,
    /// Maximum allowed warning signals.
    pub max_warnings: u32,
    /// Maximum words in the short-answer block.
    pub short_answer_max_words: usize,
    /// Word-count band for the authority block.
    pub authority_min_words: usize,
    pub authority_max_words: usize,
    /// Word-count band for the long-form description.
    pub description_min_words: usize,
    pub description_max_words: usize,
    /// Minimum outbound reference links.
    pub min_reference_links: usize,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            max_risk_multiplier: 1.2,
            max_trust_penalty: 0.3,
            min_authority_score: 70.0,
            max_hard_failures: 2,
            max_warnings: 3,
            short_answer_max_words: 40,
            authority_min_words: 80,
            authority_max_words: 120,
            description_min_words: 200,
            description_max_words: 300,
            min_reference_links: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean_features() -> ContentFeatureSet {
        ContentFeatureSet {
            media_count: 20,
            has_required_photo: true,
            deceptive_pricing: false,
            duplication_ratio: 0.05,
            trust_factor: 0.95,
            expertise_factor: 0.90,
            gross_profit: 5000.0,
            competitive_share: 0.8,
        }
    }

    fn clean_metrics() -> CitationMetrics {
        CitationMetrics {
            featured_snippet_share: 0.60,
            ai_overview_share: 0.70,
            paa_ownership: 2.5,
            total_mentions: 150,
            verifiable_mentions: 140,
            velocity: 0.10,
            defensive_weight: 1.0,
        }
    }

    #[test]
    fn valid_inputs_pass_validation() {
        assert!(clean_features().validate().is_ok());
        assert!(clean_metrics().validate().is_ok());
    }

    #[test]
    fn ratio_out_of_range_is_rejected() {
        let mut features = clean_features();
        features.duplication_ratio = 1.2;
        assert_eq!(
            features.validate(),
            Err(ValidationError::RatioOutOfRange {
                field: "duplication_ratio",
                value: 1.2
            })
        );
    }

    #[test]
    fn verifiable_exceeding_total_is_rejected() {
        let mut metrics = clean_metrics();
        metrics.verifiable_mentions = 200;
        assert_eq!(
            metrics.validate(),
            Err(ValidationError::VerifiableExceedsTotal {
                verifiable: 200,
                total: 150
            })
        );
    }

    #[test]
    fn defensive_weight_below_one_is_rejected() {
        let mut metrics = clean_metrics();
        metrics.defensive_weight = 0.8;
        assert_eq!(
            metrics.validate(),
            Err(ValidationError::DefensiveWeightBelowFloor(0.8))
        );
    }

    #[test]
    fn negative_profit_is_rejected() {
        let mut features = clean_features();
        features.gross_profit = -1.0;
        assert!(features.validate().is_err());
    }

    #[test]
    fn velocity_below_negative_one_is_rejected() {
        let mut metrics = clean_metrics();
        metrics.velocity = -1.5;
        assert_eq!(
            metrics.validate(),
            Err(ValidationError::VelocityBelowFloor(-1.5))
        );
    }

    #[test]
    fn default_configs_are_consistent() {
        let scoring = ScoringConfig::default();
        assert!((scoring.baseline_weight + scoring.visibility_weight - 1.0).abs() < 1e-9);
        assert!(scoring.dominant_band > scoring.competitive_band);

        let gate = GateConfig::default();
        assert!(gate.authority_min_words < gate.authority_max_words);
        assert!(gate.description_min_words < gate.description_max_words);
    }

    #[test]
    fn position_labels_are_stable() {
        assert_eq!(CompetitivePosition::Dominant.label(), "dominant");
        assert_eq!(QualityBucket::NeedsImprovement.label(), "needs-improvement");
        assert_eq!(
            FollowUp::RegenerateCompliantText.label(),
            "regenerate-compliant-text"
        );
    }

    #[test]
    fn payload_round_trips_through_json() {
        let payload = ContentPayload {
            short_answer: "A certified wagon.".into(),
            authority_block: "Inspected twice.".into(),
            description: "Long form.".into(),
            faq: "Q: why?".into(),
            links: vec![ReferenceLink {
                anchor: "history report".into(),
                target: "https://example.com/history/1".into(),
            }],
        };
        let json = serde_json::to_string(&payload).unwrap();
        let back: ContentPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payload);
    }
}
