//! Batch evaluation - the engine applied over collections.
//!
//! Every item is evaluated independently (validation, scoring, gating,
//! remediation selection - no cross-item state), so the map runs on the
//! rayon thread pool. The fold into a summary is sequential and
//! deterministic. A single item's validation failure never aborts the
//! batch: it becomes a failed entry whose verdict carries the validation
//! error as its issue, counted as non-compliant and non-publishable.

mod summary;
mod trend;

pub use summary::{
    report, summarize, BatchSummary, BucketCounts, PositionCounts, RecommendationCount,
    ReportStatus, StatusReport,
};
pub use trend::{Trend, TrendAnalysis, TrendAnalyzer};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::gate::ComplianceGate;
use crate::remediation::ActionSelector;
use crate::scoring::{classify_against_benchmark, evaluate};
use crate::types::{
    CitationMetrics, CompetitivePosition, ComplianceVerdict, ContentFeatureSet, ContentPayload,
    GateConfig, QualityBucket, RemediationAction, ScoreResult, ScoringConfig, SubjectContext,
};

/// One unit of batch work: everything the engine needs for one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationItem {
    pub features: ContentFeatureSet,
    pub metrics: CitationMetrics,
    pub payload: ContentPayload,
    pub context: SubjectContext,
    /// Competitor benchmark score, when the caller has one.
    pub benchmark: Option<f64>,
}

/// Per-item result of a batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemOutcome {
    pub subject_id: String,
    /// Absent when input validation rejected the item.
    pub score: Option<ScoreResult>,
    pub verdict: ComplianceVerdict,
    /// Absent when input validation rejected the item.
    pub remediation: Option<RemediationAction>,
    /// Benchmark-relative position, when a benchmark was supplied.
    pub benchmark_position: Option<CompetitivePosition>,
    pub quality_bucket: QualityBucket,
    /// The validation error for failed entries.
    pub error: Option<String>,
}

/// Full result of one batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub results: Vec<ItemOutcome>,
    pub summary: BatchSummary,
}

/// Batch runner. Holds the scoring and gate configuration; each run is a
/// parallel map over the items followed by a sequential fold.
pub struct BatchEvaluator {
    scoring: ScoringConfig,
    gate: ComplianceGate,
    selector: ActionSelector,
}

impl BatchEvaluator {
    pub fn new(scoring: ScoringConfig, gate_config: GateConfig) -> Self {
        Self {
            gate: ComplianceGate::new(gate_config),
            selector: ActionSelector::new(scoring.clone()),
            scoring,
        }
    }

    /// Evaluate every item and fold the outcomes into a summary.
    pub fn run(&self, items: &[EvaluationItem]) -> BatchOutcome {
        let results: Vec<ItemOutcome> = items
            .par_iter()
            .map(|item| self.evaluate_item(item))
            .collect();
        let summary = summarize(&results);
        BatchOutcome { results, summary }
    }

    fn evaluate_item(&self, item: &EvaluationItem) -> ItemOutcome {
        match evaluate(&self.scoring, &item.features, &item.metrics) {
            Ok(score) => {
                let verdict = self.gate.assess(&item.payload, &item.context, &score);
                let remediation = self
                    .selector
                    .select(&item.features, item.features.gross_profit);
                let benchmark_position = item.benchmark.map(|benchmark| {
                    classify_against_benchmark(&self.scoring, score.authority_score, benchmark)
                });
                let quality_bucket = self.bucket_for(&score, &verdict);

                ItemOutcome {
                    subject_id: item.context.subject_id.clone(),
                    score: Some(score),
                    verdict,
                    remediation: Some(remediation),
                    benchmark_position,
                    quality_bucket,
                    error: None,
                }
            }
            Err(error) => ItemOutcome {
                subject_id: item.context.subject_id.clone(),
                score: None,
                verdict: ComplianceVerdict {
                    is_compliant: false,
                    can_publish: false,
                    issues: vec![format!("input validation failed: {error}")],
                    recommendations: Vec::new(),
                    // One issue against the ten considered.
                    health_score: 90.0,
                },
                remediation: None,
                benchmark_position: None,
                quality_bucket: QualityBucket::NeedsImprovement,
                error: Some(error.to_string()),
            },
        }
    }

    /// Derive the summary quality bucket from score and verdict.
    fn bucket_for(&self, score: &ScoreResult, verdict: &ComplianceVerdict) -> QualityBucket {
        if verdict.is_compliant && score.authority_score >= self.scoring.dominant_band {
            QualityBucket::Excellent
        } else if verdict.can_publish && score.authority_score >= self.scoring.competitive_band {
            QualityBucket::Good
        } else {
            QualityBucket::NeedsImprovement
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ReferenceLink, SellerFacts};

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    fn strong_item(subject_id: &str) -> EvaluationItem {
        EvaluationItem {
            features: ContentFeatureSet {
                media_count: 20,
                has_required_photo: true,
                deceptive_pricing: false,
                duplication_ratio: 0.05,
                trust_factor: 0.95,
                expertise_factor: 0.90,
                gross_profit: 5000.0,
                competitive_share: 0.8,
            },
            metrics: CitationMetrics {
                featured_snippet_share: 0.60,
                ai_overview_share: 0.70,
                paa_ownership: 2.5,
                total_mentions: 150,
                verifiable_mentions: 140,
                velocity: 0.10,
                defensive_weight: 1.0,
            },
            payload: ContentPayload {
                short_answer: words(30),
                authority_block: format!("{} inspected by our shop", words(95)),
                description: words(250),
                faq: "Q: Is it available? A: Yes.".into(),
                links: vec![
                    ReferenceLink {
                        anchor: "history".into(),
                        target: "https://example.com/history".into(),
                    },
                    ReferenceLink {
                        anchor: "specs".into(),
                        target: "https://example.com/specs".into(),
                    },
                    ReferenceLink {
                        anchor: "recalls".into(),
                        target: "https://example.com/recalls".into(),
                    },
                ],
            },
            context: SubjectContext {
                subject_id: subject_id.into(),
                audience: "family-buyers".into(),
                target_sentiment: "reassuring".into(),
                seller: SellerFacts {
                    seller_name: "Northgate Motors".into(),
                    locality: "Tacoma".into(),
                    named_expert: "Dana Reyes".into(),
                    service_reference: "northgate.example/service".into(),
                },
            },
            benchmark: None,
        }
    }

    fn invalid_item(subject_id: &str) -> EvaluationItem {
        let mut item = strong_item(subject_id);
        item.metrics.verifiable_mentions = item.metrics.total_mentions + 10;
        item
    }

    fn evaluator() -> BatchEvaluator {
        BatchEvaluator::new(ScoringConfig::default(), GateConfig::default())
    }

    #[test]
    fn strong_batch_is_fully_publishable() {
        let items = vec![strong_item("a"), strong_item("b")];
        let outcome = evaluator().run(&items);

        assert_eq!(outcome.summary.total, 2);
        assert_eq!(outcome.summary.compliant, 2);
        assert_eq!(outcome.summary.publishable, 2);
        assert_eq!(outcome.summary.needs_review, 0);
        assert_eq!(outcome.summary.positions.dominant, 2);
        assert_eq!(outcome.summary.buckets.excellent, 2);
        assert!(outcome.summary.mean_authority > 80.0);
    }

    #[test]
    fn results_keep_input_order() {
        let items = vec![strong_item("first"), strong_item("second"), strong_item("third")];
        let outcome = evaluator().run(&items);
        let ids: Vec<&str> = outcome
            .results
            .iter()
            .map(|result| result.subject_id.as_str())
            .collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn failed_item_is_isolated_and_counted() {
        let items = vec![strong_item("a"), invalid_item("bad"), strong_item("c")];
        let outcome = evaluator().run(&items);

        assert_eq!(outcome.summary.total, 3);
        assert_eq!(outcome.summary.compliant, 2);
        assert_eq!(outcome.summary.publishable, 2);
        assert_eq!(outcome.summary.needs_review, 1);

        let failed = &outcome.results[1];
        assert_eq!(failed.subject_id, "bad");
        assert!(!failed.verdict.can_publish);
        assert!(failed.score.is_none());
        assert!(failed.verdict.issues[0].contains("input validation failed"));
        assert!(failed.error.is_some());

        // Score-based aggregates cover only the two valid items.
        let valid_mean = (outcome.results[0].score.as_ref().unwrap().authority_score
            + outcome.results[2].score.as_ref().unwrap().authority_score)
            / 2.0;
        assert!((outcome.summary.mean_authority - valid_mean).abs() < 1e-9);
        assert_eq!(
            outcome.summary.positions.dominant + outcome.summary.positions.competitive
                + outcome.summary.positions.behind,
            2
        );
    }

    #[test]
    fn summary_counts_are_order_independent() {
        let items = vec![strong_item("a"), invalid_item("bad"), strong_item("c")];
        let forward = evaluator().run(&items);

        let mut reversed_items = items;
        reversed_items.reverse();
        let reversed = evaluator().run(&reversed_items);

        assert_eq!(forward.summary.total, reversed.summary.total);
        assert_eq!(forward.summary.compliant, reversed.summary.compliant);
        assert_eq!(forward.summary.publishable, reversed.summary.publishable);
        assert_eq!(forward.summary.positions, reversed.summary.positions);
        assert_eq!(forward.summary.buckets, reversed.summary.buckets);
        assert!(
            (forward.summary.mean_authority - reversed.summary.mean_authority).abs() < 1e-9
        );
    }

    #[test]
    fn benchmark_positions_are_classified_when_supplied() {
        let mut item = strong_item("a");
        item.benchmark = Some(70.0);
        let outcome = evaluator().run(&[item]);

        assert_eq!(
            outcome.results[0].benchmark_position,
            Some(CompetitivePosition::Dominant)
        );
    }

    #[test]
    fn degraded_items_surface_priority_actions() {
        let mut item = strong_item("a");
        item.features.deceptive_pricing = true;
        item.features.trust_factor = 0.3;

        let outcome = evaluator().run(&[item]);
        assert!(!outcome.summary.priority_actions.is_empty());
        let report = report(&outcome.summary);
        assert_eq!(report.actions, outcome.summary.priority_actions);
    }

    #[test]
    fn recommendations_are_deduplicated_with_counts() {
        let mut first = strong_item("a");
        first.payload.authority_block = words(95); // no fact marker
        let mut second = strong_item("b");
        second.payload.authority_block = words(95);

        let outcome = evaluator().run(&[first, second]);
        assert_eq!(outcome.summary.top_recommendations.len(), 1);
        assert_eq!(outcome.summary.top_recommendations[0].count, 2);
    }
}
