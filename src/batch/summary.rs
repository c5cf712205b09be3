//! Batch summary aggregation and the report status classifier.
//!
//! The summary is a deterministic fold over independently-computed item
//! outcomes. Counts and the mean are order-independent; the top
//! recommendations break frequency ties by first appearance.

use serde::{Deserialize, Serialize};

use crate::batch::ItemOutcome;
use crate::types::{CompetitivePosition, QualityBucket};

/// Recommendations reported in the summary's deduplicated top list.
const TOP_RECOMMENDATION_LIMIT: usize = 5;

/// Distribution of competitive positions across a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionCounts {
    pub dominant: usize,
    pub competitive: usize,
    pub behind: usize,
}

/// Distribution of derived quality buckets across a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketCounts {
    pub excellent: usize,
    pub good: usize,
    pub needs_improvement: usize,
}

/// One deduplicated recommendation with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationCount {
    pub text: String,
    pub count: usize,
}

/// Aggregated view of one batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub compliant: usize,
    pub publishable: usize,
    /// Items blocked from publication, including failed entries.
    pub needs_review: usize,
    /// Mean authority score over successfully scored items only.
    pub mean_authority: f64,
    pub positions: PositionCounts,
    pub buckets: BucketCounts,
    /// Most frequent recommendations, count descending then first-seen.
    pub top_recommendations: Vec<RecommendationCount>,
    /// Labels of every positive-net remediation selected in the batch,
    /// deduplicated, in first-seen order.
    pub priority_actions: Vec<String>,
}

/// Fold per-item outcomes into a batch summary.
pub fn summarize(outcomes: &[ItemOutcome]) -> BatchSummary {
    let total = outcomes.len();
    let compliant = outcomes
        .iter()
        .filter(|outcome| outcome.verdict.is_compliant)
        .count();
    let publishable = outcomes
        .iter()
        .filter(|outcome| outcome.verdict.can_publish)
        .count();

    let scores: Vec<f64> = outcomes
        .iter()
        .filter_map(|outcome| outcome.score.as_ref())
        .map(|score| score.authority_score)
        .collect();

    let mut positions = PositionCounts::default();
    for outcome in outcomes {
        if let Some(score) = &outcome.score {
            match score.position {
                CompetitivePosition::Dominant => positions.dominant += 1,
                CompetitivePosition::Competitive => positions.competitive += 1,
                CompetitivePosition::Behind => positions.behind += 1,
            }
        }
    }

    let mut buckets = BucketCounts::default();
    for outcome in outcomes {
        match outcome.quality_bucket {
            QualityBucket::Excellent => buckets.excellent += 1,
            QualityBucket::Good => buckets.good += 1,
            QualityBucket::NeedsImprovement => buckets.needs_improvement += 1,
        }
    }

    BatchSummary {
        total,
        compliant,
        publishable,
        needs_review: total - publishable,
        mean_authority: mean(&scores),
        positions,
        buckets,
        top_recommendations: top_recommendations(outcomes),
        priority_actions: priority_actions(outcomes),
    }
}

/// Count recommendations preserving first-seen order, then rank by
/// frequency. The sort is stable, so ties keep first-seen order.
fn top_recommendations(outcomes: &[ItemOutcome]) -> Vec<RecommendationCount> {
    let mut counts: Vec<RecommendationCount> = Vec::new();
    for outcome in outcomes {
        for text in &outcome.verdict.recommendations {
            match counts.iter_mut().find(|entry| &entry.text == text) {
                Some(entry) => entry.count += 1,
                None => counts.push(RecommendationCount {
                    text: text.clone(),
                    count: 1,
                }),
            }
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(TOP_RECOMMENDATION_LIMIT);
    counts
}

/// Union of positive-net remediation labels, first-seen order.
fn priority_actions(outcomes: &[ItemOutcome]) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for outcome in outcomes {
        if let Some(action) = &outcome.remediation {
            if action.net_profit > 0.0 && !labels.contains(&action.label) {
                labels.push(action.label.clone());
            }
        }
    }
    labels
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Overall batch health, coarsest first-match classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Healthy,
    Warning,
    Critical,
}

impl ReportStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Healthy => "healthy",
            ReportStatus::Warning => "warning",
            ReportStatus::Critical => "critical",
        }
    }
}

/// Status report produced from a batch summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    pub status: ReportStatus,
    pub message: String,
    /// Priority remediation labels carried over from the summary.
    pub actions: Vec<String>,
}

/// Classify overall batch health from compliance and publish rates.
///
/// Checks run healthy -> warning -> critical; the first match wins. An
/// empty batch has nothing failing and reads as healthy.
pub fn report(summary: &BatchSummary) -> StatusReport {
    let (compliance_rate, publish_rate) = if summary.total == 0 {
        (1.0, 1.0)
    } else {
        (
            summary.compliant as f64 / summary.total as f64,
            summary.publishable as f64 / summary.total as f64,
        )
    };

    let status = if compliance_rate >= 0.90 && publish_rate >= 0.95 {
        ReportStatus::Healthy
    } else if compliance_rate >= 0.70 && publish_rate >= 0.80 {
        ReportStatus::Warning
    } else {
        ReportStatus::Critical
    };

    let message = format!(
        "{} of {} items compliant, {} publishable, mean authority {:.1}",
        summary.compliant, summary.total, summary.publishable, summary.mean_authority
    );

    StatusReport {
        status,
        message,
        actions: summary.priority_actions.clone(),
    }
}
