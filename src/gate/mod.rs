//! Compliance gate - the publish/block decision.
//!
//! Two independent dimensions are validated and merged:
//! - numeric threshold checks on the score result (thresholds.rs)
//! - structural/textual checks on the content payload (structure.rs)
//!
//! plus the deceptive-phrase scan (phrases.rs), whose findings are hard
//! failures: never waivable, and they force `can_publish = false` on
//! their own even when every numeric threshold passes. Recommendations
//! (soft findings) never block publication - that asymmetry is the
//! contract documented on [`ComplianceVerdict`].
//!
//! Every gate invocation emits one structured audit event through
//! `tracing` (target "audit"). The emission is fire-and-forget: it can
//! never fail or delay the returned verdict.

mod phrases;
mod structure;
mod thresholds;

pub use phrases::{scan as scan_phrases, DECEPTIVE_PHRASES};
pub use structure::StructuralFindings;

use tracing::info;

use crate::types::{ComplianceVerdict, ContentPayload, GateConfig, ScoreResult, SubjectContext};

/// Issues beyond this count no longer lower the health score.
const MAX_CONSIDERED_ISSUES: usize = 10;

/// The compliance gate. Holds only configuration; every assessment is a
/// pure function of its inputs plus one audit log emission.
pub struct ComplianceGate {
    config: GateConfig,
}

impl ComplianceGate {
    pub fn new(config: GateConfig) -> Self {
        Self { config }
    }

    /// Assess one content item and produce the publish/block verdict.
    pub fn assess(
        &self,
        payload: &ContentPayload,
        context: &SubjectContext,
        score: &ScoreResult,
    ) -> ComplianceVerdict {
        let mut issues = thresholds::check(&self.config, score);

        let structural = structure::check(&self.config, payload, context);
        issues.extend(structural.issues);

        let phrase_hits = phrases::scan(&combined_text(payload));
        let hard_failure = !phrase_hits.is_empty();
        for phrase in &phrase_hits {
            issues.push(format!(
                "deceptive phrase \"{}\" is never publishable",
                phrase
            ));
        }

        let is_compliant = issues.is_empty();
        // Hard failures block on their own; everything else blocks through
        // the issue list.
        let can_publish = is_compliant && !hard_failure;

        let verdict = ComplianceVerdict {
            is_compliant,
            can_publish,
            health_score: health_score(issues.len()),
            issues,
            recommendations: structural.recommendations,
        };

        info!(
            target: "audit",
            subject = %context.subject_id,
            audience = %context.audience,
            compliant = verdict.is_compliant,
            can_publish = verdict.can_publish,
            issues = verdict.issues.len(),
            health = verdict.health_score,
            "compliance gate decision"
        );

        verdict
    }
}

/// 100 x (1 - min(issues / 10, 1)).
fn health_score(issue_count: usize) -> f64 {
    let ratio = (issue_count as f64 / MAX_CONSIDERED_ISSUES as f64).min(1.0);
    100.0 * (1.0 - ratio)
}

fn combined_text(payload: &ContentPayload) -> String {
    let mut text = String::with_capacity(
        payload.short_answer.len()
            + payload.authority_block.len()
            + payload.description.len()
            + payload.faq.len()
            + 4,
    );
    text.push_str(&payload.short_answer);
    text.push('\n');
    text.push_str(&payload.authority_block);
    text.push('\n');
    text.push_str(&payload.description);
    text.push('\n');
    text.push_str(&payload.faq);
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CompetitivePosition, ReferenceLink, SellerFacts};

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    fn passing_score() -> ScoreResult {
        ScoreResult {
            quality_risk_multiplier: 1.05,
            trust_risk_penalty: 0.1,
            visibility_score: 80.0,
            authority_score: 85.0,
            position: CompetitivePosition::Dominant,
            hard_failure_count: 0,
            warning_count: 1,
        }
    }

    fn context() -> SubjectContext {
        SubjectContext {
            subject_id: "veh-2041".into(),
            audience: "family-buyers".into(),
            target_sentiment: "reassuring".into(),
            seller: SellerFacts {
                seller_name: "Northgate Motors".into(),
                locality: "Tacoma".into(),
                named_expert: "Dana Reyes".into(),
                service_reference: "northgate.example/service/veh-2041".into(),
            },
        }
    }

    fn clean_payload() -> ContentPayload {
        ContentPayload {
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
        }
    }

    fn gate() -> ComplianceGate {
        ComplianceGate::new(GateConfig::default())
    }

    #[test]
    fn clean_item_is_compliant_and_publishable() {
        let verdict = gate().assess(&clean_payload(), &context(), &passing_score());
        assert!(verdict.is_compliant);
        assert!(verdict.can_publish);
        assert!(verdict.issues.is_empty());
        assert_eq!(verdict.health_score, 100.0);
    }

    #[test]
    fn deceptive_phrase_blocks_even_with_perfect_thresholds() {
        let mut payload = clean_payload();
        payload.description = format!("{} subject to credit approval", words(247));

        let verdict = gate().assess(&payload, &context(), &passing_score());
        assert!(!verdict.can_publish);
        assert!(!verdict.is_compliant);
        assert!(verdict
            .issues
            .iter()
            .any(|issue| issue.contains("subject to credit approval")));
    }

    #[test]
    fn overlong_short_answer_plus_phrase_reports_both() {
        let mut payload = clean_payload();
        payload.short_answer = words(45);
        payload.faq = "Q: Financing? A: subject to credit approval.".into();

        let verdict = gate().assess(&payload, &context(), &passing_score());
        assert!(!verdict.can_publish);
        assert!(verdict.issues.iter().any(|issue| issue.contains("45 words")));
        assert!(verdict
            .issues
            .iter()
            .any(|issue| issue.contains("subject to credit approval")));
    }

    #[test]
    fn threshold_breach_blocks_publication() {
        let mut score = passing_score();
        score.authority_score = 40.0;

        let verdict = gate().assess(&clean_payload(), &context(), &score);
        assert!(!verdict.is_compliant);
        assert!(!verdict.can_publish);
        assert_eq!(verdict.issues.len(), 1);
    }

    #[test]
    fn recommendations_never_block() {
        let mut payload = clean_payload();
        // Strip the fact marker so the soft check fires.
        payload.authority_block = words(95);

        let verdict = gate().assess(&payload, &context(), &passing_score());
        assert!(verdict.is_compliant);
        assert!(verdict.can_publish);
        assert_eq!(verdict.recommendations.len(), 1);
        assert_eq!(verdict.health_score, 100.0);
    }

    #[test]
    fn health_score_steps_down_per_issue() {
        let mut payload = clean_payload();
        payload.short_answer = words(50);
        payload.links.clear();

        let verdict = gate().assess(&payload, &context(), &passing_score());
        assert_eq!(verdict.issues.len(), 2);
        assert_eq!(verdict.health_score, 80.0);
    }

    #[test]
    fn health_score_floors_at_zero() {
        assert_eq!(health_score(10), 0.0);
        assert_eq!(health_score(25), 0.0);
        assert_eq!(health_score(0), 100.0);
    }

    #[test]
    fn issues_keep_dimension_order() {
        // Threshold issues first, then structural, then phrases.
        let mut score = passing_score();
        score.trust_risk_penalty = 0.9;
        let mut payload = clean_payload();
        payload.short_answer = words(60);
        payload.description = format!("{} with approved credit", words(245));

        let verdict = gate().assess(&payload, &context(), &score);
        assert_eq!(verdict.issues.len(), 3);
        assert!(verdict.issues[0].contains("trust-risk penalty"));
        assert!(verdict.issues[1].contains("60 words"));
        assert!(verdict.issues[2].contains("with approved credit"));
    }
}
