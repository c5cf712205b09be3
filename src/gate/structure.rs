//! Structural content checks: word-count bands, reference links, and
//! verifiable-fact markers.
//!
//! Word bands exist because answer engines quote blocks whole: a short
//! answer over the limit stops being quotable, an authority block outside
//! its band reads as either thin or padded. A missing fact marker is the
//! one soft check here - it lands in the recommendation channel and never
//! blocks publication.

use crate::types::{ContentPayload, GateConfig, SubjectContext};

/// Keywords that mark a claim as independently verifiable when no named
/// context fact matches.
const FACT_MARKER_KEYWORDS: &[&str] = &[
    "inspect",
    "certif",
    "warranty",
    "service record",
    "service history",
];

/// Structural findings: blocking issues plus non-blocking recommendations.
#[derive(Debug, Default)]
pub struct StructuralFindings {
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Run every structural check over the payload.
pub fn check(
    config: &GateConfig,
    payload: &ContentPayload,
    context: &SubjectContext,
) -> StructuralFindings {
    let mut findings = StructuralFindings::default();

    let short_words = word_count(&payload.short_answer);
    if short_words > config.short_answer_max_words {
        findings.issues.push(format!(
            "short answer runs {} words, limit {}",
            short_words, config.short_answer_max_words
        ));
    }

    let authority_words = word_count(&payload.authority_block);
    if !(config.authority_min_words..=config.authority_max_words).contains(&authority_words) {
        findings.issues.push(format!(
            "authority block runs {} words, outside {}-{}",
            authority_words, config.authority_min_words, config.authority_max_words
        ));
    }

    let description_words = word_count(&payload.description);
    if !(config.description_min_words..=config.description_max_words).contains(&description_words) {
        findings.issues.push(format!(
            "description runs {} words, outside {}-{}",
            description_words, config.description_min_words, config.description_max_words
        ));
    }

    if payload.links.len() < config.min_reference_links {
        findings.issues.push(format!(
            "{} reference links present, minimum {}",
            payload.links.len(),
            config.min_reference_links
        ));
    }

    if !has_fact_marker(&payload.authority_block, context) {
        findings.recommendations.push(
            "Reference a verifiable fact in the authority block (inspection, \
             certification, named expert, or service record)"
                .to_string(),
        );
    }

    if !payload.faq.contains('?') {
        findings
            .recommendations
            .push("Format the FAQ block as questions to match related-question widgets".to_string());
    }

    findings
}

/// Whether the authority block carries at least one verifiable-fact
/// marker: a named context fact or a marker keyword.
fn has_fact_marker(authority_block: &str, context: &SubjectContext) -> bool {
    let haystack = authority_block.to_lowercase();

    let named_facts = [
        context.seller.named_expert.as_str(),
        context.seller.service_reference.as_str(),
    ];
    if named_facts
        .iter()
        .filter(|fact| !fact.is_empty())
        .any(|fact| haystack.contains(&fact.to_lowercase()))
    {
        return true;
    }

    FACT_MARKER_KEYWORDS
        .iter()
        .any(|keyword| haystack.contains(keyword))
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
