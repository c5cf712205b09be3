//! Numeric threshold checks against the configured gate limits.
//!
//! Each breach appends one issue naming the measured value and the limit
//! it broke. The gate turns any non-empty result into a publication block.

use crate::types::{GateConfig, ScoreResult};

/// Check a score result against every configured limit.
pub fn check(config: &GateConfig, score: &ScoreResult) -> Vec<String> {
    let mut issues = Vec::new();

    if score.quality_risk_multiplier > config.max_risk_multiplier {
        issues.push(format!(
            "quality-risk multiplier {:.3} exceeds limit {:.2}",
            score.quality_risk_multiplier, config.max_risk_multiplier
        ));
    }
    if score.trust_risk_penalty > config.max_trust_penalty {
        issues.push(format!(
            "trust-risk penalty {:.3} exceeds limit {:.2}",
            score.trust_risk_penalty, config.max_trust_penalty
        ));
    }
    if score.authority_score < config.min_authority_score {
        issues.push(format!(
            "authority score {:.1} is below minimum {:.0}",
            score.authority_score, config.min_authority_score
        ));
    }
    if score.hard_failure_count > config.max_hard_failures {
        issues.push(format!(
            "{} hard compliance failures exceed limit {}",
            score.hard_failure_count, config.max_hard_failures
        ));
    }
    if score.warning_count > config.max_warnings {
        issues.push(format!(
            "{} warning signals exceed limit {}",
            score.warning_count, config.max_warnings
        ));
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CompetitivePosition;

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

    #[test]
    fn passing_score_has_no_issues() {
        assert!(check(&GateConfig::default(), &passing_score()).is_empty());
    }

    #[test]
    fn each_breach_reports_value_and_limit() {
        let mut score = passing_score();
        score.quality_risk_multiplier = 1.9;
        score.authority_score = 42.0;

        let issues = check(&GateConfig::default(), &score);
        assert_eq!(issues.len(), 2);
        assert!(issues[0].contains("1.900") && issues[0].contains("1.20"));
        assert!(issues[1].contains("42.0") && issues[1].contains("70"));
    }

    #[test]
    fn values_at_the_limit_pass() {
        let config = GateConfig::default();
        let mut score = passing_score();
        score.quality_risk_multiplier = config.max_risk_multiplier;
        score.trust_risk_penalty = config.max_trust_penalty;
        score.authority_score = config.min_authority_score;
        score.hard_failure_count = config.max_hard_failures;
        score.warning_count = config.max_warnings;

        assert!(check(&config, &score).is_empty());
    }

    #[test]
    fn failure_and_warning_counts_are_limited() {
        let mut score = passing_score();
        score.hard_failure_count = 3;
        score.warning_count = 4;

        let issues = check(&GateConfig::default(), &score);
        assert_eq!(issues.len(), 2);
        assert!(issues[0].contains("hard compliance failures"));
        assert!(issues[1].contains("warning signals"));
    }
}
