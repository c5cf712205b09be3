//! Remediation action selection.
//!
//! Candidates are enumerated from specific feature gaps in a fixed,
//! documented order, each carrying a static gain/cost estimate. The
//! selector ranks them by net profit gain:
//!
//! ```text
//! net = estimated_gain x gross_profit - estimated_cost
//! ```
//!
//! and returns the single best action. Comparison is strict `>`, so the
//! first-seen candidate wins ties - re-running with identical inputs
//! always yields the identical selection. An empty candidate set produces
//! the "no action required" sentinel, never an absent value.
//!
//! The engine only emits new candidates; the external action queue owns
//! execution and lifecycle (pending -> in_progress -> completed).

use crate::types::{ContentFeatureSet, FollowUp, RemediationAction, ScoringConfig};

/// Trust factor below this triggers the trust-rebuild candidate.
/// Deliberately looser than the scoring hard-failure floor: trust worth
/// remediating starts well before it becomes a compliance failure.
const TRUST_REBUILD_FLOOR: f64 = 0.5;

/// The candidate catalog, in enumeration (and therefore tie-break) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    RestoreMediaCoverage,
    RemoveDeceptivePricing,
    RebuildTrustSignals,
    DeduplicateCopy,
}

impl ActionKind {
    /// All candidates in fixed enumeration order. Selection iterates this
    /// array; do not reorder without revisiting the tie-break tests.
    pub const ALL: [ActionKind; 4] = [
        ActionKind::RestoreMediaCoverage,
        ActionKind::RemoveDeceptivePricing,
        ActionKind::RebuildTrustSignals,
        ActionKind::DeduplicateCopy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::RestoreMediaCoverage => "Restore media coverage",
            ActionKind::RemoveDeceptivePricing => "Remove deceptive pricing",
            ActionKind::RebuildTrustSignals => "Rebuild trust signals",
            ActionKind::DeduplicateCopy => "Deduplicate copy",
        }
    }

    pub fn impact(&self) -> &'static str {
        match self {
            ActionKind::RestoreMediaCoverage => {
                "Brings the media set back above the answer-engine floor"
            }
            ActionKind::RemoveDeceptivePricing => {
                "Strips conditional price framing that suppresses citations"
            }
            ActionKind::RebuildTrustSignals => {
                "Adds verifiable inspection and expert references to the claims"
            }
            ActionKind::DeduplicateCopy => {
                "Rewrites duplicated passages that dilute source attribution"
            }
        }
    }

    /// Estimated authority-score gain fraction. Static per action type.
    pub fn estimated_gain(&self) -> f64 {
        match self {
            ActionKind::RestoreMediaCoverage => 0.15,
            ActionKind::RemoveDeceptivePricing => 0.20,
            ActionKind::RebuildTrustSignals => 0.25,
            ActionKind::DeduplicateCopy => 0.12,
        }
    }

    /// Estimated execution cost in currency units. Static per action type.
    pub fn estimated_cost(&self) -> f64 {
        match self {
            ActionKind::RestoreMediaCoverage => 450.0,
            ActionKind::RemoveDeceptivePricing => 250.0,
            ActionKind::RebuildTrustSignals => 900.0,
            ActionKind::DeduplicateCopy => 300.0,
        }
    }

    /// Mandatory downstream action, when the fix forces one.
    pub fn follow_up(&self) -> Option<FollowUp> {
        match self {
            ActionKind::RestoreMediaCoverage => Some(FollowUp::RefreshMediaPipeline),
            ActionKind::RemoveDeceptivePricing => Some(FollowUp::RegenerateCompliantText),
            ActionKind::RebuildTrustSignals => Some(FollowUp::ScheduleExpertReview),
            ActionKind::DeduplicateCopy => Some(FollowUp::RegenerateCompliantText),
        }
    }

    /// Whether this item's feature set exhibits the gap this action fixes.
    pub fn applies(&self, config: &ScoringConfig, features: &ContentFeatureSet) -> bool {
        match self {
            ActionKind::RestoreMediaCoverage => {
                features.media_count < config.media_floor || !features.has_required_photo
            }
            ActionKind::RemoveDeceptivePricing => features.deceptive_pricing,
            ActionKind::RebuildTrustSignals => features.trust_factor < TRUST_REBUILD_FLOOR,
            ActionKind::DeduplicateCopy => {
                features.duplication_ratio > config.duplication_warning_threshold
            }
        }
    }
}

/// Selector for the single highest-ROI remediation action.
pub struct ActionSelector {
    config: ScoringConfig,
}

impl ActionSelector {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Select the best action for this feature set, or the no-op sentinel
    /// when no gap exists.
    pub fn select(&self, features: &ContentFeatureSet, gross_profit: f64) -> RemediationAction {
        let mut best: Option<(ActionKind, f64)> = None;

        for kind in ActionKind::ALL {
            if !kind.applies(&self.config, features) {
                continue;
            }
            let net = kind.estimated_gain() * gross_profit - kind.estimated_cost();
            // Strict comparison: the first-seen candidate keeps a tie.
            match best {
                Some((_, best_net)) if net > best_net => best = Some((kind, net)),
                None => best = Some((kind, net)),
                _ => {}
            }
        }

        match best {
            Some((kind, net)) => RemediationAction {
                label: kind.label().to_string(),
                impact: kind.impact().to_string(),
                estimated_gain: kind.estimated_gain(),
                estimated_cost: kind.estimated_cost(),
                net_profit: net,
                justification: format!(
                    "Highest net return among {} open gap(s): {:.0} gain on attributable \
                     profit against a {:.0} execution cost.",
                    ActionKind::ALL
                        .iter()
                        .filter(|k| k.applies(&self.config, features))
                        .count(),
                    kind.estimated_gain() * gross_profit,
                    kind.estimated_cost(),
                ),
                follow_up: kind.follow_up(),
            },
            None => Self::no_action_required(),
        }
    }

    /// The zero-gain sentinel returned when no feature gap exists.
    fn no_action_required() -> RemediationAction {
        RemediationAction {
            label: "No action required".to_string(),
            impact: "Content already meets every monitored feature floor".to_string(),
            estimated_gain: 0.0,
            estimated_cost: 0.0,
            net_profit: 0.0,
            justification: "All monitored feature gaps are within tolerance; republishing \
                            would spend budget without a projected return."
                .to_string(),
            follow_up: None,
        }
    }
}
