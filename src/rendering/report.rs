//! Terminal report rendering for batch results.
//!
//! Layout, top to bottom: status banner, summary counts, per-item lines
//! with decision and position badges, top recommendations, priority
//! actions. One item per line keeps large batches scannable.

use std::fmt::Write as _;

use crate::batch::{report, BatchOutcome, ItemOutcome};
use crate::rendering::colors::{Badge, Colorizer};

/// Renders a batch outcome as terminal text.
pub struct ReportRenderer {
    colorizer: Colorizer,
}

impl ReportRenderer {
    pub fn new(color: bool) -> Self {
        Self {
            colorizer: Colorizer::new(color),
        }
    }

    /// Render the full report.
    pub fn render(&self, outcome: &BatchOutcome) -> String {
        let summary = &outcome.summary;
        let status = report(summary);
        let mut out = String::new();

        let banner = format!("vaigate report - {}", status.status.label());
        let _ = writeln!(out, "{}", self.colorizer.status(status.status, &banner));
        let _ = writeln!(out, "{}", status.message);
        let _ = writeln!(out);

        let _ = writeln!(
            out,
            "items: {}  compliant: {}  publishable: {}  review: {}",
            summary.total, summary.compliant, summary.publishable, summary.needs_review
        );
        let _ = writeln!(
            out,
            "positions: {} dominant / {} competitive / {} behind",
            summary.positions.dominant, summary.positions.competitive, summary.positions.behind
        );
        let _ = writeln!(
            out,
            "quality: {} excellent / {} good / {} needs-improvement",
            summary.buckets.excellent, summary.buckets.good, summary.buckets.needs_improvement
        );
        let _ = writeln!(out);

        for item in &outcome.results {
            let _ = writeln!(out, "{}", self.render_item(item));
        }

        if !summary.top_recommendations.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "top recommendations:");
            for entry in &summary.top_recommendations {
                let line = format!("  {}x {}", entry.count, entry.text);
                let _ = writeln!(out, "{}", self.colorizer.recommendation(&line));
            }
        }

        if !summary.priority_actions.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "priority actions:");
            for action in &summary.priority_actions {
                let _ = writeln!(out, "  - {}", action);
            }
        }

        out
    }

    fn render_item(&self, item: &ItemOutcome) -> String {
        let decision = if item.error.is_some() {
            Badge::Invalid
        } else if !item.verdict.can_publish {
            Badge::Blocked
        } else if !item.verdict.recommendations.is_empty() {
            Badge::Review
        } else {
            Badge::Publish
        };

        let mut line = format!(
            "{} {}",
            self.colorizer.badge(decision),
            self.colorizer.subject(&item.subject_id)
        );

        if let Some(score) = &item.score {
            let _ = write!(
                line,
                "  authority {}  {}",
                self.colorizer.metric(&format!("{:.1}", score.authority_score)),
                self.colorizer.badge(Badge::from(score.position)),
            );
        }

        for issue in &item.verdict.issues {
            let _ = write!(line, "\n    {}", self.colorizer.issue(issue));
        }

        if let Some(action) = &item.remediation {
            if !action.is_noop() {
                let _ = write!(
                    line,
                    "\n    next: {} (net {:.0})",
                    action.label, action.net_profit
                );
            }
        }

        line
    }
}
