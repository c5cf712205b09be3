//! ANSI color utilities and badge rendering for vaigate.
//!
//! Badges mark each item's gate outcome and competitive position at a
//! glance in the batch report. Color scheme keeps the decision channel
//! loud (publish/block) and the classification channel muted.

use owo_colors::{OwoColorize, Style};
use std::fmt;

use crate::batch::ReportStatus;
use crate::types::CompetitivePosition;

/// Badge types for item and report annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Badge {
    /// Cleared the gate - safe to publish.
    Publish,
    /// Blocked by a threshold breach or hard failure.
    Blocked,
    /// Compliant but carrying recommendations worth a look.
    Review,
    /// Competitive position badges.
    Dominant,
    Competitive,
    Behind,
    /// Input rejected before scoring.
    Invalid,
}

impl Badge {
    /// Get the badge label for display
    pub fn label(&self) -> &'static str {
        match self {
            Badge::Publish => "publish",
            Badge::Blocked => "blocked",
            Badge::Review => "review",
            Badge::Dominant => "dominant",
            Badge::Competitive => "competitive",
            Badge::Behind => "behind",
            Badge::Invalid => "invalid",
        }
    }

    /// Get the badge's display color/style
    pub fn style(&self) -> Style {
        match self {
            // Decision badges - bright, these drive action
            Badge::Publish => Style::new().bright_green().bold(),
            Badge::Blocked => Style::new().bright_red().bold(),
            Badge::Review => Style::new().yellow(),
            Badge::Invalid => Style::new().bright_magenta(),

            // Position badges - muted, informational
            Badge::Dominant => Style::new().bright_cyan(),
            Badge::Competitive => Style::new().cyan().dimmed(),
            Badge::Behind => Style::new().dimmed(),
        }
    }

    /// Render the badge with color
    pub fn render(&self) -> String {
        format!("[{}]", self.label().style(self.style()))
    }

    /// Render the badge without color codes
    pub fn render_plain(&self) -> String {
        format!("[{}]", self.label())
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl From<CompetitivePosition> for Badge {
    fn from(position: CompetitivePosition) -> Self {
        match position {
            CompetitivePosition::Dominant => Badge::Dominant,
            CompetitivePosition::Competitive => Badge::Competitive,
            CompetitivePosition::Behind => Badge::Behind,
        }
    }
}

/// Colorize report fragments. Everything degrades to plain text when
/// color is off.
pub struct Colorizer {
    color: bool,
}

impl Colorizer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Subject identifiers (bold blue, like file headers).
    pub fn subject(&self, s: &str) -> String {
        if self.color {
            s.bright_blue().bold().to_string()
        } else {
            s.to_string()
        }
    }

    /// Issue lines (red).
    pub fn issue(&self, s: &str) -> String {
        if self.color {
            s.red().to_string()
        } else {
            s.to_string()
        }
    }

    /// Recommendation lines (yellow).
    pub fn recommendation(&self, s: &str) -> String {
        if self.color {
            s.yellow().to_string()
        } else {
            s.to_string()
        }
    }

    /// Numeric metric values (cyan).
    pub fn metric(&self, s: &str) -> String {
        if self.color {
            s.cyan().to_string()
        } else {
            s.to_string()
        }
    }

    /// Overall report status line.
    pub fn status(&self, status: ReportStatus, s: &str) -> String {
        if !self.color {
            return s.to_string();
        }
        match status {
            ReportStatus::Healthy => s.bright_green().bold().to_string(),
            ReportStatus::Warning => s.bright_yellow().bold().to_string(),
            ReportStatus::Critical => s.bright_red().bold().to_string(),
        }
    }

    pub fn badge(&self, badge: Badge) -> String {
        if self.color {
            badge.render()
        } else {
            badge.render_plain()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_labels_are_stable() {
        assert_eq!(Badge::Publish.label(), "publish");
        assert_eq!(Badge::Blocked.label(), "blocked");
        assert_eq!(Badge::Invalid.label(), "invalid");
    }

    #[test]
    fn position_maps_to_badge() {
        assert_eq!(Badge::from(CompetitivePosition::Dominant), Badge::Dominant);
        assert_eq!(Badge::from(CompetitivePosition::Behind), Badge::Behind);
    }

    #[test]
    fn plain_rendering_has_no_escape_codes() {
        let rendered = Badge::Publish.render_plain();
        assert_eq!(rendered, "[publish]");

        let colorizer = Colorizer::new(false);
        assert_eq!(colorizer.subject("veh-1"), "veh-1");
        assert_eq!(colorizer.badge(Badge::Blocked), "[blocked]");
    }

    #[test]
    fn colored_rendering_wraps_the_label() {
        let colorizer = Colorizer::new(true);
        let rendered = colorizer.badge(Badge::Publish);
        assert!(rendered.contains("publish"));
        assert_ne!(rendered, "[publish]");
    }
}
