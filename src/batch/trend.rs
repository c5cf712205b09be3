//! Score trajectory analysis over a time-ordered history.
//!
//! Pairwise deltas between consecutive scores are averaged; the average
//! is classified against a small epsilon so measurement noise reads as
//! stable rather than flapping between improving and declining.

use serde::{Deserialize, Serialize};

use crate::types::ScoringConfig;

/// Direction of a score series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Stable,
    Declining,
}

impl Trend {
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Improving => "improving",
            Trend::Stable => "stable",
            Trend::Declining => "declining",
        }
    }
}

/// Full trajectory breakdown for one subject's score history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    /// Pairwise deltas between consecutive scores.
    pub deltas: Vec<f64>,
    /// Mean of the deltas; 0.0 for fewer than two scores.
    pub average_delta: f64,
    pub trend: Trend,
}

/// Classifier for time-ordered score series.
pub struct TrendAnalyzer {
    epsilon: f64,
}

impl TrendAnalyzer {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            epsilon: config.trend_epsilon,
        }
    }

    /// Analyze a time-ordered series of historical scores.
    pub fn analyze(&self, scores: &[f64]) -> TrendAnalysis {
        let deltas: Vec<f64> = scores.windows(2).map(|pair| pair[1] - pair[0]).collect();
        let average_delta = if deltas.is_empty() {
            0.0
        } else {
            deltas.iter().sum::<f64>() / deltas.len() as f64
        };

        let trend = if average_delta > self.epsilon {
            Trend::Improving
        } else if average_delta < -self.epsilon {
            Trend::Declining
        } else {
            Trend::Stable
        };

        TrendAnalysis {
            deltas,
            average_delta,
            trend,
        }
    }
}
