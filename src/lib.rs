//! vaigate - authority scoring and compliance gating for AI-search content.
//!
//! Scores machine-generated marketing content for discoverability by
//! answer engines, gates publication on quality/risk thresholds, and
//! recommends the single highest-ROI remediation action per item.
//!
//! # Architecture
//!
//! ```text
//! Feature/Citation Inputs → Risk Multipliers → Composite Score → Position
//!          ↓                      ↓                  ↓              ↓
//!      validation          PIQR + HRP         0-100 authority   dominant/
//!      (fail fast)         calculators        score, clamped    competitive/
//!                                                               behind
//!                              ↓
//!             ┌────────────────┴───────────────┐
//!       Remediation Selector            Compliance Gate
//!       (net-profit argmax)         (thresholds + structure
//!                                      + phrase scan)
//!                              ↓
//!                     Batch Aggregator
//!              (rayon map → sequential fold)
//! ```
//!
//! # Purity
//!
//! Every per-item evaluation is a pure function of its inputs: no shared
//! mutable state, no I/O, nothing to cancel. Items may be scored in
//! parallel across any worker count. The only side effect anywhere is the
//! fire-and-forget audit event each gate invocation emits via `tracing`.

pub mod batch;
pub mod config;
pub mod error;
pub mod gate;
pub mod remediation;
pub mod rendering;
pub mod scoring;
pub mod types;

// Re-export the engine entry points
pub use batch::{
    report, BatchEvaluator, BatchOutcome, BatchSummary, EvaluationItem, ItemOutcome, ReportStatus,
    StatusReport, Trend, TrendAnalysis, TrendAnalyzer,
};
pub use config::EngineConfig;
pub use error::ValidationError;
pub use gate::ComplianceGate;
pub use remediation::{ActionKind, ActionSelector};
pub use scoring::{
    classify_against_benchmark, classify_fixed_band, evaluate, CompositeScorer, RiskCalculator,
    RiskProfile, Surface,
};

// Re-export core types
pub use types::{
    CitationMetrics, CompetitivePosition, ComplianceVerdict, ContentFeatureSet, ContentPayload,
    FollowUp, GateConfig, QualityBucket, ReferenceLink, RemediationAction, ScoreResult,
    ScoringConfig, SellerFacts, SubjectContext,
};
