//! Configuration loading from vaigate.toml.
//!
//! Deployments tune gate limits and scoring weights without rebuilding:
//!
//! ```toml
//! [scoring]
//! media_floor = 16
//! severity_multiplier = 2.5
//!
//! [gate]
//! min_authority_score = 75.0
//! min_reference_links = 4
//! ```
//!
//! Search order follows the usual tool convention: `vaigate.toml` in the
//! given directory, then walking up the tree, then built-in defaults.
//! Both sections are partial - any omitted key keeps its default.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::types::{GateConfig, ScoringConfig};

/// Engine configuration: scoring weights plus gate limits.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Source file for this config (for display).
    pub source: Option<PathBuf>,
    pub scoring: ScoringConfig,
    pub gate: GateConfig,
}

/// Raw config as deserialized from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct RawConfig {
    scoring: ScoringConfig,
    gate: GateConfig,
}

impl EngineConfig {
    /// Load configuration starting from the given directory.
    ///
    /// Search order:
    /// 1. vaigate.toml in the directory
    /// 2. vaigate.toml in each ancestor directory
    /// 3. Default config if nothing found or nothing parses
    pub fn load(directory: &Path) -> Self {
        let candidate = directory.join("vaigate.toml");
        if candidate.exists() {
            if let Some(config) = Self::load_file(&candidate) {
                return config;
            }
        }

        let mut current = directory.to_path_buf();
        while let Some(parent) = current.parent() {
            let candidate = parent.join("vaigate.toml");
            if candidate.exists() {
                if let Some(config) = Self::load_file(&candidate) {
                    return config;
                }
            }
            current = parent.to_path_buf();
        }

        Self::default()
    }

    fn load_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        let raw: RawConfig = toml::from_str(&content).ok()?;
        Some(Self {
            source: Some(path.to_path_buf()),
            scoring: raw.scoring,
            gate: raw.gate,
        })
    }

    /// Parse configuration from a TOML string. Used by tests and by
    /// callers that manage their own files.
    pub fn from_toml(content: &str) -> Option<Self> {
        let raw: RawConfig = toml::from_str(content).ok()?;
        Some(Self {
            source: None,
            scoring: raw.scoring,
            gate: raw.gate,
        })
    }

    /// Format config provenance for verbose display.
    pub fn display_summary(&self) -> String {
        match &self.source {
            Some(source) => format!("   Config: {}", source.display()),
            None => "   Config: (defaults)".to_string(),
        }
    }
}
