//! vaigate CLI - score, gate, and triage content batches from the shell.
//!
//! Reads a JSON batch file (an array of evaluation items), runs the full
//! pipeline, and prints either a colored terminal report or the raw
//! result as JSON:
//!
//! 1. Validation: every item checked up front, failures isolated
//! 2. Scoring: risk multipliers, composite authority score, position
//! 3. Gating: thresholds, structural checks, deceptive-phrase scan
//! 4. Remediation: highest-ROI action per item
//! 5. Aggregation: summary counts, distributions, priority action queue
//!
//! Examples:
//!   vaigate batch.json                 # Colored terminal report
//!   vaigate batch.json --json          # Full result as JSON
//!   vaigate --trend history.json       # Classify a score history
//!   RUST_LOG=audit=info vaigate batch.json   # Show audit events

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vaigate::rendering::ReportRenderer;
use vaigate::{BatchEvaluator, EngineConfig, EvaluationItem, TrendAnalyzer};

/// Authority scoring and compliance gating for AI-search content
///
/// vaigate turns raw content-quality and citation signals into an
/// authority score, a publish/block verdict, and one recommended
/// remediation action per item.
#[derive(Parser, Debug)]
#[command(name = "vaigate")]
#[command(version)]
#[command(about, long_about = None)]
pub struct Cli {
    /// Input JSON file
    ///
    /// An array of evaluation items (features, metrics, payload,
    /// context, optional benchmark). With --trend, an array of
    /// historical authority scores instead.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Config file directory
    ///
    /// Where to start searching for vaigate.toml. The search walks up
    /// parent directories and falls back to built-in defaults.
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Emit the full batch outcome as JSON instead of a report
    #[arg(long)]
    pub json: bool,

    /// Classify the input as a time-ordered score history
    ///
    /// Computes pairwise deltas and reports improving / stable /
    /// declining.
    #[arg(long)]
    pub trend: bool,

    /// Enable colored output
    #[arg(long, default_value = "true")]
    pub color: bool,

    /// Disable colored output
    ///
    /// Useful for piping to files or tools that don't handle ANSI
    /// escape codes.
    #[arg(long)]
    pub no_color: bool,

    /// Show timing statistics on stderr
    #[arg(long)]
    pub stats: bool,

    /// Verbose progress output on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = run(&cli)?;
    println!("{}", output);
    Ok(())
}

fn run(cli: &Cli) -> Result<String> {
    let use_color = cli.color && !cli.no_color;
    let started = Instant::now();

    let content = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read input file '{}'", cli.input.display()))?;

    if cli.trend {
        return run_trend(cli, &content);
    }

    let items: Vec<EvaluationItem> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse '{}' as a batch file", cli.input.display()))?;

    let config = EngineConfig::load(&cli.root);
    if cli.verbose {
        eprintln!("vaigate: {} item(s)", items.len());
        eprintln!("{}", config.display_summary());
    }

    let evaluator = BatchEvaluator::new(config.scoring, config.gate);
    let outcome = evaluator.run(&items);

    if cli.stats {
        eprintln!(
            "evaluated {} item(s) in {:.1?} ({} publishable, {} needing review)",
            outcome.summary.total,
            started.elapsed(),
            outcome.summary.publishable,
            outcome.summary.needs_review
        );
    }

    if cli.json {
        serde_json::to_string_pretty(&outcome).context("failed to serialize batch outcome")
    } else {
        Ok(ReportRenderer::new(use_color).render(&outcome))
    }
}

fn run_trend(cli: &Cli, content: &str) -> Result<String> {
    let scores: Vec<f64> = serde_json::from_str(content).with_context(|| {
        format!(
            "failed to parse '{}' as a score history",
            cli.input.display()
        )
    })?;

    let config = EngineConfig::load(&cli.root);
    let analysis = TrendAnalyzer::new(&config.scoring).analyze(&scores);

    if cli.json {
        serde_json::to_string_pretty(&analysis).context("failed to serialize trend analysis")
    } else {
        Ok(format!(
            "trend: {} (average delta {:+.2} over {} interval(s))",
            analysis.trend.label(),
            analysis.average_delta,
            analysis.deltas.len()
        ))
    }
}
