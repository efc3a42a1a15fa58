use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

use prosegauge::{AnalysisConfig, MetricsRecord, TextAnalyzer};

#[derive(Parser, Debug)]
#[command(name = "prosegauge")]
#[command(about = "Readability and sentiment metrics for natural-language text")]
#[command(version)]
struct Args {
    /// Text files to analyze, one document per file
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// YAML configuration with dictionary and stopword paths
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,

    /// Abort on first error instead of continuing with remaining files
    #[arg(long)]
    fail_fast: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Write results to this file instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(serde::Serialize)]
struct DocumentResult {
    path: String,
    #[serde(flatten)]
    metrics: MetricsRecord,
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: structured JSON logging matches downstream log ingestion
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .init();

    let args = Args::parse();

    info!("Starting prosegauge");
    info!(?args, "Parsed CLI arguments");

    let config = AnalysisConfig::from_yaml_file(&args.config)
        .with_context(|| format!("failed to load configuration {}", args.config.display()))?;

    // WHY: resources load eagerly so every document sees identical lexicons
    // and a bad dictionary path fails before any document is touched
    let analyzer = TextAnalyzer::from_config(&config)
        .context("failed to load lexical resources")?;

    let mut results: Vec<DocumentResult> = Vec::with_capacity(args.inputs.len());
    let mut failed_reads = 0usize;

    for input in &args.inputs {
        let text = match tokio::fs::read_to_string(input).await {
            Ok(text) => text,
            Err(e) => {
                let message = format!("failed to read {}: {e}", input.display());
                if args.fail_fast {
                    anyhow::bail!(message);
                }
                warn!("{message}");
                failed_reads += 1;
                continue;
            }
        };

        let metrics = analyzer.analyze(&text);
        info!(
            path = %input.display(),
            words = metrics.word_count,
            fog_index = metrics.fog_index,
            "Analyzed document"
        );
        results.push(DocumentResult {
            path: input.display().to_string(),
            metrics,
        });
    }

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&results)?
    } else {
        serde_json::to_string(&results)?
    };

    match &args.out {
        Some(path) => {
            tokio::fs::write(path, format!("{rendered}\n"))
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("Wrote results to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    info!(
        "Analysis complete: {} documents, {} read failures",
        results.len(),
        failed_reads
    );
    Ok(())
}
