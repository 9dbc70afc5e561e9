//! Batch processing command for multiple recognized-text files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use chrono::NaiveDate;
use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use billfold_core::{Language, ParsedReceipt, ReceiptParser};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Recognition language applied to every file
    #[arg(short, long, default_value = "eng", value_parser = super::parse_language)]
    language: Language,

    /// Recognition confidence applied to every file (0-100)
    #[arg(long, default_value_t = 100.0)]
    confidence: f64,

    /// Treat inputs as digital text layers (applies the configured
    /// synthetic confidence instead of --confidence)
    #[arg(long)]
    digital: bool,

    /// Reference date for the today-fallback (YYYY-MM-DD)
    #[arg(long)]
    reference_date: Option<NaiveDate>,

    /// Output directory for per-file JSON results
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct BatchResult {
    path: PathBuf,
    receipt: Option<ParsedReceipt>,
    error: Option<String>,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::config::load(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "txt" | "text")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut parser = ReceiptParser::new();
    if let Some(date) = args.reference_date {
        parser = parser.with_reference_date(date);
    }

    let confidence = if args.digital {
        config.digital_text_confidence
    } else {
        args.confidence
    };

    let mut results = Vec::with_capacity(files.len());

    for path in files {
        match fs::read_to_string(&path) {
            Ok(text) => {
                let receipt = parser.parse(&text, confidence, args.language);
                debug!(
                    "parsed {} -> {:?}, amount {:?}",
                    path.display(),
                    receipt.category,
                    receipt.amount
                );
                results.push(BatchResult {
                    path,
                    receipt: Some(receipt),
                    error: None,
                });
            }
            Err(e) => {
                if args.continue_on_error {
                    warn!("Failed to read {}: {}", path.display(), e);
                    results.push(BatchResult {
                        path,
                        receipt: None,
                        error: Some(e.to_string()),
                    });
                } else {
                    anyhow::bail!("Failed to read {}: {}", path.display(), e);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    // Write per-file outputs
    for result in &results {
        if let (Some(receipt), Some(output_dir)) = (&result.receipt, &args.output_dir) {
            let name = result
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("receipt");
            let output_path = output_dir.join(format!("{}.json", name));
            fs::write(&output_path, serde_json::to_string(receipt)?)?;
            debug!("wrote output to {}", output_path.display());
        }
    }

    // Print summary
    let parsed = results.iter().filter(|r| r.receipt.is_some()).count();
    let with_amount = results
        .iter()
        .filter(|r| r.receipt.as_ref().is_some_and(|x| x.amount.is_some()))
        .count();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} parsed, {} with amounts, {} failed",
        style(parsed).green(),
        with_amount,
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}
