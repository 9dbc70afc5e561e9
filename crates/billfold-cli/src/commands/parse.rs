//! Parse command - interpret a single recognized-text file.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use console::style;
use tracing::info;

use billfold_core::{ExpenseDraft, Language, ParsedReceipt, ReceiptParser};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input text file ("-" for stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Recognition language
    #[arg(short, long, default_value = "eng", value_parser = super::parse_language)]
    language: Language,

    /// Recognition confidence reported by the OCR run (0-100)
    #[arg(long, default_value_t = 100.0)]
    confidence: f64,

    /// Treat the input as a digital text layer (applies the configured
    /// synthetic confidence instead of --confidence)
    #[arg(long)]
    digital: bool,

    /// Reference date for the today-fallback (YYYY-MM-DD)
    #[arg(long)]
    reference_date: Option<NaiveDate>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show a recognition confidence summary
    #[arg(long)]
    show_confidence: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Parsed receipt as JSON
    Json,
    /// Plain text summary
    Text,
    /// Pre-filled expense draft as JSON
    Expense,
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::config::load(config_path)?;

    let text = if args.input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        if !args.input.exists() {
            anyhow::bail!("Input file not found: {}", args.input.display());
        }
        fs::read_to_string(&args.input)?
    };

    info!("parsing {} ({} chars)", args.input.display(), text.len());

    let mut parser = ReceiptParser::new();
    if let Some(date) = args.reference_date {
        parser = parser.with_reference_date(date);
    }

    let confidence = if args.digital {
        config.digital_text_confidence
    } else {
        args.confidence
    };

    let receipt = parser.parse(&text, confidence, args.language);

    let output = format_receipt(&receipt, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_confidence {
        println!();
        println!(
            "{} Recognition confidence: {:.1}%",
            style("ℹ").blue(),
            receipt.confidence
        );
        if receipt.confidence < config.low_confidence_threshold {
            println!(
                "{} Low confidence scan - review the extracted data carefully",
                style("!").yellow()
            );
        }
    }

    Ok(())
}

fn format_receipt(receipt: &ParsedReceipt, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(receipt)?),
        OutputFormat::Expense => Ok(serde_json::to_string(&ExpenseDraft::from_receipt(
            receipt,
        ))?),
        OutputFormat::Text => Ok(format_text(receipt)),
    }
}

fn format_text(receipt: &ParsedReceipt) -> String {
    let mut output = String::new();

    let amount = receipt
        .amount
        .map(|a| format!("{}{}", receipt.currency_symbol, a))
        .unwrap_or_else(|| "-".to_string());

    output.push_str(&format!("Amount:      {}\n", amount));
    output.push_str(&format!("Date:        {}\n", receipt.date));
    output.push_str(&format!(
        "Description: {}\n",
        receipt.description.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!(
        "Category:    {}\n",
        receipt.category.display_name()
    ));
    output.push_str(&format!(
        "Currency:    {} ({})\n",
        receipt.currency, receipt.currency_symbol
    ));
    output.push_str(&format!("Confidence:  {:.1}%\n", receipt.confidence));

    output
}
