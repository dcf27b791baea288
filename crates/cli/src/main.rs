use std::process;
use std::time::Duration;

use clap::Parser;

use accentscope_core::classification::infrastructure::http_classifier::HttpClassifier;
use accentscope_core::presentation::confidence::{format_percent, ConfidenceBand};
use accentscope_core::presentation::dialect_table::{display_label_of, flag_of};
use accentscope_core::shared::constants::{
    DEFAULT_BACKEND_ORIGIN, DEFAULT_REQUEST_TIMEOUT_SECS, NO_CLASSIFICATION_MESSAGE,
};
use accentscope_core::validation::UrlField;

/// Classify the English dialect spoken in a video, for hiring evaluation.
#[derive(Parser)]
#[command(name = "accentscope")]
struct Cli {
    /// Video URL to classify (YouTube, Loom, direct video links, and more).
    url: String,

    /// Backend origin hosting the classification service.
    #[arg(long, default_value = DEFAULT_BACKEND_ORIGIN)]
    origin: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    timeout: u64,

    /// Print the raw ranked results as JSON instead of the report.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Same pre-submit rules as the desktop form: reject locally before any
    // request goes out.
    let mut field = UrlField::new();
    field.edit(cli.url);
    field.validate_for_submit()?;

    let classifier = HttpClassifier::new(&cli.origin, Duration::from_secs(cli.timeout))?;
    let results = classifier.classify(field.value()).await?;
    if results.is_empty() {
        return Err(NO_CLASSIFICATION_MESSAGE.into());
    }
    log::info!("received {} ranked candidates", results.len());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("Ranked candidates:");
    for (index, result) in results.iter().enumerate() {
        println!(
            "{:>3}. {} {:<22} {:>6}  {}",
            index + 1,
            flag_of(&result.label),
            display_label_of(&result.label),
            format_percent(result.score),
            ConfidenceBand::from_score(result.score)
        );
    }

    let primary = &results[0];
    println!();
    println!(
        "Hiring evaluation: {} ({} confidence)",
        display_label_of(&primary.label),
        format_percent(primary.score)
    );
    println!("{}", ConfidenceBand::from_score(primary.score).hiring_note());

    Ok(())
}
