//! # News Event Extractor
//!
//! Fetches a news article by URL, finds sentences that mention predefined
//! event trigger words, runs named-entity recognition over the article
//! body, and prints a best-effort structured summary: event type,
//! description, actors, targets, location, time, and publish date.
//!
//! ## Usage
//!
//! ```sh
//! news_event_extractor https://example.com/some-article -n 4
//! ```
//!
//! ## Architecture
//!
//! One URL per invocation, processed as a straight-line pipeline:
//! 1. **Validation**: the URL must parse before anything touches the network
//! 2. **Fetching**: download the page and extract title, body, publish date
//! 3. **Recognition**: one entity-recognition call over the full body text
//! 4. **Summary**: trigger matching, sentence selection, argument bucketing
//! 5. **Output**: key/value text display or JSON

use clap::Parser;
use std::error::Error;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};
use url::Url;

mod cli;
mod config;
mod models;
mod ner;
mod outputs;
mod scrape;
mod summary;
mod tokenize;
mod triggers;
mod utils;

use cli::Cli;
use config::RecognizerConfig;
use ner::{LlmRecognizer, RecognizeEntities};
use outputs::{json, text};

/// Shown when the URL is missing, empty, or does not parse.
const VALIDATION_MESSAGE: &str = "Please enter a valid URL.";
/// Prefix of the single generic processing-failure message.
const FAILURE_PREFIX: &str = "Failed to process the URL. Error:";

#[tokio::main]
async fn main() -> ExitCode {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    debug!(
        url = %args.url,
        max_sentences = args.max_sentences,
        json = args.json,
        "Parsed CLI arguments"
    );

    // Pre-emptive validation; a bad URL never reaches the fetch step.
    let Some(url) = validate_url(&args.url) else {
        error!(url = %args.url, "URL failed validation");
        eprintln!("{VALIDATION_MESSAGE}");
        return ExitCode::from(2);
    };

    let start_time = std::time::Instant::now();
    match run(&args, &url).await {
        Ok(()) => {
            info!(elapsed_ms = start_time.elapsed().as_millis() as u64, "Execution complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, url = %url, "Processing failed");
            eprintln!("{FAILURE_PREFIX} {e}");
            ExitCode::FAILURE
        }
    }
}

/// Accept a non-empty, absolute, parseable URL; reject everything else.
fn validate_url(raw: &str) -> Option<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Url::parse(trimmed).ok()
}

/// The full pipeline for one article.
async fn run(args: &Cli, url: &Url) -> Result<(), Box<dyn Error>> {
    // The recognizer is built once, before any article work.
    let config = RecognizerConfig::load(
        args.config.as_deref(),
        args.api_base.clone(),
        args.model.clone(),
        args.api_key.clone(),
    )
    .await?;
    let recognizer = LlmRecognizer::new(config)?;
    let client = scrape::http_client()?;

    let article = scrape::fetch_article(&client, url).await?;
    let entities = recognizer.recognize(&article.text).await?;
    let summary = summary::build(&article, entities, url, args.max_sentences as usize);
    info!(
        event_type = %summary.event_type,
        entity_count = summary.entities.len(),
        "Built event summary"
    );

    if args.json {
        println!("{}", json::render(&summary)?);
    } else {
        print!("{}", text::render(&summary));
    }

    if let Some(path) = &args.output {
        json::write_summary(&summary, path).await?;
    }

    Ok(())
}
