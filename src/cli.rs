//! Command-line interface definitions.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Endpoint settings can be provided via flags or environment variables.

use clap::Parser;

/// Command-line arguments for the event extractor.
///
/// # Examples
///
/// ```sh
/// # Summarize an article with the default four-sentence description
/// news_event_extractor https://example.com/some-article
///
/// # Longer description, JSON on stdout
/// news_event_extractor https://example.com/some-article -n 8 --json
///
/// # Remote endpoint
/// news_event_extractor https://example.com/some-article \
///     --api-base https://openrouter.ai/api/v1 --model openai/gpt-4o-mini
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// URL of the news article to process
    pub url: String,

    /// Maximum number of sentences for the event description
    #[arg(short = 'n', long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub max_sentences: u8,

    /// Emit the summary as JSON on stdout instead of the text display
    #[arg(long)]
    pub json: bool,

    /// Also write the JSON summary to this file
    #[arg(short, long)]
    pub output: Option<String>,

    /// Optional path to a recognizer config YAML file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Base URL of the OpenAI-compatible recognition endpoint
    #[arg(long, env = "NEWS_EVENT_API_BASE")]
    pub api_base: Option<String>,

    /// Model name to use for entity recognition
    #[arg(long, env = "NEWS_EVENT_MODEL")]
    pub model: Option<String>,

    /// API key for the recognition endpoint
    #[arg(long, env = "NEWS_EVENT_API_KEY")]
    pub api_key: Option<String>,
}
