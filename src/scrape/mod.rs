//! Article fetching and content extraction.
//!
//! One GET per run, with a fixed desktop browser User-Agent, followed by a
//! generic readable-content pass over the HTML:
//!
//! 1. **Title**: `og:title` meta, then `<title>`, then the first `<h1>`
//! 2. **Body**: paragraphs inside `<article>`, falling back to all `<p>`
//! 3. **Publish date**: JSON-LD and meta tags (see [`metadata`])
//!
//! Parsing is pure and testable from static HTML; only [`fetch_article`]
//! touches the network.

pub mod metadata;

use crate::models::Article;
use reqwest::Client;
use scraper::{Html, Selector};
use std::error::Error;
use tracing::{debug, info, instrument};
use url::Url;

/// User-Agent sent with the article request. Some outlets return stub
/// pages to clients that do not look like a browser.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";

/// Build the HTTP client used for article fetching.
pub fn http_client() -> Result<Client, reqwest::Error> {
    Client::builder().user_agent(USER_AGENT).build()
}

/// Fetch a news article and extract its readable content.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - Absolute URL of the article
///
/// # Returns
///
/// The parsed [`Article`], or an error if the request fails, returns a
/// non-success status, or the page holds no readable body text.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn fetch_article(client: &Client, url: &Url) -> Result<Article, Box<dyn Error>> {
    let response = client.get(url.clone()).send().await?.error_for_status()?;
    let html = response.text().await?;
    debug!(bytes = html.len(), "Downloaded article page");

    let article = parse_article(&html)?;
    info!(
        title = %article.title,
        body_bytes = article.text.len(),
        publish_date = ?article.publish_date,
        "Parsed article"
    );
    Ok(article)
}

/// Extract title, body text, and publish date from raw HTML.
pub fn parse_article(html: &str) -> Result<Article, Box<dyn Error>> {
    let document = Html::parse_document(html);

    let title = metadata::title(&document);
    let publish_date = metadata::publish_date(&document);
    let text = extract_body(&document)?;

    if text.is_empty() {
        return Err("no readable article content".into());
    }

    Ok(Article {
        title,
        text,
        publish_date,
    })
}

/// Collect paragraph text, preferring paragraphs inside an `<article>`
/// element over the page at large.
fn extract_body(document: &Html) -> Result<String, Box<dyn Error>> {
    let article_paragraphs = Selector::parse("article p")?;
    let any_paragraphs = Selector::parse("p")?;

    let mut paragraphs = collect_paragraphs(document, &article_paragraphs);
    if paragraphs.is_empty() {
        paragraphs = collect_paragraphs(document, &any_paragraphs);
    }

    Ok(paragraphs.join("\n"))
}

fn collect_paragraphs(document: &Html, selector: &Selector) -> Vec<String> {
    document
        .select(selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}
