//! Title and publish-date extraction from page metadata.
//!
//! News pages carry their publish date in a handful of places; this module
//! checks them in decreasing order of reliability:
//!
//! 1. JSON-LD `datePublished`, including inside `@graph` containers
//! 2. `article:published_time` meta tag
//! 3. `date` meta tag
//! 4. The first `<time datetime>` attribute
//!
//! Accepted value formats are RFC 3339, RFC 3339 without the offset colon,
//! and bare `YYYY-MM-DD` (read as midnight UTC).

use chrono::{DateTime, FixedOffset, NaiveDate};
use scraper::{Html, Selector};
use tracing::debug;

/// Extract the article headline.
///
/// `og:title` is preferred because `<title>` usually carries a site-name
/// suffix. Falls back to `<title>`, then the first `<h1>`, then empty.
pub fn title(document: &Html) -> String {
    if let Some(meta) = select_attr(document, r#"meta[property="og:title"]"#, "content") {
        return meta;
    }

    for selector in ["title", "h1"] {
        if let Ok(sel) = Selector::parse(selector) {
            if let Some(element) = document.select(&sel).next() {
                let text = element.text().collect::<String>().trim().to_string();
                if !text.is_empty() {
                    return text;
                }
            }
        }
    }

    String::new()
}

/// Extract the publish date from page metadata, if any source carries one.
pub fn publish_date(document: &Html) -> Option<DateTime<FixedOffset>> {
    let raw = jsonld_date(document)
        .or_else(|| select_attr(document, r#"meta[property="article:published_time"]"#, "content"))
        .or_else(|| select_attr(document, r#"meta[name="date"]"#, "content"))
        .or_else(|| select_attr(document, "time[datetime]", "datetime"))?;

    let parsed = parse_datetime(raw.trim());
    if parsed.is_none() {
        debug!(raw = %raw, "Publish date present but unparseable");
    }
    parsed
}

/// First `datePublished` value found in the page's JSON-LD blocks.
fn jsonld_date(document: &Html) -> Option<String> {
    let scripts = Selector::parse(r#"script[type="application/ld+json"]"#).ok()?;

    for script in document.select(&scripts) {
        let raw = script.text().collect::<String>();
        let Ok(json) = serde_json::from_str::<serde_json::Value>(raw.trim()) else {
            continue;
        };
        if let Some(date) = find_date_published(&json) {
            return Some(date);
        }
    }
    None
}

/// Walk a JSON-LD value looking for `datePublished`. Publishers wrap the
/// article node in arrays or an `@graph` container, so both are descended.
fn find_date_published(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Object(map) => {
            if let Some(date) = map.get("datePublished").and_then(|d| d.as_str()) {
                return Some(date.to_string());
            }
            map.get("@graph").and_then(find_date_published)
        }
        serde_json::Value::Array(items) => items.iter().find_map(find_date_published),
        _ => None,
    }
}

/// Parse a metadata date value into a fixed-offset datetime.
pub(crate) fn parse_datetime(raw: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date);
    }
    if let Ok(date) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc().fixed_offset());
    }
    None
}

fn select_attr(document: &Html, selector: &str, attr: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    document
        .select(&sel)
        .find_map(|element| element.value().attr(attr))
        .map(|value| value.to_string())
        .filter(|value| !value.is_empty())
}
