//! Event summary construction.
//!
//! Pure, deterministic assembly of the [`EventSummary`] from a parsed
//! article and a recognized entity list. No I/O happens here; the same
//! inputs always produce the same summary.

use crate::models::{Article, Entity, EventArguments, EventSummary};
use crate::{tokenize, triggers};
use tracing::{debug, instrument};
use url::Url;

/// Placeholder description when no sentence mentions a trigger word.
pub const NO_EVENT_DESCRIPTION: &str = "No specific event mentioned";
/// Placeholder event type when no trigger word occurs in the text.
pub const NO_EVENT_TYPE: &str = "None";
/// Sentinel for an unresolvable publish date.
pub const UNKNOWN_DATE: &str = "Unknown";

/// Build the event summary for one article.
///
/// # Arguments
///
/// * `article` - The fetched article
/// * `entities` - Entities recognized over the full body text
/// * `source` - The submitted URL, echoed into the summary
/// * `max_sentences` - Cap on sentences in the event description (1-10)
#[instrument(level = "info", skip_all, fields(max_sentences = max_sentences))]
pub fn build(
    article: &Article,
    entities: Vec<Entity>,
    source: &Url,
    max_sentences: usize,
) -> EventSummary {
    let description = event_description(&article.text, max_sentences);
    let matched = triggers::matched_in(&article.text);
    debug!(matched = ?matched, "Trigger words found in article");

    let event_type = if matched.is_empty() {
        NO_EVENT_TYPE.to_string()
    } else {
        matched.join(", ")
    };

    let arguments = bucket_arguments(&entities, matched);
    let publish_date = resolve_publish_date(article, &entities);

    EventSummary {
        title: article.title.clone(),
        event_type,
        description,
        entities,
        arguments,
        publish_date,
        source: source.to_string(),
    }
}

/// Select sentences that mention a trigger word, capped at `max_sentences`.
fn event_description(text: &str, max_sentences: usize) -> String {
    let selected: Vec<&str> = tokenize::sentences(text)
        .into_iter()
        .filter(|sentence| triggers::mentions_trigger(sentence))
        .take(max_sentences)
        .collect();

    if selected.is_empty() {
        NO_EVENT_DESCRIPTION.to_string()
    } else {
        selected.join(" ")
    }
}

/// Partition entity texts into argument roles by the fixed label mapping.
/// The Action role comes from the matched trigger words.
fn bucket_arguments(entities: &[Entity], matched_triggers: Vec<String>) -> EventArguments {
    let mut arguments = EventArguments {
        action: matched_triggers,
        ..EventArguments::default()
    };

    for entity in entities {
        if entity.label.is_actor() {
            arguments.actor.push(entity.text.clone());
        }
        if entity.label.is_target() {
            arguments.target.push(entity.text.clone());
        }
        if entity.label.is_location() {
            arguments.location.push(entity.text.clone());
        }
        if entity.label.is_time() {
            arguments.time.push(entity.text.clone());
        }
    }

    arguments
}

/// Resolve the publish date: parsed page metadata first, then the first
/// DATE entity in the text, then the unknown sentinel.
fn resolve_publish_date(article: &Article, entities: &[Entity]) -> String {
    if let Some(date) = article.publish_date {
        return date.format("%Y-%m-%d %H:%M:%S").to_string();
    }

    entities
        .iter()
        .find(|entity| entity.label.is_time())
        .map(|entity| entity.text.clone())
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}
