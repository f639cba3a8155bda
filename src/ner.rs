//! Named-entity recognition behind a pretrained language model.
//!
//! Recognition is delegated to an OpenAI-compatible chat-completions
//! endpoint: one request per article, a fixed system prompt pinning the
//! label inventory and reply shape, and a strict JSON reply. The module
//! owns nothing linguistic; it is a thin, typed client.
//!
//! The [`RecognizeEntities`] trait is the seam between the pipeline and
//! the model so that summary construction stays testable offline.

use crate::config::RecognizerConfig;
use crate::models::Entity;
use crate::utils::truncate_for_log;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Instructions sent as the system message. The label inventory matches
/// [`crate::models::EntityLabel`]; the reply must be a bare JSON object.
const SYSTEM_PROMPT: &str = "You are a named-entity recognition engine. \
Extract every named entity mentioned in the user's text, in order of appearance. \
Label each entity with exactly one of: PERSON, NORP, ORG, GPE, LOC, PRODUCT, WORK_OF_ART, DATE. \
Respond with only a JSON object of the form \
{\"entities\": [{\"text\": \"<entity text>\", \"label\": \"<LABEL>\"}]} \
and no other commentary.";

/// Trait for components that can recognize entities in text.
pub trait RecognizeEntities {
    /// Run entity recognition over the full text.
    async fn recognize(&self, text: &str) -> Result<Vec<Entity>, Box<dyn Error>>;
}

/// Entity recognizer backed by an OpenAI-compatible chat endpoint.
///
/// Constructed once at process start; holds the HTTP client and resolved
/// endpoint settings for the rest of the run.
#[derive(Debug)]
pub struct LlmRecognizer {
    client: Client,
    config: RecognizerConfig,
}

impl LlmRecognizer {
    /// Build the recognizer and its HTTP client.
    pub fn new(config: RecognizerConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(Duration::from_secs(120)).build()?;
        Ok(Self { client, config })
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[derive(Deserialize)]
struct EntityReply {
    entities: Vec<Entity>,
}

impl RecognizeEntities for LlmRecognizer {
    #[instrument(level = "info", skip_all, fields(model = %self.config.model, text_bytes = text.len()))]
    async fn recognize(&self, text: &str) -> Result<Vec<Entity>, Box<dyn Error>> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let t0 = Instant::now();
        let mut builder = self.client.post(self.config.completions_url()).json(&request);
        if let Some(key) = &self.config.api_key {
            builder = builder.bearer_auth(key);
        }
        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, body = %truncate_for_log(&body, 300), "Recognition endpoint refused the request");
            return Err(format!("recognition endpoint returned {status}").into());
        }

        let reply: ChatResponse = response.json().await?;
        let content = reply
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or("recognition reply held no choices")?;
        debug!(
            elapsed_ms = t0.elapsed().as_millis() as u64,
            reply_bytes = content.len(),
            "Recognition reply received"
        );

        let entities = parse_entity_reply(content).map_err(|e| {
            warn!(
                error = %e,
                reply_preview = %truncate_for_log(content, 300),
                "Model returned non-conforming JSON"
            );
            e
        })?;

        info!(count = entities.len(), "Recognized entities");
        Ok(entities)
    }
}

/// Parse the model reply into an entity list, tolerating code-fence
/// wrapping around the JSON object.
pub(crate) fn parse_entity_reply(reply: &str) -> Result<Vec<Entity>, serde_json::Error> {
    let reply: EntityReply = serde_json::from_str(strip_code_fence(reply))?;
    Ok(reply.entities)
}

fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityLabel;

    #[test]
    fn test_parse_entity_reply_plain_json() {
        let reply = r#"{"entities": [
            {"text": "Angela Merkel", "label": "PERSON"},
            {"text": "Berlin", "label": "GPE"}
        ]}"#;
        let entities = parse_entity_reply(reply).unwrap();
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].text, "Angela Merkel");
        assert_eq!(entities[0].label, EntityLabel::Person);
        assert_eq!(entities[1].label, EntityLabel::Gpe);
    }

    #[test]
    fn test_parse_entity_reply_fenced_json() {
        let reply = "```json\n{\"entities\": [{\"text\": \"NATO\", \"label\": \"ORG\"}]}\n```";
        let entities = parse_entity_reply(reply).unwrap();
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].label, EntityLabel::Org);
    }

    #[test]
    fn test_parse_entity_reply_bare_fence() {
        let reply = "```\n{\"entities\": []}\n```";
        assert!(parse_entity_reply(reply).unwrap().is_empty());
    }

    #[test]
    fn test_parse_entity_reply_unknown_label_is_kept() {
        let reply = r#"{"entities": [{"text": "90%", "label": "PERCENT"}]}"#;
        let entities = parse_entity_reply(reply).unwrap();
        assert_eq!(entities[0].label, EntityLabel::Other);
    }

    #[test]
    fn test_parse_entity_reply_rejects_prose() {
        assert!(parse_entity_reply("Here are the entities you asked for!").is_err());
    }

    struct CannedRecognizer(Vec<Entity>);

    impl RecognizeEntities for CannedRecognizer {
        async fn recognize(&self, _text: &str) -> Result<Vec<Entity>, Box<dyn Error>> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_trait_seam_with_canned_recognizer() {
        let recognizer = CannedRecognizer(vec![Entity {
            text: "Reuters".to_string(),
            label: EntityLabel::Org,
        }]);
        let entities = recognizer.recognize("ignored").await.unwrap();
        assert_eq!(entities.len(), 1);
    }
}
