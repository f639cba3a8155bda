//! JSON rendering of the event summary.

use crate::models::EventSummary;
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Serialize the summary as pretty-printed JSON.
pub fn render(summary: &EventSummary) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(summary)
}

/// Write the JSON summary to a file.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn write_summary(summary: &EventSummary, path: &str) -> Result<(), Box<dyn Error>> {
    let json = render(summary)?;
    fs::write(path, json).await?;
    info!("Wrote JSON summary");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventArguments;

    fn summary() -> EventSummary {
        EventSummary {
            title: "Headline".to_string(),
            event_type: "announced".to_string(),
            description: "It was announced.".to_string(),
            entities: vec![],
            arguments: EventArguments::default(),
            publish_date: "Unknown".to_string(),
            source: "https://example.com".to_string(),
        }
    }

    #[test]
    fn test_render_is_valid_json_with_role_keys() {
        let json = render(&summary()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["event_type"], "announced");
        assert!(value["arguments"]["Actor"].is_array());
        assert!(value["arguments"]["Time"].is_array());
    }

    #[tokio::test]
    async fn test_write_summary_creates_file() {
        let dir = std::env::temp_dir().join("news_event_extractor_test");
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let path = dir.join("summary.json");
        let path = path.to_str().unwrap();

        write_summary(&summary(), path).await.unwrap();
        let written = tokio::fs::read_to_string(path).await.unwrap();
        assert!(written.contains("\"event_type\""));

        let _ = tokio::fs::remove_file(path).await;
    }
}
