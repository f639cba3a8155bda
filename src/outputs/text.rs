//! Terminal key/value rendering of the event summary.

use crate::models::EventSummary;
use std::fmt::Write;

/// Render the summary as an aligned key/value display.
///
/// Mirrors the field order of the JSON output: title, event type,
/// description, entities, arguments, publish date, source URL.
pub fn render(summary: &EventSummary) -> String {
    let mut out = String::new();

    writeln!(out, "Title:             {}", summary.title).unwrap();
    writeln!(out, "Event Type:        {}", summary.event_type).unwrap();
    writeln!(out, "Event Description: {}", summary.description).unwrap();

    writeln!(out, "Entities:").unwrap();
    if summary.entities.is_empty() {
        writeln!(out, "  (none)").unwrap();
    }
    for entity in &summary.entities {
        writeln!(out, "  {} ({})", entity.text, entity.label).unwrap();
    }

    writeln!(out, "Arguments:").unwrap();
    let arguments = &summary.arguments;
    for (role, values) in [
        ("Actor", &arguments.actor),
        ("Action", &arguments.action),
        ("Target", &arguments.target),
        ("Location", &arguments.location),
        ("Time", &arguments.time),
    ] {
        writeln!(out, "  {:<9} {}", format!("{role}:"), values.join(", ")).unwrap();
    }

    writeln!(out, "Publish Date:      {}", summary.publish_date).unwrap();
    writeln!(out, "URL:               {}", summary.source).unwrap();

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entity, EntityLabel, EventArguments};

    fn summary() -> EventSummary {
        EventSummary {
            title: "Senate passes budget bill".to_string(),
            event_type: "passed, voted".to_string(),
            description: "The Senate voted 52-48 on Tuesday.".to_string(),
            entities: vec![Entity {
                text: "Senate".to_string(),
                label: EntityLabel::Org,
            }],
            arguments: EventArguments {
                actor: vec!["Senate".to_string()],
                action: vec!["passed".to_string(), "voted".to_string()],
                target: vec!["Senate".to_string()],
                location: vec![],
                time: vec!["Tuesday".to_string()],
            },
            publish_date: "2025-05-06 09:00:00".to_string(),
            source: "https://example.com/article".to_string(),
        }
    }

    #[test]
    fn test_render_contains_every_section() {
        let out = render(&summary());
        assert!(out.contains("Title:             Senate passes budget bill"));
        assert!(out.contains("Event Type:        passed, voted"));
        assert!(out.contains("Event Description: The Senate voted 52-48 on Tuesday."));
        assert!(out.contains("Senate (ORG)"));
        assert!(out.contains("Actor:    Senate"));
        assert!(out.contains("Action:   passed, voted"));
        assert!(out.contains("Time:     Tuesday"));
        assert!(out.contains("Publish Date:      2025-05-06 09:00:00"));
        assert!(out.contains("URL:               https://example.com/article"));
    }

    #[test]
    fn test_render_empty_entity_list() {
        let mut s = summary();
        s.entities.clear();
        let out = render(&s);
        assert!(out.contains("Entities:\n  (none)"));
    }
}
