//! Event trigger words and matching against article text.
//!
//! A trigger word is a hard-coded term used as a heuristic signal that a
//! sentence describes a newsworthy event. The list is a process-wide
//! constant; the compiled pattern is case-insensitive and anchored on word
//! boundaries so `announced` matches but `announcedly` does not.

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;

/// The fixed trigger word list.
pub const TRIGGER_WORDS: &[&str] = &[
    "announced",
    "passed",
    "introduced",
    "unveiled",
    "declared",
    "debated",
    "discussed",
    "hearing",
    "reviewed",
    "rejected",
    "voted",
    "implemented",
    "enforced",
    "issued",
    "ruled",
    "guideline",
    "regulation",
    "challenged",
    "appealed",
    "protested",
    "supported",
    "poll",
    "report",
    "study",
    "signed",
    "agreed",
    "treaty",
    "consultation",
    "emergency",
    "imposed",
    "urgent",
    "order",
    "plan",
    "sit-in",
    "striked",
    "okayed",
    "formed",
    "rallies",
];

/// Compiled once at first use; the alternation is built from
/// [`TRIGGER_WORDS`] verbatim.
static TRIGGER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let alternation = TRIGGER_WORDS.join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).expect("trigger pattern must compile")
});

/// Whether the given sentence mentions any trigger word.
pub fn mentions_trigger(sentence: &str) -> bool {
    TRIGGER_PATTERN.is_match(sentence)
}

/// Collect the trigger words matched anywhere in `text`.
///
/// Matches are lowercased and de-duplicated with first-occurrence order
/// preserved, giving the set semantics of the event-type field while
/// keeping the result deterministic.
pub fn matched_in(text: &str) -> Vec<String> {
    TRIGGER_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .unique()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mentions_trigger_case_insensitive() {
        assert!(mentions_trigger("The ministry ANNOUNCED new tariffs."));
        assert!(mentions_trigger("Lawmakers voted on the measure."));
        assert!(!mentions_trigger("The weather was mild and sunny."));
    }

    #[test]
    fn test_word_boundaries_respected() {
        assert!(!mentions_trigger("He announcedly left the room."));
        assert!(!mentions_trigger("The pollster called."));
        assert!(mentions_trigger("A new poll shows support slipping."));
    }

    #[test]
    fn test_hyphenated_trigger_matches() {
        assert!(mentions_trigger("Workers staged a sit-in at the plant."));
        assert_eq!(
            matched_in("Workers staged a sit-in at the plant."),
            vec!["sit-in".to_string()]
        );
    }

    #[test]
    fn test_matched_in_dedupes_and_lowercases() {
        let text = "Voted on Monday. VOTED again Tuesday. Then they announced it.";
        assert_eq!(
            matched_in(text),
            vec!["voted".to_string(), "announced".to_string()]
        );
    }

    #[test]
    fn test_matched_in_empty_text() {
        assert!(matched_in("").is_empty());
        assert!(matched_in("Nothing eventful here.").is_empty());
    }

    #[test]
    fn test_every_trigger_word_matches_itself() {
        for word in TRIGGER_WORDS {
            assert!(mentions_trigger(word), "pattern missed {word}");
        }
    }
}
