//! Sentence segmentation over article text.
//!
//! Splitting is delegated to the UAX #29 sentence-boundary rules from
//! `unicode-segmentation`; nothing here inspects sentence content.

use unicode_segmentation::UnicodeSegmentation;

/// Split text into trimmed, non-empty sentences in document order.
pub fn sentences(text: &str) -> Vec<&str> {
    text.unicode_sentences()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
