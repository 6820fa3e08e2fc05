//! Splitting the narrative store into raw entry blocks.
//!
//! The narrative file starts with a creation banner, followed by zero or more
//! blocks each introduced by the `=== Weather Journal Entry ===` line.
//! Splitting on that delimiter yields the banner first; everything after it is
//! one raw block per entry, returned verbatim (fields, closing rule and the
//! blank line included).

use crate::render::ENTRY_DELIMITER;

/// Splits the full narrative content into raw entry blocks, in file order.
///
/// The pre-delimiter banner segment is discarded and never comes back as an
/// entry.
pub fn split_entry_blocks(content: &str) -> Vec<String> {
    content
        .split(ENTRY_DELIMITER)
        .skip(1)
        .map(ToString::to_string)
        .collect()
}

/// Case-insensitive substring search over whole rendered blocks.
pub fn search_blocks(content: &str, query: &str) -> Vec<String> {
    let needle = query.to_lowercase();
    split_entry_blocks(content)
        .into_iter()
        .filter(|block| block.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::JournalEntry;
    use crate::mood::Mood;
    use crate::render::{format_banner, format_entry_block};
    use chrono::NaiveDate;

    fn sample_content() -> String {
        let ts = NaiveDate::from_ymd_opt(2025, 8, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let first = JournalEntry {
            timestamp: ts,
            city: "London".to_string(),
            temperature: 18.0,
            description: "light rain".to_string(),
            mood: Some(Mood::Peaceful),
            notes: "picnic day".to_string(),
        };
        let second = JournalEntry {
            timestamp: ts,
            city: "London".to_string(),
            temperature: 22.0,
            description: "clear sky".to_string(),
            mood: Some(Mood::Happy),
            notes: "long walk".to_string(),
        };
        let mut content = format_banner(ts);
        content.push_str(&format_entry_block(&first));
        content.push_str(&format_entry_block(&second));
        content
    }

    #[test]
    fn split_discards_the_banner() {
        let blocks = split_entry_blocks(&sample_content());
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].contains("picnic day"));
        assert!(blocks[1].contains("long walk"));
        assert!(!blocks[0].contains("Created on"));
    }

    #[test]
    fn split_of_banner_only_content_is_empty() {
        let ts = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(split_entry_blocks(&format_banner(ts)).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_and_scoped_to_blocks() {
        let content = sample_content();
        let hits = search_blocks(&content, "PICNIC");
        assert_eq!(hits.len(), 1);
        assert!(hits[0].contains("picnic day"));
        assert!(search_blocks(&content, "nonexistent").is_empty());
    }
}
