//! Rendering helpers for the narrative store.
//!
//! File banner:
//!   === Weather Journal ===
//!   Created on: YYYY-MM-DD HH:MM:SS
//!   ==================================================
//!
//! Entry block:
//!   === Weather Journal Entry ===
//!   Date: <timestamp>
//!   Location: <city>
//!   Weather: <temp>°C, <description>
//!   Mood: <mood>
//!   Notes: <notes>
//!   ==================================================

use crate::entry::JournalEntry;
use chrono::NaiveDateTime;

/// First line of a fresh narrative store.
pub const BANNER_TITLE: &str = "=== Weather Journal ===";
/// Delimiter line every entry block starts with. Splitting the file on this
/// string yields the banner segment followed by one segment per entry.
pub const ENTRY_DELIMITER: &str = "=== Weather Journal Entry ===";
/// Width of the rule line closing the banner and each entry block.
pub const RULE_WIDTH: usize = 50;
/// Timestamp format used everywhere in both stores.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The fixed-width `=` rule line.
pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Renders the creation banner written once when the store is first created.
pub fn format_banner(created: NaiveDateTime) -> String {
    format!(
        "{BANNER_TITLE}\nCreated on: {}\n{}\n\n",
        format_timestamp(created),
        rule()
    )
}

/// Renders one entry block, including the leading newline that separates it
/// from the previous block and the trailing blank line.
pub fn format_entry_block(entry: &JournalEntry) -> String {
    format!(
        "\n{ENTRY_DELIMITER}\nDate: {}\nLocation: {}\nWeather: {}\u{b0}C, {}\nMood: {}\nNotes: {}\n{}\n\n",
        format_timestamp(entry.timestamp),
        entry.city,
        entry.temperature,
        entry.description,
        entry.mood_label(),
        entry.notes,
        rule()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::Mood;
    use chrono::NaiveDate;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 8, 15)
            .unwrap()
            .and_hms_opt(9, 30, 5)
            .unwrap()
    }

    #[test]
    fn rule_is_fifty_chars() {
        assert_eq!(rule().len(), 50);
        assert!(rule().chars().all(|c| c == '='));
    }

    #[test]
    fn banner_has_title_timestamp_and_rule() {
        let s = format_banner(ts());
        let mut lines = s.lines();
        assert_eq!(lines.next(), Some(BANNER_TITLE));
        assert_eq!(lines.next(), Some("Created on: 2025-08-15 09:30:05"));
        assert_eq!(lines.next(), Some(rule().as_str()));
        assert!(s.ends_with("\n\n"));
    }

    #[test]
    fn entry_block_renders_all_fields() {
        let entry = JournalEntry {
            timestamp: ts(),
            city: "Madrid".to_string(),
            temperature: 31.5,
            description: "clear sky".to_string(),
            mood: Some(Mood::Content),
            notes: "terrace evening".to_string(),
        };
        let s = format_entry_block(&entry);
        assert!(s.starts_with(&format!("\n{ENTRY_DELIMITER}\n")));
        assert!(s.contains("Date: 2025-08-15 09:30:05\n"));
        assert!(s.contains("Location: Madrid\n"));
        assert!(s.contains("Weather: 31.5\u{b0}C, clear sky\n"));
        assert!(s.contains("Mood: Content\n"));
        assert!(s.contains("Notes: terrace evening\n"));
        assert!(s.ends_with(&format!("{}\n\n", rule())));
    }

    #[test]
    fn entry_block_with_no_mood_leaves_label_empty() {
        let entry = JournalEntry {
            timestamp: ts(),
            city: "Oslo".to_string(),
            temperature: -2.0,
            description: "snow".to_string(),
            mood: None,
            notes: "quiet".to_string(),
        };
        let s = format_entry_block(&entry);
        assert!(s.contains("Mood: \n"));
    }
}
