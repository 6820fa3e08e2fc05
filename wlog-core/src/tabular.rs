//! Reading and writing the tabular store.
//!
//! The store is a plain delimited-text file with a single header row
//! (`timestamp,city,temp,description,mood,notes`) followed by one row per
//! entry. Fields containing the delimiter, a quote or a line break are quoted
//! and embedded quotes are doubled, so the record parser has to accept quoted
//! fields spanning lines.

use crate::entry::JournalEntry;
use crate::render::format_timestamp;
use anyhow::{Result, bail};
use serde::Serialize;

/// Column names, in persisted order.
pub const COLUMNS: [&str; 6] = ["timestamp", "city", "temp", "description", "mood", "notes"];

/// The header line written exactly once, before the first row.
pub const HEADER: &str = "timestamp,city,temp,description,mood,notes";

/// One parsed row of the tabular store. All fields are kept as the raw text
/// found in the file; timestamp parsing happens at the analytics layer.
///
/// Field order matters: the JSON export serializes rows as objects and relies
/// on this declaration order matching [`COLUMNS`].
#[derive(Debug, Clone, Serialize)]
pub struct Row {
    pub timestamp: String,
    pub city: String,
    pub temp: String,
    pub description: String,
    pub mood: String,
    pub notes: String,
}

impl Row {
    pub fn from_entry(entry: &JournalEntry) -> Self {
        Self {
            timestamp: format_timestamp(entry.timestamp),
            city: entry.city.clone(),
            temp: entry.temperature.to_string(),
            description: entry.description.clone(),
            mood: entry.mood_label(),
            notes: entry.notes.clone(),
        }
    }

    /// Converts a raw parsed record into a `Row`, rejecting wrong arity.
    pub fn from_record(mut record: Vec<String>) -> Result<Self> {
        if record.len() != COLUMNS.len() {
            bail!(
                "expected {} fields, found {}",
                COLUMNS.len(),
                record.len()
            );
        }
        let notes = record.pop().unwrap_or_default();
        let mood = record.pop().unwrap_or_default();
        let description = record.pop().unwrap_or_default();
        let temp = record.pop().unwrap_or_default();
        let city = record.pop().unwrap_or_default();
        let timestamp = record.pop().unwrap_or_default();
        Ok(Self {
            timestamp,
            city,
            temp,
            description,
            mood,
            notes,
        })
    }

    /// Renders the row as one escaped line, without a trailing newline.
    pub fn to_line(&self) -> String {
        [
            &self.timestamp,
            &self.city,
            &self.temp,
            &self.description,
            &self.mood,
            &self.notes,
        ]
        .iter()
        .map(|f| escape_field(f))
        .collect::<Vec<_>>()
        .join(",")
    }
}

/// Quotes a field when it contains a delimiter, quote or line break.
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Parses the whole store content into raw records.
///
/// Handles quoted fields (including embedded delimiters, doubled quotes and
/// line breaks). Blank lines between records are ignored. An unterminated
/// quote at end of input closes the field rather than failing the scan.
pub fn parse_records(content: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    // Set once the current record has seen a delimiter or quoted field, so an
    // empty last field ("a,b,") is kept but a blank line is not.
    let mut has_structure = false;

    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }
        match c {
            '"' => {
                in_quotes = true;
                has_structure = true;
            }
            ',' => {
                record.push(std::mem::take(&mut field));
                has_structure = true;
            }
            '\r' | '\n' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                if has_structure || !field.is_empty() {
                    record.push(std::mem::take(&mut field));
                    records.push(std::mem::take(&mut record));
                }
                has_structure = false;
            }
            _ => field.push(c),
        }
    }
    if has_structure || !field.is_empty() {
        record.push(field);
        records.push(record);
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fields_pass_through() {
        assert_eq!(escape_field("light rain"), "light rain");
    }

    #[test]
    fn delimiters_quotes_and_newlines_get_quoted() {
        assert_eq!(escape_field("warm, humid"), "\"warm, humid\"");
        assert_eq!(escape_field("said \"hi\""), "\"said \"\"hi\"\"\"");
        assert_eq!(escape_field("line one\nline two"), "\"line one\nline two\"");
    }

    #[test]
    fn parse_simple_rows() {
        let records = parse_records("a,b,c\nd,e,f\n");
        assert_eq!(records, vec![vec!["a", "b", "c"], vec!["d", "e", "f"]]);
    }

    #[test]
    fn parse_skips_blank_lines_but_keeps_empty_fields() {
        let records = parse_records("a,,c\n\nd,e,\n");
        assert_eq!(records, vec![vec!["a", "", "c"], vec!["d", "e", ""]]);
    }

    #[test]
    fn quoted_fields_round_trip() {
        let row = Row {
            timestamp: "2025-08-15 09:30:05".to_string(),
            city: "Washington, D.C.".to_string(),
            temp: "21.5".to_string(),
            description: "light rain".to_string(),
            mood: "Happy".to_string(),
            notes: "she said \"picnic\"\nanyway".to_string(),
        };
        let line = row.to_line();
        let records = parse_records(&line);
        assert_eq!(records.len(), 1);
        let parsed = Row::from_record(records.into_iter().next().unwrap()).unwrap();
        assert_eq!(parsed.city, "Washington, D.C.");
        assert_eq!(parsed.notes, "she said \"picnic\"\nanyway");
        assert_eq!(parsed.timestamp, row.timestamp);
    }

    #[test]
    fn wrong_arity_is_rejected() {
        let err = Row::from_record(vec!["only".to_string(), "two".to_string()]).unwrap_err();
        assert!(err.to_string().contains("expected 6 fields"));
    }

    #[test]
    fn header_matches_columns() {
        assert_eq!(HEADER, COLUMNS.join(","));
    }
}
