//! The core `Journal` struct and its associated types, providing the primary API for interaction.
//!
//! Every write appends to two synchronized stores: a narrative text file for
//! human reading and a tabular file the analytics scan. Analytics re-read the
//! tabular store on every call, so each query costs O(total entries); at
//! journal scale that is the accepted baseline. The journal assumes a single
//! process with a single writer: no file locking, no transaction log. If
//! concurrent access is ever needed, route all writes through one serializing
//! owner of the store handles.

use crate::config::Config;
use crate::entry::JournalEntry;
use crate::parse_entries::{search_blocks, split_entry_blocks};
use crate::paths;
use crate::render;
use crate::tabular::{self, Row};
use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use strum_macros::{Display, EnumIter, EnumString};

/// The central struct for all journal operations.
///
/// An instance of `Journal` holds the configuration and provides methods for
/// reading from and writing to the journal stores.
#[derive(Debug)]
pub struct Journal {
    pub config: Config,
}

/// Represents a non-critical issue that occurred during a query.
///
/// This is used to report problems (e.g., malformed rows, unreadable files)
/// without stopping a larger scan.
#[derive(Debug)]
pub enum QueryError {
    MalformedRow { line: usize, error: String },
    FileError { path: PathBuf, error: anyhow::Error },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::MalformedRow { line, error } => {
                write!(f, "skipped malformed row at line {line}: {error}")
            }
            QueryError::FileError { path, error } => {
                write!(f, "could not read {}: {error}", path.display())
            }
        }
    }
}

/// Raw narrative blocks matched by a query, plus any warnings hit on the way.
#[derive(Debug)]
pub struct BlockQuery {
    pub blocks: Vec<String>,
    pub errors: Vec<QueryError>,
}

/// Earliest and latest entry timestamps. Both are `None` on an empty journal;
/// rows whose timestamp does not parse are skipped and reported in `errors`.
#[derive(Debug)]
pub struct DateRangeResult {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub errors: Vec<QueryError>,
}

/// Day-precision date range as rendered in a [`JournalSummary`].
#[derive(Debug, Serialize)]
pub struct DateRangeSummary {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Aggregate view of the whole journal.
#[derive(Debug, Serialize)]
pub struct JournalSummary {
    pub total_entries: usize,
    pub date_range: DateRangeSummary,
    pub mood_statistics: HashMap<String, u32>,
    pub most_common_mood: Option<String>,
}

/// Formats the journal can be exported as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExportFormat {
    Txt,
    Csv,
    Json,
}

struct RowScan {
    rows: Vec<Row>,
    errors: Vec<QueryError>,
}

impl Journal {
    /// Creates a new `Journal` instance, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config)
    }

    /// Creates a new `Journal` instance with a specific `Config`.
    ///
    /// This also ensures that the data directory and the narrative store exist.
    pub fn with_config(config: Config) -> Result<Self> {
        let journal = Self { config };
        journal.ensure_store()?;
        Ok(journal)
    }

    /// Creates the narrative store with its banner if it does not exist yet.
    ///
    /// Idempotent: an existing store is never touched.
    pub fn ensure_store(&self) -> Result<()> {
        fs::create_dir_all(&self.config.data_dir)
            .with_context(|| format!("creating {}", self.config.data_dir.display()))?;
        let path = paths::narrative_path(&self.config.data_dir);
        if path.exists() {
            return Ok(());
        }
        fs::write(&path, render::format_banner(Local::now().naive_local()))
            .with_context(|| format!("creating {}", path.display()))?;
        Ok(())
    }

    /// Appends an entry to both stores.
    ///
    /// The narrative block is written first, then the tabular row (writing the
    /// header row once, before the first entry). The two appends are best
    /// effort: there is no rollback of the narrative write if the tabular
    /// write fails, so a failure here can leave the stores one entry apart.
    pub fn save_entry(&self, entry: &JournalEntry) -> Result<()> {
        if !entry.has_reflection() {
            bail!("a journal entry needs a mood or some notes");
        }
        self.ensure_store()?;

        let narrative = paths::narrative_path(&self.config.data_dir);
        let mut file = OpenOptions::new()
            .append(true)
            .open(&narrative)
            .with_context(|| format!("opening {}", narrative.display()))?;
        write!(file, "{}", render::format_entry_block(entry))
            .with_context(|| format!("appending entry to {}", narrative.display()))?;

        self.append_row(&Row::from_entry(entry))
    }

    fn append_row(&self, row: &Row) -> Result<()> {
        let path = paths::tabular_path(&self.config.data_dir);
        let is_new = !path.exists();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening {}", path.display()))?;
        if is_new {
            writeln!(file, "{}", tabular::HEADER)
                .with_context(|| format!("writing header to {}", path.display()))?;
        }
        writeln!(file, "{}", row.to_line())
            .with_context(|| format!("appending row to {}", path.display()))?;
        Ok(())
    }

    /// Returns the last `limit` entry blocks, in file order (oldest of the
    /// selection first). A missing store yields an empty result.
    pub fn recent_entries(&self, limit: usize) -> BlockQuery {
        let (content, errors) = self.narrative_content();
        let blocks = split_entry_blocks(&content);
        let skip = blocks.len().saturating_sub(limit);
        BlockQuery {
            blocks: blocks.into_iter().skip(skip).collect(),
            errors,
        }
    }

    /// Case-insensitive substring search over whole rendered entry blocks.
    /// Returns all matches in file order.
    pub fn search_entries(&self, query: &str) -> BlockQuery {
        let (content, errors) = self.narrative_content();
        BlockQuery {
            blocks: search_blocks(&content, query),
            errors,
        }
    }

    /// How often each mood label occurs across the journal. Rows with an
    /// empty mood are not counted.
    pub fn mood_statistics(&self) -> HashMap<String, u32> {
        self.mood_counts_ordered(&self.scan_rows().rows)
            .into_iter()
            .collect()
    }

    /// Two-level frequency table: lowercased weather description to mood
    /// counts. Rows with an empty mood still register the description.
    pub fn weather_mood_correlation(&self) -> HashMap<String, HashMap<String, u32>> {
        let mut table: HashMap<String, HashMap<String, u32>> = HashMap::new();
        for row in self.scan_rows().rows {
            let moods = table.entry(row.description.to_lowercase()).or_default();
            if !row.mood.is_empty() {
                *moods.entry(row.mood).or_insert(0) += 1;
            }
        }
        table
    }

    /// Earliest and latest timestamps in the journal. Rows whose timestamp
    /// does not parse are skipped and reported, not fatal.
    pub fn date_range(&self) -> DateRangeResult {
        let scan = self.scan_rows();
        let mut errors = scan.errors;
        let mut start: Option<NaiveDateTime> = None;
        let mut end: Option<NaiveDateTime> = None;
        for (index, row) in scan.rows.iter().enumerate() {
            match NaiveDateTime::parse_from_str(&row.timestamp, render::TIMESTAMP_FORMAT) {
                Ok(ts) => {
                    start = Some(start.map_or(ts, |s| s.min(ts)));
                    end = Some(end.map_or(ts, |e| e.max(ts)));
                }
                Err(e) => errors.push(QueryError::MalformedRow {
                    // +2: one for the header row, one for 1-based lines.
                    line: index + 2,
                    error: format!("bad timestamp {:?}: {e}", row.timestamp),
                }),
            }
        }
        DateRangeResult { start, end, errors }
    }

    /// Number of entries in the tabular store, header excluded.
    pub fn entry_count(&self) -> usize {
        self.scan_rows().rows.len()
    }

    /// Returns the path of the export artifact for `format`.
    ///
    /// `txt` and `csv` are the stores themselves, no copy is made. `json`
    /// materializes a fresh array-of-objects file from the tabular rows,
    /// overwriting any previous export; it fails when the tabular store does
    /// not exist yet.
    pub fn export(&self, format: ExportFormat) -> Result<PathBuf> {
        match format {
            ExportFormat::Txt => Ok(paths::narrative_path(&self.config.data_dir)),
            ExportFormat::Csv => Ok(paths::tabular_path(&self.config.data_dir)),
            ExportFormat::Json => self.export_json(),
        }
    }

    fn export_json(&self) -> Result<PathBuf> {
        let tabular = paths::tabular_path(&self.config.data_dir);
        if !tabular.exists() {
            bail!("nothing to export: {} does not exist", tabular.display());
        }
        let scan = self.scan_rows();
        let json = serde_json::to_string_pretty(&scan.rows).context("serializing journal rows")?;
        let dest = paths::json_export_path(&self.config.data_dir);
        fs::write(&dest, json).with_context(|| format!("writing {}", dest.display()))?;
        Ok(dest)
    }

    /// Copies the narrative store to a timestamped backup file and returns
    /// its path. The copy is byte-for-byte; there is no locking against a
    /// concurrent writer.
    pub fn backup(&self) -> Result<PathBuf> {
        let src = paths::narrative_path(&self.config.data_dir);
        let dest = paths::backup_path(&self.config.data_dir, Local::now().naive_local());
        fs::copy(&src, &dest)
            .with_context(|| format!("copying {} to {}", src.display(), dest.display()))?;
        Ok(dest)
    }

    /// Aggregate view: entry count, day-precision date range, mood counts and
    /// the most common mood (ties go to the mood seen first in the journal).
    pub fn summary(&self) -> JournalSummary {
        let scan = self.scan_rows();
        let counts = self.mood_counts_ordered(&scan.rows);
        let range = self.date_range();

        let mut most_common: Option<(&str, u32)> = None;
        for (mood, count) in &counts {
            if most_common.is_none_or(|(_, best)| *count > best) {
                most_common = Some((mood.as_str(), *count));
            }
        }

        JournalSummary {
            total_entries: scan.rows.len(),
            date_range: DateRangeSummary {
                start: range.start.map(|d| d.format("%Y-%m-%d").to_string()),
                end: range.end.map(|d| d.format("%Y-%m-%d").to_string()),
            },
            most_common_mood: most_common.map(|(mood, _)| mood.to_string()),
            mood_statistics: counts.into_iter().collect(),
        }
    }

    /// Deleting a single entry is not supported: the journal is append-only.
    /// Always fails cleanly and never touches the stores.
    pub fn delete_entry(&self, index: usize) -> Result<()> {
        bail!("cannot delete entry {index}: the journal is append-only");
    }

    /// Mood label to count, in first-encountered order. The order is what
    /// gives [`Journal::summary`] its stable tie-break.
    fn mood_counts_ordered(&self, rows: &[Row]) -> Vec<(String, u32)> {
        let mut counts: Vec<(String, u32)> = Vec::new();
        for row in rows {
            if row.mood.is_empty() {
                continue;
            }
            match counts.iter_mut().find(|(mood, _)| *mood == row.mood) {
                Some((_, count)) => *count += 1,
                None => counts.push((row.mood.clone(), 1)),
            }
        }
        counts
    }

    fn narrative_content(&self) -> (String, Vec<QueryError>) {
        let path = paths::narrative_path(&self.config.data_dir);
        if !path.exists() {
            return (String::new(), Vec::new());
        }
        match fs::read_to_string(&path) {
            Ok(content) => (content, Vec::new()),
            Err(error) => (
                String::new(),
                vec![QueryError::FileError {
                    path,
                    error: error.into(),
                }],
            ),
        }
    }

    fn scan_rows(&self) -> RowScan {
        let path = paths::tabular_path(&self.config.data_dir);
        if !path.exists() {
            return RowScan {
                rows: Vec::new(),
                errors: Vec::new(),
            };
        }
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(error) => {
                return RowScan {
                    rows: Vec::new(),
                    errors: vec![QueryError::FileError {
                        path,
                        error: error.into(),
                    }],
                };
            }
        };

        let mut rows = Vec::new();
        let mut errors = Vec::new();
        for (index, record) in tabular::parse_records(&content).into_iter().enumerate() {
            // The first record is the header, written exactly once.
            if index == 0 {
                continue;
            }
            match Row::from_record(record) {
                Ok(row) => rows.push(row),
                Err(error) => errors.push(QueryError::MalformedRow {
                    line: index + 1,
                    error: error.to_string(),
                }),
            }
        }
        RowScan { rows, errors }
    }
}
