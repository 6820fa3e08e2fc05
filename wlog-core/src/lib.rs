pub mod config;
pub mod entry;
pub mod journal;
pub mod mood;
pub mod parse_entries;
pub mod paths;
pub mod render;
pub mod tabular;

pub use config::Config;
pub use entry::{JournalEntry, WeatherObservation};
pub use journal::{
    BlockQuery, DateRangeResult, ExportFormat, Journal, JournalSummary, QueryError,
};
pub use mood::Mood;
