use strum::IntoEnumIterator;
use wlog_core::journal::{BlockQuery, QueryError};
use wlog_core::render::ENTRY_DELIMITER;
use wlog_core::{JournalEntry, Mood, WeatherObservation};

/// Plain-text output for the terminal. All user-facing printing goes through
/// here so the modes stay free of formatting concerns.
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Renderer
    }

    pub fn print_info(&self, msg: &str) {
        println!("{msg}");
    }

    pub fn print_warning(&self, msg: &str) {
        eprintln!("warning: {msg}");
    }

    /// Prints the blocks of a query result, restoring the delimiter line the
    /// splitter consumed, and surfaces any scan warnings on stderr.
    pub fn print_blocks(&self, query: &BlockQuery) {
        for block in &query.blocks {
            println!("{ENTRY_DELIMITER}{}", block.trim_end());
            println!();
        }
        self.print_query_errors(&query.errors);
    }

    pub fn print_query_errors(&self, errors: &[QueryError]) {
        for error in errors {
            self.print_warning(&error.to_string());
        }
    }

    /// Confirmation line for a saved entry, decorated with the condition icon.
    pub fn print_saved(&self, observation: &WeatherObservation, entry: &JournalEntry) {
        let icon = weather_icon(&observation.category);
        let mood = match entry.mood {
            Some(mood) => format!("{} {mood}", mood.icon()),
            None => "no mood".to_string(),
        };
        println!(
            "{icon} Saved entry for {}: {}\u{b0}C, {} ({mood})",
            entry.city, entry.temperature, entry.description
        );
    }

    pub fn print_mood_options(&self) {
        for mood in Mood::iter() {
            println!("{} {mood}", mood.icon());
        }
    }
}

/// Icon for the provider's coarse condition keyword.
pub fn weather_icon(category: &str) -> &'static str {
    match category.to_lowercase().as_str() {
        "clear" => "\u{2600}\u{FE0F}",
        "clouds" => "\u{2601}\u{FE0F}",
        "rain" => "\u{1F327}\u{FE0F}",
        "drizzle" => "\u{1F326}\u{FE0F}",
        "thunderstorm" => "\u{26C8}\u{FE0F}",
        "snow" => "\u{2744}\u{FE0F}",
        "mist" | "fog" | "haze" | "smoke" => "\u{1F32B}\u{FE0F}",
        "dust" | "sand" | "squall" | "tornado" => "\u{1F32A}\u{FE0F}",
        "ash" => "\u{1F30B}",
        _ => "\u{1F321}\u{FE0F}",
    }
}
