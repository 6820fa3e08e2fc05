use crate::mood::Mood;
use chrono::NaiveDateTime;

/// One observation handed over by the weather-fetch collaborator.
///
/// `category` is the provider's coarse condition keyword (e.g. `rain`,
/// `clouds`). It only drives presentation iconography and is never persisted.
#[derive(Debug, Clone)]
pub struct WeatherObservation {
    pub city: String,
    pub temperature: f64,
    pub description: String,
    pub category: String,
}

/// A single journal record: weather observation plus the user's reflection.
///
/// Entries are immutable once written; the journal only ever appends them.
#[derive(Debug, Clone)]
pub struct JournalEntry {
    pub timestamp: NaiveDateTime,
    pub city: String,
    pub temperature: f64,
    pub description: String,
    pub mood: Option<Mood>,
    pub notes: String,
}

impl JournalEntry {
    /// Builds an entry from an observation and the user's mood/notes.
    pub fn from_observation(
        observation: &WeatherObservation,
        mood: Option<Mood>,
        notes: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            timestamp,
            city: observation.city.clone(),
            temperature: observation.temperature,
            description: observation.description.clone(),
            mood,
            notes: notes.into(),
        }
    }

    /// An entry must carry at least a mood or some notes to be worth saving.
    pub fn has_reflection(&self) -> bool {
        self.mood.is_some() || !self.notes.trim().is_empty()
    }

    /// The persisted mood label, empty when no mood was picked.
    pub fn mood_label(&self) -> String {
        self.mood.map(|m| m.to_string()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn observation() -> WeatherObservation {
        WeatherObservation {
            city: "New York".to_string(),
            temperature: 21.5,
            description: "light rain".to_string(),
            category: "rain".to_string(),
        }
    }

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 8, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn entry_copies_observation_fields() {
        let e = JournalEntry::from_observation(&observation(), Some(Mood::Happy), "picnic", noon());
        assert_eq!(e.city, "New York");
        assert_eq!(e.temperature, 21.5);
        assert_eq!(e.description, "light rain");
        assert_eq!(e.mood_label(), "Happy");
    }

    #[test]
    fn reflection_requires_mood_or_notes() {
        let with_mood = JournalEntry::from_observation(&observation(), Some(Mood::Sad), "", noon());
        let with_notes = JournalEntry::from_observation(&observation(), None, "rainy walk", noon());
        let with_neither = JournalEntry::from_observation(&observation(), None, "   ", noon());
        assert!(with_mood.has_reflection());
        assert!(with_notes.has_reflection());
        assert!(!with_neither.has_reflection());
    }
}
