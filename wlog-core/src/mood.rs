use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The fixed set of moods a journal entry can carry.
///
/// The tabular store persists the plain label (e.g. `Happy`); the emoji
/// returned by [`Mood::icon`] is presentation-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Mood {
    Happy,
    Sad,
    Sleepy,
    Energetic,
    Peaceful,
    Thoughtful,
    Excited,
    Frustrated,
    Content,
    Anxious,
}

impl Mood {
    /// Emoji shown next to the mood in pick lists and confirmations.
    pub fn icon(&self) -> &'static str {
        match self {
            Mood::Happy => "\u{1F60A}",
            Mood::Sad => "\u{1F622}",
            Mood::Sleepy => "\u{1F634}",
            Mood::Energetic => "\u{26A1}",
            Mood::Peaceful => "\u{1F60C}",
            Mood::Thoughtful => "\u{1F914}",
            Mood::Excited => "\u{1F60D}",
            Mood::Frustrated => "\u{1F624}",
            Mood::Content => "\u{1F970}",
            Mood::Anxious => "\u{1F631}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn ten_moods_are_available() {
        assert_eq!(Mood::iter().count(), 10);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(Mood::from_str("happy").unwrap(), Mood::Happy);
        assert_eq!(Mood::from_str("ANXIOUS").unwrap(), Mood::Anxious);
        assert!(Mood::from_str("grumpy").is_err());
    }

    #[test]
    fn label_is_the_plain_name() {
        assert_eq!(Mood::Thoughtful.to_string(), "Thoughtful");
        assert_eq!(Mood::Energetic.as_ref(), "Energetic");
    }
}
