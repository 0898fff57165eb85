//! Progress check encouragement

use crate::errors::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Share of the weekly plan the user reports as done
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CompletionLevel(u8);

impl CompletionLevel {
    /// The ten levels the progress form offers, lowest first
    pub fn all() -> impl Iterator<Item = CompletionLevel> {
        (1..=10).map(|step| CompletionLevel(step * 10))
    }

    /// Level from a percentage; only multiples of ten from 10 to 100 exist
    pub fn from_percent(percent: u8) -> Option<Self> {
        (percent % 10 == 0 && (10..=100).contains(&percent)).then_some(CompletionLevel(percent))
    }

    pub fn percent(&self) -> u8 {
        self.0
    }

    /// Label as offered in the form, e.g. `40%`
    pub fn label(&self) -> String {
        format!("{}%", self.0)
    }

    pub fn message(&self) -> &'static str {
        match self.0 {
            10 => "Every journey starts with a single step, and you've taken it. Keep going!",
            20 => "You're building momentum. Small wins stack up fast!",
            30 => "Nearly a third of the way there. Your consistency is starting to show!",
            40 => "Solid progress! Stay focused and the results will follow.",
            50 => "Halfway there! The hardest part is behind you.",
            60 => "More done than left to do. Keep that fire burning!",
            70 => "Strong work! Your discipline is paying off.",
            80 => "The finish line is in sight. Push through!",
            90 => "So close! One last effort and you've nailed it.",
            _ => "100% complete! You showed up and delivered. Celebrate this win!",
        }
    }
}

impl fmt::Display for CompletionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl FromStr for CompletionLevel {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .strip_suffix('%')
            .and_then(|digits| digits.trim().parse::<u8>().ok())
            .and_then(CompletionLevel::from_percent)
            .ok_or_else(|| {
                EngineError::InvalidCategory(format!(
                    "Unknown completion level '{trimmed}'. Choose one of 10% to 100%."
                ))
            })
    }
}

impl TryFrom<String> for CompletionLevel {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CompletionLevel> for String {
    fn from(level: CompletionLevel) -> Self {
        level.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[test]
    fn test_ten_levels_with_distinct_messages() {
        let messages: HashSet<_> = CompletionLevel::all().map(|level| level.message()).collect();
        assert_eq!(CompletionLevel::all().count(), 10);
        assert_eq!(messages.len(), 10);
    }

    #[test]
    fn test_labels_parse_back() {
        for level in CompletionLevel::all() {
            assert_eq!(level.label().parse::<CompletionLevel>().unwrap(), level);
        }
    }

    #[rstest]
    #[case("50%", "Halfway there! The hardest part is behind you.")]
    #[case(" 100% ", "100% complete! You showed up and delivered. Celebrate this win!")]
    fn test_message(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(raw.parse::<CompletionLevel>().unwrap().message(), expected);
    }

    #[rstest]
    #[case("0%")]
    #[case("45%")]
    #[case("110%")]
    #[case("50")]
    #[case("half")]
    #[case("")]
    fn test_out_of_domain_label_is_rejected(#[case] raw: &str) {
        assert!(matches!(
            raw.parse::<CompletionLevel>(),
            Err(EngineError::InvalidCategory(_))
        ));
    }

    #[test]
    fn test_serde_uses_label() {
        let level = CompletionLevel::from_percent(70).unwrap();
        assert_eq!(serde_json::to_string(&level).unwrap(), "\"70%\"");
        assert_eq!(serde_json::from_str::<CompletionLevel>("\"70%\"").unwrap(), level);
        assert!(serde_json::from_str::<CompletionLevel>("\"75%\"").is_err());
    }

    proptest! {
        #[test]
        fn prop_only_tens_are_levels(percent in 0u8..=255) {
            let expected = percent % 10 == 0 && (10..=100).contains(&percent);
            prop_assert_eq!(CompletionLevel::from_percent(percent).is_some(), expected);
            let parsed = format!("{percent}%").parse::<CompletionLevel>();
            prop_assert_eq!(parsed.is_ok(), expected);
        }
    }
}
