use serde::{Deserialize, Serialize};
use std::fmt;

/// CEFR proficiency level carried by flashcard and dialogue requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum LanguageLevel {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl fmt::Display for LanguageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self {
            LanguageLevel::A1 => "A1",
            LanguageLevel::A2 => "A2",
            LanguageLevel::B1 => "B1",
            LanguageLevel::B2 => "B2",
            LanguageLevel::C1 => "C1",
            LanguageLevel::C2 => "C2",
        };
        write!(f, "{level}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_known_levels() {
        let level: LanguageLevel = serde_json::from_str("\"B2\"").unwrap();
        assert_eq!(level, LanguageLevel::B2);
    }

    #[test]
    fn rejects_unknown_level() {
        assert!(serde_json::from_str::<LanguageLevel>("\"D1\"").is_err());
    }
}
