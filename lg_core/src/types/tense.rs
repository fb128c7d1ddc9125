use serde::{Deserialize, Serialize};

/// Tenses the grammar-exercise generator knows how to drill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TenseType {
    PresentSimple,
    PresentSimpleContinuous,
    PastSimple,
    PastContinuous,
}

impl TenseType {
    /// Human-readable tense name interpolated into the prompt.
    pub fn label(&self) -> &'static str {
        match self {
            TenseType::PresentSimple => "PRESENT SIMPLE",
            TenseType::PresentSimpleContinuous => "PRESENT CONTINUOUS",
            TenseType::PastSimple => "PAST SIMPLE",
            TenseType::PastContinuous => "PAST CONTINUOUS",
        }
    }

    /// Per-tense guidance appended to the exercise prompt.
    pub fn guidance(&self) -> &'static str {
        match self {
            TenseType::PresentSimple => {
                "Use verbs typical for daily routines or general statements.\n\
                 Make sure each sentence uses the present simple tense."
            }
            TenseType::PresentSimpleContinuous => {
                "Focus on actions happening right now or current temporary situations."
            }
            TenseType::PastSimple => {
                "Use finished actions or events in the past, with simple forms like \
                 \"walked\", \"played\", \"did\", etc."
            }
            TenseType::PastContinuous => {
                "Use was/were + verb-ing for actions in progress at a specific moment in the past."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_screaming_snake_case() {
        let tense: TenseType = serde_json::from_str("\"PRESENT_SIMPLE_CONTINUOUS\"").unwrap();
        assert_eq!(tense, TenseType::PresentSimpleContinuous);
    }

    #[test]
    fn rejects_unknown_tense() {
        assert!(serde_json::from_str::<TenseType>("\"FUTURE_PERFECT\"").is_err());
    }
}
