use crate::error::{ErrorCore, Result};
use crate::types::complexity::Complexity;
use crate::types::language_level::LanguageLevel;
use serde::{Deserialize, Serialize};

pub const MIN_DIALOGUE_LINES: u32 = 2;
pub const MAX_DIALOGUE_LINES: u32 = 50;

#[derive(Debug, Deserialize, Serialize)]
pub struct DialogueRequest {
    pub topic: String,
    #[serde(default)]
    pub lines: Option<u32>,
    #[serde(default, rename = "languageLevel")]
    pub language_level: Option<LanguageLevel>,
    #[serde(default)]
    pub complexity: Option<Complexity>,
}

impl DialogueRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(lines) = self.lines
            && !(MIN_DIALOGUE_LINES..=MAX_DIALOGUE_LINES).contains(&lines)
        {
            return Err(ErrorCore::InvalidPayload(format!(
                "lines must be between {MIN_DIALOGUE_LINES} and {MAX_DIALOGUE_LINES}, got {lines}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(lines: Option<u32>) -> DialogueRequest {
        DialogueRequest {
            topic: "ordering coffee".to_string(),
            lines,
            language_level: None,
            complexity: None,
        }
    }

    #[test]
    fn accepts_lines_boundaries() {
        assert!(request(Some(2)).validate().is_ok());
        assert!(request(Some(50)).validate().is_ok());
    }

    #[test]
    fn rejects_lines_outside_boundaries() {
        assert!(request(Some(1)).validate().is_err());
        assert!(request(Some(51)).validate().is_err());
    }

    #[test]
    fn language_level_uses_camel_case_key() {
        let req: DialogueRequest =
            serde_json::from_str(r#"{"topic":"travel","languageLevel":"C1"}"#).unwrap();
        assert_eq!(req.language_level, Some(LanguageLevel::C1));
    }
}
