use crate::application::parse_reply;
use crate::clients::openai::CompletionClient;
use lg_core::server::payload::flashcards_request::FlashcardsRequest;
use lg_core::server::payload::flashcards_response::FlashcardsResponse;
use lg_core::types::language_level::LanguageLevel;
use std::sync::Arc;
use tracing::error;

const SYSTEM_PROMPT: &str =
    "You are an AI assistant that helps with language learning. Output must be valid JSON.";
const TEMPERATURE: f32 = 0.7;
const DEFAULT_AMOUNT: u32 = 5;
const DEFAULT_LEVEL: LanguageLevel = LanguageLevel::B1;

#[derive(Debug, Clone)]
pub struct FlashcardService {
    client: Arc<CompletionClient>,
}

impl FlashcardService {
    pub fn new(client: Arc<CompletionClient>) -> Self {
        Self { client }
    }

    pub async fn generate(&self, req: &FlashcardsRequest) -> Option<FlashcardsResponse> {
        let amount = req.amount.unwrap_or(DEFAULT_AMOUNT);
        let level = req.level.unwrap_or(DEFAULT_LEVEL);
        let prompt = build_prompt(&req.category, level, amount);

        let raw = match self.client.complete(SYSTEM_PROMPT, &prompt, TEMPERATURE).await {
            Ok(raw) => raw,
            Err(err) => {
                error!("Error while generating flashcards: {err}");
                return None;
            }
        };

        parse_reply::<FlashcardsResponse>(&raw, "flashcards")
    }
}

fn build_prompt(category: &str, level: LanguageLevel, amount: u32) -> String {
    format!(
        r#"Generate a set of {amount} English flashcards in the "{category}" category
for a {level} level student.
Please return valid JSON **only** in the following structure:
{{
  "result": [
    {{
      "source": "<English word>",
      "translation": "<Polish translation>",
      "sourceSentence": "<English sentence>",
      "sourceTranslation": "<Polish translation of the sentence>"
    }}
  ]
}}
No additional keys.
No additional text outside the JSON.
Make sure it is valid JSON.
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_parameters_verbatim() {
        let prompt = build_prompt("animals", LanguageLevel::C1, 12);
        assert!(prompt.contains("12 English flashcards"));
        assert!(prompt.contains("\"animals\" category"));
        assert!(prompt.contains("for a C1 level student"));
    }

    #[test]
    fn prompt_requests_result_array() {
        let prompt = build_prompt("food", LanguageLevel::A2, 5);
        assert!(prompt.contains("\"result\": ["));
        assert!(prompt.contains("sourceTranslation"));
    }
}
