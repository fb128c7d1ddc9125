use crate::application::parse_reply;
use crate::clients::openai::CompletionClient;
use lg_core::server::payload::dialogue_request::DialogueRequest;
use lg_core::server::payload::dialogue_response::DialogueResponse;
use lg_core::types::complexity::Complexity;
use lg_core::types::language_level::LanguageLevel;
use std::sync::Arc;
use tracing::error;

const SYSTEM_PROMPT: &str =
    "You are an AI that outputs valid JSON only. No text outside the JSON structure.";
const TEMPERATURE: f32 = 0.7;
const DEFAULT_LINES: u32 = 10;
const DEFAULT_LEVEL: LanguageLevel = LanguageLevel::B1;
const DEFAULT_COMPLEXITY: Complexity = Complexity::Basic;

#[derive(Debug, Clone)]
pub struct DialogueService {
    client: Arc<CompletionClient>,
}

impl DialogueService {
    pub fn new(client: Arc<CompletionClient>) -> Self {
        Self { client }
    }

    pub async fn generate(&self, req: &DialogueRequest) -> Option<DialogueResponse> {
        let lines = req.lines.unwrap_or(DEFAULT_LINES);
        let level = req.language_level.unwrap_or(DEFAULT_LEVEL);
        let complexity = req.complexity.unwrap_or(DEFAULT_COMPLEXITY);
        let prompt = build_prompt(&req.topic, lines, level, complexity);

        let raw = match self.client.complete(SYSTEM_PROMPT, &prompt, TEMPERATURE).await {
            Ok(raw) => raw,
            Err(err) => {
                error!("Error while generating dialogue: {err}");
                return None;
            }
        };

        parse_reply::<DialogueResponse>(&raw, "dialogue")
    }
}

fn build_prompt(topic: &str, lines: u32, level: LanguageLevel, complexity: Complexity) -> String {
    format!(
        r#"Generate a {lines}-sentence dialogue (between Man and Woman)
about "{topic}".
Language Level: {level}
Complexity: {complexity}

Output valid JSON ONLY in the following format:
{{
  "dialogue": [
    {{
      "speaker": "<random man name>",
      "text": "<first line>"
    }},
    {{
      "speaker": "<random woman name>",
      "text": "<second line>"
    }}
    ...
  ]
}}
No extra keys, no explanations, no disclaimers."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_parameters_verbatim() {
        let prompt = build_prompt("ordering coffee", 6, LanguageLevel::A2, Complexity::Advanced);
        assert!(prompt.contains("6-sentence dialogue"));
        assert!(prompt.contains("about \"ordering coffee\""));
        assert!(prompt.contains("Language Level: A2"));
        assert!(prompt.contains("Complexity: advanced"));
    }

    #[test]
    fn prompt_requests_dialogue_array() {
        let prompt = build_prompt("travel", 10, LanguageLevel::B1, Complexity::Basic);
        assert!(prompt.contains("\"dialogue\": ["));
    }
}
