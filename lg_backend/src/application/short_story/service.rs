use crate::application::parse_reply;
use crate::clients::openai::CompletionClient;
use lg_core::server::payload::short_story_request::ShortStoryRequest;
use lg_core::server::payload::short_story_response::ShortStoryResponse;
use std::sync::Arc;
use tracing::error;

const SYSTEM_PROMPT: &str = "You are an AI that outputs valid JSON only. No extra commentary.";
const TEMPERATURE: f32 = 0.7;
const DEFAULT_MAX_LENGTH: u32 = 500;

#[derive(Debug, Clone)]
pub struct ShortStoryService {
    client: Arc<CompletionClient>,
}

impl ShortStoryService {
    pub fn new(client: Arc<CompletionClient>) -> Self {
        Self { client }
    }

    pub async fn generate(&self, req: &ShortStoryRequest) -> Option<ShortStoryResponse> {
        let max_length = req.max_length.unwrap_or(DEFAULT_MAX_LENGTH);
        let prompt = build_prompt(&req.topic, max_length);

        let raw = match self.client.complete(SYSTEM_PROMPT, &prompt, TEMPERATURE).await {
            Ok(raw) => raw,
            Err(err) => {
                error!("Error generating short story: {err}");
                return None;
            }
        };

        parse_reply::<ShortStoryResponse>(&raw, "short story")
    }
}

fn build_prompt(topic: &str, max_length: u32) -> String {
    format!(
        r#"Generate a short story about "{topic}" with a maximum of {max_length} characters.
Output valid JSON ONLY in the following format:
{{
  "story": "<your short story text>"
}}
No additional keys or text outside the JSON.
If the story exceeds {max_length} characters, truncate or compress it."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_parameters_verbatim() {
        let prompt = build_prompt("a fox", 120);
        assert!(prompt.contains("about \"a fox\""));
        assert!(prompt.contains("maximum of 120 characters"));
        assert!(prompt.contains("If the story exceeds 120 characters"));
    }
}
