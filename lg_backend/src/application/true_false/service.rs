use crate::application::parse_reply;
use crate::clients::openai::CompletionClient;
use lg_core::server::payload::true_false_request::TrueFalseRequest;
use lg_core::server::payload::true_false_response::TrueFalseThesis;
use std::sync::Arc;
use tracing::error;

const SYSTEM_PROMPT: &str = "You output valid JSON only, no explanations.";
const TEMPERATURE: f32 = 0.3;
const DEFAULT_AMOUNT: u32 = 5;

#[derive(Debug, Clone)]
pub struct TrueFalseService {
    client: Arc<CompletionClient>,
}

impl TrueFalseService {
    pub fn new(client: Arc<CompletionClient>) -> Self {
        Self { client }
    }

    pub async fn generate(&self, req: &TrueFalseRequest) -> Option<Vec<TrueFalseThesis>> {
        let amount = req.amount.unwrap_or(DEFAULT_AMOUNT);
        let prompt = build_prompt(&req.text, amount);

        let raw = match self.client.complete(SYSTEM_PROMPT, &prompt, TEMPERATURE).await {
            Ok(raw) => raw,
            Err(err) => {
                error!("Error generating true/false theses: {err}");
                return None;
            }
        };

        parse_reply::<Vec<TrueFalseThesis>>(&raw, "true/false theses")
    }
}

fn build_prompt(text: &str, amount: u32) -> String {
    format!(
        r#"Read the following text and create {amount} statements (theses) about it.
Some should be correct (true) facts, and some should be incorrect (false).
Return only valid JSON in an array of objects, each object having:
- "thesis": a string statement
- "isTrue": a boolean that indicates if the statement is true or false

No additional keys, no extra commentary. Output example:
[
  {{ "thesis": "The main character's name is John.", "isTrue": true }},
  {{ "thesis": "The events take place in Spain.", "isTrue": false }}
]

TEXT:
"""{text}""""#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_parameters_verbatim() {
        let prompt = build_prompt("The fox lived in the forest.", 3);
        assert!(prompt.contains("create 3 statements"));
        assert!(prompt.contains("\"\"\"The fox lived in the forest.\"\"\""));
    }

    #[test]
    fn prompt_requests_thesis_objects() {
        let prompt = build_prompt("Some text.", 5);
        assert!(prompt.contains("\"isTrue\": a boolean"));
    }
}
