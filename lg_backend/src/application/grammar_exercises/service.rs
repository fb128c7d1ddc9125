use crate::application::parse_reply;
use crate::clients::openai::CompletionClient;
use lg_core::server::payload::grammar_exercises_request::GrammarExercisesRequest;
use lg_core::server::payload::grammar_exercises_response::GrammarExercise;
use lg_core::types::tense::TenseType;
use std::sync::Arc;
use tracing::error;

const SYSTEM_PROMPT: &str = "You are an AI that outputs valid JSON only.";
// Low temperature keeps the answers consistent.
const TEMPERATURE: f32 = 0.4;
const DEFAULT_AMOUNT: u32 = 5;

#[derive(Debug, Clone)]
pub struct GrammarExercisesService {
    client: Arc<CompletionClient>,
}

impl GrammarExercisesService {
    pub fn new(client: Arc<CompletionClient>) -> Self {
        Self { client }
    }

    pub async fn generate(&self, req: &GrammarExercisesRequest) -> Option<Vec<GrammarExercise>> {
        let amount = req.amount.unwrap_or(DEFAULT_AMOUNT);
        let prompt = build_prompt(req.tense, amount);

        let raw = match self.client.complete(SYSTEM_PROMPT, &prompt, TEMPERATURE).await {
            Ok(raw) => raw,
            Err(err) => {
                error!("Error while generating grammar exercises: {err}");
                return None;
            }
        };

        parse_reply::<Vec<GrammarExercise>>(&raw, "grammar exercises")
    }
}

fn build_prompt(tense: TenseType, amount: u32) -> String {
    format!(
        r#"Generate {amount} English grammar exercises practicing the {tense_name}.
Each exercise must have:
1) A sentence with ONE gap in curly braces, e.g. "He {{runs}} every day."
2) "answer" which is the correct word/phrase for that gap.
3) "options" an array of exactly 4 items: the correct answer + 3 distractors.

Output valid JSON ONLY as an array, for example:
[
  {{
    "sentence": "He {{runs}} every day.",
    "answer": "runs",
    "options": ["runs", "run", "ran", "is running"]
  }},
  ...
]

No additional text or keys. No explanations. The gap is always in curly braces.
Give me exactly {amount} exercises.
{guidance}"#,
        tense_name = tense.label(),
        guidance = tense.guidance(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_parameters_verbatim() {
        let prompt = build_prompt(TenseType::PastContinuous, 7);
        assert!(prompt.contains("Generate 7 English grammar exercises"));
        assert!(prompt.contains("practicing the PAST CONTINUOUS"));
        assert!(prompt.contains("Give me exactly 7 exercises."));
        assert!(prompt.contains("was/were + verb-ing"));
    }

    #[test]
    fn prompt_keeps_gap_in_curly_braces() {
        let prompt = build_prompt(TenseType::PresentSimple, 5);
        assert!(prompt.contains("\"He {runs} every day.\""));
        assert!(prompt.contains("daily routines"));
    }
}
