use crate::application::parse_reply;
use crate::clients::openai::CompletionClient;
use lg_core::server::payload::text_analysis_request::TextAnalysisRequest;
use lg_core::server::payload::text_analysis_response::TextAnalysisResponse;
use std::sync::Arc;
use tracing::error;

const SYSTEM_PROMPT: &str = "You are an AI that outputs valid JSON, with no extra commentary.";
// Lower temperature, the tense classification has to stay consistent.
const TEMPERATURE: f32 = 0.2;

#[derive(Debug, Clone)]
pub struct TextAnalysisService {
    client: Arc<CompletionClient>,
}

impl TextAnalysisService {
    pub fn new(client: Arc<CompletionClient>) -> Self {
        Self { client }
    }

    pub async fn analyze(&self, req: &TextAnalysisRequest) -> Option<TextAnalysisResponse> {
        let prompt = build_prompt(&req.text);

        let raw = match self.client.complete(SYSTEM_PROMPT, &prompt, TEMPERATURE).await {
            Ok(raw) => raw,
            Err(err) => {
                error!("Error analyzing text for tenses: {err}");
                return None;
            }
        };

        parse_reply::<TextAnalysisResponse>(&raw, "text analysis")
    }
}

fn build_prompt(text: &str) -> String {
    format!(
        r#"Analyze the following English text by splitting it into individual sentences.

**Important**:
1) If a sentence uses “am/is/are + verb-ing” and includes a future time adverb ("tomorrow", "next week", "soon", "in 2 days"), classify it as a future tense (prefer 'future_continuous') rather than present_continuous.
2) Otherwise, classify each sentence into exactly one of these tenses:
   - present_simple
   - present_continuous
   - past_simple
   - past_continuous
   - present_perfect
   - present_perfect_continuous
   - past_perfect
   - past_perfect_continuous
   - future_simple
   - future_continuous

Then produce:
1) "coloredText" – the original text with each sentence wrapped in <span class="tense-..."> ... </span>.
2) "tenses_in_text" – an object with the breakdown of each tense, including absolute count, percentage, color, and the array of exact sentences.

Use these color mappings:
- present_simple: salmon
- present_continuous: orange
- past_simple: yellow
- past_continuous: green
- present_perfect: blue
- present_perfect_continuous: light-blue
- past_perfect: magenta
- past_perfect_continuous: pink
- future_simple: red
- future_continuous: cyan

Output valid JSON ONLY in this format:

{{
  "coloredText": "<the entire text with <span class=\"tense-...\">Sentence</span> ...>",
  "tenses_in_text": {{
    "all_tenses": {{
      "absolute": <totalSentenceCount>,
      "percentage": 100
    }},
    "present_simple": {{
      "absolute": ...,
      "percentage": ...,
      "color": "salmon",
      "sentences": ["..."]
    }},
    "present_continuous": {{
      "absolute": ...,
      "percentage": ...,
      "color": "orange",
      "sentences": ["..."]
    }},
    ...
  }}
}}

No additional text or disclaimers.

Text to analyze:
"""{text}""""#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_text_verbatim() {
        let prompt = build_prompt("He runs every day. She was reading.");
        assert!(prompt.contains("\"\"\"He runs every day. She was reading.\"\"\""));
    }

    #[test]
    fn prompt_lists_color_mapping() {
        let prompt = build_prompt("Some text.");
        assert!(prompt.contains("present_simple: salmon"));
        assert!(prompt.contains("future_continuous: cyan"));
        assert!(prompt.contains("\"tenses_in_text\""));
    }
}
