pub mod dialogue;
pub mod flashcards;
pub mod grammar_exercises;
pub mod short_story;
pub mod text_analysis;
pub mod true_false;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::error;

/// Parses a model reply in two steps so that malformed JSON and a
/// wrong-shaped reply are logged distinctly. Either way the caller gets
/// `None`; the raw text is only logged when it is not JSON at all.
pub(crate) fn parse_reply<T: DeserializeOwned>(raw: &str, what: &str) -> Option<T> {
    let value = match serde_json::from_str::<Value>(raw) {
        Ok(value) => value,
        Err(err) => {
            error!("Failed to parse {what} reply as JSON: {err}");
            error!("Raw reply content: {raw}");
            return None;
        }
    };

    match serde_json::from_value::<T>(value) {
        Ok(data) => Some(data),
        Err(err) => {
            error!("Parsed {what} reply JSON does not match the expected shape: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lg_core::server::payload::short_story_response::ShortStoryResponse;

    #[test]
    fn parses_well_shaped_reply() {
        let reply = parse_reply::<ShortStoryResponse>(r#"{"story":"Once upon a time."}"#, "story");
        assert_eq!(reply.unwrap().story, "Once upon a time.");
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(parse_reply::<ShortStoryResponse>("not json at all", "story").is_none());
    }

    #[test]
    fn rejects_wrong_shape() {
        assert!(parse_reply::<ShortStoryResponse>(r#"{"oops":true}"#, "story").is_none());
    }
}
