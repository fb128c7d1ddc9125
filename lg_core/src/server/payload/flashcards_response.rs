use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub source: String,
    pub translation: String,
    pub source_sentence: String,
    pub source_translation: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct FlashcardsResponse {
    pub result: Vec<Flashcard>,
}
