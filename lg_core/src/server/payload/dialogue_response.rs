use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct DialogueMessage {
    pub speaker: String,
    pub text: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DialogueResponse {
    pub dialogue: Vec<DialogueMessage>,
}
