use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct TextAnalysisRequest {
    pub text: String,
}
