use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tense breakdown returned by the model. `tenses_in_text` is kept as loose
/// JSON: the per-tense keys present depend on the analyzed text, only the
/// presence of the field itself is checked.
#[derive(Debug, Deserialize, Serialize)]
pub struct TextAnalysisResponse {
    #[serde(rename = "coloredText")]
    pub colored_text: String,
    pub tenses_in_text: Value,
}
