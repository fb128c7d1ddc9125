use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct TrueFalseThesis {
    pub thesis: String,
    #[serde(rename = "isTrue")]
    pub is_true: bool,
}
