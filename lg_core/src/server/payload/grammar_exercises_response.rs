use serde::{Deserialize, Serialize};

/// One gap-fill exercise, e.g. `"He {runs} every day."` with the gap answer
/// and four options (the answer plus three distractors).
#[derive(Debug, Deserialize, Serialize)]
pub struct GrammarExercise {
    pub sentence: String,
    pub answer: String,
    pub options: Vec<String>,
}
