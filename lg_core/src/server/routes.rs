use tracing::info;

#[derive(Debug, Clone, Copy)]
pub enum BackendApiMaterials {
    Flashcards,
    Dialogue,
    ShortStory,
    TextGrammaticalAnalysis,
    GrammarExercises,
    TrueFalseTheses,
}

impl BackendApiMaterials {
    pub fn path(&self) -> &'static str {
        match self {
            BackendApiMaterials::Flashcards => "/flashcards",
            BackendApiMaterials::Dialogue => "/dialogue",
            BackendApiMaterials::ShortStory => "/short-story",
            BackendApiMaterials::TextGrammaticalAnalysis => "/text-grammatical-analysis",
            BackendApiMaterials::GrammarExercises => "/grammar-exercises",
            BackendApiMaterials::TrueFalseTheses => "/true-false-theses",
        }
    }

    pub fn all() -> [BackendApiMaterials; 6] {
        [
            BackendApiMaterials::Flashcards,
            BackendApiMaterials::Dialogue,
            BackendApiMaterials::ShortStory,
            BackendApiMaterials::TextGrammaticalAnalysis,
            BackendApiMaterials::GrammarExercises,
            BackendApiMaterials::TrueFalseTheses,
        ]
    }
}

pub fn print_all_backend_api_paths() {
    for route in BackendApiMaterials::all() {
        info!("POST {}", route.path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_rooted() {
        for route in BackendApiMaterials::all() {
            assert!(route.path().starts_with('/'));
        }
    }
}
