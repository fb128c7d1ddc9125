use crate::application::dialogue::service::DialogueService;
use crate::application::flashcards::service::FlashcardService;
use crate::application::grammar_exercises::service::GrammarExercisesService;
use crate::application::short_story::service::ShortStoryService;
use crate::application::text_analysis::service::TextAnalysisService;
use crate::application::true_false::service::TrueFalseService;
use crate::clients::openai::CompletionClient;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct AppState {
    pub service_flashcards: FlashcardService,
    pub service_dialogue: DialogueService,
    pub service_short_story: ShortStoryService,
    pub service_text_analysis: TextAnalysisService,
    pub service_grammar_exercises: GrammarExercisesService,
    pub service_true_false: TrueFalseService,
}

impl AppState {
    pub fn new(client: Arc<CompletionClient>) -> Self {
        AppState {
            service_flashcards: FlashcardService::new(client.clone()),
            service_dialogue: DialogueService::new(client.clone()),
            service_short_story: ShortStoryService::new(client.clone()),
            service_text_analysis: TextAnalysisService::new(client.clone()),
            service_grammar_exercises: GrammarExercisesService::new(client.clone()),
            service_true_false: TrueFalseService::new(client),
        }
    }
}
