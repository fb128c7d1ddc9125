pub mod dialogue_request;
pub mod dialogue_response;
pub mod flashcards_request;
pub mod flashcards_response;
pub mod grammar_exercises_request;
pub mod grammar_exercises_response;
pub mod short_story_request;
pub mod short_story_response;
pub mod text_analysis_request;
pub mod text_analysis_response;
pub mod true_false_request;
pub mod true_false_response;
