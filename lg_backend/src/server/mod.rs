pub mod app_state;
pub mod dialogue;
pub mod flashcards;
pub mod grammar_exercises;
pub mod http_server;
pub mod short_story;
pub mod text_analysis;
pub mod true_false;

pub use http_server::http_server;
