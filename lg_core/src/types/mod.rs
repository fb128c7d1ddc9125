pub mod complexity;
pub mod language_level;
pub mod tense;
