use crate::error::{ErrorCore, Result};
use crate::types::language_level::LanguageLevel;
use serde::{Deserialize, Serialize};

pub const MIN_FLASHCARD_AMOUNT: u32 = 5;
pub const MAX_FLASHCARD_AMOUNT: u32 = 100;

#[derive(Debug, Deserialize, Serialize)]
pub struct FlashcardsRequest {
    pub category: String,
    #[serde(default)]
    pub level: Option<LanguageLevel>,
    #[serde(default)]
    pub amount: Option<u32>,
}

impl FlashcardsRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(amount) = self.amount
            && !(MIN_FLASHCARD_AMOUNT..=MAX_FLASHCARD_AMOUNT).contains(&amount)
        {
            return Err(ErrorCore::InvalidPayload(format!(
                "amount must be between {MIN_FLASHCARD_AMOUNT} and {MAX_FLASHCARD_AMOUNT}, got {amount}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(amount: Option<u32>) -> FlashcardsRequest {
        FlashcardsRequest {
            category: "animals".to_string(),
            level: Some(LanguageLevel::B1),
            amount,
        }
    }

    #[test]
    fn accepts_amount_boundaries() {
        assert!(request(Some(5)).validate().is_ok());
        assert!(request(Some(100)).validate().is_ok());
    }

    #[test]
    fn rejects_amount_outside_boundaries() {
        assert!(request(Some(4)).validate().is_err());
        assert!(request(Some(101)).validate().is_err());
    }

    #[test]
    fn amount_is_optional() {
        assert!(request(None).validate().is_ok());
    }
}
