use crate::error::{ErrorCore, Result};
use crate::types::tense::TenseType;
use serde::{Deserialize, Serialize};

pub const MIN_EXERCISE_AMOUNT: u32 = 1;
pub const MAX_EXERCISE_AMOUNT: u32 = 20;

#[derive(Debug, Deserialize, Serialize)]
pub struct GrammarExercisesRequest {
    pub tense: TenseType,
    #[serde(default)]
    pub amount: Option<u32>,
}

impl GrammarExercisesRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(amount) = self.amount
            && !(MIN_EXERCISE_AMOUNT..=MAX_EXERCISE_AMOUNT).contains(&amount)
        {
            return Err(ErrorCore::InvalidPayload(format!(
                "amount must be between {MIN_EXERCISE_AMOUNT} and {MAX_EXERCISE_AMOUNT}, got {amount}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_amount_boundaries() {
        let req = GrammarExercisesRequest {
            tense: TenseType::PastSimple,
            amount: Some(1),
        };
        assert!(req.validate().is_ok());
        let req = GrammarExercisesRequest {
            tense: TenseType::PastSimple,
            amount: Some(20),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn rejects_amount_outside_boundaries() {
        let req = GrammarExercisesRequest {
            tense: TenseType::PresentSimple,
            amount: Some(0),
        };
        assert!(req.validate().is_err());
        let req = GrammarExercisesRequest {
            tense: TenseType::PresentSimple,
            amount: Some(21),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn tense_is_required() {
        assert!(serde_json::from_str::<GrammarExercisesRequest>(r#"{"amount":5}"#).is_err());
    }
}
