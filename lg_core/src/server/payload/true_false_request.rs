use crate::error::{ErrorCore, Result};
use serde::{Deserialize, Serialize};

pub const MIN_THESES_AMOUNT: u32 = 1;
pub const MAX_THESES_AMOUNT: u32 = 20;

#[derive(Debug, Deserialize, Serialize)]
pub struct TrueFalseRequest {
    pub text: String,
    #[serde(default)]
    pub amount: Option<u32>,
}

impl TrueFalseRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(amount) = self.amount
            && !(MIN_THESES_AMOUNT..=MAX_THESES_AMOUNT).contains(&amount)
        {
            return Err(ErrorCore::InvalidPayload(format!(
                "amount must be between {MIN_THESES_AMOUNT} and {MAX_THESES_AMOUNT}, got {amount}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(amount: Option<u32>) -> TrueFalseRequest {
        TrueFalseRequest {
            text: "The fox lived in the forest.".to_string(),
            amount,
        }
    }

    #[test]
    fn accepts_amount_boundaries() {
        assert!(request(Some(1)).validate().is_ok());
        assert!(request(Some(20)).validate().is_ok());
    }

    #[test]
    fn rejects_amount_outside_boundaries() {
        assert!(request(Some(0)).validate().is_err());
        assert!(request(Some(21)).validate().is_err());
    }
}
