use crate::error::{ErrorCore, Result};
use serde::{Deserialize, Serialize};

pub const MIN_STORY_LENGTH: u32 = 100;
pub const MAX_STORY_LENGTH: u32 = 5000;

#[derive(Debug, Deserialize, Serialize)]
pub struct ShortStoryRequest {
    pub topic: String,
    #[serde(default, rename = "maxLength")]
    pub max_length: Option<u32>,
}

impl ShortStoryRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(max_length) = self.max_length
            && !(MIN_STORY_LENGTH..=MAX_STORY_LENGTH).contains(&max_length)
        {
            return Err(ErrorCore::InvalidPayload(format!(
                "maxLength must be between {MIN_STORY_LENGTH} and {MAX_STORY_LENGTH}, got {max_length}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(max_length: Option<u32>) -> ShortStoryRequest {
        ShortStoryRequest {
            topic: "a fox".to_string(),
            max_length,
        }
    }

    #[test]
    fn accepts_length_boundaries() {
        assert!(request(Some(100)).validate().is_ok());
        assert!(request(Some(5000)).validate().is_ok());
    }

    #[test]
    fn rejects_length_outside_boundaries() {
        assert!(request(Some(99)).validate().is_err());
        assert!(request(Some(5001)).validate().is_err());
    }
}
