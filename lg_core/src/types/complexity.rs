use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Basic,
    Intermediate,
    Advanced,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let complexity = match self {
            Complexity::Basic => "basic",
            Complexity::Intermediate => "intermediate",
            Complexity::Advanced => "advanced",
        };
        write!(f, "{complexity}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_lowercase() {
        let complexity: Complexity = serde_json::from_str("\"advanced\"").unwrap();
        assert_eq!(complexity, Complexity::Advanced);
    }

    #[test]
    fn rejects_unknown_complexity() {
        assert!(serde_json::from_str::<Complexity>("\"expert\"").is_err());
    }
}
