//! Correlation identifiers
//!
//! A `RequestId` tags every log event and error raised while serving one
//! user command, so a single invocation can be followed through the logs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a single user command
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new RequestId using UUIDv7 (time ordered)
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_generation() {
        let id1 = RequestId::new();
        let id2 = RequestId::new();

        assert_ne!(id1, id2);
        assert!(!id1.as_str().is_empty());
    }

    #[test]
    fn test_request_id_display_matches_as_str() {
        let id = RequestId::from_string("req-1".to_string());
        assert_eq!(format!("{}", id), "req-1");
        assert_eq!(id.as_str(), "req-1");
    }

    #[test]
    fn test_request_id_serializes_as_plain_string() {
        let id = RequestId::from_string("req-2".to_string());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"req-2\"");
    }
}
