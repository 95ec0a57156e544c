//! API Response types
//!
//! The superadmin API returns bare JSON payloads on success and a small
//! `{"error": "..."}` object on failure.

use serde::{Deserialize, Serialize};

/// Error body returned with non-2xx statuses
///
/// ```json
/// { "error": "Tienda no encontrada" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// Extract the error message from a raw body, falling back to the body
    /// itself when it is not an error object.
    pub fn message_from(text: &str) -> String {
        serde_json::from_str::<ErrorBody>(text)
            .map(|body| body.error)
            .unwrap_or_else(|_| text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_error_object() {
        assert_eq!(
            ErrorBody::message_from(r#"{"error": "Tienda no encontrada"}"#),
            "Tienda no encontrada"
        );
    }

    #[test]
    fn test_message_from_plain_text() {
        assert_eq!(ErrorBody::message_from("Bad Gateway"), "Bad Gateway");
    }
}
