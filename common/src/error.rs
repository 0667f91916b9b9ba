use thiserror::Error;

/// Failure of a single request against the records backend.
///
/// The UI never branches on the variant: every error is flattened to a
/// message through [`ApiError::message_or`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a reply (connection refused, CORS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The backend replied with a non-success status.
    #[error("backend replied with status {status}")]
    Backend {
        status: u16,
        /// The `error` field of the reply body, when it carried one.
        message: Option<String>,
    },

    /// The reply body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn decode(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }

    /// The backend-provided text when there is one, `fallback` otherwise.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Backend {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// A draft that cannot be turned into a request body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{0} must be a number")]
    NotANumber(&'static str),

    #[error("{0} is not a valid choice")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_text_wins_over_fallback() {
        let err = ApiError::Backend {
            status: 400,
            message: Some("Name and email are required".into()),
        };
        assert_eq!(err.message_or("Failed"), "Name and email are required");
    }

    #[test]
    fn blank_or_missing_backend_text_uses_fallback() {
        let blank = ApiError::Backend {
            status: 500,
            message: Some("  ".into()),
        };
        let missing = ApiError::Backend {
            status: 500,
            message: None,
        };
        let network = ApiError::Network("connection refused".into());

        assert_eq!(blank.message_or("Failed to create patient"), "Failed to create patient");
        assert_eq!(missing.message_or("Failed to create patient"), "Failed to create patient");
        assert_eq!(network.message_or("Failed to create patient"), "Failed to create patient");
    }

    #[test]
    fn draft_errors_read_as_sentences() {
        assert_eq!(DraftError::Missing("Name").to_string(), "Name is required");
        assert_eq!(DraftError::NotANumber("ID").to_string(), "ID must be a number");
    }
}
