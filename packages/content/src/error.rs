use thiserror::Error;

/// Every way a call to the site backend can fail.
///
/// Views collapse all of these into one status string; the variants exist so
/// the string can carry the backend's own message when it sent one.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (network, DNS, CORS, ...).
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("request failed with status code {status}")]
    Status {
        status: u16,
        /// `message` field of the error body, when present.
        message: Option<String>,
    },

    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        ApiError::Status {
            status,
            message: Some(message.into()),
        }
    }

    pub fn not_found(what: &str) -> Self {
        Self::status(404, format!("{what} not found"))
    }

    /// The human-readable message the backend attached, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }

    /// Backend message when available, otherwise this error's display text.
    pub fn user_message(&self) -> String {
        self.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| self.to_string())
    }
}
