//! Summary generation error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    /// No API key configured in the environment.
    #[error("Gemini API key is not configured")]
    MissingApiKey,

    /// The patient id does not exist in the current state.
    #[error("patient {0} not found")]
    UnknownPatient(String),

    /// The patient's doctor or hospital reference does not resolve.
    ///
    /// Raised by the caller-side guard before any network traffic, so a
    /// dangling reference never turns into an upstream error.
    #[error("patient's {field} reference does not resolve")]
    UnresolvedReference { field: &'static str },

    /// Network-level failure.
    #[error("network error")]
    Network(#[from] reqwest::Error),

    /// Upstream returned a non-success status.
    #[error("Gemini API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Upstream responded but the payload carried no text.
    #[error("Gemini response contained no text")]
    EmptyResponse,
}

pub type Result<T> = std::result::Result<T, SummaryError>;
