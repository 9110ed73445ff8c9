//! Patient summary generation.
//!
//! Wraps the Gemini text-generation API as an opaque collaborator: the
//! caller hands over a patient id and gets prose back, whether that prose
//! is the generated summary or a description of why one could not be
//! produced. No error ever crosses this boundary as a typed failure.

mod client;
mod error;
mod request;

pub use client::{API_KEY_ENV, GeminiClient};
pub use error::{Result, SummaryError};
pub use request::SummaryRequest;

use hms_model::EntityId;
use hms_store::AppState;
use tracing::error;

/// Generate a family-readable summary for a patient.
///
/// Always returns a displayable string. Reference resolution happens
/// before any network traffic, so a patient whose doctor or hospital
/// was deleted gets a local explanation, not an upstream error.
pub fn generate_patient_summary(state: &AppState, patient_id: &EntityId) -> String {
    match try_generate(state, patient_id) {
        Ok(summary) => summary,
        Err(e) => {
            error!(%e, "patient summary generation failed");
            describe_failure(&e)
        }
    }
}

fn try_generate(state: &AppState, patient_id: &EntityId) -> Result<String> {
    let request = SummaryRequest::resolve(state, patient_id)?;
    let client = GeminiClient::from_env()?;
    client.generate(&request.prompt())
}

/// Fold a failure into the prose the view layer displays.
pub fn describe_failure(error: &SummaryError) -> String {
    match error {
        SummaryError::MissingApiKey => format!(
            "Error: Gemini API key is not configured. \
             Please set the {API_KEY_ENV} environment variable."
        ),
        SummaryError::UnknownPatient(id) => {
            format!("Cannot generate a summary: no patient with id {id} exists.")
        }
        SummaryError::UnresolvedReference { field } => format!(
            "Cannot generate a summary: the patient's assigned {field} no longer exists. \
             Update the patient record first."
        ),
        SummaryError::Network(_)
        | SummaryError::Api { .. }
        | SummaryError::EmptyResponse => {
            "An error occurred while generating the patient summary. \
             Please check the logs for details."
                .to_string()
        }
    }
}
