use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a call to one of the backend endpoints, or of rendering what
/// it returned.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend returned {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("Malformed response body: {0}")]
    Decode(String),

    #[error("Response is missing the {0} probability")]
    MissingScore(&'static str),

    #[error("Failed to render response: {0}")]
    Render(#[from] askama::Error),
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        BackendError::Decode(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("No file selected")]
    NoFileSelected,

    #[error("Request failed: {0}")]
    RequestFailed(#[from] BackendError),
}
