//! Backend abstraction for the two remote calls.
//!
//! The controller only talks to this trait, so tests can swap the HTTP
//! client for an in-memory backend.

use crate::error::BackendError;
use crate::models::{AnalysisResult, SelectedFile};
use async_trait::async_trait;

#[async_trait]
pub trait DiagnosisBackend: Send + Sync {
    /// Upload an image for classification and report generation.
    async fn analyze_xray(&self, file: &SelectedFile) -> Result<AnalysisResult, BackendError>;

    /// Send one chat message, returning the assistant's reply text.
    async fn medical_chat(&self, message: &str) -> Result<String, BackendError>;
}
