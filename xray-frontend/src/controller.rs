//! Upload-and-chat controller.
//!
//! Wires the X-ray upload flow and the chat flow to the backend and renders
//! their results into a page. The two flows share no state; several submits
//! may be outstanding at once and each resolves independently.

use crate::error::{BackendError, ControllerError};
use crate::models::{AnalysisResult, ChatMessage, SelectedFile};
use crate::render::{render_analysis, RenderedAnalysis};
use crate::services::{preview, DiagnosisBackend};
use crate::view::PageView;
use std::sync::Arc;
use tracing::Instrument;

pub const NO_FILE_ALERT: &str = "Please upload an X-ray image";
pub const ANALYSIS_FAILED_ALERT: &str = "Failed to analyze X-ray. Please try again.";
pub const CHAT_FALLBACK_REPLY: &str = "Sorry, I encountered an error processing your request.";

/// How a chat submit ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    /// Input was empty after trimming; nothing appended or sent.
    Ignored,
    Replied(String),
    /// The request failed and the fallback reply was appended.
    Fallback,
}

#[derive(Clone)]
pub struct Controller {
    backend: Arc<dyn DiagnosisBackend>,
    page: Arc<dyn PageView>,
}

impl Controller {
    /// Attach a controller to a freshly mounted page.
    pub fn mount(backend: Arc<dyn DiagnosisBackend>, page: Arc<dyn PageView>) -> Self {
        tracing::debug!("Controller mounted");
        Self { backend, page }
    }

    /// Detach from the page by releasing this controller's backend and page
    /// handles.
    ///
    /// Clones held by requests still in flight keep their handles and finish
    /// rendering into the page they started on; callers that need every reply
    /// rendered must await those requests first.
    pub fn unmount(self) {
        let Self { backend, page } = self;
        drop(backend);
        drop(page);
        tracing::debug!("Controller unmounted");
    }

    /// Run the image analysis flow for the currently selected file.
    ///
    /// The preview read and the upload run concurrently; the preview is shown
    /// whether or not the upload succeeds.
    pub async fn submit_analysis(
        &self,
        file: Option<SelectedFile>,
    ) -> Result<AnalysisResult, ControllerError> {
        let Some(file) = file else {
            tracing::info!("Analysis submitted without a file");
            self.page.alert(NO_FILE_ALERT);
            return Err(ControllerError::NoFileSelected);
        };

        let span = tracing::info_span!(
            "analyze_xray",
            file_name = %file.file_name,
            size = file.data.len()
        );

        async {
            let (_, outcome) = tokio::join!(self.show_preview(&file), self.request_analysis(&file));

            match outcome {
                Ok(result) => {
                    tracing::info!(
                        prediction = %result.prediction,
                        confidence = result.confidence,
                        "X-ray analysis rendered"
                    );
                    Ok(result)
                }
                Err(e) => {
                    tracing::error!(error = %e, "Error analyzing X-ray");
                    self.page.alert(ANALYSIS_FAILED_ALERT);
                    Err(ControllerError::RequestFailed(e))
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn show_preview(&self, file: &SelectedFile) {
        match preview::read_as_data_url(file).await {
            Ok(data_url) => self.page.show_preview(&data_url),
            Err(e) => tracing::warn!(error = %e, "Failed to build image preview"),
        }
    }

    async fn request_analysis(&self, file: &SelectedFile) -> Result<AnalysisResult, BackendError> {
        let result = self.backend.analyze_xray(file).await?;
        let rendered = render_analysis(&result)?;
        self.apply_analysis(&rendered);
        Ok(result)
    }

    fn apply_analysis(&self, rendered: &RenderedAnalysis) {
        self.page.set_prediction(&rendered.prediction);
        for (class, text) in &rendered.scores {
            self.page.set_score(*class, text);
        }
        self.page.set_report(&rendered.report);
    }

    /// Run the chat flow for the current chat input.
    pub async fn submit_chat(&self) -> ChatOutcome {
        match self.begin_chat() {
            Some(message) => self.relay_chat(message).await,
            None => ChatOutcome::Ignored,
        }
    }

    /// Synchronous half of a chat submit: take the trimmed input, append it
    /// as the user's message and clear the field.
    ///
    /// Returns `None` when the input is blank, leaving the page untouched.
    pub fn begin_chat(&self) -> Option<String> {
        let message = self.page.chat_input().trim().to_string();
        if message.is_empty() {
            return None;
        }

        self.append_message(ChatMessage::user(message.clone()));
        self.page.clear_chat_input();
        Some(message)
    }

    /// Send a message already shown on the page and append the reply.
    pub async fn relay_chat(&self, message: String) -> ChatOutcome {
        let span = tracing::info_span!("medical_chat", message_len = message.len());

        async {
            match self.backend.medical_chat(&message).await {
                Ok(reply) => {
                    tracing::debug!(reply_len = reply.len(), "Chat reply received");
                    self.append_message(ChatMessage::ai(reply.clone()));
                    ChatOutcome::Replied(reply)
                }
                Err(e) => {
                    tracing::error!(error = %e, "Error in medical chat");
                    self.append_message(ChatMessage::ai(CHAT_FALLBACK_REPLY));
                    ChatOutcome::Fallback
                }
            }
        }
        .instrument(span)
        .await
    }

    fn append_message(&self, message: ChatMessage) {
        self.page.append_message(&message);
        self.page.scroll_messages_to_end();
    }
}
