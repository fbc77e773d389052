//! HTTP client for the inference and chat endpoints.

use crate::config::BackendSettings;
use crate::error::BackendError;
use crate::models::{AnalysisResult, ChatRequest, ChatResponse, SelectedFile};
use crate::services::backend::DiagnosisBackend;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub struct HttpBackend {
    client: Client,
    settings: BackendSettings,
}

impl HttpBackend {
    pub fn new(settings: BackendSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.settings.url
    }
}

#[async_trait]
impl DiagnosisBackend for HttpBackend {
    async fn analyze_xray(&self, file: &SelectedFile) -> Result<AnalysisResult, BackendError> {
        let url = self.settings.analyze_url();

        let part = Part::bytes(file.data.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)?;
        let form = Form::new().part("file", part);

        tracing::debug!(
            url = %url,
            file_name = %file.file_name,
            size = file.data.len(),
            "Uploading X-ray"
        );

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send POST request to {}: {}", url, e);
                BackendError::Transport(e)
            })?;

        decode_json(response).await
    }

    async fn medical_chat(&self, message: &str) -> Result<String, BackendError> {
        let url = self.settings.chat_url();

        let response = self
            .client
            .post(&url)
            .json(&ChatRequest {
                message: message.to_string(),
            })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send POST request to {}: {}", url, e);
                BackendError::Transport(e)
            })?;

        let body: ChatResponse = decode_json(response).await?;
        Ok(body.response)
    }
}

/// `{"error": "..."}` bodies sent with non-2xx statuses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if !status.is_success() {
        let message = match serde_json::from_slice::<ErrorBody>(&bytes) {
            Ok(body) => body.error,
            Err(_) => String::from_utf8_lossy(&bytes).into_owned(),
        };
        return Err(BackendError::Status { status, message });
    }

    Ok(serde_json::from_slice(&bytes)?)
}
