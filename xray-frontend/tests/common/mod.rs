//! Shared helpers for controller integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use xray_frontend::models::{AnalysisResult, SelectedFile};
use xray_frontend::services::DiagnosisBackend;
use xray_frontend::view::MemoryPage;
use xray_frontend::{BackendError, Controller};

/// In-memory backend that records every call.
#[derive(Default)]
pub struct MockBackend {
    /// `None` makes `/analyze-xray` fail with a 500.
    pub analysis: Option<AnalysisResult>,
    /// When false, `/medical-chat` fails with a 502.
    pub chat_enabled: bool,
    /// Artificial latency before `/analyze-xray` answers.
    pub analysis_delay: Option<Duration>,
    /// Artificial latency per chat message.
    pub chat_delays: HashMap<String, Duration>,
    pub analyze_calls: AtomicUsize,
    pub chat_messages: Mutex<Vec<String>>,
}

impl MockBackend {
    pub fn answering(analysis: AnalysisResult) -> Self {
        Self {
            analysis: Some(analysis),
            chat_enabled: true,
            ..Default::default()
        }
    }

    pub fn chatting() -> Self {
        Self {
            chat_enabled: true,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn analyze_calls(&self) -> usize {
        self.analyze_calls.load(Ordering::SeqCst)
    }

    pub fn chat_messages(&self) -> Vec<String> {
        self.chat_messages.lock().unwrap().clone()
    }
}

/// Reply text the mock sends for a chat message.
pub fn reply_to(message: &str) -> String {
    format!("re: {}", message)
}

#[async_trait]
impl DiagnosisBackend for MockBackend {
    async fn analyze_xray(&self, _file: &SelectedFile) -> Result<AnalysisResult, BackendError> {
        self.analyze_calls.fetch_add(1, Ordering::SeqCst);
        match self.analysis_delay {
            Some(delay) => tokio::time::sleep(delay).await,
            None => tokio::task::yield_now().await,
        }

        self.analysis.clone().ok_or_else(|| BackendError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "inference unavailable".to_string(),
        })
    }

    async fn medical_chat(&self, message: &str) -> Result<String, BackendError> {
        self.chat_messages.lock().unwrap().push(message.to_string());

        if let Some(delay) = self.chat_delays.get(message) {
            tokio::time::sleep(*delay).await;
        }

        if !self.chat_enabled {
            return Err(BackendError::Status {
                status: StatusCode::BAD_GATEWAY,
                message: "chat service unreachable".to_string(),
            });
        }

        Ok(reply_to(message))
    }
}

pub fn analysis(prediction: &str, confidence: f64, scores: [f64; 3], report: &str) -> AnalysisResult {
    AnalysisResult {
        prediction: prediction.to_string(),
        confidence,
        probabilities: HashMap::from([
            ("Pneumonia".to_string(), scores[0]),
            ("Covid".to_string(), scores[1]),
            ("Normal".to_string(), scores[2]),
        ]),
        medical_report: report.to_string(),
    }
}

pub fn xray(name: &str, bytes: &[u8]) -> SelectedFile {
    SelectedFile::new(name, "image/png", bytes.to_vec())
}

pub fn mount(backend: MockBackend) -> (Controller, Arc<MockBackend>, Arc<MemoryPage>) {
    let backend = Arc::new(backend);
    let page = Arc::new(MemoryPage::new());
    let controller = Controller::mount(backend.clone(), page.clone());
    (controller, backend, page)
}
