use serde::{Deserialize, Serialize};

/// Body sent to `POST /medical-chat`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

impl Sender {
    /// Styling classes for a message entry from this sender.
    pub fn css_classes(self) -> &'static str {
        match self {
            Sender::User => "p-2 rounded bg-blue-600 text-white self-end",
            Sender::Ai => "p-2 rounded bg-gray-700 text-gray-100 self-start",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn ai(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Ai,
            text: text.into(),
        }
    }
}
