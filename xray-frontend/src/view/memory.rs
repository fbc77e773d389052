use super::PageView;
use crate::models::{ChatMessage, ScoreClass};
use crate::render::Fragment;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Element contents of the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    pub alerts: Vec<String>,
    pub preview_src: Option<String>,
    pub preview_visible: bool,
    pub prediction_html: String,
    pub scores: HashMap<ScoreClass, String>,
    pub report_html: String,
    pub chat_input: String,
    pub messages: Vec<ChatMessage>,
    /// Number of messages in the list the last time it was scrolled to the end.
    pub scrolled_to: usize,
}

/// In-memory page model.
#[derive(Debug, Default)]
pub struct MemoryPage {
    state: Mutex<PageState>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the user typing into the chat input.
    pub fn type_chat_input(&self, text: &str) {
        self.state().chat_input = text.to_string();
    }

    pub fn snapshot(&self) -> PageState {
        self.state().clone()
    }

    fn state(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PageView for MemoryPage {
    fn alert(&self, message: &str) {
        self.state().alerts.push(message.to_string());
    }

    fn show_preview(&self, data_url: &str) {
        let mut state = self.state();
        state.preview_src = Some(data_url.to_string());
        state.preview_visible = true;
    }

    fn set_prediction(&self, fragment: &Fragment) {
        self.state().prediction_html = fragment.html.clone();
    }

    fn set_score(&self, class: ScoreClass, text: &str) {
        self.state().scores.insert(class, text.to_string());
    }

    fn set_report(&self, fragment: &Fragment) {
        self.state().report_html = fragment.html.clone();
    }

    fn chat_input(&self) -> String {
        self.state().chat_input.clone()
    }

    fn clear_chat_input(&self) {
        self.state().chat_input.clear();
    }

    fn append_message(&self, message: &ChatMessage) {
        self.state().messages.push(message.clone());
    }

    fn scroll_messages_to_end(&self) {
        let mut state = self.state();
        state.scrolled_to = state.messages.len();
    }
}
