use super::{MemoryPage, PageState, PageView};
use crate::models::{ChatMessage, ScoreClass, Sender};
use crate::render::Fragment;
use std::io::Write;
use std::sync::Mutex;

/// Page printed to a terminal as it changes.
///
/// Element state is kept in a `MemoryPage`; every update is echoed to the
/// writer using the plain-text form of each fragment.
pub struct TerminalPage {
    page: MemoryPage,
    out: Mutex<Box<dyn Write + Send>>,
}

impl TerminalPage {
    pub fn new() -> Self {
        Self::with_writer(Box::new(std::io::stdout()))
    }

    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            page: MemoryPage::new(),
            out: Mutex::new(out),
        }
    }

    pub fn type_chat_input(&self, text: &str) {
        self.page.type_chat_input(text);
    }

    pub fn snapshot(&self) -> PageState {
        self.page.snapshot()
    }

    fn print(&self, line: &str) {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }
}

impl Default for TerminalPage {
    fn default() -> Self {
        Self::new()
    }
}

impl PageView for TerminalPage {
    fn alert(&self, message: &str) {
        self.page.alert(message);
        self.print(&format!("[alert] {}", message));
    }

    fn show_preview(&self, data_url: &str) {
        self.page.show_preview(data_url);
        let media_type = data_url
            .strip_prefix("data:")
            .and_then(|rest| rest.split(';').next())
            .unwrap_or("unknown");
        self.print(&format!(
            "[preview] {} image loaded ({} bytes as data URL)",
            media_type,
            data_url.len()
        ));
    }

    fn set_prediction(&self, fragment: &Fragment) {
        self.page.set_prediction(fragment);
        self.print(&fragment.text);
    }

    fn set_score(&self, class: ScoreClass, text: &str) {
        self.page.set_score(class, text);
        self.print(&format!("  {:<10} {}", class.label(), text));
    }

    fn set_report(&self, fragment: &Fragment) {
        self.page.set_report(fragment);
        self.print(&fragment.text);
    }

    fn chat_input(&self) -> String {
        self.page.chat_input()
    }

    fn clear_chat_input(&self) {
        self.page.clear_chat_input();
    }

    fn append_message(&self, message: &ChatMessage) {
        self.page.append_message(message);
        let prefix = match message.sender {
            Sender::User => "you",
            Sender::Ai => "ai",
        };
        self.print(&format!("{}> {}", prefix, message.text));
    }

    fn scroll_messages_to_end(&self) {
        // Output already follows the newest line.
        self.page.scroll_messages_to_end();
    }
}
