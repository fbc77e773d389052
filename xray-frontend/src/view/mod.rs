//! Page surfaces the controller renders into.
//!
//! A `PageView` owns the handles to every element the two flows touch. All
//! methods take `&self`; implementations guard their state internally since
//! concurrent submits may write to the same page.

pub mod memory;
pub mod terminal;

use crate::models::{ChatMessage, ScoreClass};
use crate::render::Fragment;

pub use memory::{MemoryPage, PageState};
pub use terminal::TerminalPage;

pub trait PageView: Send + Sync {
    /// Blocking user-visible notice.
    fn alert(&self, message: &str);

    /// Set the preview image source and make it visible.
    fn show_preview(&self, data_url: &str);

    fn set_prediction(&self, fragment: &Fragment);

    fn set_score(&self, class: ScoreClass, text: &str);

    fn set_report(&self, fragment: &Fragment);

    /// Current contents of the chat input field.
    fn chat_input(&self) -> String;

    fn clear_chat_input(&self);

    fn append_message(&self, message: &ChatMessage);

    /// Scroll the message list so the newest entry is visible.
    fn scroll_messages_to_end(&self);
}
