pub mod analysis;
pub mod chat;
pub mod file;

pub use analysis::{format_percent, AnalysisResult, ScoreClass};
pub use chat::{ChatMessage, ChatRequest, ChatResponse, Sender};
pub use file::SelectedFile;
