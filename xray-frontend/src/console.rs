//! Line-oriented console driving a controller over a `TerminalPage`.

use crate::controller::Controller;
use crate::models::SelectedFile;
use crate::view::{PageView, TerminalPage};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinSet;

pub const USAGE: &str =
    "Type a message to chat, `/analyze <path>` to upload an X-ray, `/quit` to exit.";

/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/analyze` with an optional path; no path means no file is selected.
    Analyze(Option<PathBuf>),
    Quit,
    /// Anything else is typed into the chat input as-is.
    Chat(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();

        if trimmed == "/quit" {
            return Command::Quit;
        }
        if trimmed == "/analyze" {
            return Command::Analyze(None);
        }
        if let Some(path) = trimmed.strip_prefix("/analyze ") {
            return Command::Analyze(Some(PathBuf::from(path.trim())));
        }

        Command::Chat(line.to_string())
    }
}

pub struct Console {
    controller: Controller,
    page: Arc<TerminalPage>,
    tasks: JoinSet<()>,
}

impl Console {
    pub fn new(controller: Controller, page: Arc<TerminalPage>) -> Self {
        Self {
            controller,
            page,
            tasks: JoinSet::new(),
        }
    }

    /// Handle lines until `/quit` or end of input, then wait for every
    /// outstanding request before unmounting the controller.
    pub async fn run<R>(mut self, input: R) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();

        let result = loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if !self.handle_line(&line).await {
                        break Ok(());
                    }
                }
                Ok(None) => break Ok(()),
                Err(e) => break Err(anyhow::anyhow!("Failed to read input: {}", e)),
            }
        };

        self.shutdown().await;
        result
    }

    /// Returns false once the user asked to quit.
    pub async fn handle_line(&mut self, line: &str) -> bool {
        match Command::parse(line) {
            Command::Quit => return false,
            Command::Analyze(path) => self.analyze(path).await,
            Command::Chat(text) => self.chat(&text),
        }
        true
    }

    async fn analyze(&mut self, path: Option<PathBuf>) {
        let file = match path {
            None => None,
            Some(path) => match SelectedFile::open(&path).await {
                Ok(file) => Some(file),
                Err(e) => {
                    tracing::error!(path = %path.display(), error = %e, "Failed to read selected file");
                    self.page
                        .alert(&format!("Failed to read {}: {}", path.display(), e));
                    return;
                }
            },
        };

        let controller = self.controller.clone();
        self.tasks.spawn(async move {
            // Failures are already alerted on the page by the controller.
            if let Err(e) = controller.submit_analysis(file).await {
                tracing::debug!(error = %e, "Analysis finished without a result");
            }
        });
    }

    fn chat(&mut self, text: &str) {
        self.page.type_chat_input(text);

        if let Some(message) = self.controller.begin_chat() {
            let controller = self.controller.clone();
            self.tasks.spawn(async move {
                let outcome = controller.relay_chat(message).await;
                tracing::debug!(?outcome, "Chat relay finished");
            });
        }
    }

    async fn shutdown(mut self) {
        if !self.tasks.is_empty() {
            tracing::info!(pending = self.tasks.len(), "Waiting for outstanding requests");
        }
        while let Some(joined) = self.tasks.join_next().await {
            if let Err(e) = joined {
                tracing::error!(error = %e, "Console task failed");
            }
        }
        self.controller.unmount();
    }
}
