mod common;

use common::{analysis, reply_to, MockBackend};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::BufReader;
use xray_frontend::console::Console;
use xray_frontend::controller::NO_FILE_ALERT;
use xray_frontend::models::{ChatMessage, ScoreClass};
use xray_frontend::view::TerminalPage;
use xray_frontend::Controller;

fn console_over(backend: MockBackend) -> (Console, Arc<MockBackend>, Arc<TerminalPage>) {
    let backend = Arc::new(backend);
    let page = Arc::new(TerminalPage::with_writer(Box::new(std::io::sink())));
    let controller = Controller::mount(backend.clone(), page.clone());
    (Console::new(controller, page.clone()), backend, page)
}

fn input(text: &'static str) -> BufReader<&'static [u8]> {
    BufReader::new(text.as_bytes())
}

#[tokio::test]
async fn end_of_input_waits_for_pending_chat_reply() {
    let mut backend = MockBackend::chatting();
    backend
        .chat_delays
        .insert("hello".to_string(), Duration::from_millis(200));
    let (console, _, page) = console_over(backend);

    console.run(input("hello\n")).await.unwrap();

    assert_eq!(
        page.snapshot().messages,
        vec![ChatMessage::user("hello"), ChatMessage::ai(reply_to("hello"))]
    );
}

#[tokio::test]
async fn quit_waits_for_pending_requests() {
    let mut backend = MockBackend::answering(analysis(
        "Pneumonia",
        0.8,
        [0.8, 0.1, 0.1],
        "Comprehensive pneumonia evaluation...",
    ));
    backend.analysis_delay = Some(Duration::from_millis(200));
    backend
        .chat_delays
        .insert("hello".to_string(), Duration::from_millis(200));
    let (console, backend, page) = console_over(backend);

    let path = std::env::temp_dir().join("xray-frontend-console-test.png");
    tokio::fs::write(&path, b"png").await.unwrap();
    let lines = format!("/analyze {}\nhello\n/quit\nignored after quit\n", path.display());

    console
        .run(BufReader::new(lines.as_bytes()))
        .await
        .unwrap();
    tokio::fs::remove_file(&path).await.unwrap();

    let state = page.snapshot();
    assert_eq!(backend.analyze_calls(), 1);
    assert_eq!(state.scores[&ScoreClass::Pneumonia], "80.00%");
    assert!(state.report_html.contains("Comprehensive pneumonia evaluation..."));
    assert_eq!(
        state.messages,
        vec![ChatMessage::user("hello"), ChatMessage::ai(reply_to("hello"))]
    );
    assert_eq!(backend.chat_messages(), vec!["hello".to_string()]);
}

#[tokio::test]
async fn analyze_without_path_alerts_no_file() {
    let (console, backend, page) = console_over(MockBackend::chatting());

    console.run(input("/analyze\n")).await.unwrap();

    assert_eq!(page.snapshot().alerts, vec![NO_FILE_ALERT.to_string()]);
    assert_eq!(backend.analyze_calls(), 0);
}

#[tokio::test]
async fn unreadable_path_reports_read_error() {
    let (console, backend, page) = console_over(MockBackend::chatting());

    console
        .run(input("/analyze /nonexistent/xray-frontend/chest.png\n"))
        .await
        .unwrap();

    let alerts = page.snapshot().alerts;
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].starts_with("Failed to read /nonexistent/xray-frontend/chest.png"));
    assert_ne!(alerts[0], NO_FILE_ALERT);
    assert_eq!(backend.analyze_calls(), 0);
}

#[tokio::test]
async fn blank_lines_send_nothing() {
    let (console, backend, page) = console_over(MockBackend::chatting());

    console.run(input("\n   \n")).await.unwrap();

    assert!(page.snapshot().messages.is_empty());
    assert!(backend.chat_messages().is_empty());
}
