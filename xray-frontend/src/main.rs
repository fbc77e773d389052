use dotenvy::dotenv;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::info;
use xray_frontend::config::get_configuration;
use xray_frontend::console::{Console, USAGE};
use xray_frontend::observability::init_tracing;
use xray_frontend::services::HttpBackend;
use xray_frontend::view::TerminalPage;
use xray_frontend::Controller;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(&configuration.logging);

    let backend = Arc::new(HttpBackend::new(configuration.backend.clone()));
    let page = Arc::new(TerminalPage::new());
    let controller = Controller::mount(backend.clone(), page.clone());

    info!(backend = %backend.base_url(), "Starting xray-frontend");
    println!("{}", USAGE);

    Console::new(controller, page)
        .run(BufReader::new(tokio::io::stdin()))
        .await?;

    info!("Shutting down xray-frontend");

    Ok(())
}
