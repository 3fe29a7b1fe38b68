use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use critique_llm::GeminiFactory;
use critique_server::{AppState, ServerConfig, SessionStore};
use critique_telemetry::TelemetryConfig;

#[derive(Parser)]
#[command(
    name = "critique",
    about = "Design critique service backed by a multimodal model",
    version
)]
struct Cli {
    /// Port to listen on.
    #[arg(long, default_value_t = 9280)]
    port: u16,

    /// Gemini model id used for every analysis.
    #[arg(long, default_value = critique_llm::DEFAULT_MODEL)]
    model: String,

    /// Override the Gemini API base URL (proxies, testing).
    #[arg(long)]
    base_url: Option<String>,

    /// Emit JSON-formatted log lines.
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    critique_telemetry::init_telemetry(&TelemetryConfig {
        json_output: cli.json_logs,
        ..Default::default()
    });

    tracing::info!(model = %cli.model, "Starting critique server");

    let config = ServerConfig {
        port: cli.port,
        ..Default::default()
    };

    let factory = GeminiFactory::new(&cli.model, cli.base_url.clone())
        .with_timeout(Duration::from_secs(config.request_timeout_secs));

    let state = AppState {
        store: Arc::new(SessionStore::new()),
        factory: Arc::new(factory),
    };

    let handle = critique_server::start(config, state)
        .await
        .expect("Failed to start server");

    tracing::info!(port = handle.port, "Critique server ready");

    // Wait for shutdown signal
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for ctrl+c");

    tracing::info!("Shutting down");
}
