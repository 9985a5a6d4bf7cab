use anyhow::{Context, Result};
use clap::Parser;
use leadmate_chat::{create_router, AppState, Config, GeminiClient, MeetingStore};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "leadmate-chat", about = "LeadMate CRM sales chat server")]
struct Args {
    /// Config file path (extension optional, file optional too)
    #[arg(long, default_value = "config/leadmate")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    let api_key = std::env::var("GEMINI_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty())
        .context("GEMINI_API_KEY is not defined; refusing to start")?;

    // PORT overrides the configured port (deployment platforms set it)
    let port = std::env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(cfg.service.http.port);

    let model = Arc::new(GeminiClient::new(&cfg.gemini, api_key));
    let state = AppState::new(MeetingStore::new(), model);
    let app = create_router(state);

    let addr = format!("{}:{}", cfg.service.http.bind, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("{} v0.1.0", cfg.service.name);
    info!("Server is running on http://{}", addr);
    info!("Meeting management available at:");
    info!("- GET /meetings - List all meetings");
    info!("- GET /meetings/:id - Get specific meeting");
    info!("- DELETE /meetings/:id - Cancel meeting");
    info!("- PUT /meetings/:id - Reschedule meeting");

    axum::serve(listener, app)
        .await
        .context("HTTP server failed")?;

    Ok(())
}
