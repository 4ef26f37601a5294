use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gpa_engine::api::{AppState, create_router};
use gpa_engine::config::ConfigLoader;
use gpa_engine::telemetry;

/// Serves the GPA engine HTTP API.
#[derive(Debug, Parser)]
#[command(name = "gpa-engine", version, about)]
struct Cli {
    /// Grading scheme directory
    #[arg(long, env = "GPA_ENGINE_CONFIG", default_value = "./config/vtu")]
    config: PathBuf,

    /// Address to listen on
    #[arg(long, env = "GPA_ENGINE_BIND", default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.json_logs);

    tracing::info!(config = %cli.config.display(), "Starting gpa-engine");

    let loader = ConfigLoader::load(&cli.config)
        .with_context(|| format!("loading grading scheme from {}", cli.config.display()))?;
    let router = create_router(AppState::new(loader));

    let listener = tokio::net::TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("binding {}", cli.bind))?;
    tracing::info!(addr = %cli.bind, "Listening");

    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
