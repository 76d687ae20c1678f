use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobseeker_a2a::{
    agent::JobSeekerAgent,
    codec::JsonRpcCodec,
    config::AgentConfig,
    extractor::HeuristicExtractor,
    history::HistoryStore,
    provider::JobSearchClient,
    server::{build_router, AppState},
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AgentConfig::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting jobseeker agent v{}", env!("CARGO_PKG_VERSION"));

    let jobs = JobSearchClient::from_config(&config.provider)
        .context("Failed to build job provider client")?;
    let agent = JobSeekerAgent::new(
        Arc::new(HeuristicExtractor::new()),
        jobs,
        Arc::new(HistoryStore::new()),
    );

    let state = AppState::new(Arc::new(agent)).with_codec(JsonRpcCodec::new().with_debug(config.debug));
    let app = build_router(state);

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
    }
}
