use anyhow::Context as _;
use tracing::info;

use vigil_core::tracing::init_tracing;
use vigil_probes::config::ProbesConfig;
use vigil_probes::router::build_router;
use vigil_probes::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ProbesConfig::from_env();
    info!(database = ?config.database, "loaded probes configuration");

    let router = build_router(AppState::new(config.database));
    let addr = format!("0.0.0.0:{}", config.probes_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("probes service listening on {addr}");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("probes service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("received shutdown signal");
}
