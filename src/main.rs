//! Aura Overlay - Main Entry Point
//!
//! Loads the reference overlay, then serves the upload page and the
//! compositing API until interrupted.

use std::sync::Arc;

use anyhow::Context;

use aura_overlay::api::{run_server, SharedState};
use aura_overlay::settings::ServerSettings;
use aura_overlay::{compositor, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _log_guard = telemetry::init_logging_default()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    tracing::info!("Starting Aura Overlay v{}", env!("CARGO_PKG_VERSION"));

    let settings = ServerSettings::from_env();

    // Fail fast if the reference overlay is missing or corrupt
    let overlay_bytes = std::fs::read(&settings.overlay_path).with_context(|| {
        format!(
            "failed to read reference overlay {}",
            settings.overlay_path.display()
        )
    })?;
    let overlay = compositor::decode_rgba(&overlay_bytes).with_context(|| {
        format!(
            "reference overlay {} is not a valid image",
            settings.overlay_path.display()
        )
    })?;
    tracing::info!(
        width = overlay.width(),
        height = overlay.height(),
        path = %settings.overlay_path.display(),
        "Reference overlay loaded"
    );

    let port = settings.port;
    let state = Arc::new(SharedState::new(overlay, settings)?);

    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Received ctrl-c, shutting down");
            let _ = shutdown_tx.send(true);
        }
    });

    run_server(port, state, shutdown_rx).await?;
    Ok(())
}
