use tracing::{error, info};

pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("🛑 Shutdown signal received."),
        Err(e) => error!("Failed to listen for shutdown signal: {e}"),
    }
}
