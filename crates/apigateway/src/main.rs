use anyhow::{Context, Result};
use apigateway::{handler::AppRouter, state::AppState};
use dotenv::dotenv;
use shared::{config::Config, utils::Logger};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let _logger = Logger::new("card-generator", &config.log_dir)
        .context("Failed to initialize logger")?;

    info!(
        "⚙️ Max batch size: {}, seeded: {}",
        config.generator.max_batch_size,
        config.generator.seed.is_some()
    );

    let state = AppState::new(&config.generator);

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("✅ Card generator shutdown complete.");

    Ok(())
}
