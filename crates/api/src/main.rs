use anyhow::Context;

use cartwheel_api::app::{build_app, AppServices};
use cartwheel_api::config::AppConfig;
use cartwheel_api::seed::SeedData;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cartwheel_observability::init();

    let config = AppConfig::from_env().context("invalid configuration")?;

    let seed = match &config.seed_path {
        Some(path) => SeedData::load(path)?,
        None => {
            tracing::warn!("SEED_PATH not set; starting with an empty catalog and user ledger");
            SeedData::default()
        }
    };

    let app = build_app(AppServices::in_memory(&config, seed));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
