use anyhow::Context;
use grubdash::config::{AppConfig, CONFIG_ENV};
use grubdash::logging;
use grubdash::server::ServerBuilder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let path = std::env::args().nth(1).or_else(|| std::env::var(CONFIG_ENV).ok());
    let config = AppConfig::load(path.as_deref()).context("invalid configuration")?;

    logging::init(&config.log_level);
    tracing::info!(
        config = path.as_deref().unwrap_or("<defaults>"),
        bind = %config.bind,
        cors = config.cors,
        "starting grubdash"
    );

    ServerBuilder::from_config(&config)?
        .serve(&config.bind)
        .await
        .context("server crashed")
}
