use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use weatherbot::{OpenWeatherClient, RuleBasedResolver, WeatherBot, WeatherBotConfig, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = WeatherBotConfig::load()?;
    init_tracing(&config);

    tracing::info!("Starting WeatherBot v{}", weatherbot::VERSION);

    let client = OpenWeatherClient::new(&config.provider)?;
    let bot = Arc::new(WeatherBot::new(
        Box::new(RuleBasedResolver),
        Box::new(client),
    ));

    web::run(config.server.port, bot).await;
    Ok(())
}

/// Initialize the tracing subscriber from logging configuration.
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(config: &WeatherBotConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    if config.logging.format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
