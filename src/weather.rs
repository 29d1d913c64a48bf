//! Weather provider client for OpenWeatherMap
//!
//! One GET per turn against the current-conditions endpoint, bounded by the
//! configured timeout and never retried. Failures collapse into a
//! single user-facing condition; the distinguishing cause is tagged and
//! logged but never surfaced.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::config::ProviderConfig;
use crate::error::{ProviderFailure, WeatherBotError};
use crate::models::{Location, WeatherSnapshot};

/// Source of current weather conditions
///
/// The seam between the turn pipeline and the outside world; tests script
/// this trait instead of talking to a real provider.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, location: &Location) -> Result<WeatherSnapshot, WeatherBotError>;
}

/// HTTP client for the OpenWeatherMap current-conditions API
pub struct OpenWeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    /// Create a new client from provider configuration
    pub fn new(config: &ProviderConfig) -> anyhow::Result<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            WeatherBotError::config(
                "Weather API key is required. Set WEATHERBOT_PROVIDER__API_KEY or \
                 provider.api_key in the config file.",
            )
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("weatherbot/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key,
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, location: &Location) -> Result<WeatherSnapshot, WeatherBotError> {
        let url = format!(
            "{}?q={}&appid={}&units=metric",
            self.base_url,
            urlencoding::encode(location.name()),
            self.api_key
        );

        debug!("Requesting current conditions for {}", location);

        // Single attempt per turn; a failed fetch is reported, not retried
        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Weather request for {} failed in transport: {}", location, e);
            WeatherBotError::unavailable(ProviderFailure::Transport(e.to_string()))
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Provider returned {} for {}", status, location);
            return Err(WeatherBotError::unavailable(ProviderFailure::Status(
                status.as_u16(),
            )));
        }

        let payload: openweather::CurrentResponse = response.json().await.map_err(|e| {
            error!("Failed to decode provider response for {}: {}", location, e);
            WeatherBotError::unavailable(ProviderFailure::Decode(e.to_string()))
        })?;

        let snapshot = payload.into_snapshot(location.clone())?;
        info!(
            "Fetched conditions for {}: {}, {}°C",
            location, snapshot.description, snapshot.temperature
        );
        Ok(snapshot)
    }
}

/// `OpenWeatherMap` API response structures and conversion
mod openweather {
    use chrono::Utc;
    use serde::Deserialize;

    use crate::error::WeatherBotError;
    use crate::models::{Location, WeatherSnapshot};

    /// Current-conditions response from `OpenWeatherMap`
    #[derive(Debug, Deserialize)]
    pub struct CurrentResponse {
        pub weather: Vec<Condition>,
        pub main: Readings,
    }

    #[derive(Debug, Deserialize)]
    pub struct Condition {
        pub description: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct Readings {
        /// Temperature in Celsius (`units=metric`)
        pub temp: f32,
        /// Relative humidity percentage
        pub humidity: u8,
    }

    impl CurrentResponse {
        /// Convert into the internal snapshot model
        ///
        /// A payload that parsed but carries no condition entry cannot fill
        /// the snapshot and is reported as malformed data.
        pub fn into_snapshot(self, location: Location) -> Result<WeatherSnapshot, WeatherBotError> {
            let condition = self
                .weather
                .into_iter()
                .next()
                .ok_or_else(|| WeatherBotError::malformed("response carried no weather entry"))?;

            Ok(WeatherSnapshot {
                location,
                description: condition.description,
                temperature: self.main.temp,
                humidity: self.main.humidity,
                fetched_at: Utc::now(),
            })
        }
    }
}
