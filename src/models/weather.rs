//! Weather snapshot model and display methods

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Location;

/// A normalized weather reading for one location at fetch time
///
/// Only ever constructed from a successful provider response — a failed or
/// absent fetch propagates as an error, never as a zero-valued snapshot.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherSnapshot {
    /// Location this reading belongs to
    pub location: Location,
    /// Human-readable description of conditions (e.g. "clear sky")
    pub description: String,
    /// Temperature in Celsius
    pub temperature: f32,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// When this reading was fetched
    pub fetched_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    /// Render the base weather sentence used in replies
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "The weather in {} is {}. Temperature: {}°C, Humidity: {}%.",
            self.location, self.description, self.temperature, self.humidity
        )
    }

    /// Whether the description mentions rain, case-insensitively
    #[must_use]
    pub fn mentions_rain(&self) -> bool {
        self.description.to_lowercase().contains("rain")
    }
}
