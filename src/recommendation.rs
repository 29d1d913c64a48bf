//! Clothing recommendation rule engine
//!
//! A deterministic rule ladder over a weather snapshot. Pure: the same
//! snapshot always yields the same text, and an absent snapshot yields a
//! fixed apology instead of an error.

use crate::models::WeatherSnapshot;

/// Reply when no snapshot is available for the requested location
pub const NO_SNAPSHOT_APOLOGY: &str =
    "Unable to retrieve weather information. Please check the location and try again.";

/// Temperature below which a warm jacket is advised, in Celsius
const COLD_THRESHOLD: f32 = 10.0;
/// Upper bound of the sweater band, in Celsius
const MILD_THRESHOLD: f32 = 20.0;
/// Humidity percentage above which an umbrella is advised
const HUMID_THRESHOLD: u8 = 70;

/// Derive clothing advice from a weather snapshot
///
/// Clauses are evaluated in fixed order and joined into one sentence: the
/// temperature band always contributes exactly one clause, high humidity
/// appends the umbrella clause, and a rainy description appends waterproof
/// shoes.
#[must_use]
pub fn recommend_clothing(snapshot: Option<&WeatherSnapshot>) -> String {
    let Some(snapshot) = snapshot else {
        return NO_SNAPSHOT_APOLOGY.to_string();
    };

    let mut clauses: Vec<&str> = Vec::new();

    if snapshot.temperature < COLD_THRESHOLD {
        clauses.push("a warm jacket");
    } else if snapshot.temperature <= MILD_THRESHOLD {
        clauses.push("a sweater or light jacket");
    } else {
        clauses.push("light clothing");
    }

    if snapshot.humidity > HUMID_THRESHOLD {
        clauses.push("and bring an umbrella");
    }

    if snapshot.mentions_rain() {
        clauses.push("waterproof shoes");
    }

    if clauses.is_empty() {
        // Unreachable while the temperature band always fires; guarded anyway
        return format!(
            "No specific clothing recommendation for the current weather in {}.",
            snapshot.location
        );
    }

    format!(
        "You may want to wear {} based on the current weather.",
        clauses.join(", ")
    )
}
