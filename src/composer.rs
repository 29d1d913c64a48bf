//! Reply composition
//!
//! Pure priority rules mapping a turn's intents and fetch outcome to the
//! final reply text. Raw error details never reach the reply; failures map
//! to fixed safe messages.

use crate::error::WeatherBotError;
use crate::intent::Intent;
use crate::models::WeatherSnapshot;
use crate::recommendation;

pub const GREETING: &str = "Hi! I'm WeatherBot. Ask me about the weather.";

pub const GOODBYE: &str = "Goodbye!";

pub const ASK_LOCATION: &str =
    "Please specify a location or ask about the weather in a particular location.";

pub const WEATHER_UNAVAILABLE: &str =
    "Weather information is currently unavailable. Please try again later.";

pub const UNEXPECTED_DATA: &str =
    "Unexpected format in weather data. Please check the weather information and try again.";

pub const GENERIC_ERROR: &str = "An error occurred while handling your request. Please try again.";

pub const DRIVING_ADVISORY: &str = "It's recommended to drive cautiously in current weather \
     conditions. Factors such as overcast clouds and potential rain can contribute to reduced \
     visibility and slippery roads.";

pub const DRIVING_EXPLANATION: &str = "Cautious driving is advised due to reduced visibility and \
     potential slippery roads in the current weather conditions.";

pub const FOLLOW_UP_PROMPT: &str = "How can I assist you further? For example, you can ask about \
     more details on the weather.";

/// Compose the reply for one turn
///
/// `fetch` is `None` when no effective location existed (so no fetch was
/// attempted) and `Some` with the fetch outcome otherwise.
/// `new_location_this_turn` reports whether the resolver produced a location
/// from this turn's input.
#[must_use]
pub fn compose(
    intents: &[Intent],
    fetch: Option<Result<&WeatherSnapshot, &WeatherBotError>>,
    new_location_this_turn: bool,
) -> String {
    if intents.contains(&Intent::Exit) {
        return GOODBYE.to_string();
    }

    let Some(outcome) = fetch else {
        return ASK_LOCATION.to_string();
    };

    let snapshot = match outcome {
        Ok(snapshot) => snapshot,
        Err(error) => return failure_reply(intents, error),
    };

    if intents.contains(&Intent::Clothing) {
        return format!(
            "{} {}",
            snapshot.summary(),
            recommendation::recommend_clothing(Some(snapshot))
        );
    }

    if intents.contains(&Intent::Driving) {
        return format!("{} {}", snapshot.summary(), DRIVING_ADVISORY);
    }

    if intents.contains(&Intent::Explanation) && !new_location_this_turn {
        return DRIVING_EXPLANATION.to_string();
    }

    format!("{} {}", snapshot.summary(), FOLLOW_UP_PROMPT)
}

/// Map a failed fetch to a safe reply, without echoing the cause
fn failure_reply(intents: &[Intent], error: &WeatherBotError) -> String {
    match error {
        WeatherBotError::MalformedData { .. } => UNEXPECTED_DATA.to_string(),
        WeatherBotError::WeatherUnavailable { .. } => {
            if intents.contains(&Intent::Clothing) {
                recommendation::recommend_clothing(None)
            } else {
                WEATHER_UNAVAILABLE.to_string()
            }
        }
        _ => GENERIC_ERROR.to_string(),
    }
}
