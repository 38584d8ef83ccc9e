use crate::error::ApiError;
use crate::types::WeatherSample;

#[derive(Clone, PartialEq, Debug, Default)]
pub enum WeatherState {
    #[default]
    Loading,
    Ready(WeatherSample),
    Failed(String),
}

impl WeatherState {
    /// Terminal state for a lookup that finished with `result`.
    pub fn resolved(result: Result<WeatherSample, ApiError>) -> Self {
        match result {
            Ok(sample) => WeatherState::Ready(sample),
            Err(error) => WeatherState::Failed(failure_message(&error)),
        }
    }
}

pub fn failure_message(error: &ApiError) -> String {
    match error {
        ApiError::GeolocationUnsupported | ApiError::Geolocation(_) => error.to_string(),
        other => format!("An unexpected error occurred: {}", other),
    }
}
