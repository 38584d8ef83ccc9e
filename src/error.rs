use thiserror::Error;

/// Failures surfaced by the remote services and the browser capabilities they rely on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Geolocation is not supported by your browser.")]
    GeolocationUnsupported,
    #[error("Error getting location: {0}")]
    Geolocation(String),
    #[error("network error: {0}")]
    Transport(String),
    #[error("service responded with status {status}")]
    Service {
        status: u16,
        message: Option<String>,
    },
    #[error("{0}")]
    Weather(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message the service put in its payload, if any.
    pub fn service_message(&self) -> Option<&str> {
        match self {
            ApiError::Service {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Transport(other.to_string()),
        }
    }
}
