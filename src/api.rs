//! HTTP calls to the prediction service and the weather service.
//!
//! Every call reads the body as text first and hands it to a `parse_*`
//! function, so payload handling can be exercised without a browser.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::config::Config;
use crate::error::ApiError;
use crate::state::form::PredictionRequest;
use crate::types::{
    CropDetails, EntriesResponse, PredictionResponse, ProjectEntry, SaveSelectionRequest,
    WeatherSample,
};

pub const PREDICT_PATH: &str = "/predict";
pub const STORE_SELECTION_PATH: &str = "/store-selected-crops";
pub const PROJECT_ENTRIES_PATH: &str = "/get-project-entries";
pub const USER_PROJECTS_PATH: &str = "/get-user-projects";
pub const CROP_DETAILS_PATH: &str = "/get-crop-details";

/// Which saved entries to list.
#[derive(Clone, PartialEq, Debug)]
pub enum EntryQuery {
    ProjectName(String),
    UserEmail(String),
}

impl EntryQuery {
    pub fn path(&self) -> &'static str {
        match self {
            EntryQuery::ProjectName(_) => PROJECT_ENTRIES_PATH,
            EntryQuery::UserEmail(_) => USER_PROJECTS_PATH,
        }
    }

    pub fn param(&self) -> (&'static str, &str) {
        match self {
            EntryQuery::ProjectName(name) => ("project_name", name.as_str()),
            EntryQuery::UserEmail(email) => ("email", email.as_str()),
        }
    }
}

/// Result of a crop-detail lookup that reached the service.
#[derive(Clone, PartialEq, Debug)]
pub enum CropLookup {
    Found(CropDetails),
    NotFound,
}

#[derive(Deserialize)]
struct WeatherPayload {
    current: Option<CurrentConditions>,
    error: Option<WeatherErrorInfo>,
}

#[derive(Deserialize)]
struct CurrentConditions {
    temperature: f64,
    humidity: f64,
    precip: f64,
}

#[derive(Deserialize)]
struct WeatherErrorInfo {
    info: Option<String>,
}

pub fn coordinates_query(latitude: f64, longitude: f64) -> String {
    format!("{},{}", latitude, longitude)
}

/// `message` field of a JSON payload, if the body is an object carrying one.
pub fn message_from(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

/// Decode a JSON body, turning non-OK statuses into `ApiError::Service`.
pub fn decode_json<T: DeserializeOwned>(status: u16, ok: bool, body: &str) -> Result<T, ApiError> {
    if !ok {
        return Err(ApiError::Service {
            status,
            message: message_from(body),
        });
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

pub fn parse_weather(body: &str) -> Result<WeatherSample, ApiError> {
    let payload: WeatherPayload =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;

    if let Some(error) = payload.error {
        return Err(ApiError::Weather(
            error
                .info
                .unwrap_or_else(|| "Weather service reported an error.".to_string()),
        ));
    }

    let current = payload
        .current
        .ok_or_else(|| ApiError::Decode("missing current conditions".to_string()))?;

    Ok(WeatherSample {
        temperature: current.temperature,
        humidity: current.humidity,
        rainfall_percentage: current.precip,
    })
}

/// Crop details are looked up by name; a payload without a non-empty `name`
/// means the service does not know the crop, whatever the status code.
pub fn parse_crop_details(body: &str) -> Result<CropLookup, ApiError> {
    let value: Value = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;

    let field = |key: &str| match value.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    };

    let name = field("name");
    if name.is_empty() {
        return Ok(CropLookup::NotFound);
    }

    Ok(CropLookup::Found(CropDetails {
        name,
        soil: field("soil"),
        planting: field("planting"),
        timeline: field("timeline"),
        fertilizers: field("fertilizers"),
        harvesting: field("harvesting"),
        fertilizer_schedule: field("fertilizer_schedule"),
        pest_control: field("pest_control"),
    }))
}

async fn read_body(response: Response) -> Result<(u16, bool, String), ApiError> {
    let status = response.status();
    let ok = response.ok();
    let body = response.text().await?;
    Ok((status, ok, body))
}

pub async fn fetch_weather(
    config: &Config,
    latitude: f64,
    longitude: f64,
) -> Result<WeatherSample, ApiError> {
    let query = coordinates_query(latitude, longitude);
    let response = Request::get(&config.weather_url)
        .query([
            ("access_key", config.weather_access_key.as_str()),
            ("query", query.as_str()),
        ])
        .send()
        .await?;

    let (status, ok, body) = read_body(response).await?;
    if !ok {
        log::warn!("weather service responded with status {}", status);
        return Err(ApiError::Weather("Failed to fetch weather data.".to_string()));
    }
    parse_weather(&body)
}

pub async fn predict(
    config: &Config,
    form: &PredictionRequest,
) -> Result<PredictionResponse, ApiError> {
    let response = Request::post(&config.endpoint(PREDICT_PATH))
        .json(form)?
        .send()
        .await?;
    let (status, ok, body) = read_body(response).await?;
    decode_json(status, ok, &body)
}

/// Store a crop selection. The service answers with a `message` for success
/// and for rejections alike, so the message is returned for any status.
pub async fn store_selected_crops(
    config: &Config,
    request: &SaveSelectionRequest,
) -> Result<String, ApiError> {
    let response = Request::post(&config.endpoint(STORE_SELECTION_PATH))
        .json(request)?
        .send()
        .await?;
    let (status, _, body) = read_body(response).await?;
    message_from(&body).ok_or(ApiError::Service {
        status,
        message: None,
    })
}

pub async fn fetch_entries(
    config: &Config,
    query: &EntryQuery,
) -> Result<Vec<ProjectEntry>, ApiError> {
    let response = Request::get(&config.endpoint(query.path()))
        .query([query.param()])
        .send()
        .await?;
    let (status, ok, body) = read_body(response).await?;
    decode_json::<EntriesResponse>(status, ok, &body).map(|r| r.entries)
}

pub async fn fetch_crop_details(config: &Config, crop_name: &str) -> Result<CropLookup, ApiError> {
    let response = Request::get(&config.endpoint(CROP_DETAILS_PATH))
        .query([("crop_name", crop_name)])
        .send()
        .await?;
    let (_, _, body) = read_body(response).await?;
    parse_crop_details(&body)
}
