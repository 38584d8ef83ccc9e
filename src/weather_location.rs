use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::config::Config;
use crate::error::ApiError;
use crate::state::request::use_request_tracker;
use crate::state::weather::WeatherState;
use crate::types::WeatherSample;

#[derive(Properties, PartialEq)]
pub struct WeatherLocationProps {
    pub on_weather: Callback<WeatherSample>,
}

#[function_component(WeatherLocation)]
pub fn weather_location(props: &WeatherLocationProps) -> Html {
    let config = use_context::<Rc<Config>>().unwrap_or_default();
    let weather = use_state(WeatherState::default);
    let tracker = use_request_tracker();

    // Locate the device once per mount, then look up the local weather
    {
        let weather = weather.clone();
        let on_weather = props.on_weather.clone();
        use_effect_with((), move |_| {
            let token = tracker.issue();
            let finish = move |result: Result<WeatherSample, ApiError>| {
                if !tracker.is_current(token) {
                    log::debug!("dropping weather result for a torn down view");
                    return;
                }
                match &result {
                    Ok(sample) => {
                        log::info!("weather data fetched: {:?}", sample);
                        on_weather.emit(*sample);
                    }
                    Err(err) => log::error!("weather lookup failed: {}", err),
                }
                weather.set(WeatherState::resolved(result));
            };

            request_position(move |position| match position {
                Ok((latitude, longitude)) => spawn_local(async move {
                    finish(api::fetch_weather(&config, latitude, longitude).await);
                }),
                Err(err) => finish(Err(err)),
            });

            || () // Cleanup function
        });
    }

    html! {
        <div class="weather-view">
            <h2>{"Weather Details"}</h2>
            {
                match &*weather {
                    WeatherState::Loading => html! {
                        <p class="status-message">{"Fetching weather data..."}</p>
                    },
                    WeatherState::Failed(message) => html! {
                        <p class="error-message">{message}</p>
                    },
                    WeatherState::Ready(sample) => html! {
                        <div class="weather-card">
                            <h3>{"Fetched Weather Data:"}</h3>
                            <p><strong>{"Temperature: "}</strong>{format!("{}°C", sample.temperature)}</p>
                            <p><strong>{"Humidity: "}</strong>{format!("{}%", sample.humidity)}</p>
                            <p><strong>{"Rainfall: "}</strong>{format!("{} mm", sample.rainfall_percentage)}</p>
                        </div>
                    },
                }
            }
        </div>
    }
}

fn geolocation() -> Option<web_sys::Geolocation> {
    let navigator = web_sys::window()?.navigator();
    let value = js_sys::Reflect::get(&navigator, &JsValue::from_str("geolocation")).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    Some(value.unchecked_into())
}

fn js_number(target: &JsValue, key: &str) -> Option<f64> {
    js_sys::Reflect::get(target, &JsValue::from_str(key))
        .ok()?
        .as_f64()
}

fn read_coordinates(position: &JsValue) -> Result<(f64, f64), ApiError> {
    let coords = js_sys::Reflect::get(position, &JsValue::from_str("coords"))
        .map_err(|_| ApiError::Geolocation("position has no coordinates".to_string()))?;
    match (js_number(&coords, "latitude"), js_number(&coords, "longitude")) {
        (Some(latitude), Some(longitude)) => Ok((latitude, longitude)),
        _ => Err(ApiError::Geolocation(
            "position has no coordinates".to_string(),
        )),
    }
}

/// Asks the browser for the device position. `on_done` runs exactly once,
/// whichever of the browser callbacks fires.
fn request_position<F>(on_done: F)
where
    F: FnOnce(Result<(f64, f64), ApiError>) + 'static,
{
    let Some(geolocation) = geolocation() else {
        on_done(Err(ApiError::GeolocationUnsupported));
        return;
    };

    let on_done = Rc::new(RefCell::new(Some(on_done)));
    let resolve = {
        let on_done = on_done.clone();
        move |result: Result<(f64, f64), ApiError>| {
            if let Some(done) = on_done.borrow_mut().take() {
                done(result);
            }
        }
    };

    let success = {
        let resolve = resolve.clone();
        Closure::once_into_js(move |position: JsValue| resolve(read_coordinates(&position)))
    };
    let failure = {
        let resolve = resolve.clone();
        Closure::once_into_js(move |error: JsValue| {
            let message = js_sys::Reflect::get(&error, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
                .unwrap_or_else(|| "unknown error".to_string());
            resolve(Err(ApiError::Geolocation(message)));
        })
    };

    if let Err(err) = geolocation.get_current_position_with_error_callback(
        success.unchecked_ref(),
        Some(failure.unchecked_ref()),
    ) {
        resolve(Err(ApiError::Geolocation(format!("{:?}", err))));
    }
}
