use yew::prelude::*;

use crate::crop_recommendation::CropRecommendation;
use crate::types::{UserIdentity, WeatherSample};
use crate::weather_location::WeatherLocation;

#[derive(Properties, PartialEq)]
pub struct AgroAssistantProps {
    /// Keep the form hidden until a weather reading arrived.
    #[prop_or_default]
    pub wait_for_weather: bool,
    #[prop_or_default]
    pub identity: Option<UserIdentity>,
}

/// Whether the recommendation form is shown next to the weather card.
pub fn form_visible(wait_for_weather: bool, has_sample: bool) -> bool {
    !wait_for_weather || has_sample
}

#[function_component(AgroAssistant)]
pub fn agro_assistant(props: &AgroAssistantProps) -> Html {
    let weather = use_state(|| None::<WeatherSample>);

    let on_weather = {
        let weather = weather.clone();
        Callback::from(move |sample: WeatherSample| {
            weather.set(Some(sample));
        })
    };

    let show_form = form_visible(props.wait_for_weather, weather.is_some());

    html! {
        <div class="agro-assistant-view">
            <WeatherLocation {on_weather} />
            if show_form {
                <CropRecommendation weather={*weather} identity={props.identity.clone()} />
            }
        </div>
    }
}
