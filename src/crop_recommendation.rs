use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::config::Config;
use crate::state::form::FormField;
use crate::state::recommendation::{RecommendationAction, RecommendationState};
use crate::state::request::use_request_tracker;
use crate::types::{Category, UserIdentity, WeatherSample};

#[derive(Properties, PartialEq)]
pub struct CropRecommendationProps {
    #[prop_or_default]
    pub weather: Option<WeatherSample>,
    #[prop_or_default]
    pub identity: Option<UserIdentity>,
}

#[function_component(CropRecommendation)]
pub fn crop_recommendation(props: &CropRecommendationProps) -> Html {
    let config = use_context::<Rc<Config>>().unwrap_or_default();
    let state = use_reducer(RecommendationState::default);
    let predict_requests = use_request_tracker();
    let save_requests = use_request_tracker();

    // Weather readings replace whatever was typed in the matching fields
    {
        let state = state.clone();
        use_effect_with(props.weather, move |weather| {
            if let Some(sample) = weather {
                state.dispatch(RecommendationAction::ApplyWeather(*sample));
            }
            || ()
        });
    }

    let on_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            if let Some(field) = FormField::from_name(&input.name()) {
                state.dispatch(RecommendationAction::Edit(field, input.value()));
            }
        })
    };

    let on_category_change = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            state.dispatch(RecommendationAction::Edit(
                FormField::Category,
                select.value(),
            ));
        })
    };

    let on_submit = {
        let state = state.clone();
        let config = config.clone();
        let identity = props.identity.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = state.form.to_request(identity.as_ref());
            let token = predict_requests.issue();
            state.dispatch(RecommendationAction::PredictionStarted);

            let state = state.clone();
            let config = config.clone();
            let predict_requests = predict_requests.clone();
            spawn_local(async move {
                let result = api::predict(&config, &request).await;
                if !predict_requests.is_current(token) {
                    log::debug!("dropping superseded prediction response");
                    return;
                }
                match result {
                    Ok(response) => {
                        state.dispatch(RecommendationAction::PredictionSucceeded(response))
                    }
                    Err(err) => {
                        log::error!("Error fetching prediction: {}", err);
                        state.dispatch(RecommendationAction::PredictionFailed);
                    }
                }
            });
        })
    };

    let on_toggle = {
        let state = state.clone();
        Callback::from(move |crop: String| {
            state.dispatch(RecommendationAction::Toggle(crop));
        })
    };

    let on_save = {
        let state = state.clone();
        let identity = props.identity.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(request) = state.save_request(identity.as_ref()) else {
                state.dispatch(RecommendationAction::SaveRejected);
                return;
            };

            let token = save_requests.issue();
            state.dispatch(RecommendationAction::SaveStarted);

            let state = state.clone();
            let config = config.clone();
            let save_requests = save_requests.clone();
            spawn_local(async move {
                let result = api::store_selected_crops(&config, &request).await;
                if !save_requests.is_current(token) {
                    log::debug!("dropping superseded save response");
                    return;
                }
                match result {
                    Ok(message) => state.dispatch(RecommendationAction::SaveFinished(message)),
                    Err(err) => {
                        log::error!("Error saving selected crops: {}", err);
                        state.dispatch(RecommendationAction::SaveFailed);
                    }
                }
            });
        })
    };

    html! {
        <div class="crop-recommendation-view">
            <h2>{"🌱 Smart Crop Recommendation System 🌿"}</h2>
            <form class="crop-form" onsubmit={on_submit}>
                <div class="form-group crop-input-group">
                    {
                        FormField::INPUTS.iter().map(|(field, placeholder, kind)| {
                            html! {
                                <input
                                    type={*kind}
                                    step={if *kind == "number" { Some("any") } else { None }}
                                    name={field.name()}
                                    placeholder={*placeholder}
                                    value={state.form.value(*field).to_string()}
                                    oninput={on_input.clone()}
                                    required={true}
                                />
                            }
                        }).collect::<Html>()
                    }
                    <select name={FormField::Category.name()} onchange={on_category_change} required={true}>
                        {
                            Category::ALL.iter().map(|category| html! {
                                <option
                                    value={category.as_str()}
                                    selected={*category == state.form.category}
                                >
                                    {category.label()}
                                </option>
                            }).collect::<Html>()
                        }
                    </select>
                </div>
                <button type="submit">{"Predict"}</button>
            </form>

            <p class="status-message">{&state.status}</p>

            if let Some(results) = &state.results {
                <div class="crop-result-section">
                    <h3>{"🌾 Recommended Crops"}</h3>
                    <ul class="crop-list">
                        {
                            results.iter().map(|item| {
                                let crop = item.crop.clone();
                                let onchange = {
                                    let on_toggle = on_toggle.clone();
                                    let crop = crop.clone();
                                    Callback::from(move |_: Event| on_toggle.emit(crop.clone()))
                                };
                                html! {
                                    <li class="crop-item">
                                        <label>
                                            <input
                                                type="checkbox"
                                                value={crop.clone()}
                                                checked={state.selected.contains(&crop)}
                                                {onchange}
                                            />
                                            <span class="crop-name">{&item.crop}</span>
                                            if let Some(percentage) = item.percentage() {
                                                <span class="crop-score">{percentage}</span>
                                            }
                                        </label>
                                    </li>
                                }
                            }).collect::<Html>()
                        }
                    </ul>
                    <button class="save-btn" onclick={on_save}>{"Save Selected Crops"}</button>
                </div>
            }
        </div>
    }
}
