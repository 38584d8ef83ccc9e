use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{self, EntryQuery};
use crate::config::Config;
use crate::crop_details::CropDetailsPanel;
use crate::state::details::{DetailsAction, DetailsState};
use crate::state::entries::{EntriesAction, EntriesState, EntrySource};
use crate::state::request::use_request_tracker;
use crate::types::UserIdentity;

#[derive(Properties, PartialEq)]
pub struct ProjectEntriesProps {
    pub source: EntrySource,
    #[prop_or_default]
    pub identity: Option<UserIdentity>,
}

/// Saved project entries as crop tiles; clicking a tile loads that crop's details.
#[function_component(ProjectEntries)]
pub fn project_entries(props: &ProjectEntriesProps) -> Html {
    let config = use_context::<Rc<Config>>().unwrap_or_default();
    let entries = use_reducer(EntriesState::default);
    let details = use_reducer(DetailsState::default);
    let entry_requests = use_request_tracker();
    let detail_requests = use_request_tracker();

    let skip = {
        let entries = entries.clone();
        let entry_requests = entry_requests.clone();
        Callback::from(move |status: &'static str| {
            // Outstanding lookups must not overwrite the prompt
            entry_requests.issue();
            entries.dispatch(EntriesAction::Skipped(status));
        })
    };

    let fetch = {
        let entries = entries.clone();
        let config = config.clone();
        Callback::from(move |query: EntryQuery| {
            let token = entry_requests.issue();
            entries.dispatch(EntriesAction::Started(query.clone()));

            let entries = entries.clone();
            let config = config.clone();
            let entry_requests = entry_requests.clone();
            spawn_local(async move {
                let result = api::fetch_entries(&config, &query).await;
                if !entry_requests.is_current(token) {
                    log::debug!("dropping superseded entries response");
                    return;
                }
                if let Err(err) = &result {
                    log::error!("Error fetching entries: {}", err);
                }
                entries.dispatch(EntriesAction::Completed(query, result));
            });
        })
    };

    // The by-user listing follows the identity it was given
    {
        let fetch = fetch.clone();
        let skip = skip.clone();
        let source = props.source;
        use_effect_with(props.identity.clone(), move |identity| {
            if source == EntrySource::ByUser {
                match source.query("", identity.as_ref()) {
                    Ok(query) => fetch.emit(query),
                    Err(status) => skip.emit(status),
                }
            }
            || ()
        });
    }

    let on_name_input = {
        let entries = entries.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            entries.dispatch(EntriesAction::EditName(input.value()));
        })
    };

    let on_fetch = {
        let entries = entries.clone();
        let identity = props.identity.clone();
        let source = props.source;
        Callback::from(
            move |_: MouseEvent| match source.query(&entries.project_name, identity.as_ref()) {
                Ok(query) => fetch.emit(query),
                Err(status) => skip.emit(status),
            },
        )
    };

    let on_crop_click = {
        let details = details.clone();
        Callback::from(move |crop: String| {
            let token = detail_requests.issue();
            details.dispatch(DetailsAction::Requested(crop.clone()));

            let details = details.clone();
            let config = config.clone();
            let detail_requests = detail_requests.clone();
            spawn_local(async move {
                let result = api::fetch_crop_details(&config, &crop).await;
                if !detail_requests.is_current(token) {
                    log::debug!("dropping superseded details for {}", crop);
                    return;
                }
                if let Err(err) = &result {
                    log::error!("Error fetching crop details: {}", err);
                }
                details.dispatch(DetailsAction::Completed(result));
            });
        })
    };

    html! {
        <div class="project-entries-view">
            <h2>{props.source.title()}</h2>

            if props.source == EntrySource::ByName {
                <div class="input-with-button">
                    <input
                        type="text"
                        placeholder="Enter Project Name"
                        value={entries.project_name.clone()}
                        oninput={on_name_input}
                    />
                    <button type="button" onclick={on_fetch}>{"Fetch Entries"}</button>
                </div>
            }

            <p class="status-message">{&entries.status}</p>

            if !entries.entries.is_empty() {
                <div class="entries-table">
                    {
                        entries.entries.iter().map(|entry| html! {
                            <div class="project-entry">
                                <h3>{format!("Project: {}", entry.project_name)}</h3>
                                if let Some(category) = entry.category {
                                    <p class="entry-category">{category.label()}</p>
                                }
                                <div class="crop-tiles">
                                    {
                                        entry.selected_crops.iter().map(|crop| {
                                            let onclick = {
                                                let on_crop_click = on_crop_click.clone();
                                                let crop = crop.clone();
                                                Callback::from(move |_: MouseEvent| on_crop_click.emit(crop.clone()))
                                            };
                                            let active = details.selected_crop.as_deref() == Some(crop.as_str());
                                            html! {
                                                <div
                                                    class={classes!("crop-tile", active.then_some("active"))}
                                                    {onclick}
                                                >
                                                    {crop}
                                                </div>
                                            }
                                        }).collect::<Html>()
                                    }
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            }

            <CropDetailsPanel details={(*details).clone()} />
        </div>
    }
}
