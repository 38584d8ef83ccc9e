use crate::types::{AppView, UserIdentity};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub current_view: AppView,
    pub on_view_change: Callback<AppView>,
    #[prop_or_default]
    pub identity: Option<UserIdentity>,
}

const ENTRIES: [(AppView, &str); 5] = [
    (AppView::Recommendation, "Crop Recommendation"),
    (AppView::WeatherFirst, "Weather-First Assistant"),
    (AppView::SearchProjects, "Search Projects"),
    (AppView::MyProjects, "My Projects"),
    (AppView::ProjectSelection, "Project Selection"),
];

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    html! {
        <div class="sidebar">
            <div class="sidebar-header">
                <h1>{"Smart Agro Assistant"}</h1>
            </div>
            <div class="sidebar-content">
                {
                    ENTRIES.iter().map(|(view, label)| {
                        let onclick = {
                            let on_view_change = props.on_view_change.clone();
                            let view = view.clone();
                            Callback::from(move |_| on_view_change.emit(view.clone()))
                        };
                        html! {
                            <button
                                {onclick}
                                class={if props.current_view == *view { "active" } else { "" }}
                            >
                                {*label}
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>
            <div class="sidebar-footer">
                {
                    match &props.identity {
                        Some(user) => html! { <p class="identity">{&user.email}</p> },
                        None => html! { <p class="identity">{"Not signed in"}</p> },
                    }
                }
            </div>
        </div>
    }
}
