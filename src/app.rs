use std::rc::Rc;

use yew::prelude::*;

use crate::agro_assistant::AgroAssistant;
use crate::config::Config;
use crate::project_entries::ProjectEntries;
use crate::project_selection::ProjectSelection;
use crate::session;
use crate::sidebar::Sidebar;
use crate::state::entries::EntrySource;
use crate::types::AppView;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| Config::from_build_env());
    let identity = use_memo(config.clone(), |config| session::load_identity(config));
    let app_view = use_state(|| AppView::Recommendation);

    let on_view_change = {
        let app_view = app_view.clone();
        Callback::from(move |view: AppView| {
            app_view.set(view);
        })
    };

    let identity = (*identity).clone();

    html! {
        <ContextProvider<Rc<Config>> context={config}>
            <div class="app-container">
                <Sidebar
                    current_view={(*app_view).clone()}
                    {on_view_change}
                    identity={identity.clone()}
                />
                <div class="main-content">
                    {
                        match *app_view {
                            AppView::Recommendation | AppView::WeatherFirst => html! {
                                <AgroAssistant
                                    key={format!("assistant-{}", app_view.waits_for_weather())}
                                    wait_for_weather={app_view.waits_for_weather()}
                                    identity={identity.clone()}
                                />
                            },
                            AppView::SearchProjects => html! { <ProjectEntries key="by-name" source={EntrySource::ByName} /> },
                            AppView::MyProjects => html! { <ProjectEntries key="by-user" source={EntrySource::ByUser} identity={identity.clone()} /> },
                            AppView::ProjectSelection => html! { <ProjectSelection /> },
                        }
                    }
                </div>
            </div>
        </ContextProvider<Rc<Config>>>
    }
}
