use yew::prelude::*;

fn acknowledge(message: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("no window to show: {}", message);
        return;
    };
    if let Err(err) = window.alert_with_message(message) {
        log::error!("alert failed: {:?}", err);
    }
}

#[function_component(ProjectSelection)]
pub fn project_selection() -> Html {
    // TODO: route these to the recommendation form and the project search once
    // the project flow is decided
    let on_new_project = Callback::from(|_: MouseEvent| {
        acknowledge("Create New Project button clicked");
    });

    let on_existing_project = Callback::from(|_: MouseEvent| {
        acknowledge("Existing Project button clicked");
    });

    html! {
        <div class="project-selection-view">
            <h2>{"🌱 AgroAssist Project Selection 🌿"}</h2>
            <div class="button-group">
                <button class="project-button new-project" onclick={on_new_project}>
                    {"Create New Project"}
                </button>
                <button class="project-button existing-project" onclick={on_existing_project}>
                    {"Existing Project"}
                </button>
            </div>
        </div>
    }
}
