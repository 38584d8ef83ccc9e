use yew::prelude::*;

use crate::state::details::{DetailsState, DetailsView};

#[derive(Properties, PartialEq)]
pub struct CropDetailsPanelProps {
    pub details: DetailsState,
}

#[function_component(CropDetailsPanel)]
pub fn crop_details_panel(props: &CropDetailsPanelProps) -> Html {
    if props.details.selected_crop.is_none() {
        return html! {};
    }

    html! {
        <div class="crop-details">
            {
                match (&props.details.view, props.details.placeholder()) {
                    (DetailsView::Loaded(details), _) => html! {
                        <div>
                            <h3>{format!("🌱 Crop Details: {}", details.name)}</h3>
                            <p><strong>{"Soil Requirements: "}</strong>{&details.soil}</p>
                            <p><strong>{"Planting Instructions: "}</strong>{&details.planting}</p>
                            <p><strong>{"Growth Timeline: "}</strong>{&details.timeline}</p>
                            <p><strong>{"Fertilizers: "}</strong>{&details.fertilizers}</p>
                            <p><strong>{"Harvesting: "}</strong>{&details.harvesting}</p>
                            <p><strong>{"Fertilizer Schedule: "}</strong>{&details.fertilizer_schedule}</p>
                            <p><strong>{"Pest Control Tips: "}</strong>{&details.pest_control}</p>
                        </div>
                    },
                    (_, Some(text)) => html! { <p>{text}</p> },
                    (_, None) => html! {},
                }
            }
        </div>
    }
}
