use std::rc::Rc;

use yew::functional::Reducible;

use crate::state::form::{FormField, PredictionForm};
use crate::state::selection::SelectedCrops;
use crate::types::{
    CropScore, PredictionResponse, SaveSelectionRequest, UserIdentity, WeatherSample,
};

pub const STATUS_PREDICTING: &str = "Predicting...";
pub const STATUS_PREDICTED: &str = "Prediction successful! Select crops to save.";
pub const STATUS_PREDICT_FAILED: &str = "An error occurred while predicting. Please try again.";
pub const STATUS_MISSING_DOCUMENT: &str = "Document ID is missing!";
pub const STATUS_SAVING: &str = "Saving selected crops...";
pub const STATUS_SAVE_FAILED: &str = "An error occurred while saving selected crops.";

#[derive(Clone, PartialEq, Debug, Default)]
pub struct RecommendationState {
    pub form: PredictionForm,
    pub results: Option<Vec<CropScore>>,
    pub selected: SelectedCrops,
    pub document_id: Option<String>,
    pub status: String,
}

#[derive(Clone, PartialEq, Debug)]
pub enum RecommendationAction {
    Edit(FormField, String),
    ApplyWeather(WeatherSample),
    PredictionStarted,
    PredictionSucceeded(PredictionResponse),
    PredictionFailed,
    Toggle(String),
    /// Save was attempted before any prediction produced a document id.
    SaveRejected,
    SaveStarted,
    SaveFinished(String),
    SaveFailed,
}

impl RecommendationState {
    pub fn apply(&mut self, action: RecommendationAction) {
        match action {
            RecommendationAction::Edit(field, value) => {
                self.form = std::mem::take(&mut self.form).with_field(field, value);
            }
            RecommendationAction::ApplyWeather(sample) => {
                self.form = std::mem::take(&mut self.form).with_weather(&sample);
            }
            RecommendationAction::PredictionStarted => {
                self.status = STATUS_PREDICTING.to_string();
            }
            RecommendationAction::PredictionSucceeded(response) => {
                self.results = Some(response.top_10_crops);
                self.document_id = Some(response.document_id);
                self.selected.clear();
                self.status = STATUS_PREDICTED.to_string();
            }
            RecommendationAction::PredictionFailed => {
                self.status = STATUS_PREDICT_FAILED.to_string();
            }
            RecommendationAction::Toggle(crop) => self.selected.toggle(&crop),
            RecommendationAction::SaveRejected => {
                self.status = STATUS_MISSING_DOCUMENT.to_string();
            }
            RecommendationAction::SaveStarted => {
                self.status = STATUS_SAVING.to_string();
            }
            RecommendationAction::SaveFinished(message) => self.status = message,
            RecommendationAction::SaveFailed => {
                self.status = STATUS_SAVE_FAILED.to_string();
            }
        }
    }

    /// Body for `/store-selected-crops`, or `None` when there is no document
    /// to attach the selection to.
    pub fn save_request(&self, identity: Option<&UserIdentity>) -> Option<SaveSelectionRequest> {
        let document_id = self.document_id.clone()?;
        Some(SaveSelectionRequest {
            selected_crops: self.selected.to_vec(),
            document_id,
            project_name: self.form.project_name.clone(),
            category: self.form.category,
            email: identity.map(|user| user.email.clone()),
        })
    }
}

impl Reducible for RecommendationState {
    type Action = RecommendationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
