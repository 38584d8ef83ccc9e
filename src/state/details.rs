use std::rc::Rc;

use yew::functional::Reducible;

use crate::api::CropLookup;
use crate::error::ApiError;
use crate::types::CropDetails;

pub const STATUS_LOADING: &str = "Loading crop details...";
pub const STATUS_NOT_FOUND: &str = "Crop details not found";
pub const STATUS_FAILED: &str = "Failed to fetch crop details";

#[derive(Clone, PartialEq, Debug, Default)]
pub enum DetailsView {
    #[default]
    Hidden,
    Loading,
    Loaded(CropDetails),
    NotFound,
    Failed,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct DetailsState {
    pub selected_crop: Option<String>,
    pub view: DetailsView,
}

#[derive(Clone, PartialEq, Debug)]
pub enum DetailsAction {
    Requested(String),
    Completed(Result<CropLookup, ApiError>),
}

impl DetailsState {
    pub fn apply(&mut self, action: DetailsAction) {
        match action {
            DetailsAction::Requested(crop) => {
                self.selected_crop = Some(crop);
                self.view = DetailsView::Loading;
            }
            DetailsAction::Completed(Ok(CropLookup::Found(details))) => {
                self.view = DetailsView::Loaded(details);
            }
            DetailsAction::Completed(Ok(CropLookup::NotFound)) => {
                self.view = DetailsView::NotFound;
            }
            DetailsAction::Completed(Err(_)) => self.view = DetailsView::Failed,
        }
    }

    /// Line shown in place of the details while they are unavailable.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self.view {
            DetailsView::Loading => Some(STATUS_LOADING),
            DetailsView::NotFound => Some(STATUS_NOT_FOUND),
            DetailsView::Failed => Some(STATUS_FAILED),
            DetailsView::Hidden | DetailsView::Loaded(_) => None,
        }
    }
}

impl Reducible for DetailsState {
    type Action = DetailsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
