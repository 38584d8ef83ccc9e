pub mod agro_assistant;
pub mod api;
pub mod app;
pub mod config;
pub mod crop_details;
pub mod crop_recommendation;
pub mod error;
pub mod project_entries;
pub mod project_selection;
pub mod session;
pub mod sidebar;
pub mod state;
pub mod types;
pub mod weather_location;
