mod common;

use std::rc::Rc;

use agro_assist_ui::state::form::FormField;
use agro_assist_ui::state::recommendation::{
    RecommendationAction, RecommendationState, STATUS_MISSING_DOCUMENT, STATUS_PREDICTED,
    STATUS_PREDICTING, STATUS_PREDICT_FAILED, STATUS_SAVE_FAILED, STATUS_SAVING,
};
use agro_assist_ui::types::Category;
use yew::functional::Reducible;

fn predicted_state() -> RecommendationState {
    let mut state = RecommendationState {
        form: common::orchard_form(),
        ..Default::default()
    };
    state.apply(RecommendationAction::PredictionStarted);
    state.apply(RecommendationAction::PredictionSucceeded(
        common::mango_response(),
    ));
    state
}

#[test]
fn test_prediction_scenario_lists_mango() {
    let state = predicted_state();

    let results = state.results.as_ref().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].crop, "mango");
    assert_eq!(state.document_id.as_deref(), Some("abc123"));
    assert_eq!(state.status, STATUS_PREDICTED);
    assert_eq!(state.status, "Prediction successful! Select crops to save.");
}

#[test]
fn test_prediction_success_resets_selection() {
    let mut state = predicted_state();
    state.apply(RecommendationAction::Toggle("mango".to_string()));
    assert!(state.selected.contains("mango"));

    state.apply(RecommendationAction::PredictionSucceeded(
        common::mango_response(),
    ));
    assert!(state.selected.to_vec().is_empty());
    assert!(!state.selected.contains("mango"));
    assert!(state.document_id.is_some());
}

#[test]
fn test_prediction_started_sets_status() {
    let state = Rc::new(RecommendationState::default())
        .reduce(RecommendationAction::PredictionStarted);
    assert_eq!(state.status, STATUS_PREDICTING);
}

#[test]
fn test_prediction_failure_keeps_previous_results() {
    let mut state = predicted_state();
    state.apply(RecommendationAction::PredictionFailed);
    assert_eq!(state.status, STATUS_PREDICT_FAILED);
    assert_eq!(state.results.as_ref().map(Vec::len), Some(1));
}

#[test]
fn test_toggle_twice_restores_selection() {
    let mut state = predicted_state();
    state.apply(RecommendationAction::Toggle("apple".to_string()));
    let before = state.selected.clone();

    state.apply(RecommendationAction::Toggle("mango".to_string()));
    state.apply(RecommendationAction::Toggle("mango".to_string()));
    assert_eq!(state.selected, before);
}

#[test]
fn test_save_without_document_builds_no_request() {
    let mut state = RecommendationState {
        form: common::orchard_form(),
        ..Default::default()
    };
    state.apply(RecommendationAction::Toggle("mango".to_string()));

    assert!(state.save_request(None).is_none());
    state.apply(RecommendationAction::SaveRejected);
    assert_eq!(state.status, STATUS_MISSING_DOCUMENT);
    assert_eq!(state.status, "Document ID is missing!");
}

#[test]
fn test_save_request_carries_selection_and_metadata() {
    let mut state = predicted_state();
    state.apply(RecommendationAction::Toggle("mango".to_string()));
    state.apply(RecommendationAction::Edit(
        FormField::Category,
        "both".to_string(),
    ));

    let request = state.save_request(Some(&common::farmer())).unwrap();
    assert_eq!(request.selected_crops, vec!["mango".to_string()]);
    assert_eq!(request.document_id, "abc123");
    assert_eq!(request.project_name, "orchard");
    assert_eq!(request.category, Category::Both);
    assert_eq!(request.email.as_deref(), Some("farmer@example.com"));

    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body["category"], "both");
    assert_eq!(body["selected_crops"][0], "mango");
}

#[test]
fn test_save_request_omits_email_when_signed_out() {
    let state = predicted_state();
    let body = serde_json::to_value(state.save_request(None).unwrap()).unwrap();
    assert!(body.get("email").is_none());
}

#[test]
fn test_save_shows_service_message_verbatim() {
    let mut state = predicted_state();
    state.apply(RecommendationAction::SaveStarted);
    assert_eq!(state.status, STATUS_SAVING);

    state.apply(RecommendationAction::SaveFinished(
        "No crops selected!".to_string(),
    ));
    assert_eq!(state.status, "No crops selected!");

    state.apply(RecommendationAction::SaveFailed);
    assert_eq!(state.status, STATUS_SAVE_FAILED);
}

#[test]
fn test_weather_overwrites_typed_temperature() {
    let mut state = RecommendationState::default();
    state.apply(RecommendationAction::Edit(
        FormField::Temperature,
        "22".to_string(),
    ));
    state.apply(RecommendationAction::ApplyWeather(common::warm_sample()));

    assert_eq!(state.form.temperature, "30");
    assert_eq!(state.form.humidity, "70");
    assert_eq!(state.form.rainfall, "5");
}
