use agro_assist_ui::api::{
    self, coordinates_query, decode_json, message_from, parse_crop_details, parse_weather,
    CropLookup,
};
use agro_assist_ui::error::ApiError;
use agro_assist_ui::types::{Category, EntriesResponse, PredictionResponse, WeatherSample};

#[test]
fn test_parse_weather_current_conditions() {
    let body = r#"{
        "location": {"name": "Pune"},
        "current": {"temperature": 31, "humidity": 48, "precip": 0.4, "wind_speed": 9}
    }"#;
    assert_eq!(
        parse_weather(body).unwrap(),
        WeatherSample {
            temperature: 31.0,
            humidity: 48.0,
            rainfall_percentage: 0.4,
        }
    );
}

#[test]
fn test_parse_weather_reported_error() {
    let body = r#"{"success": false, "error": {"code": 101, "info": "You have not supplied a valid API Access Key."}}"#;
    assert_eq!(
        parse_weather(body).unwrap_err(),
        ApiError::Weather("You have not supplied a valid API Access Key.".to_string())
    );
}

#[test]
fn test_parse_weather_without_current_block() {
    let error = parse_weather(r#"{"location": {}}"#).unwrap_err();
    assert!(matches!(error, ApiError::Decode(_)));
    assert!(matches!(parse_weather("<html>").unwrap_err(), ApiError::Decode(_)));
}

#[test]
fn test_coordinates_query() {
    assert_eq!(coordinates_query(18.52, 73.85), "18.52,73.85");
    assert_eq!(coordinates_query(-1.0, 36.8), "-1,36.8");
}

#[test]
fn test_decode_prediction_response() {
    let body = r#"{
        "top_10_crops": [
            {"crop": "Mango", "probability": 0.42},
            {"crop": "Banana"}
        ],
        "document_id": "65f1c0ffee"
    }"#;
    let response: PredictionResponse = decode_json(200, true, body).unwrap();
    assert_eq!(response.document_id, "65f1c0ffee");
    assert_eq!(response.top_10_crops[0].percentage().as_deref(), Some("42%"));
    assert_eq!(response.top_10_crops[1].probability, None);
}

#[test]
fn test_decode_non_ok_keeps_service_message() {
    let error = decode_json::<EntriesResponse>(
        404,
        false,
        r#"{"message": "No projects found for the given email!"}"#,
    )
    .unwrap_err();
    assert_eq!(error.service_message(), Some("No projects found for the given email!"));

    let error = decode_json::<EntriesResponse>(502, false, "Bad Gateway").unwrap_err();
    assert_eq!(
        error,
        ApiError::Service {
            status: 502,
            message: None
        }
    );
    assert_eq!(error.to_string(), "service responded with status 502");
}

#[test]
fn test_decode_ok_with_wrong_shape_is_decode_error() {
    let error = decode_json::<PredictionResponse>(200, true, r#"{"message": "ok"}"#).unwrap_err();
    assert!(matches!(error, ApiError::Decode(_)));
}

#[test]
fn test_entries_ignore_extra_fields() {
    let body = r#"{"entries": [{
        "_id": "1", "email": "farmer@example.com", "project_name": "orchard",
        "selected_crops": ["Mango"], "category": "fruits", "predictions": []
    }, {"project_name": "empty"}]}"#;
    let response: EntriesResponse = decode_json(200, true, body).unwrap();
    assert_eq!(response.entries[0].selected_crops, vec!["Mango".to_string()]);
    assert!(response.entries[1].selected_crops.is_empty());
}

#[test]
fn test_entries_with_unknown_category_still_listed() {
    let body = r#"{"entries": [
        {"project_name": "orchard", "selected_crops": ["Mango"], "category": "fruits"},
        {"project_name": "field", "selected_crops": ["Wheat"], "category": "grains"},
        {"project_name": "plot", "category": 3},
        {"project_name": "patch", "category": null}
    ]}"#;
    let response: EntriesResponse = decode_json(200, true, body).unwrap();
    assert_eq!(response.entries.len(), 4);
    assert_eq!(response.entries[0].category, Some(Category::Fruits));
    assert_eq!(response.entries[1].project_name, "field");
    assert_eq!(response.entries[1].category, None);
    assert_eq!(response.entries[2].category, None);
    assert_eq!(response.entries[3].category, None);
}

#[test]
fn test_crop_details_found() {
    let body = r#"{
        "_id": "abc", "name": "Mango", "soil": "Loamy", "planting": "Grafts",
        "timeline": "3-5 years", "fertilizers": "NPK", "harvesting": "Summer",
        "fertilizer_schedule": "Twice a year", "pest_control": "Neem oil"
    }"#;
    match parse_crop_details(body).unwrap() {
        CropLookup::Found(details) => {
            assert_eq!(details.name, "Mango");
            assert_eq!(details.pest_control, "Neem oil");
        }
        CropLookup::NotFound => panic!("expected details"),
    }
}

#[test]
fn test_crop_details_render_non_string_values() {
    let body = r#"{
        "name": "Banana", "soil": "Alluvial", "timeline": 5,
        "planting": ["suckers", "tissue culture"], "harvesting": null
    }"#;
    match parse_crop_details(body).unwrap() {
        CropLookup::Found(details) => {
            assert_eq!(details.timeline, "5");
            assert_eq!(details.planting, r#"["suckers","tissue culture"]"#);
            assert_eq!(details.harvesting, "");
            assert_eq!(details.pest_control, "");
        }
        CropLookup::NotFound => panic!("expected details"),
    }
}

#[test]
fn test_crop_details_without_name_is_not_found() {
    assert_eq!(
        parse_crop_details(r#"{"message": "Crop not found!"}"#).unwrap(),
        CropLookup::NotFound
    );
    assert_eq!(
        parse_crop_details(r#"{"name": "", "soil": "Clay"}"#).unwrap(),
        CropLookup::NotFound
    );
    assert!(matches!(
        parse_crop_details("not json").unwrap_err(),
        ApiError::Decode(_)
    ));
}

#[test]
fn test_message_from() {
    assert_eq!(
        message_from(r#"{"message": "Selected crops updated successfully!"}"#).as_deref(),
        Some("Selected crops updated successfully!")
    );
    assert_eq!(message_from(r#"{"message": 5}"#), None);
    assert_eq!(message_from("[]"), None);
}

#[test]
fn test_route_paths() {
    assert_eq!(api::PREDICT_PATH, "/predict");
    assert_eq!(api::STORE_SELECTION_PATH, "/store-selected-crops");
    assert_eq!(api::CROP_DETAILS_PATH, "/get-crop-details");
}
