use agro_assist_ui::state::form::{FormField, PredictionForm};
use agro_assist_ui::types::{CropScore, PredictionResponse, ProjectEntry, UserIdentity, WeatherSample};

#[allow(unused)]
/// Form filled the way a user would for a fruit orchard.
pub fn orchard_form() -> PredictionForm {
    [
        (FormField::ProjectName, "orchard"),
        (FormField::Nitrogen, "40"),
        (FormField::Phosporus, "50"),
        (FormField::Potassium, "50"),
        (FormField::Temperature, "25"),
        (FormField::Humidity, "60"),
        (FormField::Ph, "6.5"),
        (FormField::Rainfall, "120"),
        (FormField::Category, "fruits"),
    ]
    .into_iter()
    .fold(PredictionForm::default(), |form, (field, value)| {
        form.with_field(field, value.to_string())
    })
}

#[allow(unused)]
pub fn mango_response() -> PredictionResponse {
    PredictionResponse {
        top_10_crops: vec![CropScore {
            crop: "mango".to_string(),
            probability: None,
        }],
        document_id: "abc123".to_string(),
    }
}

#[allow(unused)]
pub fn warm_sample() -> WeatherSample {
    WeatherSample {
        temperature: 30.0,
        humidity: 70.0,
        rainfall_percentage: 5.0,
    }
}

#[allow(unused)]
pub fn farmer() -> UserIdentity {
    UserIdentity::parse("farmer@example.com").unwrap()
}

#[allow(unused)]
pub fn entry(project_name: &str, crops: &[&str]) -> ProjectEntry {
    ProjectEntry {
        project_name: project_name.to_string(),
        selected_crops: crops.iter().map(|c| c.to_string()).collect(),
        category: None,
    }
}
