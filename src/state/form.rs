use serde::Serialize;

use crate::types::{Category, UserIdentity, WeatherSample};

/// Inputs of the recommendation form, serialized with the keys the
/// prediction service expects.
#[derive(Clone, PartialEq, Debug, Default, Serialize)]
pub struct PredictionForm {
    #[serde(rename = "projectName")]
    pub project_name: String,
    #[serde(rename = "Nitrogen")]
    pub nitrogen: String,
    #[serde(rename = "Phosporus")]
    pub phosporus: String,
    #[serde(rename = "Potassium")]
    pub potassium: String,
    #[serde(rename = "Temperature")]
    pub temperature: String,
    #[serde(rename = "Humidity")]
    pub humidity: String,
    #[serde(rename = "Ph")]
    pub ph: String,
    #[serde(rename = "Rainfall")]
    pub rainfall: String,
    pub category: Category,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormField {
    ProjectName,
    Nitrogen,
    Phosporus,
    Potassium,
    Temperature,
    Humidity,
    Ph,
    Rainfall,
    Category,
}

impl FormField {
    /// Text inputs in display order, with their placeholder and input type.
    pub const INPUTS: [(FormField, &'static str, &'static str); 8] = [
        (FormField::ProjectName, "Project Name", "text"),
        (FormField::Nitrogen, "Nitrogen", "number"),
        (FormField::Phosporus, "Phosphorus", "number"),
        (FormField::Potassium, "Potassium", "number"),
        (FormField::Temperature, "Temperature (°C)", "number"),
        (FormField::Humidity, "Humidity (%)", "number"),
        (FormField::Ph, "pH Level", "number"),
        (FormField::Rainfall, "Rainfall (mm)", "number"),
    ];

    /// Name attribute of the input, identical to the wire key.
    pub fn name(&self) -> &'static str {
        match self {
            FormField::ProjectName => "projectName",
            FormField::Nitrogen => "Nitrogen",
            FormField::Phosporus => "Phosporus",
            FormField::Potassium => "Potassium",
            FormField::Temperature => "Temperature",
            FormField::Humidity => "Humidity",
            FormField::Ph => "Ph",
            FormField::Rainfall => "Rainfall",
            FormField::Category => "category",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        FormField::INPUTS
            .iter()
            .map(|(field, _, _)| *field)
            .chain(std::iter::once(FormField::Category))
            .find(|field| field.name() == name)
    }
}

impl PredictionForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::ProjectName => &self.project_name,
            FormField::Nitrogen => &self.nitrogen,
            FormField::Phosporus => &self.phosporus,
            FormField::Potassium => &self.potassium,
            FormField::Temperature => &self.temperature,
            FormField::Humidity => &self.humidity,
            FormField::Ph => &self.ph,
            FormField::Rainfall => &self.rainfall,
            FormField::Category => self.category.as_str(),
        }
    }

    /// Merge one edited field into the form. Unknown categories are ignored.
    pub fn with_field(mut self, field: FormField, value: String) -> Self {
        match field {
            FormField::ProjectName => self.project_name = value,
            FormField::Nitrogen => self.nitrogen = value,
            FormField::Phosporus => self.phosporus = value,
            FormField::Potassium => self.potassium = value,
            FormField::Temperature => self.temperature = value,
            FormField::Humidity => self.humidity = value,
            FormField::Ph => self.ph = value,
            FormField::Rainfall => self.rainfall = value,
            FormField::Category => {
                if let Some(category) = Category::parse(&value) {
                    self.category = category;
                }
            }
        }
        self
    }

    /// Overwrites the weather-derived fields, including values the user typed.
    pub fn with_weather(mut self, sample: &WeatherSample) -> Self {
        self.temperature = sample.temperature.to_string();
        self.humidity = sample.humidity.to_string();
        self.rainfall = sample.rainfall_percentage.to_string();
        self
    }

    pub fn to_request(&self, identity: Option<&UserIdentity>) -> PredictionRequest {
        PredictionRequest {
            form: self.clone(),
            email: identity.map(|user| user.email.clone()),
        }
    }
}

/// Body of `POST /predict`.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct PredictionRequest {
    #[serde(flatten)]
    pub form: PredictionForm,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
