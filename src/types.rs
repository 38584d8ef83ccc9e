use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(PartialEq, Clone, Debug)]
pub enum AppView {
    Recommendation,
    /// Same assistant, but the form only opens once local weather is known.
    WeatherFirst,
    SearchProjects,
    MyProjects,
    ProjectSelection,
}

impl AppView {
    pub fn waits_for_weather(&self) -> bool {
        matches!(self, AppView::WeatherFirst)
    }
}

/// Weather reading normalized from the weather service.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct WeatherSample {
    pub temperature: f64,
    pub humidity: f64,
    #[serde(rename = "rainfallPercentage")]
    pub rainfall_percentage: f64,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Fruits,
    Vegetables,
    Both,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Fruits, Category::Vegetables, Category::Both];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fruits => "fruits",
            Category::Vegetables => "vegetables",
            Category::Both => "both",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Fruits => "Fruits",
            Category::Vegetables => "Vegetables",
            Category::Both => "Both",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CropScore {
    pub crop: String,
    #[serde(default)]
    pub probability: Option<f64>,
}

impl CropScore {
    /// Probability rendered as a whole percentage, when the service sent one.
    pub fn percentage(&self) -> Option<String> {
        self.probability.map(|p| format!("{:.0}%", p * 100.0))
    }
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct PredictionResponse {
    pub top_10_crops: Vec<CropScore>,
    pub document_id: String,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct SaveSelectionRequest {
    pub selected_crops: Vec<String>,
    pub document_id: String,
    pub project_name: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub project_name: String,
    #[serde(default)]
    pub selected_crops: Vec<String>,
    /// Stored as whatever the saving client sent; unknown values are dropped.
    #[serde(default, deserialize_with = "lenient_category")]
    pub category: Option<Category>,
}

fn lenient_category<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(Value::as_str).and_then(Category::parse))
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct EntriesResponse {
    pub entries: Vec<ProjectEntry>,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CropDetails {
    pub name: String,
    pub soil: String,
    pub planting: String,
    pub timeline: String,
    pub fertilizers: String,
    pub harvesting: String,
    pub fertilizer_schedule: String,
    pub pest_control: String,
}

/// Identity of the signed-in user, supplied by the host page's auth layer.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct UserIdentity {
    pub email: String,
}

impl UserIdentity {
    pub fn parse(raw: &str) -> Option<Self> {
        let email = raw.trim();
        if email.is_empty() || !email.contains('@') {
            return None;
        }
        Some(Self {
            email: email.to_string(),
        })
    }
}
