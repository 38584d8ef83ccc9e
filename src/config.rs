/// Endpoints and keys the views talk to.
///
/// Values are baked in at build time: `Config::from_build_env` reads
/// `AGRO_API_BASE_URL`, `AGRO_WEATHER_URL`, `AGRO_WEATHER_KEY` and
/// `AGRO_SESSION_KEY`, falling back to `Config::default()` for any unset one.
#[derive(Clone, PartialEq, Debug)]
pub struct Config {
    pub api_base_url: String,
    pub weather_url: String,
    pub weather_access_key: String,
    pub session_storage_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: String::from("http://127.0.0.1:5000"),
            weather_url: String::from("http://api.weatherstack.com/current"),
            weather_access_key: String::new(),
            session_storage_key: String::from("agroassist.user_email"),
        }
    }
}

impl Config {
    pub fn from_build_env() -> Self {
        Self::default().with_overrides(
            option_env!("AGRO_API_BASE_URL"),
            option_env!("AGRO_WEATHER_URL"),
            option_env!("AGRO_WEATHER_KEY"),
            option_env!("AGRO_SESSION_KEY"),
        )
    }

    pub fn with_overrides(
        mut self,
        api_base_url: Option<&str>,
        weather_url: Option<&str>,
        weather_access_key: Option<&str>,
        session_storage_key: Option<&str>,
    ) -> Self {
        fn non_empty(v: Option<&str>) -> Option<&str> {
            v.map(str::trim).filter(|v| !v.is_empty())
        }

        if let Some(url) = non_empty(api_base_url) {
            self.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(url) = non_empty(weather_url) {
            self.weather_url = url.to_string();
        }
        if let Some(key) = non_empty(weather_access_key) {
            self.weather_access_key = key.to_string();
        }
        if let Some(key) = non_empty(session_storage_key) {
            self.session_storage_key = key.to_string();
        }
        self
    }

    /// Absolute URL of a prediction-service route, e.g. `endpoint("/predict")`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
