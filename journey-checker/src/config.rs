//! Runtime configuration for the TfL API client.

/// Default base URL for the TfL Unified API.
const DEFAULT_BASE_URL: &str = "https://api.tfl.gov.uk";

/// Configuration errors detected at startup, before any network call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Journey-type selector named a journey type that is not implemented
    #[error("unsupported journey type \"{0}\": only \"Road\" is implemented")]
    UnsupportedJourneyType(String),
}

/// Kind of journey the checker queries.
///
/// Only road status is implemented; selecting anything else is a fatal
/// startup error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JourneyType {
    Road,
}

impl JourneyType {
    /// Parse a journey-type selector (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        if s.eq_ignore_ascii_case("road") {
            Ok(JourneyType::Road)
        } else {
            Err(ConfigError::UnsupportedJourneyType(s.to_string()))
        }
    }
}

/// Static settings for the TfL API: endpoint and credentials.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL for the API
    pub base_url: String,
    /// Application id, sent as the `app_id` query parameter
    pub app_id: String,
    /// Application key, sent as the `app_key` query parameter
    pub app_key: String,
}

impl Settings {
    /// Create settings with the given credentials and the production base URL.
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            app_id: app_id.into(),
            app_key: app_key.into(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Read settings from the environment.
    ///
    /// Missing credentials produce a warning rather than an error; the API
    /// will reject the unauthenticated request and that surfaces through
    /// the normal error path.
    pub fn from_env() -> Self {
        let app_id = std::env::var("TFL_APP_ID").unwrap_or_else(|_| {
            eprintln!("Warning: TFL_APP_ID not set. API calls will fail.");
            String::new()
        });
        let app_key = std::env::var("TFL_APP_KEY").unwrap_or_else(|_| {
            eprintln!("Warning: TFL_APP_KEY not set. API calls will fail.");
            String::new()
        });

        let settings = Settings::new(app_id, app_key);
        match std::env::var("TFL_BASE_URL") {
            Ok(url) => settings.with_base_url(url),
            Err(_) => settings,
        }
    }
}
