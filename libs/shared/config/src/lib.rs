use std::env;
use tracing::warn;

/// Default number of trailing months covered by a holiday lookup window.
pub const DEFAULT_HOLIDAY_WINDOW_MONTHS: u32 = 2;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend_url: String,
    pub backend_api_key: String,
    pub holiday_window_months: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            backend_url: env::var("BACKEND_BASE_URL")
                .unwrap_or_else(|_| {
                    warn!("BACKEND_BASE_URL not set, using empty value");
                    String::new()
                }),
            backend_api_key: env::var("BACKEND_API_KEY")
                .unwrap_or_else(|_| {
                    warn!("BACKEND_API_KEY not set, using empty value");
                    String::new()
                }),
            holiday_window_months: env::var("HOLIDAY_WINDOW_MONTHS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_HOLIDAY_WINDOW_MONTHS),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.backend_url.is_empty() && !self.backend_api_key.is_empty()
    }
}
