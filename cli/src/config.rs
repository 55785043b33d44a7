/// MenuLens CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Analysis endpoint URL
    pub endpoint: String,
    /// Log level
    pub log_level: String,
}

/// Default analysis endpoint, fixed at build time.
pub const DEFAULT_ENDPOINT: &str = "https://menulens.example.com/api/v1/scan";

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        Self {
            endpoint: std::env::var("MENULENS_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }
}
