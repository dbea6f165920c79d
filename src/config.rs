/// Environment variable overriding the analysis service base URL.
pub const SERVICE_URL_ENV: &str = "MEDISCAN_SERVICE_URL";

const DEFAULT_SERVICE_URL: &str = "http://localhost:8000";

/// Endpoint configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the analysis service, without a trailing slash.
    service_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
        }
    }
}

impl Config {
    /// Reads the service URL from [`SERVICE_URL_ENV`], falling back to the
    /// default local endpoint.
    pub fn from_env() -> Self {
        match std::env::var(SERVICE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::with_service_url(url),
            _ => Self::default(),
        }
    }

    pub fn with_service_url(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            service_url: url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    pub fn upload_url(&self) -> String {
        format!("{}/upload", self.service_url)
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.service_url)
    }
}
