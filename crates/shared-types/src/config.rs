use serde::{Deserialize, Serialize};

/// Endpoint used when neither `config.toml` nor the environment names one.
pub const DEFAULT_ENDPOINT: &str = "https://umzzcc503l.execute-api.us-west-2.amazonaws.com/dishes/";

/// Where and how dishes are submitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmissionConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub submission: SubmissionConfig,
}

impl AppConfig {
    /// Replace the endpoint when `value` is a non-blank override.
    pub fn with_endpoint_override(mut self, value: Option<String>) -> Self {
        if let Some(endpoint) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            self.submission.endpoint = endpoint;
        }
        self
    }
}
