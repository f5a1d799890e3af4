//! Configuration for the Azure OpenAI connection.

use savonarola_error::ConfigError;

/// Service API version used when `AZURE_OPENAI_API_VERSION` is not set.
const DEFAULT_API_VERSION: &str = "2023-12-01-preview";

/// Connection settings for an Azure OpenAI chat deployment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_getters::Getters)]
pub struct AzureConfig {
    /// Resource endpoint (e.g., "https://example.openai.azure.com")
    endpoint: String,
    /// API key for the resource
    api_key: String,
    /// Chat model deployment name
    deployment: String,
    /// Service API version selector
    api_version: String,
}

impl AzureConfig {
    /// Create a new configuration with the default API version.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        deployment: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            deployment: deployment.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `AZURE_OPENAI_ENDPOINT` (required)
    /// - `AZURE_OPENAI_API_KEY` (required)
    /// - `AZURE_OPENAI_DEPLOYMENT` (required)
    /// - `AZURE_OPENAI_API_VERSION` (default: "2023-12-01-preview")
    ///
    /// A missing required variable is a startup-time fatal error, never a
    /// runtime path.
    pub fn from_env() -> Result<Self, ConfigError> {
        let endpoint = require_var("AZURE_OPENAI_ENDPOINT")?;
        let api_key = require_var("AZURE_OPENAI_API_KEY")?;
        let deployment = require_var("AZURE_OPENAI_DEPLOYMENT")?;
        let api_version = std::env::var("AZURE_OPENAI_API_VERSION")
            .unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());

        Ok(Self {
            endpoint,
            api_key,
            deployment,
            api_version,
        })
    }

    /// Set the service API version.
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }
}

fn require_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::new(format!("{} not set", name)))
}
