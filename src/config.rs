use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Provider used for meal generation and image reading
    #[serde(default = "default_provider")]
    pub default_provider: String,
    /// Map of provider name to provider configuration
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
    /// Upper bound on a single generation call, in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Product search settings
    #[serde(default)]
    pub search: SearchConfig,
}

/// Configuration for a specific generative text provider
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Whether this provider is enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Model identifier (e.g., "gemini-2.5-flash", "gpt-4.1-mini")
    #[serde(default = "default_model")]
    pub model: String,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// API key for authentication (can also be set via environment variable)
    pub api_key: Option<String>,
    /// Base URL for API endpoint (for custom or proxy endpoints)
    pub base_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

/// SerpApi Google Shopping settings
#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// API key (falls back to SERPAPI_API_KEY)
    pub api_key: Option<String>,
    /// Base URL for the search endpoint
    pub base_url: Option<String>,
    /// Results requested per query
    #[serde(default = "default_result_count")]
    pub num: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            num: default_result_count(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
            providers: HashMap::new(),
            timeout: default_timeout(),
            server: ServerConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

// Default value functions
fn default_provider() -> String {
    "google".to_string()
}

fn default_enabled() -> bool {
    true
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_max_tokens() -> u32 {
    4000
}

fn default_timeout() -> u64 {
    30
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_result_count() -> u32 {
    10
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with CART__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: CART__PROVIDERS__GOOGLE__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Reject settings that would make every request fail
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout == 0 {
            return Err(ConfigError::Message(
                "timeout must be at least 1 second".to_string(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Settings for the default provider. A provider missing from the file
    /// still resolves, with its API key taken from the environment.
    pub fn default_provider_config(&self) -> ProviderConfig {
        self.providers
            .get(&self.default_provider)
            .cloned()
            .unwrap_or_else(|| ProviderConfig::for_provider(&self.default_provider))
    }
}

impl ProviderConfig {
    /// Defaults for a provider that has no section in the config file
    pub fn for_provider(name: &str) -> Self {
        let model = match name {
            "openai" => "gpt-4.1-mini",
            "anthropic" => "claude-sonnet-4-5",
            _ => "gemini-2.5-flash",
        };
        ProviderConfig {
            enabled: true,
            model: model.to_string(),
            max_tokens: default_max_tokens(),
            api_key: None,
            base_url: None,
        }
    }
}

/// Load configuration from file and environment variables
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: CART__PROVIDERS__GOOGLE__API_KEY
        .add_source(
            Environment::with_prefix("CART")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(default_provider(), "google");
        assert_eq!(default_model(), "gemini-2.5-flash");
        assert_eq!(default_timeout(), 30);
        assert_eq!(default_bind(), "127.0.0.1:8080");
    }

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.providers.is_empty());
    }

    #[test]
    fn test_default_provider_config_falls_back() {
        let mut config = AppConfig::default();
        config.default_provider = "openai".to_string();

        let provider = config.default_provider_config();
        assert!(provider.enabled);
        assert_eq!(provider.model, "gpt-4.1-mini");
        assert!(provider.api_key.is_none());
    }

    #[test]
    fn test_default_provider_config_prefers_file_entry() {
        let mut config = AppConfig::default();
        config.providers.insert(
            "google".to_string(),
            ProviderConfig {
                enabled: true,
                model: "gemini-2.0-flash".to_string(),
                max_tokens: 1000,
                api_key: Some("test-key".to_string()),
                base_url: None,
            },
        );

        let provider = config.default_provider_config();
        assert_eq!(provider.model, "gemini-2.0-flash");
        assert_eq!(provider.api_key.as_deref(), Some("test-key"));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let mut config = AppConfig::default();
        assert!(config.validate().is_ok());

        config.timeout = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("at least 1 second"));
    }

    #[test]
    fn test_search_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.search.num, 10);
        assert!(config.search.api_key.is_none());
    }

    #[test]
    fn test_load_config_without_file() {
        // The important thing is it doesn't panic
        let result = load_config();
        assert!(result.is_ok() || result.is_err());
    }
}
