use crate::config::{AppConfig, ProviderConfig};
use crate::error::MealError;
use crate::providers::{AnthropicProvider, GoogleProvider, LlmProvider, OpenAIProvider};

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider instance from configuration
    pub fn create(
        provider_name: &str,
        config: &ProviderConfig,
    ) -> Result<Box<dyn LlmProvider>, MealError> {
        // Validate that provider is enabled
        if !config.enabled {
            return Err(MealError::Provider(format!(
                "Provider '{}' is not enabled in configuration",
                provider_name
            )));
        }

        let provider: Box<dyn LlmProvider> = match provider_name {
            "google" => Box::new(GoogleProvider::new(config).map_err(provider_error)?),
            "openai" => Box::new(OpenAIProvider::new(config).map_err(provider_error)?),
            "anthropic" => Box::new(AnthropicProvider::new(config).map_err(provider_error)?),
            _ => {
                return Err(MealError::Provider(format!(
                    "Unknown provider: {}",
                    provider_name
                )))
            }
        };

        Ok(provider)
    }

    /// Get the default provider from configuration
    pub fn get_default_provider(config: &AppConfig) -> Result<Box<dyn LlmProvider>, MealError> {
        Self::create(&config.default_provider, &config.default_provider_config())
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["google", "openai", "anthropic"]
    }
}

fn provider_error(e: Box<dyn std::error::Error + Send + Sync>) -> MealError {
    MealError::Provider(e.to_string())
}
