mod anthropic;
mod factory;
mod google;
mod open_ai;
mod request;

pub use anthropic::AnthropicProvider;
pub use factory::ProviderFactory;
pub use google::GoogleProvider;
pub use open_ai::OpenAIProvider;
pub use request::{
    BlockThreshold, GenerationRequest, HarmCategory, InlineImage, SafetySetting,
};

use async_trait::async_trait;
use std::error::Error;

/// Unified trait for all generative text providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "google", "openai")
    fn provider_name(&self) -> &str;

    /// Run the request and return the model's raw text reply
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<String, Box<dyn Error + Send + Sync>>;
}

#[async_trait]
impl<P: LlmProvider + ?Sized> LlmProvider for Box<P> {
    fn provider_name(&self) -> &str {
        (**self).provider_name()
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<String, Box<dyn Error + Send + Sync>> {
        (**self).generate(request).await
    }
}

/// Turn a non-success HTTP reply into an error carrying the provider's message
pub(crate) fn api_error(provider: &str, status: reqwest::StatusCode, body: &serde_json::Value) -> String {
    let message = body["error"]["message"]
        .as_str()
        .or_else(|| body["error"].as_str())
        .unwrap_or("Unknown error");
    format!("{} API error ({}): {}", provider, status.as_u16(), message)
}
