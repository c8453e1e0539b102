use crate::config::AppConfig;
use crate::error::{MealError, Result};
use crate::model::{Credential, MealSuggestion, ShoppingList};
use crate::providers::{GenerationRequest, LlmProvider, ProviderFactory};
use crate::store::ShoppingListStore;
use crate::suggest::{parse, request};
use log::{error, info, warn};
use std::sync::Arc;
use std::time::Duration;

/// Runs kept ingredients through the model and stores the resulting meals.
///
/// Each call makes exactly one provider request and, when persisting, one
/// store write. Nothing is retried; failures are returned for the caller to
/// surface. Concurrent calls for the same list are not coordinated and the
/// last write wins.
#[derive(Clone)]
pub struct MealSuggestionService {
    provider: Arc<dyn LlmProvider>,
    store: Arc<dyn ShoppingListStore>,
    timeout: Duration,
}

impl MealSuggestionService {
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        store: Arc<dyn ShoppingListStore>,
        timeout: Duration,
    ) -> Self {
        MealSuggestionService {
            provider,
            store,
            timeout,
        }
    }

    /// Build a service around the configured default provider
    pub fn from_config(config: &AppConfig, store: Arc<dyn ShoppingListStore>) -> Result<Self> {
        let provider = ProviderFactory::get_default_provider(config)?;
        info!("Using '{}' for meal generation", provider.provider_name());
        Ok(Self::new(Arc::from(provider), store, config.timeout()))
    }

    pub fn store(&self) -> &Arc<dyn ShoppingListStore> {
        &self.store
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Generate meals for `kept` without touching any list
    pub async fn suggest<S: AsRef<str> + Sync>(&self, kept: &[S]) -> Result<Vec<MealSuggestion>> {
        let request = request::build(kept)?;
        self.run(&request).await
    }

    /// Generate meals for `kept` and replace the list's suggestions with them.
    ///
    /// The list is written only after the reply parsed in full.
    pub async fn generate<S: AsRef<str> + Sync>(
        &self,
        credential: &Credential,
        list_id: &str,
        kept: &[S],
    ) -> Result<Vec<MealSuggestion>> {
        let request = request::build(kept)?;
        // Don't spend a model call on a list the caller can't write
        self.store.get(credential, list_id).await?;

        let meals = self.run(&request).await?;
        self.persist(credential, list_id, meals.clone()).await?;
        Ok(meals)
    }

    /// Overwrite the list's meal suggestions in full
    pub async fn persist(
        &self,
        credential: &Credential,
        list_id: &str,
        meals: Vec<MealSuggestion>,
    ) -> Result<ShoppingList> {
        self.store.replace_meals(credential, list_id, meals).await
    }

    /// Call the provider once and parse the reply into meals
    async fn run(&self, request: &GenerationRequest) -> Result<Vec<MealSuggestion>> {
        let raw = self.call_provider(request).await?;

        match parse::parse(&raw) {
            Ok(meals) => {
                info!("Parsed {} meal suggestions", meals.len());
                Ok(meals)
            }
            Err(e) => {
                if let MealError::UnparseableResponse { reason, raw } = &e {
                    error!("Meal suggestion parsing failed: {}\nRaw text: {}", reason, raw);
                }
                Err(e)
            }
        }
    }

    /// One bounded provider call; timeouts and provider errors both surface
    /// as [`MealError::GenerationUnavailable`].
    pub(crate) async fn call_provider(&self, request: &GenerationRequest) -> Result<String> {
        let name = self.provider.provider_name();
        match tokio::time::timeout(self.timeout, self.provider.generate(request)).await {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => {
                warn!("Provider {} failed: {}", name, e);
                Err(MealError::GenerationUnavailable(e.to_string()))
            }
            Err(_) => {
                warn!("Provider {} timed out after {:?}", name, self.timeout);
                Err(MealError::GenerationUnavailable(format!(
                    "{} timed out after {:?}",
                    name, self.timeout
                )))
            }
        }
    }
}
