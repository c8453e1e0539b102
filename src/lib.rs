pub mod config;
pub mod deck;
pub mod emoji;
pub mod error;
pub mod model;
pub mod providers;
pub mod search;
pub mod server;
pub mod store;
pub mod suggest;

pub use config::AppConfig;
pub use deck::{IngredientDeck, SwipeDirection, SwipeGesture, ThresholdGesture};
pub use error::MealError;
pub use model::{Credential, MealSuggestion, NutritionFacts, Product, ShoppingList};
pub use search::ProductSearch;
pub use store::{InMemoryStore, ShoppingListStore};
pub use suggest::MealSuggestionService;

use std::sync::Arc;

/// Suggest meals for a set of ingredients using the configured default provider.
///
/// Configuration comes from `config.toml` and `CART__*` environment
/// variables. Nothing is persisted.
///
/// # Example
/// ```no_run
/// # async fn run() -> Result<(), cart_meals::MealError> {
/// let meals = cart_meals::suggest_meals(&["milk", "eggs"]).await?;
/// for meal in meals {
///     println!("{} ({})", meal.name, meal.prep_time);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn suggest_meals<S: AsRef<str> + Sync>(
    ingredients: &[S],
) -> Result<Vec<MealSuggestion>, MealError> {
    let config = AppConfig::load()?;
    let service = MealSuggestionService::from_config(&config, Arc::new(InMemoryStore::new()))?;
    service.suggest(ingredients).await
}
