use crate::error::{MealError, Result};
use crate::model::{Credential, MealSuggestion, NewItem, ShoppingList};
use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Persistence for shopping lists. Every lookup is scoped to the owner named
/// by the credential; a list owned by someone else reads as not found.
#[async_trait]
pub trait ShoppingListStore: Send + Sync {
    async fn create(&self, credential: &Credential, name: Option<String>) -> Result<ShoppingList>;

    /// All lists of the caller, newest first
    async fn list(&self, credential: &Credential) -> Result<Vec<ShoppingList>>;

    async fn get(&self, credential: &Credential, list_id: &str) -> Result<ShoppingList>;

    async fn add_item(
        &self,
        credential: &Credential,
        list_id: &str,
        item: NewItem,
    ) -> Result<ShoppingList>;

    /// Removing an item that is not on the list is not an error
    async fn remove_item(
        &self,
        credential: &Credential,
        list_id: &str,
        item_id: &str,
    ) -> Result<ShoppingList>;

    /// Overwrite the list's meal suggestions in full
    async fn replace_meals(
        &self,
        credential: &Credential,
        list_id: &str,
        meals: Vec<MealSuggestion>,
    ) -> Result<ShoppingList>;
}

/// Process-local store; contents are lost on restart
#[derive(Debug, Default)]
pub struct InMemoryStore {
    lists: RwLock<HashMap<String, ShoppingList>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn update<F>(&self, credential: &Credential, list_id: &str, apply: F) -> Result<ShoppingList>
    where
        F: FnOnce(&mut ShoppingList) + Send,
    {
        let mut lists = self.lists.write().await;
        let list = lists
            .get_mut(list_id)
            .filter(|list| list.owner == credential.user_id)
            .ok_or_else(|| MealError::ListNotFound(list_id.to_string()))?;

        apply(list);
        list.updated_at = Utc::now();
        Ok(list.clone())
    }
}

#[async_trait]
impl ShoppingListStore for InMemoryStore {
    async fn create(&self, credential: &Credential, name: Option<String>) -> Result<ShoppingList> {
        let list = ShoppingList::new(credential.user_id.clone(), name);
        debug!("Creating list {} for {}", list.id, credential.user_id);
        self.lists
            .write()
            .await
            .insert(list.id.clone(), list.clone());
        Ok(list)
    }

    async fn list(&self, credential: &Credential) -> Result<Vec<ShoppingList>> {
        let lists = self.lists.read().await;
        let mut owned: Vec<ShoppingList> = lists
            .values()
            .filter(|list| list.owner == credential.user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn get(&self, credential: &Credential, list_id: &str) -> Result<ShoppingList> {
        self.lists
            .read()
            .await
            .get(list_id)
            .filter(|list| list.owner == credential.user_id)
            .cloned()
            .ok_or_else(|| MealError::ListNotFound(list_id.to_string()))
    }

    async fn add_item(
        &self,
        credential: &Credential,
        list_id: &str,
        item: NewItem,
    ) -> Result<ShoppingList> {
        if item.product.title.trim().is_empty() {
            return Err(MealError::InvalidInput("product title is required".into()));
        }
        let item = item.into_item();
        self.update(credential, list_id, move |list| list.items.push(item))
            .await
    }

    async fn remove_item(
        &self,
        credential: &Credential,
        list_id: &str,
        item_id: &str,
    ) -> Result<ShoppingList> {
        self.update(credential, list_id, |list| {
            list.items.retain(|item| item.id != item_id)
        })
        .await
    }

    async fn replace_meals(
        &self,
        credential: &Credential,
        list_id: &str,
        meals: Vec<MealSuggestion>,
    ) -> Result<ShoppingList> {
        debug!("Replacing {} meal suggestions on list {}", meals.len(), list_id);
        self.update(credential, list_id, move |list| list.meal_suggestions = meals)
            .await
    }
}
