#![allow(dead_code)]

use async_trait::async_trait;
use cart_meals::model::{Credential, MealSuggestion, NewItem, ShoppingList};
use cart_meals::providers::{GenerationRequest, LlmProvider};
use cart_meals::{InMemoryStore, MealError, ShoppingListStore};
use serde_json::json;
use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Provider that replays a fixed reply and records every prompt it saw
pub struct ScriptedProvider {
    reply: Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn replying(text: impl Into<String>) -> Self {
        ScriptedProvider {
            reply: Ok(text.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        ScriptedProvider {
            reply: Err(message.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn provider_name(&self) -> &str {
        "scripted"
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<String, Box<dyn Error + Send + Sync>> {
        self.prompts.lock().unwrap().push(request.prompt.clone());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(message.clone().into()),
        }
    }
}

/// Store wrapper that counts meal writes
#[derive(Default)]
pub struct CountingStore {
    inner: InMemoryStore,
    meal_writes: AtomicUsize,
}

impl CountingStore {
    pub fn meal_writes(&self) -> usize {
        self.meal_writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ShoppingListStore for CountingStore {
    async fn create(
        &self,
        credential: &Credential,
        name: Option<String>,
    ) -> Result<ShoppingList, MealError> {
        self.inner.create(credential, name).await
    }

    async fn list(&self, credential: &Credential) -> Result<Vec<ShoppingList>, MealError> {
        self.inner.list(credential).await
    }

    async fn get(&self, credential: &Credential, list_id: &str) -> Result<ShoppingList, MealError> {
        self.inner.get(credential, list_id).await
    }

    async fn add_item(
        &self,
        credential: &Credential,
        list_id: &str,
        item: NewItem,
    ) -> Result<ShoppingList, MealError> {
        self.inner.add_item(credential, list_id, item).await
    }

    async fn remove_item(
        &self,
        credential: &Credential,
        list_id: &str,
        item_id: &str,
    ) -> Result<ShoppingList, MealError> {
        self.inner.remove_item(credential, list_id, item_id).await
    }

    async fn replace_meals(
        &self,
        credential: &Credential,
        list_id: &str,
        meals: Vec<MealSuggestion>,
    ) -> Result<ShoppingList, MealError> {
        self.meal_writes.fetch_add(1, Ordering::SeqCst);
        self.inner.replace_meals(credential, list_id, meals).await
    }
}

/// A well-formed JSON array of meals with the given names
pub fn meals_json(names: &[&str]) -> String {
    let meals: Vec<_> = names
        .iter()
        .map(|name| {
            json!({
                "name": name,
                "ingredients": ["milk", "eggs"],
                "instructions": "Whisk, cook, serve.",
                "nutritionFacts": {
                    "calories": 320,
                    "protein": "18g",
                    "carbs": "12g",
                    "fat": "20g",
                    "fiber": "1g"
                },
                "prepTime": "15 minutes",
                "servings": 2
            })
        })
        .collect();
    serde_json::to_string_pretty(&meals).unwrap()
}

pub fn new_item(title: &str) -> NewItem {
    serde_json::from_value(json!({ "product": { "title": title } })).unwrap()
}
