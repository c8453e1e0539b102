use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LIST_NAME: &str = "My Shopping List";

/// Identity of the caller, passed explicitly to every list operation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Credential {
    pub user_id: String,
}

impl Credential {
    pub fn new(user_id: impl Into<String>) -> Self {
        Credential {
            user_id: user_id.into(),
        }
    }
}

/// Nutrition summary for a single serving of a meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    pub calories: f64,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
    pub fiber: String,
}

/// A meal suggested by the generative model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSuggestion {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub nutrition_facts: NutritionFacts,
    pub prep_time: String,
    pub servings: u32,
}

/// Product details captured when an item was added from search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
    pub product: Product,
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    pub id: String,
    pub owner: String,
    pub name: String,
    pub items: Vec<ListItem>,
    pub meal_suggestions: Vec<MealSuggestion>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShoppingList {
    pub fn new(owner: impl Into<String>, name: Option<String>) -> Self {
        let now = Utc::now();
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_LIST_NAME.to_string());

        ShoppingList {
            id: uuid::Uuid::new_v4().to_string(),
            owner: owner.into(),
            name,
            items: Vec::new(),
            meal_suggestions: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Product titles in item order, used to seed an ingredient deck
    pub fn item_titles(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|item| item.product.title.clone())
            .collect()
    }
}

/// Fields accepted when adding an item to a list
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    #[serde(default)]
    pub search_query: Option<String>,
    pub product: Product,
    #[serde(default)]
    pub quantity: Option<u32>,
}

impl NewItem {
    pub fn into_item(self) -> ListItem {
        ListItem {
            id: uuid::Uuid::new_v4().to_string(),
            search_query: self.search_query,
            product: self.product,
            quantity: self.quantity.filter(|q| *q > 0).unwrap_or(1),
            added_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_suggestion_uses_camel_case() {
        let json = r#"{
            "name": "Omelette",
            "ingredients": ["eggs", "milk"],
            "instructions": "Whisk and fry",
            "nutritionFacts": {"calories": 250, "protein": "18g", "carbs": "2g", "fat": "19g", "fiber": "0g"},
            "prepTime": "10 minutes",
            "servings": 1
        }"#;

        let meal: MealSuggestion = serde_json::from_str(json).unwrap();
        assert_eq!(meal.nutrition_facts.calories, 250.0);
        assert_eq!(meal.prep_time, "10 minutes");

        let value = serde_json::to_value(&meal).unwrap();
        assert!(value.get("nutritionFacts").is_some());
        assert!(value.get("prepTime").is_some());
    }

    #[test]
    fn test_new_list_defaults() {
        let list = ShoppingList::new("user-1", Some("   ".to_string()));
        assert_eq!(list.name, DEFAULT_LIST_NAME);
        assert!(list.items.is_empty());
        assert!(list.meal_suggestions.is_empty());
    }

    #[test]
    fn test_new_item_quantity_defaults_to_one() {
        let item = NewItem {
            search_query: None,
            product: Product {
                title: "Whole Milk".to_string(),
                ..Default::default()
            },
            quantity: None,
        }
        .into_item();
        assert_eq!(item.quantity, 1);
    }
}
