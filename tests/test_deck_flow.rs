mod common;

use cart_meals::deck::DeckPhase;
use cart_meals::model::Credential;
use cart_meals::{IngredientDeck, MealSuggestionService, ShoppingListStore, ThresholdGesture};
use common::{meals_json, new_item, CountingStore, ScriptedProvider};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[tokio::test]
async fn test_swiped_selection_drives_generation() {
    let store = Arc::new(CountingStore::default());
    let provider = Arc::new(ScriptedProvider::replying(meals_json(&["Banana Bread"])));
    let alice = Credential::new("alice");

    let list = store.create(&alice, None).await.unwrap();
    for title in ["Bananas", "Flour", "Dish Soap", "Eggs"] {
        store.add_item(&alice, &list.id, new_item(title)).await.unwrap();
    }
    let list = store.get(&alice, &list.id).await.unwrap();

    let mut deck = IngredientDeck::from_list(&list);
    let selections = Arc::new(Mutex::new(Vec::new()));
    let seen = selections.clone();
    deck.on_selection_changed(move |kept| seen.lock().unwrap().push(kept.to_vec()));

    let gesture = ThresholdGesture::default();
    deck.drag_end("Bananas", 140.0, &gesture).unwrap();
    deck.drag_end("Flour", 60.0, &gesture).unwrap();
    deck.drag_end("Flour", 101.0, &gesture).unwrap();
    deck.drag_end("Dish Soap", -220.0, &gesture).unwrap();
    deck.drag_end("Eggs", 180.0, &gesture).unwrap();

    assert_eq!(deck.phase(), DeckPhase::Exhausted);
    assert_eq!(deck.discarded(), vec!["Dish Soap"]);
    assert_eq!(selections.lock().unwrap().len(), 3);

    let service = MealSuggestionService::new(provider.clone(), store.clone(), Duration::from_secs(5));
    let meals = service
        .generate(&alice, &list.id, deck.kept())
        .await
        .unwrap();

    assert_eq!(meals[0].name, "Banana Bread");
    assert!(provider
        .last_prompt()
        .unwrap()
        .contains("Given these grocery items: Bananas, Flour, Eggs"));
    assert_eq!(store.meal_writes(), 1);
}
