//! HTTP surface for lists and meal suggestions.

mod auth;
pub mod routes;

use crate::search::ProductSearch;
use crate::suggest::MealSuggestionService;
use axum::{
    extract::FromRef,
    routing::{delete, get, post, put},
    Router,
};
use log::info;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Shared handler state. Product search is optional so the server still
/// runs without a search API key.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub meals: MealSuggestionService,
    pub search: Option<Arc<ProductSearch>>,
}

impl AppState {
    pub fn new(meals: MealSuggestionService) -> Self {
        AppState {
            meals,
            search: None,
        }
    }

    pub fn with_search(mut self, search: ProductSearch) -> Self {
        self.search = Some(Arc::new(search));
        self
    }
}

/// All routes, with [`AppState`] as shared state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/api/products/search", get(routes::search_products))
        .route(
            "/api/products/meal-suggestions",
            post(routes::meal_suggestions),
        )
        .route("/api/products/process-image", post(routes::process_image))
        .route(
            "/api/shopping-lists",
            get(routes::get_lists).post(routes::create_list),
        )
        .route("/api/shopping-lists/:id", get(routes::get_list))
        .route("/api/shopping-lists/:id/items", post(routes::add_item))
        .route(
            "/api/shopping-lists/:id/items/:item_id",
            delete(routes::remove_item),
        )
        .route("/api/shopping-lists/:id/meals", put(routes::update_meals))
        .route(
            "/api/shopping-lists/:id/meal-suggestions",
            post(routes::generate_for_list),
        )
        .with_state(state)
}

/// Bind `addr` and serve until the process stops
pub async fn serve(addr: &str, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Server running on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await
}
