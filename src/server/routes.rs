use crate::error::{MealError, Result};
use crate::model::{Credential, MealSuggestion, NewItem, Product, ShoppingList};
use crate::providers::InlineImage;
use crate::search::{self, ProductSearch};
use crate::suggest::MealSuggestionService;
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// JSON body whose rejections render as [`MealError`]
pub type JsonBody<T> = WithRejection<Json<T>, MealError>;

#[derive(Debug, Deserialize)]
pub struct MealSuggestionRequest {
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MealsResponse {
    pub meals: Vec<MealSuggestion>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMealsRequest {
    pub meals: Vec<MealSuggestion>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateListRequest {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessImageRequest {
    pub mime_type: String,
    /// Base64-encoded image bytes
    pub data: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ItemsResponse {
    pub items: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub products: Vec<Product>,
}

pub async fn search_products(
    State(client): State<Option<Arc<ProductSearch>>>,
    _credential: Credential,
    WithRejection(Query(params), _): WithRejection<Query<SearchParams>, MealError>,
) -> Result<Json<SearchResponse>> {
    let query = search::normalize_query(params.query.as_deref())?.to_string();
    let client = client.ok_or_else(|| {
        MealError::SearchUnavailable("product search is not configured".to_string())
    })?;

    let products = client.search(&query).await?;
    Ok(Json(SearchResponse { query, products }))
}

pub async fn meal_suggestions(
    State(service): State<MealSuggestionService>,
    _credential: Credential,
    WithRejection(Json(payload), _): JsonBody<MealSuggestionRequest>,
) -> Result<Json<MealsResponse>> {
    let meals = service.suggest(&payload.items).await?;
    Ok(Json(MealsResponse { meals }))
}

pub async fn generate_for_list(
    State(service): State<MealSuggestionService>,
    credential: Credential,
    Path(id): Path<String>,
    WithRejection(Json(payload), _): JsonBody<MealSuggestionRequest>,
) -> Result<Json<MealsResponse>> {
    let meals = service.generate(&credential, &id, &payload.items).await?;
    Ok(Json(MealsResponse { meals }))
}

pub async fn process_image(
    State(service): State<MealSuggestionService>,
    _credential: Credential,
    WithRejection(Json(payload), _): JsonBody<ProcessImageRequest>,
) -> Result<Json<ItemsResponse>> {
    let data = STANDARD
        .decode(payload.data.trim())
        .map_err(|e| MealError::InvalidInput(format!("image data is not base64: {e}")))?;

    let items = service
        .read_image(InlineImage {
            mime_type: payload.mime_type,
            data,
        })
        .await?;
    Ok(Json(ItemsResponse { items }))
}

pub async fn create_list(
    State(service): State<MealSuggestionService>,
    credential: Credential,
    body: Bytes,
) -> Result<(StatusCode, Json<ShoppingList>)> {
    // The body is optional; an empty one means the default name
    let payload: CreateListRequest = if body.iter().all(u8::is_ascii_whitespace) {
        CreateListRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| MealError::InvalidInput(format!("Invalid list body: {e}")))?
    };
    let name = payload.name;
    let list = service.store().create(&credential, name).await?;
    Ok((StatusCode::CREATED, Json(list)))
}

pub async fn get_lists(
    State(service): State<MealSuggestionService>,
    credential: Credential,
) -> Result<Json<Vec<ShoppingList>>> {
    Ok(Json(service.store().list(&credential).await?))
}

pub async fn get_list(
    State(service): State<MealSuggestionService>,
    credential: Credential,
    Path(id): Path<String>,
) -> Result<Json<ShoppingList>> {
    Ok(Json(service.store().get(&credential, &id).await?))
}

pub async fn add_item(
    State(service): State<MealSuggestionService>,
    credential: Credential,
    Path(id): Path<String>,
    WithRejection(Json(item), _): JsonBody<NewItem>,
) -> Result<Json<ShoppingList>> {
    Ok(Json(service.store().add_item(&credential, &id, item).await?))
}

pub async fn remove_item(
    State(service): State<MealSuggestionService>,
    credential: Credential,
    Path((id, item_id)): Path<(String, String)>,
) -> Result<Json<ShoppingList>> {
    Ok(Json(
        service
            .store()
            .remove_item(&credential, &id, &item_id)
            .await?,
    ))
}

pub async fn update_meals(
    State(service): State<MealSuggestionService>,
    credential: Credential,
    Path(id): Path<String>,
    WithRejection(Json(payload), _): JsonBody<UpdateMealsRequest>,
) -> Result<Json<ShoppingList>> {
    Ok(Json(service.persist(&credential, &id, payload.meals).await?))
}

pub async fn health() -> &'static str {
    "ok"
}
