use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors that can occur while selecting ingredients and generating meals
#[derive(Error, Debug)]
pub enum MealError {
    /// Generation was requested with no kept ingredients
    #[error("Please select at least one ingredient")]
    EmptySelection,

    /// The generative service failed or timed out
    #[error("Meal generation unavailable: {0}")]
    GenerationUnavailable(String),

    /// The generative service replied with text that is not a meal array
    #[error("Unparseable meal response: {reason}")]
    UnparseableResponse { reason: String, raw: String },

    /// A swipe referenced an ingredient that is no longer a candidate
    #[error("Ingredient '{0}' is not in the deck")]
    StaleIngredient(String),

    /// Shopping list does not exist or is not owned by the caller
    #[error("List not found: {0}")]
    ListNotFound(String),

    /// Request payload was rejected
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The product search service failed
    #[error("Product search unavailable: {0}")]
    SearchUnavailable(String),

    /// Missing or malformed credential
    #[error("Unauthorized")]
    Unauthorized,

    /// Provider could not be constructed from configuration
    #[error("Provider error: {0}")]
    Provider(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl MealError {
    /// Whether retrying the same request may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            MealError::GenerationUnavailable(_)
                | MealError::UnparseableResponse { .. }
                | MealError::SearchUnavailable(_)
        )
    }

    fn status(&self) -> StatusCode {
        match self {
            MealError::EmptySelection | MealError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            MealError::StaleIngredient(_) => StatusCode::CONFLICT,
            MealError::ListNotFound(_) => StatusCode::NOT_FOUND,
            MealError::Unauthorized => StatusCode::UNAUTHORIZED,
            MealError::GenerationUnavailable(_)
            | MealError::UnparseableResponse { .. }
            | MealError::SearchUnavailable(_)
            | MealError::Provider(_)
            | MealError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to an end user. Raw model output never leaves the logs.
    fn public_message(&self) -> String {
        match self {
            MealError::GenerationUnavailable(_) => "Failed to get meal suggestions".to_string(),
            MealError::UnparseableResponse { .. } => {
                "Failed to parse meal suggestions response".to_string()
            }
            MealError::SearchUnavailable(_) => "Failed to search products".to_string(),
            MealError::Provider(_) | MealError::Config(_) => "Something went wrong!".to_string(),
            MealError::ListNotFound(_) => "List not found".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for MealError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}

impl From<JsonRejection> for MealError {
    fn from(rejection: JsonRejection) -> Self {
        MealError::InvalidInput(rejection.body_text())
    }
}

impl From<QueryRejection> for MealError {
    fn from(rejection: QueryRejection) -> Self {
        MealError::InvalidInput(rejection.body_text())
    }
}

pub type Result<T> = std::result::Result<T, MealError>;
