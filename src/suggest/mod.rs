//! Meal suggestions: request building, reply parsing, and the service that
//! ties them to a provider and a list store.

mod image;
mod orchestrator;
pub mod parse;
pub mod request;

pub use image::{build_image_request, parse_item_names};
pub use orchestrator::MealSuggestionService;
pub use request::{MEAL_SUGGESTION_PROMPT, TARGET_MEAL_COUNT};
