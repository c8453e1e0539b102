use crate::error::{MealError, Result};
use crate::providers::{BlockThreshold, GenerationRequest, HarmCategory};

/// Prompt template for meal suggestions.
///
/// Loaded from `prompt.txt` at compile time. Contains `{{ITEMS}}` and
/// `{{COUNT}}` placeholders filled in by [`build`].
pub const MEAL_SUGGESTION_PROMPT: &str = include_str!("prompt.txt");

/// Number of meals requested from the model
pub const TARGET_MEAL_COUNT: usize = 3;

const TEMPERATURE: f32 = 0.2;
const TOP_P: f32 = 0.8;
const TOP_K: u32 = 40;

/// Build the generation request for a set of kept ingredients.
///
/// Names are trimmed and blank names dropped; an empty selection fails with
/// [`MealError::EmptySelection`].
pub fn build<S: AsRef<str>>(kept: &[S]) -> Result<GenerationRequest> {
    let items: Vec<&str> = kept
        .iter()
        .map(|name| name.as_ref().trim())
        .filter(|name| !name.is_empty())
        .collect();

    if items.is_empty() {
        return Err(MealError::EmptySelection);
    }

    let prompt = MEAL_SUGGESTION_PROMPT
        .replace("{{ITEMS}}", &items.join(", "))
        .replace("{{COUNT}}", &TARGET_MEAL_COUNT.to_string());

    Ok(GenerationRequest::new(prompt)
        .with_sampling(TEMPERATURE, TOP_P, TOP_K)
        .with_safety(HarmCategory::Harassment, BlockThreshold::BlockMediumAndAbove)
        .with_safety(HarmCategory::HateSpeech, BlockThreshold::BlockMediumAndAbove))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_embedded() {
        assert!(MEAL_SUGGESTION_PROMPT.contains("{{ITEMS}}"));
        assert!(MEAL_SUGGESTION_PROMPT.contains("{{COUNT}}"));
        assert!(MEAL_SUGGESTION_PROMPT.contains("nutritionFacts"));
        assert!(MEAL_SUGGESTION_PROMPT.contains("prepTime"));
    }

    #[test]
    fn test_build_embeds_items_and_count() {
        let request = build(&["milk", " eggs "]).unwrap();
        assert!(request.prompt.contains("Given these grocery items: milk, eggs"));
        assert!(request.prompt.contains("Suggest 3 meal recipes"));
        assert!(!request.prompt.contains("{{"));
        assert_eq!(request.temperature, Some(0.2));
        assert_eq!(request.top_p, Some(0.8));
        assert_eq!(request.top_k, Some(40));
        assert_eq!(request.safety.len(), 2);
        assert!(request.image.is_none());
    }

    #[test]
    fn test_build_rejects_empty_selection() {
        let empty: [&str; 0] = [];
        assert!(matches!(build(&empty), Err(MealError::EmptySelection)));
        assert!(matches!(build(&["", "   "]), Err(MealError::EmptySelection)));
    }

    #[test]
    fn test_build_accepts_owned_strings() {
        let kept = vec!["Whole Milk".to_string()];
        assert!(build(&kept).is_ok());
    }
}
