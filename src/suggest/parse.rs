//! Turning a model's free-text reply into meal records.
//!
//! Models wrap JSON in two observed ways: a fence labeled `json`, and a bare
//! fence. Both are removed before a strict parse. Nothing is repaired; any
//! text that is still not a JSON array after fence removal is rejected.

use crate::error::{MealError, Result};
use crate::model::MealSuggestion;
use serde_json::Value;

const FENCE: &str = "```";
const JSON_FENCE: &str = "```json";

/// Parse a reply into meals, validating every element against the
/// [`MealSuggestion`] schema. One bad element rejects the whole reply.
pub fn parse(raw: &str) -> Result<Vec<MealSuggestion>> {
    parse_array(raw)?
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).map_err(|e| unparseable(raw, format!("meal {index}: {e}")))
        })
        .collect()
}

/// Parse a reply into a JSON array without looking at the elements
pub fn parse_array(raw: &str) -> Result<Vec<Value>> {
    let cleaned = strip_fences(raw);

    match serde_json::from_str::<Value>(cleaned) {
        Ok(Value::Array(items)) => Ok(items),
        Ok(other) => Err(unparseable(
            raw,
            format!("expected a JSON array, found {}", kind(&other)),
        )),
        Err(e) => Err(unparseable(raw, e.to_string())),
    }
}

/// Remove markdown fences around the JSON payload.
///
/// If the text holds a fence labeled `json`, only the content up to the next
/// fence is kept. Any leading or trailing bare fence left over is removed
/// afterwards.
pub fn strip_fences(raw: &str) -> &str {
    let text = extract_labeled_block(raw).unwrap_or(raw);

    let text = text.trim();
    let text = text.strip_prefix(FENCE).unwrap_or(text).trim_start();
    let text = text.strip_suffix(FENCE).unwrap_or(text).trim_end();
    text.trim()
}

fn extract_labeled_block(raw: &str) -> Option<&str> {
    // ASCII lowercasing keeps byte offsets aligned with `raw`
    let lower = raw.to_ascii_lowercase();
    let start = lower.find(JSON_FENCE)? + JSON_FENCE.len();
    let end = start + lower[start..].find(FENCE)?;
    Some(raw[start..end].trim())
}

fn unparseable(raw: &str, reason: String) -> MealError {
    MealError::UnparseableResponse {
        reason,
        raw: raw.to_string(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TACOS: &str = r#"[{"name":"Tacos","ingredients":["tortilla"],"instructions":"Fill and fold","nutritionFacts":{"calories":420,"protein":"20g","carbs":"45g","fat":"18g","fiber":"6g"},"prepTime":"20 minutes","servings":2}]"#;

    #[test]
    fn test_labeled_fence() {
        let raw = format!("```json\n{}\n```", TACOS);
        let meals = parse(&raw).unwrap();
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].name, "Tacos");
        assert_eq!(meals[0].ingredients, vec!["tortilla"]);
    }

    #[test]
    fn test_labeled_fence_with_surrounding_prose() {
        let raw = format!(
            "Here are some ideas!\n```json\n{}\n```\nEnjoy ```your``` meal.",
            TACOS
        );
        assert_eq!(parse(&raw).unwrap()[0].name, "Tacos");
    }

    #[test]
    fn test_bare_fence() {
        let raw = format!("```\n{}\n```", TACOS);
        assert_eq!(parse(&raw).unwrap().len(), 1);
    }

    #[test]
    fn test_unwrapped_json() {
        assert_eq!(parse(TACOS).unwrap()[0].servings, 2);
    }

    #[test]
    fn test_uppercase_label() {
        let raw = format!("```JSON\n{}```", TACOS);
        assert_eq!(parse(&raw).unwrap().len(), 1);
    }

    #[test]
    fn test_unclosed_labeled_fence_falls_through() {
        // The labeled block never closes, so only the leading fence can go;
        // the "json" label remains and the parse fails.
        let raw = format!("```json\n{}", TACOS);
        assert!(parse(&raw).is_err());
    }

    #[test]
    fn test_array_level_accepts_any_array() {
        let values = parse_array("[1,2,3]").unwrap();
        assert_eq!(values.len(), 3);
        assert!(parse_array("```\n[]\n```").unwrap().is_empty());
    }

    #[test]
    fn test_schema_level_rejects_non_meals() {
        let err = parse("[1,2,3]").unwrap_err();
        match err {
            MealError::UnparseableResponse { reason, raw } => {
                assert!(reason.starts_with("meal 0"));
                assert_eq!(raw, "[1,2,3]");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_field_rejects_whole_reply() {
        let raw = r#"[{"name":"Soup","ingredients":[],"instructions":"Boil","prepTime":"1 hour","servings":4}]"#;
        assert!(matches!(
            parse(raw),
            Err(MealError::UnparseableResponse { .. })
        ));
    }

    #[test]
    fn test_prose_before_array_is_rejected() {
        assert!(parse_array("Sure! Here is your list: [1,2,3]").is_err());
    }

    #[test]
    fn test_garbage_is_rejected_with_raw_text() {
        let err = parse("I'm sorry, I can't help with that.").unwrap_err();
        match err {
            MealError::UnparseableResponse { raw, .. } => {
                assert_eq!(raw, "I'm sorry, I can't help with that.")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_object_is_not_an_array() {
        let err = parse_array(r#"{"meals": []}"#).unwrap_err();
        assert!(err.to_string().contains("found an object"));
    }

    #[test]
    fn test_strip_fences() {
        assert_eq!(strip_fences("  ```\n[1]\n```  "), "[1]");
        assert_eq!(strip_fences("```json\n[1]\n```"), "[1]");
        assert_eq!(strip_fences("[1]"), "[1]");
    }
}
