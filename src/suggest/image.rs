use crate::error::{MealError, Result};
use crate::providers::{GenerationRequest, InlineImage};
use crate::suggest::{parse, MealSuggestionService};
use log::{error, info};
use serde_json::Value;

const IMAGE_PROMPT: &str = "Extract all grocery items from this shopping list image.
Return only a JSON array of item names, nothing else.
Example: [\"milk\", \"eggs\", \"bread\"]";

/// Build the request for reading grocery items off a photo
pub fn build_image_request(image: InlineImage) -> Result<GenerationRequest> {
    if !image.mime_type.starts_with("image/") {
        return Err(MealError::InvalidInput(
            "Only image files are allowed".to_string(),
        ));
    }
    if image.data.is_empty() {
        return Err(MealError::InvalidInput("No image uploaded".to_string()));
    }
    Ok(GenerationRequest::new(IMAGE_PROMPT).with_image(image))
}

/// Item names from a reply; non-string and blank entries are dropped
pub fn parse_item_names(raw: &str) -> Result<Vec<String>> {
    let names = parse::parse_array(raw)?
        .into_iter()
        .filter_map(|value| match value {
            Value::String(name) => Some(name.trim().to_string()),
            _ => None,
        })
        .filter(|name| !name.is_empty())
        .collect();
    Ok(names)
}

impl MealSuggestionService {
    /// Read grocery item names from a photo of a shopping list
    pub async fn read_image(&self, image: InlineImage) -> Result<Vec<String>> {
        let request = build_image_request(image)?;
        let raw = self.call_provider(&request).await?;

        let items = parse_item_names(&raw).map_err(|e| {
            error!("Image processing error: {}", e);
            e
        })?;
        info!("Read {} items from image", items.len());
        Ok(items)
    }
}
