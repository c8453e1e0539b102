//! Text product search through SerpApi's Google Shopping engine.

use crate::config::SearchConfig;
use crate::error::{MealError, Result};
use crate::model::Product;
use crate::providers::api_error;
use log::{debug, info, warn};
use reqwest::Client;
use serde_json::Value;
use std::error::Error;

const DEFAULT_BASE_URL: &str = "https://serpapi.com";

pub struct ProductSearch {
    client: Client,
    api_key: String,
    base_url: String,
    num: u32,
}

impl ProductSearch {
    /// Create a search client from configuration
    pub fn new(config: &SearchConfig) -> std::result::Result<Self, Box<dyn Error + Send + Sync>> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("SERPAPI_API_KEY").ok())
            .ok_or("SERPAPI_API_KEY not found in config or environment")?;

        Ok(ProductSearch {
            client: Client::new(),
            api_key,
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            num: config.num,
        })
    }

    /// Search shopping results for `query`.
    ///
    /// A blank query fails with [`MealError::InvalidInput`]; transport and
    /// API failures surface as [`MealError::SearchUnavailable`].
    pub async fn search(&self, query: &str) -> Result<Vec<Product>> {
        let query = normalize_query(Some(query))?;

        match self.fetch(query).await {
            Ok(products) => {
                info!("Found {} products for '{}'", products.len(), query);
                Ok(products)
            }
            Err(e) => {
                warn!("Product search for '{}' failed: {}", query, e);
                Err(MealError::SearchUnavailable(e.to_string()))
            }
        }
    }

    async fn fetch(&self, query: &str) -> std::result::Result<Vec<Product>, Box<dyn Error + Send + Sync>> {
        let num = self.num.to_string();
        let response = self
            .client
            .get(format!("{}/search.json", self.base_url))
            .query(&[
                ("engine", "google_shopping"),
                ("q", query),
                ("api_key", self.api_key.as_str()),
                ("num", num.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let response_body: Value = response.json().await?;
        debug!("SerpApi response status: {}", status);

        if !status.is_success() || response_body.get("error").is_some() {
            return Err(api_error("SerpApi", status, &response_body).into());
        }

        let products: Vec<Product> = response_body["shopping_results"]
            .as_array()
            .map(|results| results.iter().filter_map(to_product).collect())
            .unwrap_or_default();

        Ok(products)
    }
}

/// Trimmed query, or `InvalidInput` when there is nothing to search for
pub fn normalize_query(query: Option<&str>) -> Result<&str> {
    match query.map(str::trim) {
        Some(query) if !query.is_empty() => Ok(query),
        _ => Err(MealError::InvalidInput("Search query required".to_string())),
    }
}

fn to_product(result: &Value) -> Option<Product> {
    let title = result["title"].as_str()?.trim();
    if title.is_empty() {
        return None;
    }

    Some(Product {
        title: title.to_string(),
        price: result["extracted_price"]
            .as_f64()
            .or_else(|| result["price"].as_str().and_then(parse_price)),
        source: text(&result["source"]),
        link: text(&result["link"]).or_else(|| text(&result["product_link"])),
        thumbnail: text(&result["thumbnail"]),
        rating: result["rating"].as_f64(),
        reviews: result["reviews"].as_u64(),
    })
}

fn text(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

/// "$1,299.99" -> 1299.99
fn parse_price(price: &str) -> Option<f64> {
    let digits: String = price
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse().ok()
}
