//! Nutritionix natural-language nutrients client.

use async_trait::async_trait;

use super::{endpoint_url, fetch_json};
use crate::{
    domain::{FoodNutrition, NutritionSource, UpstreamError},
    infrastructure::dto::upstream::NutrientsResponse,
};

pub struct NutritionixClient {
    http: reqwest::Client,
    base_url: String,
    app_id: String,
    app_key: String,
}

impl NutritionixClient {
    pub fn new(http: reqwest::Client, base_url: String, app_id: String, app_key: String) -> Self {
        Self {
            http,
            base_url,
            app_id,
            app_key,
        }
    }
}

#[async_trait]
impl NutritionSource for NutritionixClient {
    async fn analyze(&self, food_text: &str) -> Result<Vec<FoodNutrition>, UpstreamError> {
        let url = endpoint_url(&self.base_url, &["v2", "natural", "nutrients"])?;

        let response: NutrientsResponse = fetch_json(
            self.http
                .post(url)
                .header("x-app-id", &self.app_id)
                .header("x-app-key", &self.app_key)
                .json(&serde_json::json!({ "query": food_text })),
        )
        .await?;

        Ok(response.foods.into_iter().map(FoodNutrition::from).collect())
    }
}
