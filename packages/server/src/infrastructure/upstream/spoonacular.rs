//! Spoonacular meal planner client.

use async_trait::async_trait;

use super::{endpoint_url, fetch_json};
use crate::{
    domain::{Meal, MealSource, UpstreamError},
    infrastructure::dto::upstream::MealPlanResponse,
};

pub struct SpoonacularClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SpoonacularClient {
    pub fn new(http: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl MealSource for SpoonacularClient {
    async fn meals_for(&self, target_calories: u32) -> Result<Vec<Meal>, UpstreamError> {
        let url = endpoint_url(&self.base_url, &["mealplanner", "generate"])?;
        tracing::debug!("GET {} (targetCalories={})", url, target_calories);

        let response: MealPlanResponse = fetch_json(self.http.get(url).query(&[
            ("apiKey", self.api_key.clone()),
            ("timeFrame", "day".to_string()),
            ("targetCalories", target_calories.to_string()),
        ]))
        .await?;

        Ok(response.meals.into_iter().map(Meal::from).collect())
    }
}
