//! ExerciseDB (RapidAPI) client.

use async_trait::async_trait;

use super::{endpoint_url, fetch_json};
use crate::{
    domain::{BodyPart, Exercise, ExerciseSource, UpstreamError},
    infrastructure::dto::upstream::ExerciseDbItem,
};

pub struct ExerciseDbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    api_host: String,
}

impl ExerciseDbClient {
    pub fn new(http: reqwest::Client, base_url: String, api_key: String, api_host: String) -> Self {
        Self {
            http,
            base_url,
            api_key,
            api_host,
        }
    }
}

#[async_trait]
impl ExerciseSource for ExerciseDbClient {
    async fn exercises_for(&self, body_part: &BodyPart) -> Result<Vec<Exercise>, UpstreamError> {
        let url = endpoint_url(&self.base_url, &["exercises", "bodyPart", body_part.as_str()])?;
        tracing::debug!("GET {}", url);

        let items: Vec<ExerciseDbItem> = fetch_json(
            self.http
                .get(url)
                .header("X-RapidAPI-Key", &self.api_key)
                .header("X-RapidAPI-Host", &self.api_host),
        )
        .await?;

        Ok(items.into_iter().map(Exercise::from).collect())
    }
}
