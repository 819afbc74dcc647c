//! YouTube Data API video search client.

use async_trait::async_trait;

use super::{endpoint_url, fetch_json};
use crate::{
    domain::{UpstreamError, VideoSearchProvider},
    infrastructure::dto::upstream::VideoSearchResponse,
};

const WATCH_URL: &str = "https://www.youtube.com/watch?v=";

pub struct YouTubeSearchClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl YouTubeSearchClient {
    pub fn new(http: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl VideoSearchProvider for YouTubeSearchClient {
    fn name(&self) -> &'static str {
        "YouTube"
    }

    async fn search(&self, query: &str) -> Result<Option<String>, UpstreamError> {
        let url = endpoint_url(&self.base_url, &["youtube", "v3", "search"])?;

        let response: VideoSearchResponse = fetch_json(self.http.get(url).query(&[
            ("key", self.api_key.as_str()),
            ("q", query),
            ("part", "snippet"),
            ("type", "video"),
            ("maxResults", "1"),
        ]))
        .await?;

        Ok(response
            .items
            .into_iter()
            .find_map(|item| item.id.video_id)
            .map(|video_id| format!("{WATCH_URL}{video_id}")))
    }
}
