//! reqwest-based clients for the third-party APIs.
//!
//! Every client maps HTTP 429 to `UpstreamError::RateLimited` so the retry
//! policy can tell rate limiting apart from other failures.

pub mod exercise_db;
pub mod nutritionix;
pub mod spoonacular;
pub mod youtube;

pub use exercise_db::ExerciseDbClient;
pub use nutritionix::NutritionixClient;
pub use spoonacular::SpoonacularClient;
pub use youtube::YouTubeSearchClient;

use reqwest::{RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::domain::UpstreamError;

/// Send the request and decode a JSON body, mapping failures to `UpstreamError`.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    request: RequestBuilder,
) -> Result<T, UpstreamError> {
    let response = request.send().await.map_err(map_reqwest_error)?;

    let status = response.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(UpstreamError::RateLimited);
    }
    if !status.is_success() {
        return Err(UpstreamError::Status(status.as_u16()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| UpstreamError::Decode(e.to_string()))
}

fn map_reqwest_error(e: reqwest::Error) -> UpstreamError {
    if e.is_timeout() {
        UpstreamError::Timeout
    } else if e.is_decode() {
        UpstreamError::Decode(e.to_string())
    } else {
        UpstreamError::Transport(e.to_string())
    }
}

/// Append percent-encoded path segments to a base URL.
pub(crate) fn endpoint_url(base_url: &str, segments: &[&str]) -> Result<Url, UpstreamError> {
    let mut url =
        Url::parse(base_url).map_err(|e| UpstreamError::Transport(format!("{base_url}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| UpstreamError::Transport(format!("{base_url}: not a base URL")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
