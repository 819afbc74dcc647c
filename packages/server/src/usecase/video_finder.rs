//! レシピ動画の検索
//!
//! 登録順にプロバイダへ問い合わせ、最初に見つかった動画を採用する。
//! どのプロバイダでも見つからなければ `None`。見つかった URL だけをキャッシュする。

use std::sync::Arc;

use crate::domain::{LookupCache, VideoSearchProvider};

use super::retry::RetryPolicy;

pub struct VideoFinder {
    providers: Vec<Arc<dyn VideoSearchProvider>>,
    cache: Arc<dyn LookupCache<String>>,
    retry: RetryPolicy,
}

impl VideoFinder {
    pub fn new(
        providers: Vec<Arc<dyn VideoSearchProvider>>,
        cache: Arc<dyn LookupCache<String>>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            providers,
            cache,
            retry,
        }
    }

    pub async fn find(&self, title: &str) -> Option<String> {
        let query = format!("{} recipe tutorial", title.trim());
        if let Some(url) = self.cache.get(&query).await.and_then(|urls| urls.into_iter().next()) {
            return Some(url);
        }

        for provider in &self.providers {
            let query = query.as_str();
            let outcome = self.retry.run(move || provider.search(query)).await;
            match outcome.into_result() {
                Ok(Some(url)) => {
                    self.cache.put(query.to_string(), vec![url.clone()]).await;
                    return Some(url);
                }
                Ok(None) => {
                    tracing::debug!("{} has no video for '{}'", provider.name(), title);
                }
                Err(e) => {
                    tracing::warn!("{} video search failed for '{}': {}", provider.name(), title, e);
                }
            }
        }

        None
    }
}
