//! キャッシュ付きの上流取得
//!
//! 1 つのキーについて「キャッシュ参照 → リトライ付き取得 → 成功時のみキャッシュ保存」を行う。
//! 失敗はキーごとに閉じ込め、他のキーの取得には影響しない。

use std::{future::Future, sync::Arc};

use crate::domain::{LookupCache, Slot, UpstreamError};

use super::{
    error::LookupError,
    retry::{RetryOutcome, RetryPolicy},
};

pub struct SlotFetcher<V>
where
    V: Clone + Send + Sync + 'static,
{
    cache: Arc<dyn LookupCache<V>>,
    retry: RetryPolicy,
}

impl<V> SlotFetcher<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new(cache: Arc<dyn LookupCache<V>>, retry: RetryPolicy) -> Self {
        Self { cache, retry }
    }

    /// キーの結果を取得する。失敗した場合も呼び出し元にエラーを返す。
    pub async fn lookup<F, Fut>(&self, key: &str, operation: F) -> Result<Vec<V>, LookupError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<Vec<V>, UpstreamError>>,
    {
        if let Some(items) = self.cache.get(key).await {
            tracing::debug!("Cache hit for '{}'", key);
            return Ok(items);
        }

        match self.retry.run(operation).await {
            RetryOutcome::Success { value, .. } => {
                self.cache.put(key.to_string(), value.clone()).await;
                Ok(value)
            }
            RetryOutcome::Exhausted { attempts } => Err(LookupError::Exhausted(attempts)),
            RetryOutcome::Failed { error, .. } => Err(LookupError::Upstream(error)),
        }
    }

    /// キーの結果をスロットとして取得する。失敗したキーは空のスロットになる。
    pub async fn fetch<F, Fut>(&self, key: &str, operation: F) -> Slot<V>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<Vec<V>, UpstreamError>>,
    {
        match self.lookup(key, operation).await {
            Ok(items) => Slot::fetched(key, items),
            Err(e) => {
                tracing::warn!("Failed to fetch '{}': {}", key, e);
                Slot::empty(key)
            }
        }
    }
}
