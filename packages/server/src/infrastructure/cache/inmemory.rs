//! インメモリ LookupCache 実装
//!
//! プロセスの生存期間中だけ有効なキャッシュ。有効期限による失効はない。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::LookupCache;

pub struct InMemoryLookupCache<V> {
    entries: RwLock<HashMap<String, Vec<V>>>,
}

impl<V> InMemoryLookupCache<V> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl<V> Default for InMemoryLookupCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<V> LookupCache<V> for InMemoryLookupCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> Option<Vec<V>> {
        let entries = self.entries.read().await;
        entries.get(key).cloned()
    }

    async fn put(&self, key: String, items: Vec<V>) {
        let mut entries = self.entries.write().await;
        entries.insert(key, items);
    }
}
