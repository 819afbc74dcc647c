//! LookupCache trait 定義

use async_trait::async_trait;

/// キーごとの取得結果をプロセス内に保持するキャッシュ
///
/// 有効期限はなく、プロセスが生きている間は有効。同じキーへの書き込みは後勝ち。
#[async_trait]
pub trait LookupCache<V>: Send + Sync
where
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> Option<Vec<V>>;

    async fn put(&self, key: String, items: Vec<V>);
}
