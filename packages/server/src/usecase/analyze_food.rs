//! UseCase: 食品の栄養分析
//!
//! 自然文の食品説明（例: "2 eggs and a banana"）を栄養情報に変換する。
//! 同じ説明文は空白と大文字小文字を正規化したうえでキャッシュを共有する。

use std::sync::Arc;

use crate::domain::{FoodNutrition, LookupCache, NutritionSource};

use super::{error::LookupError, retry::RetryPolicy, slot_fetcher::SlotFetcher};

pub struct AnalyzeFoodUseCase {
    nutrition: Arc<dyn NutritionSource>,
    fetcher: SlotFetcher<FoodNutrition>,
}

impl AnalyzeFoodUseCase {
    pub fn new(
        nutrition: Arc<dyn NutritionSource>,
        cache: Arc<dyn LookupCache<FoodNutrition>>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            nutrition,
            fetcher: SlotFetcher::new(cache, retry),
        }
    }

    pub async fn execute(&self, food_text: &str) -> Result<Vec<FoodNutrition>, LookupError> {
        let query = normalize(food_text);
        if query.is_empty() {
            return Err(LookupError::EmptyQuery("foodText"));
        }

        let source = &self.nutrition;
        let text = query.as_str();
        self.fetcher
            .lookup(text, move || source.analyze(text))
            .await
    }
}

fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{MockNutritionSource, UpstreamError},
        infrastructure::cache::InMemoryLookupCache,
    };
    use std::time::Duration;

    fn egg() -> FoodNutrition {
        FoodNutrition {
            food_name: "egg".to_string(),
            serving_qty: Some(2.0),
            serving_unit: Some("large".to_string()),
            calories: Some(143.0),
            protein: Some(12.6),
            total_fat: Some(9.5),
            total_carbohydrate: Some(0.7),
        }
    }

    fn create_usecase(source: MockNutritionSource) -> AnalyzeFoodUseCase {
        AnalyzeFoodUseCase::new(
            Arc::new(source),
            Arc::new(InMemoryLookupCache::<FoodNutrition>::new()),
            RetryPolicy::new(3, Duration::from_millis(10), Duration::from_secs(1)),
        )
    }

    #[tokio::test]
    async fn test_equivalent_queries_share_cache() {
        // テスト項目: 空白や大文字小文字だけが違う説明文は上流を 1 回しか呼ばない
        // given (前提条件):
        let mut source = MockNutritionSource::new();
        source
            .expect_analyze()
            .withf(|text| text == "2 eggs")
            .times(1)
            .returning(|_| Ok(vec![egg()]));
        let usecase = create_usecase(source);

        // when (操作):
        let first = usecase.execute("2 eggs").await.unwrap();
        let second = usecase.execute("  2   Eggs ").await.unwrap();

        // then (期待する結果):
        assert_eq!(first, vec![egg()]);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_blank_text_is_rejected() {
        // テスト項目: 空の説明文は上流を呼ばずにエラーになる
        // given (前提条件):
        let usecase = create_usecase(MockNutritionSource::new());

        // when (操作):
        let result = usecase.execute(" \n ").await;

        // then (期待する結果):
        assert_eq!(result, Err(LookupError::EmptyQuery("foodText")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rate_limit_exhaustion_is_reported() {
        // テスト項目: 429 が続くとリトライ後にエラーが返る
        // given (前提条件):
        let mut source = MockNutritionSource::new();
        source
            .expect_analyze()
            .times(3)
            .returning(|_| Err(UpstreamError::RateLimited));
        let usecase = create_usecase(source);

        // when (操作):
        let result = usecase.execute("rice").await;

        // then (期待する結果):
        assert_eq!(result, Err(LookupError::Exhausted(3)));
    }
}
