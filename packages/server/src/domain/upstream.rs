//! 外部 API（上流サービス）のインターフェース
//!
//! どの上流も「キーを送ってリストかエラーを受け取る」という同じ契約を持つ。
//! HTTP 429 は `UpstreamError::RateLimited` として報告すること。

use async_trait::async_trait;

use super::{BodyPart, Exercise, FoodNutrition, Meal, UpstreamError};

/// 部位ごとのエクササイズを返すデータベース
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseSource: Send + Sync {
    async fn exercises_for(&self, body_part: &BodyPart) -> Result<Vec<Exercise>, UpstreamError>;
}

/// 目標カロリーから献立を返すサービス
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MealSource: Send + Sync {
    async fn meals_for(&self, target_calories: u32) -> Result<Vec<Meal>, UpstreamError>;
}

/// フリーテキストで動画を検索するサービス
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoSearchProvider: Send + Sync {
    /// ログ用のプロバイダ名
    fn name(&self) -> &'static str;

    /// 最も関連する動画の URL。見つからなければ `Ok(None)`。
    async fn search(&self, query: &str) -> Result<Option<String>, UpstreamError>;
}

/// 食品の説明文から栄養情報を返すサービス
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NutritionSource: Send + Sync {
    async fn analyze(&self, food_text: &str) -> Result<Vec<FoodNutrition>, UpstreamError>;
}
