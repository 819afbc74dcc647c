//! UseCase: 食事プランの集約
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - GetDietPlanUseCase::execute() / build_plan()
//!
//! ### なぜこのテストが必要か
//! - 食事ごとの取得は独立しており、失敗した食事だけがプランから抜けることを保証
//! - 動画が見つからなくても食事自体は返ることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：5 食すべて取得でき、それぞれに動画 URL が付く
//! - 部分的な失敗：一部の食事の取得に失敗、動画検索の失敗
//! - 異常系：目標が未設定

use std::sync::Arc;

use fitlink_shared::time::{Clock, weekday_name};
use futures_util::future::join_all;

use crate::domain::{
    DietPlan, LookupCache, Meal, MealSource, MealType, PlannedMeal, UserId, UserRepository,
};

use super::{
    error::PlanError, retry::RetryPolicy, slot_fetcher::SlotFetcher, video_finder::VideoFinder,
};

pub struct GetDietPlanUseCase {
    users: Arc<dyn UserRepository>,
    meals: Arc<dyn MealSource>,
    fetcher: SlotFetcher<Meal>,
    videos: VideoFinder,
    clock: Arc<dyn Clock>,
}

impl GetDietPlanUseCase {
    pub fn new(
        users: Arc<dyn UserRepository>,
        meals: Arc<dyn MealSource>,
        cache: Arc<dyn LookupCache<Meal>>,
        retry: RetryPolicy,
        videos: VideoFinder,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            meals,
            fetcher: SlotFetcher::new(cache, retry),
            videos,
            clock,
        }
    }

    /// ユーザーの目標カロリーに合わせた食事プランを作る
    pub async fn execute(&self, user_id: &UserId) -> Result<DietPlan, PlanError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await
            .ok_or_else(|| PlanError::UserNotFound(user_id.to_string()))?;
        let goal = user.goal.ok_or(PlanError::MissingGoal)?;

        Ok(self
            .build_plan(user.id, goal.daily_calories(), &MealType::ALL)
            .await)
    }

    /// 食事ごとに献立を並行に取得し、見つかった献立に動画を付ける
    ///
    /// 献立を取得できなかった食事はプランに含めない。
    pub async fn build_plan(
        &self,
        user_id: UserId,
        daily_calories: u32,
        meal_types: &[MealType],
    ) -> DietPlan {
        let found = join_all(
            meal_types
                .iter()
                .map(|meal_type| self.fetch_meal(*meal_type, daily_calories)),
        )
        .await;

        let meals = join_all(found.into_iter().flatten().map(|(meal_type, meal)| async move {
            let video_url = self.videos.find(&meal.title).await;
            PlannedMeal {
                meal_type,
                meal,
                video_url,
            }
        }))
        .await;

        tracing::info!(
            "Built diet plan for '{}': {}/{} meals at {} kcal",
            user_id,
            meals.len(),
            meal_types.len(),
            daily_calories
        );

        DietPlan {
            user_id,
            today: weekday_name(self.clock.now_millis()),
            target_calories: daily_calories,
            meals,
        }
    }

    async fn fetch_meal(&self, meal_type: MealType, daily_calories: u32) -> Option<(MealType, Meal)> {
        let target = meal_type.target_calories(daily_calories);
        let key = format!("{}@{}", meal_type, target);
        let source = &self.meals;
        let slot = self
            .fetcher
            .fetch(&key, move || source.meals_for(target))
            .await;
        slot.items.into_iter().next().map(|meal| (meal_type, meal))
    }
}
