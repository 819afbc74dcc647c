//! UseCase: ワークアウトプランの集約
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - GetWorkoutPlanUseCase::execute() / build_plan()
//!
//! ### なぜこのテストが必要か
//! - 部位ごとの取得は並行に行われ、一部の失敗がプラン全体を失敗させないことを保証
//! - 同じ部位の 2 回目以降の取得がキャッシュから返ることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：目標に応じた部位が順番どおりに並ぶ
//! - 部分的な失敗：存在しない部位は空のスロットになる
//! - 異常系：ユーザーが存在しない、目標が未設定

use std::sync::Arc;

use fitlink_shared::time::{Clock, weekday_name};
use futures_util::future::join_all;

use crate::domain::{
    BodyPart, Exercise, ExerciseSource, LookupCache, Slot, UserId, UserRepository, WorkoutPlan,
};

use super::{error::PlanError, retry::RetryPolicy, slot_fetcher::SlotFetcher};

/// 1 部位あたりのエクササイズ数の既定値
pub const DEFAULT_EXERCISES_PER_SLOT: usize = 5;

pub struct GetWorkoutPlanUseCase {
    users: Arc<dyn UserRepository>,
    exercises: Arc<dyn ExerciseSource>,
    fetcher: SlotFetcher<Exercise>,
    clock: Arc<dyn Clock>,
    exercises_per_slot: usize,
}

impl GetWorkoutPlanUseCase {
    pub fn new(
        users: Arc<dyn UserRepository>,
        exercises: Arc<dyn ExerciseSource>,
        cache: Arc<dyn LookupCache<Exercise>>,
        retry: RetryPolicy,
        clock: Arc<dyn Clock>,
        exercises_per_slot: usize,
    ) -> Self {
        Self {
            users,
            exercises,
            fetcher: SlotFetcher::new(cache, retry),
            clock,
            exercises_per_slot,
        }
    }

    /// ユーザーの目標に応じたワークアウトプランを作る
    pub async fn execute(&self, user_id: &UserId) -> Result<WorkoutPlan, PlanError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await
            .ok_or_else(|| PlanError::UserNotFound(user_id.to_string()))?;
        let goal = user.goal.ok_or(PlanError::MissingGoal)?;

        let body_parts: Vec<BodyPart> = goal
            .workout_body_parts()
            .iter()
            .filter_map(|name| BodyPart::new(name.to_string()).ok())
            .collect();

        Ok(self.build_plan(user.id, &body_parts).await)
    }

    /// 指定した部位のスロットを並行に取得してプランにまとめる
    ///
    /// スロットの並びは `body_parts` の順序どおり。取得に失敗した部位は空のスロットになる。
    pub async fn build_plan(&self, user_id: UserId, body_parts: &[BodyPart]) -> WorkoutPlan {
        let slots = join_all(body_parts.iter().map(|body_part| self.fetch_slot(body_part))).await;

        let populated = slots.iter().filter(|s| s.is_populated()).count();
        tracing::info!(
            "Built workout plan for '{}': {}/{} body parts populated",
            user_id,
            populated,
            slots.len()
        );

        WorkoutPlan {
            user_id,
            today: weekday_name(self.clock.now_millis()),
            slots,
        }
    }

    async fn fetch_slot(&self, body_part: &BodyPart) -> Slot<Exercise> {
        let source = &self.exercises;
        let mut slot = self
            .fetcher
            .fetch(body_part.as_str(), move || source.exercises_for(body_part))
            .await;
        slot.items.truncate(self.exercises_per_slot);
        slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{Goal, MockExerciseSource, MockUserRepository, UpstreamError, User},
        infrastructure::cache::InMemoryLookupCache,
    };
    use fitlink_shared::time::FixedClock;
    use std::time::Duration;

    // 2023-01-01 12:00:00 UTC
    const NOW: i64 = 1672574400000;

    fn user_id(value: &str) -> UserId {
        UserId::new(value.to_string()).unwrap()
    }

    fn body_part(value: &str) -> BodyPart {
        BodyPart::new(value.to_string()).unwrap()
    }

    fn exercise(name: &str, body_part: &str) -> Exercise {
        Exercise {
            name: name.to_string(),
            equipment: "body weight".to_string(),
            gif_url: None,
            body_part: body_part.to_string(),
            target: None,
        }
    }

    fn users_with(goal: Option<Goal>) -> Arc<dyn UserRepository> {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(move |id| {
            Some(User {
                id: id.clone(),
                goal,
            })
        });
        Arc::new(users)
    }

    /// "nonexistent" だけ 404 を返し、それ以外は部位ごとに `count` 件返す
    fn exercise_source(count: usize) -> MockExerciseSource {
        let mut source = MockExerciseSource::new();
        source.expect_exercises_for().returning(move |part| {
            if part.as_str() == "nonexistent" {
                return Err(UpstreamError::Status(404));
            }
            Ok((0..count)
                .map(|i| exercise(&format!("{} #{}", part, i), part.as_str()))
                .collect())
        });
        source
    }

    fn create_usecase(
        users: Arc<dyn UserRepository>,
        source: MockExerciseSource,
    ) -> GetWorkoutPlanUseCase {
        GetWorkoutPlanUseCase::new(
            users,
            Arc::new(source),
            Arc::new(InMemoryLookupCache::<Exercise>::new()),
            RetryPolicy::new(3, Duration::from_millis(10), Duration::from_secs(1)),
            Arc::new(FixedClock::new(NOW)),
            DEFAULT_EXERCISES_PER_SLOT,
        )
    }

    #[tokio::test]
    async fn test_plan_follows_goal_body_parts() {
        // テスト項目: 目標に対応する部位が順番どおりに並び、各部位は最大 5 件になる
        // given (前提条件):
        let usecase = create_usecase(users_with(Some(Goal::Maintenance)), exercise_source(8));

        // when (操作):
        let plan = usecase.execute(&user_id("u1")).await.unwrap();

        // then (期待する結果):
        let keys: Vec<&str> = plan.slots.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["chest", "back", "upper legs"]);
        assert!(plan.slots.iter().all(|s| s.items.len() == 5));
        assert_eq!(plan.today, weekday_name(NOW));
    }

    #[tokio::test]
    async fn test_failed_body_part_yields_empty_slot() {
        // テスト項目: 1 つの部位の取得に失敗しても他の部位は返される
        // given (前提条件):
        let usecase = create_usecase(users_with(Some(Goal::Maintenance)), exercise_source(3));
        let parts = [body_part("chest"), body_part("back"), body_part("nonexistent")];

        // when (操作):
        let plan = usecase.build_plan(user_id("u1"), &parts).await;

        // then (期待する結果):
        assert_eq!(plan.slots.len(), 3);
        assert!(plan.slots[0].is_populated());
        assert!(plan.slots[1].is_populated());
        assert_eq!(plan.slots[2], Slot::empty("nonexistent"));
    }

    #[tokio::test]
    async fn test_second_plan_is_served_from_cache() {
        // テスト項目: 同じ部位の 2 回目の取得では上流を呼ばない
        // given (前提条件):
        let mut source = MockExerciseSource::new();
        source
            .expect_exercises_for()
            .times(2)
            .returning(|part| Ok(vec![exercise("push up", part.as_str())]));
        let usecase = create_usecase(users_with(Some(Goal::WeightLoss)), source);

        // when (操作):
        let first = usecase.execute(&user_id("u1")).await.unwrap();
        let second = usecase.execute(&user_id("u1")).await.unwrap();

        // then (期待する結果): cardio と waist で 1 回ずつしか呼ばれない
        assert_eq!(first.slots, second.slots);
    }

    #[tokio::test]
    async fn test_missing_goal_is_rejected() {
        // テスト項目: 目標が未設定のユーザーはエラーになる
        // given (前提条件):
        let usecase = create_usecase(users_with(None), MockExerciseSource::new());

        // when (操作):
        let result = usecase.execute(&user_id("u1")).await;

        // then (期待する結果):
        assert_eq!(result, Err(PlanError::MissingGoal));
    }

    #[tokio::test]
    async fn test_unknown_user_is_rejected() {
        // テスト項目: 存在しないユーザーはエラーになる
        // given (前提条件):
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| None);
        let usecase = create_usecase(Arc::new(users), MockExerciseSource::new());

        // when (操作):
        let result = usecase.execute(&user_id("ghost")).await;

        // then (期待する結果):
        assert_eq!(result, Err(PlanError::UserNotFound("ghost".to_string())));
    }

    /// 1 回の呼び出しに `delay` かかるエクササイズ DB
    struct SlowExerciseSource {
        delay: Duration,
    }

    #[async_trait::async_trait]
    impl ExerciseSource for SlowExerciseSource {
        async fn exercises_for(
            &self,
            body_part: &BodyPart,
        ) -> Result<Vec<Exercise>, UpstreamError> {
            tokio::time::sleep(self.delay).await;
            Ok(vec![exercise("plank", body_part.as_str())])
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_body_parts_are_fetched_concurrently() {
        // テスト項目: 部位ごとの取得は並行に行われ、全体の所要時間は 1 回分程度に収まる
        // given (前提条件):
        let delay = Duration::from_millis(200);
        let usecase = GetWorkoutPlanUseCase::new(
            users_with(Some(Goal::WeightGain)),
            Arc::new(SlowExerciseSource { delay }),
            Arc::new(InMemoryLookupCache::<Exercise>::new()),
            RetryPolicy::new(3, Duration::from_millis(10), Duration::from_secs(1)),
            Arc::new(FixedClock::new(NOW)),
            DEFAULT_EXERCISES_PER_SLOT,
        );
        let parts: Vec<BodyPart> = ["chest", "back", "upper legs", "shoulders"]
            .iter()
            .map(|p| body_part(p))
            .collect();

        // when (操作):
        let started = tokio::time::Instant::now();
        let plan = usecase.build_plan(user_id("u1"), &parts).await;
        let elapsed = started.elapsed();

        // then (期待する結果): 逐次なら 4 * delay かかる
        assert_eq!(plan.slots.len(), 4);
        assert!(plan.slots.iter().all(|s| s.is_populated()));
        assert!(elapsed < delay * 2, "took {:?}", elapsed);
    }
}
