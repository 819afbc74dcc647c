//! UseCase: 部位を指定したエクササイズ検索
//!
//! ワークアウトプランと同じキャッシュを共有するため、どちらかで取得済みの部位は上流を呼ばない。

use std::sync::Arc;

use crate::domain::{BodyPart, Exercise, ExerciseSource, LookupCache};

use super::{error::LookupError, retry::RetryPolicy, slot_fetcher::SlotFetcher};

pub struct GetExercisesUseCase {
    exercises: Arc<dyn ExerciseSource>,
    fetcher: SlotFetcher<Exercise>,
}

impl GetExercisesUseCase {
    pub fn new(
        exercises: Arc<dyn ExerciseSource>,
        cache: Arc<dyn LookupCache<Exercise>>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            exercises,
            fetcher: SlotFetcher::new(cache, retry),
        }
    }

    pub async fn execute(&self, body_part: String) -> Result<Vec<Exercise>, LookupError> {
        let body_part = BodyPart::new(body_part).map_err(|_| LookupError::EmptyQuery("body part"))?;
        let source = &self.exercises;
        let part = &body_part;
        self.fetcher
            .lookup(body_part.as_str(), move || source.exercises_for(part))
            .await
    }
}
