//! HTTP handlers for the plan aggregator and the single-lookup endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::{
    infrastructure::dto::http::{
        DietPlanResponse, ExerciseDto, FoodNutritionDto, NutritionRequest, WorkoutPlanResponse,
    },
    ui::{auth::AuthUser, error::ApiError, state::AppState},
};

/// `GET /api/exercises/workout-plan`
pub async fn get_workout_plan(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<WorkoutPlanResponse>, ApiError> {
    let plan = state.get_workout_plan_usecase.execute(&user_id).await?;
    Ok(Json(plan.into()))
}

/// `GET /api/diet/diet-plan`
pub async fn get_diet_plan(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<DietPlanResponse>, ApiError> {
    let plan = state.get_diet_plan_usecase.execute(&user_id).await?;
    Ok(Json(plan.into()))
}

/// `GET /api/exercises/{body_part}`
pub async fn get_exercises_by_body_part(
    State(state): State<Arc<AppState>>,
    Path(body_part): Path<String>,
) -> Result<Json<Vec<ExerciseDto>>, ApiError> {
    let exercises = state.get_exercises_usecase.execute(body_part).await?;
    Ok(Json(exercises.into_iter().map(Into::into).collect()))
}

/// `POST /api/nutrition`
pub async fn analyze_nutrition(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NutritionRequest>, JsonRejection>,
) -> Result<Json<Vec<FoodNutritionDto>>, ApiError> {
    let Json(request) = payload.map_err(|e| {
        tracing::debug!("Rejected nutrition request body: {}", e);
        ApiError::BadRequest("Please provide a food item".to_string())
    })?;
    let food_text = request.food_text.unwrap_or_default();
    let foods = state.analyze_food_usecase.execute(&food_text).await?;
    Ok(Json(foods.into_iter().map(Into::into).collect()))
}
