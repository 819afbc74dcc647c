//! HTTP API request/response DTOs.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummaryDto {
    pub id: String,
    pub users: Vec<String>,
    pub capacity: Option<usize>,
    pub created_at: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerDetailDto {
    pub connection_id: String,
    pub user_id: String,
    pub joined_at: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetailDto {
    pub id: String,
    pub peers: Vec<PeerDetailDto>,
    pub capacity: Option<usize>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseDto {
    pub name: String,
    pub equipment: String,
    pub gif_url: Option<String>,
    pub body_part: String,
    pub target: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSlotDto {
    pub body_part: String,
    pub exercises: Vec<ExerciseDto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WorkoutPlanResponse {
    pub today: String,
    pub plan: Vec<WorkoutSlotDto>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedMealDto {
    pub meal_type: String,
    pub id: u64,
    pub title: String,
    pub ready_in_minutes: Option<u32>,
    pub servings: Option<u32>,
    pub source_url: Option<String>,
    pub video_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlanResponse {
    pub today: String,
    pub target_calories: u32,
    pub meals: Vec<PlannedMealDto>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionRequest {
    #[serde(default)]
    pub food_text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FoodNutritionDto {
    pub food_name: String,
    pub serving_qty: Option<f64>,
    pub serving_unit: Option<String>,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub total_fat: Option<f64>,
    pub total_carbohydrate: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
