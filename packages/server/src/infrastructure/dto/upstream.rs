//! Response bodies of the third-party APIs.
//!
//! Only the fields the aggregator uses are declared; everything else is ignored.

use serde::Deserialize;

/// ExerciseDB `GET /exercises/bodyPart/{bodyPart}` item
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseDbItem {
    pub name: String,
    #[serde(default)]
    pub equipment: String,
    #[serde(default)]
    pub gif_url: Option<String>,
    #[serde(default)]
    pub body_part: String,
    #[serde(default)]
    pub target: Option<String>,
}

/// Spoonacular `GET /mealplanner/generate?timeFrame=day`
#[derive(Debug, Deserialize)]
pub struct MealPlanResponse {
    #[serde(default)]
    pub meals: Vec<MealPlanItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanItem {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub source_url: Option<String>,
}

/// YouTube Data API `GET /youtube/v3/search`
#[derive(Debug, Deserialize)]
pub struct VideoSearchResponse {
    #[serde(default)]
    pub items: Vec<VideoSearchItem>,
}

#[derive(Debug, Deserialize)]
pub struct VideoSearchItem {
    pub id: VideoSearchItemId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSearchItemId {
    #[serde(default)]
    pub video_id: Option<String>,
}

/// Nutritionix `POST /v2/natural/nutrients`
#[derive(Debug, Deserialize)]
pub struct NutrientsResponse {
    #[serde(default)]
    pub foods: Vec<NutrientsFood>,
}

#[derive(Debug, Deserialize)]
pub struct NutrientsFood {
    pub food_name: String,
    #[serde(default)]
    pub serving_qty: Option<f64>,
    #[serde(default)]
    pub serving_unit: Option<String>,
    #[serde(default)]
    pub nf_calories: Option<f64>,
    #[serde(default)]
    pub nf_protein: Option<f64>,
    #[serde(default)]
    pub nf_total_fat: Option<f64>,
    #[serde(default)]
    pub nf_total_carbohydrate: Option<f64>,
}
