//! プラン集約のドメインモデル

use super::value_object::{MealType, UserId};

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub name: String,
    pub equipment: String,
    pub gif_url: Option<String>,
    pub body_part: String,
    pub target: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Meal {
    pub id: u64,
    pub title: String,
    pub ready_in_minutes: Option<u32>,
    pub servings: Option<u32>,
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FoodNutrition {
    pub food_name: String,
    pub serving_qty: Option<f64>,
    pub serving_unit: Option<String>,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub total_fat: Option<f64>,
    pub total_carbohydrate: Option<f64>,
}

/// 独立に取得されるプランの 1 単位
///
/// `fetched == false` は取得に失敗したことを表し、`items` は空になる。
#[derive(Debug, Clone, PartialEq)]
pub struct Slot<T> {
    pub key: String,
    pub items: Vec<T>,
    pub fetched: bool,
}

impl<T> Slot<T> {
    pub fn fetched(key: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            key: key.into(),
            items,
            fetched: true,
        }
    }

    pub fn empty(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            items: Vec::new(),
            fetched: false,
        }
    }

    pub fn is_populated(&self) -> bool {
        self.fetched && !self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutPlan {
    pub user_id: UserId,
    pub today: String,
    pub slots: Vec<Slot<Exercise>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannedMeal {
    pub meal_type: MealType,
    pub meal: Meal,
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DietPlan {
    pub user_id: UserId,
    pub today: String,
    pub target_calories: u32,
    pub meals: Vec<PlannedMeal>,
}
