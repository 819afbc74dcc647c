//! Value Object 定義
//!
//! 生の文字列をそのまま扱わず、検証済みの型としてドメイン層に持ち込むための型群。

use std::fmt;

use uuid::Uuid;

use super::error::ValueObjectError;

/// RoomId / UserId の最大長
pub const MAX_ID_LENGTH: usize = 64;

fn validate_id(kind: &'static str, value: String) -> Result<String, ValueObjectError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValueObjectError::Empty(kind));
    }
    if trimmed.chars().count() > MAX_ID_LENGTH {
        return Err(ValueObjectError::TooLong {
            kind,
            max: MAX_ID_LENGTH,
        });
    }
    Ok(trimmed.to_string())
}

/// ルーム ID（クライアントが指定する任意の文字列）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        validate_id("room id", value).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// アプリケーションが指定するユーザー ID
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        validate_id("user id", value).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// ソケット接続ごとにサーバーが払い出す ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unix タイムスタンプ（ミリ秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// シグナリングのペイロード（SDP や ICE candidate）。中身は一切解釈しない。
#[derive(Debug, Clone, PartialEq)]
pub struct SignalPayload(serde_json::Value);

impl SignalPayload {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

/// ユーザーのトレーニング目標
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Goal {
    WeightLoss,
    WeightGain,
    Maintenance,
}

impl Goal {
    /// 目標ごとに鍛える部位（ExerciseDB の bodyPart 名）
    pub fn workout_body_parts(&self) -> &'static [&'static str] {
        match self {
            Goal::WeightGain => &["chest", "back", "upper legs", "shoulders", "upper arms"],
            Goal::WeightLoss => &["cardio", "waist"],
            Goal::Maintenance => &["chest", "back", "upper legs"],
        }
    }

    /// 1 日の目標摂取カロリー
    pub fn daily_calories(&self) -> u32 {
        match self {
            Goal::WeightLoss => 1800,
            Goal::WeightGain => 3000,
            Goal::Maintenance => 2200,
        }
    }
}

impl TryFrom<&str> for Goal {
    type Error = ValueObjectError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "weight loss" => Ok(Goal::WeightLoss),
            "weight gain" => Ok(Goal::WeightGain),
            "maintenance" => Ok(Goal::Maintenance),
            other => Err(ValueObjectError::UnknownGoal(other.to_string())),
        }
    }
}

/// ExerciseDB の部位名
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BodyPart(String);

impl BodyPart {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        let normalized = value.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(ValueObjectError::Empty("body part"));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 食事の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    PostWorkout,
}

impl MealType {
    pub const ALL: [MealType; 5] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
        MealType::PostWorkout,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
            MealType::PostWorkout => "postWorkout",
        }
    }

    /// 1 日の摂取カロリーのうちこの食事に割り当てる割合
    pub fn calorie_share(&self) -> f64 {
        match self {
            MealType::Breakfast => 0.25,
            MealType::Lunch => 0.30,
            MealType::Dinner => 0.25,
            MealType::Snack => 0.10,
            MealType::PostWorkout => 0.10,
        }
    }

    pub fn target_calories(&self, daily_calories: u32) -> u32 {
        (f64::from(daily_calories) * self.calorie_share()).round() as u32
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
