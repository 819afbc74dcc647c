//! Conversion logic between DTOs and domain entities.

use fitlink_shared::time::timestamp_to_rfc3339;

use crate::domain::{
    ClientCommand, DietPlan, Exercise, FoodNutrition, Meal, PlannedMeal, RelayEvent, Room,
    RoomId, Signal, SignalKind, SignalPayload, UserId, ValueObjectError, WorkoutPlan,
};
use crate::infrastructure::dto::{http, upstream, websocket as ws};

// ========================================
// WebSocket DTO ↔ Domain
// ========================================

impl TryFrom<ws::ClientMessage> for ClientCommand {
    type Error = ValueObjectError;

    fn try_from(dto: ws::ClientMessage) -> Result<Self, Self::Error> {
        let relay = |kind, payload| {
            ClientCommand::Relay(Signal::new(kind, SignalPayload::new(payload)))
        };
        Ok(match dto {
            ws::ClientMessage::JoinRoom { room_id, user_id } => ClientCommand::JoinRoom {
                room_id: RoomId::new(room_id)?,
                user_id: UserId::new(user_id)?,
            },
            ws::ClientMessage::SendOffer { payload } => relay(SignalKind::Offer, payload),
            ws::ClientMessage::SendAnswer { payload } => relay(SignalKind::Answer, payload),
            ws::ClientMessage::SendIce { payload } => relay(SignalKind::IceCandidate, payload),
        })
    }
}

impl From<&RelayEvent> for ws::ServerMessage {
    fn from(event: &RelayEvent) -> Self {
        match event {
            RelayEvent::RoomJoined { room_id, user_ids } => ws::ServerMessage::RoomJoined {
                room_id: room_id.as_str().to_string(),
                users: user_ids.iter().map(|u| u.as_str().to_string()).collect(),
            },
            RelayEvent::UserJoined { user_id } => ws::ServerMessage::UserJoined {
                user_id: user_id.as_str().to_string(),
            },
            RelayEvent::UserDisconnected { user_id } => ws::ServerMessage::UserDisconnected {
                user_id: user_id.as_str().to_string(),
            },
            RelayEvent::Signal { from, signal } => {
                let from = from.as_str().to_string();
                let payload = signal.payload.as_value().clone();
                match signal.kind {
                    SignalKind::Offer => ws::ServerMessage::ReceiveOffer { from, payload },
                    SignalKind::Answer => ws::ServerMessage::ReceiveAnswer { from, payload },
                    SignalKind::IceCandidate => ws::ServerMessage::ReceiveIce { from, payload },
                }
            }
            RelayEvent::Rejected { reason } => ws::ServerMessage::Error {
                message: reason.clone(),
            },
        }
    }
}

// ========================================
// Upstream DTO → Domain
// ========================================

impl From<upstream::ExerciseDbItem> for Exercise {
    fn from(dto: upstream::ExerciseDbItem) -> Self {
        Self {
            name: dto.name,
            equipment: dto.equipment,
            gif_url: dto.gif_url,
            body_part: dto.body_part,
            target: dto.target,
        }
    }
}

impl From<upstream::MealPlanItem> for Meal {
    fn from(dto: upstream::MealPlanItem) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            ready_in_minutes: dto.ready_in_minutes,
            servings: dto.servings,
            source_url: dto.source_url,
        }
    }
}

impl From<upstream::NutrientsFood> for FoodNutrition {
    fn from(dto: upstream::NutrientsFood) -> Self {
        Self {
            food_name: dto.food_name,
            serving_qty: dto.serving_qty,
            serving_unit: dto.serving_unit,
            calories: dto.nf_calories,
            protein: dto.nf_protein,
            total_fat: dto.nf_total_fat,
            total_carbohydrate: dto.nf_total_carbohydrate,
        }
    }
}

// ========================================
// Domain → HTTP DTO
// ========================================

impl From<&Room> for http::RoomSummaryDto {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.as_str().to_string(),
            users: room
                .peers
                .iter()
                .map(|p| p.user_id.as_str().to_string())
                .collect(),
            capacity: room.capacity,
            created_at: timestamp_to_rfc3339(room.created_at.value()),
        }
    }
}

impl From<&Room> for http::RoomDetailDto {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.as_str().to_string(),
            peers: room
                .peers
                .iter()
                .map(|p| http::PeerDetailDto {
                    connection_id: p.connection_id.to_string(),
                    user_id: p.user_id.as_str().to_string(),
                    joined_at: timestamp_to_rfc3339(p.joined_at.value()),
                })
                .collect(),
            capacity: room.capacity,
            created_at: timestamp_to_rfc3339(room.created_at.value()),
        }
    }
}

impl From<Exercise> for http::ExerciseDto {
    fn from(model: Exercise) -> Self {
        Self {
            name: model.name,
            equipment: model.equipment,
            gif_url: model.gif_url,
            body_part: model.body_part,
            target: model.target,
        }
    }
}

impl From<WorkoutPlan> for http::WorkoutPlanResponse {
    fn from(plan: WorkoutPlan) -> Self {
        Self {
            today: plan.today,
            plan: plan
                .slots
                .into_iter()
                .map(|slot| http::WorkoutSlotDto {
                    body_part: slot.key,
                    exercises: slot.items.into_iter().map(Into::into).collect(),
                })
                .collect(),
        }
    }
}

impl From<PlannedMeal> for http::PlannedMealDto {
    fn from(planned: PlannedMeal) -> Self {
        Self {
            meal_type: planned.meal_type.as_str().to_string(),
            id: planned.meal.id,
            title: planned.meal.title,
            ready_in_minutes: planned.meal.ready_in_minutes,
            servings: planned.meal.servings,
            source_url: planned.meal.source_url,
            video_url: planned.video_url,
        }
    }
}

impl From<DietPlan> for http::DietPlanResponse {
    fn from(plan: DietPlan) -> Self {
        Self {
            today: plan.today,
            target_calories: plan.target_calories,
            meals: plan.meals.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<FoodNutrition> for http::FoodNutritionDto {
    fn from(model: FoodNutrition) -> Self {
        Self {
            food_name: model.food_name,
            serving_qty: model.serving_qty,
            serving_unit: model.serving_unit,
            calories: model.calories,
            protein: model.protein,
            total_fat: model.total_fat,
            total_carbohydrate: model.total_carbohydrate,
        }
    }
}
