//! Domain layer: value objects, entities and the interfaces the usecases depend on.

pub mod cache;
pub mod entity;
pub mod error;
pub mod event;
pub mod message_pusher;
pub mod plan;
pub mod repository;
pub mod upstream;
pub mod value_object;

pub use cache::LookupCache;
pub use entity::{Peer, Room, User};
pub use error::{
    MessagePushError, RepositoryError, RoomError, UpstreamError, ValueObjectError,
};
pub use event::{ClientCommand, RelayEvent, Signal, SignalKind};
pub use message_pusher::{MessagePusher, PusherChannel};
pub use plan::{DietPlan, Exercise, FoodNutrition, Meal, PlannedMeal, Slot, WorkoutPlan};
pub use repository::{RoomRepository, UserRepository};
pub use upstream::{ExerciseSource, MealSource, NutritionSource, VideoSearchProvider};
pub use value_object::{
    BodyPart, ConnectionId, Goal, MealType, RoomId, SignalPayload, Timestamp, UserId,
};

#[cfg(test)]
pub use repository::MockUserRepository;
#[cfg(test)]
pub use upstream::{
    MockExerciseSource, MockMealSource, MockNutritionSource, MockVideoSearchProvider,
};
