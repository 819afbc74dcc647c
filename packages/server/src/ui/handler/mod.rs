pub mod http;
pub mod plan;
pub mod websocket;

pub use http::{get_room_detail, get_rooms, health_check};
pub use plan::{analyze_nutrition, get_diet_plan, get_exercises_by_body_part, get_workout_plan};
pub use websocket::websocket_handler;
