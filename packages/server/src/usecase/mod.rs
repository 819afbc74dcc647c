//! UseCase 層
//!
//! ドメイン層の trait（Repository / MessagePusher / 上流 API）だけに依存してアプリケーションの処理を組み立てる。

pub mod analyze_food;
pub mod connect_peer;
pub mod disconnect_peer;
pub mod error;
pub mod get_diet_plan;
pub mod get_exercises;
pub mod get_rooms;
pub mod get_workout_plan;
pub mod join_room;
pub mod relay_signal;
pub mod retry;
pub mod slot_fetcher;
pub mod video_finder;

pub use analyze_food::AnalyzeFoodUseCase;
pub use connect_peer::ConnectPeerUseCase;
pub use disconnect_peer::DisconnectPeerUseCase;
pub use error::{GetRoomDetailError, JoinRoomError, LookupError, PlanError, RelaySignalError};
pub use get_diet_plan::GetDietPlanUseCase;
pub use get_exercises::GetExercisesUseCase;
pub use get_rooms::{GetRoomDetailUseCase, GetRoomsUseCase};
pub use get_workout_plan::{DEFAULT_EXERCISES_PER_SLOT, GetWorkoutPlanUseCase};
pub use join_room::JoinRoomUseCase;
pub use relay_signal::RelaySignalUseCase;
pub use retry::{RetryOutcome, RetryPolicy};
pub use slot_fetcher::SlotFetcher;
pub use video_finder::VideoFinder;
