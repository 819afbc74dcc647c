//! Shared application state.

use std::sync::Arc;

use crate::usecase::{
    AnalyzeFoodUseCase, ConnectPeerUseCase, DisconnectPeerUseCase, GetDietPlanUseCase,
    GetExercisesUseCase, GetRoomDetailUseCase, GetRoomsUseCase, GetWorkoutPlanUseCase,
    JoinRoomUseCase, RelaySignalUseCase,
};

use super::auth::JwtVerifier;

/// Shared application state
pub struct AppState {
    /// ConnectPeerUseCase（接続登録・拒否通知のユースケース）
    pub connect_peer_usecase: Arc<ConnectPeerUseCase>,
    /// JoinRoomUseCase（ルーム参加のユースケース）
    pub join_room_usecase: Arc<JoinRoomUseCase>,
    /// RelaySignalUseCase（シグナル中継のユースケース）
    pub relay_signal_usecase: Arc<RelaySignalUseCase>,
    /// DisconnectPeerUseCase（切断のユースケース）
    pub disconnect_peer_usecase: Arc<DisconnectPeerUseCase>,
    pub get_rooms_usecase: Arc<GetRoomsUseCase>,
    pub get_room_detail_usecase: Arc<GetRoomDetailUseCase>,
    pub get_workout_plan_usecase: Arc<GetWorkoutPlanUseCase>,
    pub get_diet_plan_usecase: Arc<GetDietPlanUseCase>,
    pub get_exercises_usecase: Arc<GetExercisesUseCase>,
    pub analyze_food_usecase: Arc<AnalyzeFoodUseCase>,
    /// Bearer token verifier for the plan endpoints
    pub jwt_verifier: Arc<JwtVerifier>,
}
