//! UseCase: ルーム情報の取得

use std::sync::Arc;

use crate::domain::{Room, RoomId, RoomRepository};

use super::error::GetRoomDetailError;

/// 全ルームの一覧を取得するユースケース
pub struct GetRoomsUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl GetRoomsUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// ルーム ID 順に並んだ一覧
    pub async fn execute(&self) -> Vec<Room> {
        self.repository.get_rooms().await
    }
}

/// ルームの詳細を取得するユースケース
pub struct GetRoomDetailUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl GetRoomDetailUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, room_id: String) -> Result<Room, GetRoomDetailError> {
        let room_id = RoomId::new(room_id)?;
        self.repository
            .get_room(&room_id)
            .await
            .ok_or_else(|| GetRoomDetailError::RoomNotFound(room_id.into_string()))
    }
}
