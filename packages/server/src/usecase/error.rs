//! UseCase 層のエラー型

use thiserror::Error;

use crate::domain::{MessagePushError, RepositoryError, UpstreamError, ValueObjectError};

/// ルーム参加のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinRoomError {
    #[error("already in room '{0}'")]
    AlreadyInRoom(String),

    #[error("room is full (capacity {0})")]
    RoomFull(usize),
}

impl From<RepositoryError> for JoinRoomError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::AlreadyInRoom(room_id) => JoinRoomError::AlreadyInRoom(room_id),
            RepositoryError::RoomFull(capacity) => JoinRoomError::RoomFull(capacity),
        }
    }
}

/// シグナル中継のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelaySignalError {
    #[error("not in a room")]
    NotInRoom,

    #[error(transparent)]
    Push(#[from] MessagePushError),
}

/// ルーム情報取得のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetRoomDetailError {
    #[error("invalid room id: {0}")]
    InvalidRoomId(#[from] ValueObjectError),

    #[error("room '{0}' not found")]
    RoomNotFound(String),
}

/// プラン集約のエラー
///
/// 上流の失敗はスロット単位で吸収するため、ここにはユーザー起因のものだけが入る。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("User not found")]
    UserNotFound(String),

    #[error("User goal is missing")]
    MissingGoal,
}

/// 単一キーの上流検索のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("{0} must not be empty")]
    EmptyQuery(&'static str),

    #[error("upstream is still rate limiting after {0} attempts")]
    Exhausted(u32),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}
