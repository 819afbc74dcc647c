//! ドメイン層のエラー型

use thiserror::Error;

/// Value Object の生成に失敗した
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{kind} must be at most {max} characters")]
    TooLong { kind: &'static str, max: usize },

    #[error("unknown goal '{0}'")]
    UnknownGoal(String),
}

/// Room エンティティの不変条件違反
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomError {
    #[error("room is full (capacity {0})")]
    RoomFull(usize),

    #[error("connection '{0}' is already a member of the room")]
    DuplicatePeer(String),
}

/// Repository 操作のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("connection is already in room '{0}'")]
    AlreadyInRoom(String),

    #[error("room is full (capacity {0})")]
    RoomFull(usize),
}

/// メッセージ送信（通知）のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    #[error("client '{0}' not found")]
    ClientNotFound(String),

    #[error("failed to push message: {0}")]
    PushFailed(String),

    #[error("failed to encode message: {0}")]
    Encode(String),
}

/// 外部 API 呼び出しのエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    /// HTTP 429。リトライ対象はこれだけ。
    #[error("rate limited by upstream")]
    RateLimited,

    #[error("upstream responded with status {0}")]
    Status(u16),

    #[error("upstream request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("failed to decode upstream response: {0}")]
    Decode(String),
}
