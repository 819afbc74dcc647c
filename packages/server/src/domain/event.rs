//! シグナリングのメッセージとサーバーからの通知イベント

use super::value_object::{RoomId, SignalPayload, UserId};

/// 中継するシグナリングメッセージの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    Offer,
    Answer,
    IceCandidate,
}

/// ピア間で中継されるシグナリングメッセージ
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub kind: SignalKind,
    pub payload: SignalPayload,
}

impl Signal {
    pub fn new(kind: SignalKind, payload: SignalPayload) -> Self {
        Self { kind, payload }
    }
}

/// クライアントから受け取るコマンド
#[derive(Debug, Clone, PartialEq)]
pub enum ClientCommand {
    JoinRoom { room_id: RoomId, user_id: UserId },
    Relay(Signal),
}

/// サーバーから接続へ送るイベント
#[derive(Debug, Clone, PartialEq)]
pub enum RelayEvent {
    /// 参加した本人への応答（参加後のメンバー一覧）
    RoomJoined {
        room_id: RoomId,
        user_ids: Vec<UserId>,
    },
    UserJoined {
        user_id: UserId,
    },
    UserDisconnected {
        user_id: UserId,
    },
    Signal {
        from: UserId,
        signal: Signal,
    },
    /// 要求元だけに返すエラー通知
    Rejected {
        reason: String,
    },
}
