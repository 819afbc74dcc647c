//! UseCase: 接続の切断
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectPeerUseCase::execute() メソッド
//!
//! ### どのような状況を想定しているか
//! - 正常系：ルームに残ったメンバーへ user-disconnected が届く
//! - エッジケース：最後のメンバーが抜けたルームは破棄される
//! - エッジケース：ルームに参加しないまま切断した接続

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, Peer, RelayEvent, Room, RoomRepository};

pub struct DisconnectPeerUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectPeerUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 接続を切断し、所属していたルームのメンバーへ通知する
    ///
    /// # Returns
    ///
    /// 所属していたルーム（削除後）と抜けた参加者。ルームに属していなければ `None`。
    pub async fn execute(&self, connection_id: &ConnectionId) -> Option<(Room, Peer)> {
        // 1. 以降この接続へは送信しない
        self.message_pusher.unregister_client(connection_id).await;

        // 2. ルームから削除
        let (room, peer) = self.repository.remove_peer(connection_id).await?;
        tracing::info!(
            "User '{}' left room '{}' ({} peers remaining)",
            peer.user_id,
            room.id,
            room.peers.len()
        );

        // 3. 残ったメンバーへ通知
        let targets: Vec<ConnectionId> = room.peers.iter().map(|p| p.connection_id).collect();
        if !targets.is_empty() {
            let event = RelayEvent::UserDisconnected {
                user_id: peer.user_id.clone(),
            };
            if let Err(e) = self.message_pusher.broadcast(targets, &event).await {
                tracing::warn!("Failed to broadcast user-disconnected: {}", e);
            }
        }

        Some((room, peer))
    }
}
