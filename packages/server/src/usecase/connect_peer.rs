//! UseCase: 接続の登録と要求元へのエラー通知
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectPeerUseCase::execute() / reject()
//!
//! ### どのような状況を想定しているか
//! - 正常系：接続ごとに一意な ConnectionId が払い出され、送信先として登録される
//! - 異常系：要求が拒否された場合、エラーは要求元だけに届く

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePushError, MessagePusher, PusherChannel, RelayEvent};

/// ソケット接続を受け付けるユースケース
///
/// この時点ではどのルームにも属さない。ルームへの参加は `JoinRoomUseCase` が行う。
pub struct ConnectPeerUseCase {
    message_pusher: Arc<dyn MessagePusher>,
}

impl ConnectPeerUseCase {
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    /// 接続 ID を払い出し、送信チャンネルを登録する
    pub async fn execute(&self, sender: PusherChannel) -> ConnectionId {
        let connection_id = ConnectionId::generate();
        self.message_pusher
            .register_client(connection_id, sender)
            .await;
        connection_id
    }

    /// 拒否理由を要求元の接続だけに通知する
    pub async fn reject(
        &self,
        connection_id: &ConnectionId,
        reason: impl Into<String>,
    ) -> Result<(), MessagePushError> {
        let event = RelayEvent::Rejected {
            reason: reason.into(),
        };
        self.message_pusher.push_to(connection_id, &event).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::message_pusher::WebSocketMessagePusher;

    #[tokio::test]
    async fn test_connect_registers_unique_connections() {
        // テスト項目: 接続ごとに異なる ID が払い出される
        // given (前提条件):
        let usecase = ConnectPeerUseCase::new(Arc::new(WebSocketMessagePusher::default()));
        let (tx1, _rx1) = tokio::sync::mpsc::unbounded_channel();
        let (tx2, _rx2) = tokio::sync::mpsc::unbounded_channel();

        // when (操作):
        let a = usecase.execute(tx1).await;
        let b = usecase.execute(tx2).await;

        // then (期待する結果):
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_reject_is_delivered_only_to_requester() {
        // テスト項目: 拒否通知は要求元だけに届く
        // given (前提条件):
        let usecase = ConnectPeerUseCase::new(Arc::new(WebSocketMessagePusher::default()));
        let (tx1, mut rx1) = tokio::sync::mpsc::unbounded_channel();
        let (tx2, mut rx2) = tokio::sync::mpsc::unbounded_channel();
        let requester = usecase.execute(tx1).await;
        let _other = usecase.execute(tx2).await;

        // when (操作):
        usecase.reject(&requester, "room is full").await.unwrap();

        // then (期待する結果):
        let message: serde_json::Value = serde_json::from_str(&rx1.recv().await.unwrap()).unwrap();
        assert_eq!(message["type"], "error");
        assert_eq!(message["message"], "room is full");
        assert!(rx2.try_recv().is_err());
    }
}
