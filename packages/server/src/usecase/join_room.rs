//! UseCase: ルーム参加
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 参加者本人には参加後のメンバー一覧、既存メンバーには参加通知が届くことを保証
//! - 1 接続 1 ルーム、定員の制約が守られることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：空のルームへの参加、既存メンバーがいるルームへの参加
//! - 異常系：参加済みの接続による再参加、満員のルームへの参加

use std::sync::Arc;

use fitlink_shared::time::Clock;

use crate::domain::{
    ConnectionId, MessagePusher, Peer, RelayEvent, Room, RoomId, RoomRepository, Timestamp, UserId,
};

use super::error::JoinRoomError;

pub struct JoinRoomUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
}

impl JoinRoomUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            clock,
        }
    }

    /// 接続をルームに参加させる
    ///
    /// # Returns
    ///
    /// * `Ok(Room)` - 参加後のルーム
    /// * `Err(JoinRoomError)` - 参加済み、または満員
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        room_id: RoomId,
        user_id: UserId,
    ) -> Result<Room, JoinRoomError> {
        let peer = Peer::new(
            connection_id,
            user_id.clone(),
            Timestamp::new(self.clock.now_millis()),
        );
        let room = self.repository.add_peer(room_id, peer).await?;

        tracing::info!(
            "User '{}' joined room '{}' ({} peers)",
            user_id,
            room.id,
            room.peers.len()
        );

        // 1. 本人へ参加後のメンバー一覧
        let joined = RelayEvent::RoomJoined {
            room_id: room.id.clone(),
            user_ids: room.peers.iter().map(|p| p.user_id.clone()).collect(),
        };
        if let Err(e) = self.message_pusher.push_to(&connection_id, &joined).await {
            tracing::warn!("Failed to notify joiner '{}': {}", user_id, e);
        }

        // 2. 既存メンバーへ参加通知
        let targets: Vec<ConnectionId> = room
            .other_peers(&connection_id)
            .into_iter()
            .map(|p| p.connection_id)
            .collect();
        if !targets.is_empty() {
            let event = RelayEvent::UserJoined { user_id };
            if let Err(e) = self.message_pusher.broadcast(targets, &event).await {
                tracing::warn!("Failed to broadcast user-joined: {}", e);
            }
        }

        Ok(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{
        message_pusher::WebSocketMessagePusher, repository::InMemoryRoomRepository,
    };
    use fitlink_shared::time::FixedClock;
    use serde_json::Value;
    use tokio::sync::mpsc::UnboundedReceiver;

    struct Fixture {
        usecase: JoinRoomUseCase,
        message_pusher: Arc<WebSocketMessagePusher>,
    }

    fn create_fixture(capacity: Option<usize>) -> Fixture {
        let repository = Arc::new(InMemoryRoomRepository::new(capacity));
        let message_pusher = Arc::new(WebSocketMessagePusher::default());
        let usecase = JoinRoomUseCase::new(
            repository,
            message_pusher.clone(),
            Arc::new(FixedClock::new(1_000)),
        );
        Fixture {
            usecase,
            message_pusher,
        }
    }

    async fn connect(fixture: &Fixture) -> (ConnectionId, UnboundedReceiver<String>) {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        let connection_id = ConnectionId::generate();
        fixture
            .message_pusher
            .register_client(connection_id, tx)
            .await;
        (connection_id, rx)
    }

    fn room(value: &str) -> RoomId {
        RoomId::new(value.to_string()).unwrap()
    }

    fn user(value: &str) -> UserId {
        UserId::new(value.to_string()).unwrap()
    }

    fn next_json(rx: &mut UnboundedReceiver<String>) -> Value {
        serde_json::from_str(&rx.try_recv().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_first_peer_receives_room_joined() {
        // テスト項目: 空のルームに参加すると本人だけのメンバー一覧が届く
        // given (前提条件):
        let fixture = create_fixture(Some(2));
        let (alice, mut alice_rx) = connect(&fixture).await;

        // when (操作):
        let result = fixture.usecase.execute(alice, room("r1"), user("alice")).await;

        // then (期待する結果):
        let room = result.unwrap();
        assert_eq!(room.peers.len(), 1);
        assert_eq!(room.peers[0].joined_at, Timestamp::new(1_000));
        let message = next_json(&mut alice_rx);
        assert_eq!(message["type"], "room-joined");
        assert_eq!(message["roomId"], "r1");
        assert_eq!(message["users"], serde_json::json!(["alice"]));
    }

    #[tokio::test]
    async fn test_existing_peer_is_notified_of_join() {
        // テスト項目: 既存メンバーには user-joined が届き、本人には届かない
        // given (前提条件):
        let fixture = create_fixture(Some(2));
        let (alice, mut alice_rx) = connect(&fixture).await;
        let (bob, mut bob_rx) = connect(&fixture).await;
        fixture
            .usecase
            .execute(alice, room("r1"), user("alice"))
            .await
            .unwrap();
        next_json(&mut alice_rx);

        // when (操作):
        fixture
            .usecase
            .execute(bob, room("r1"), user("bob"))
            .await
            .unwrap();

        // then (期待する結果):
        let to_alice = next_json(&mut alice_rx);
        assert_eq!(to_alice["type"], "user-joined");
        assert_eq!(to_alice["userId"], "bob");
        let to_bob = next_json(&mut bob_rx);
        assert_eq!(to_bob["type"], "room-joined");
        assert_eq!(to_bob["users"], serde_json::json!(["alice", "bob"]));
        assert!(bob_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_join_twice_is_rejected() {
        // テスト項目: 参加済みの接続が再度参加するとエラーになる
        // given (前提条件):
        let fixture = create_fixture(None);
        let (alice, _alice_rx) = connect(&fixture).await;
        fixture
            .usecase
            .execute(alice, room("r1"), user("alice"))
            .await
            .unwrap();

        // when (操作):
        let result = fixture.usecase.execute(alice, room("r2"), user("alice")).await;

        // then (期待する結果):
        assert_eq!(result, Err(JoinRoomError::AlreadyInRoom("r1".to_string())));
    }

    #[tokio::test]
    async fn test_full_room_is_rejected() {
        // テスト項目: 定員に達したルームへの参加はエラーになり、既存メンバーには何も届かない
        // given (前提条件):
        let fixture = create_fixture(Some(2));
        let (alice, mut alice_rx) = connect(&fixture).await;
        let (bob, _bob_rx) = connect(&fixture).await;
        let (carol, _carol_rx) = connect(&fixture).await;
        fixture
            .usecase
            .execute(alice, room("r1"), user("alice"))
            .await
            .unwrap();
        fixture
            .usecase
            .execute(bob, room("r1"), user("bob"))
            .await
            .unwrap();
        while alice_rx.try_recv().is_ok() {}

        // when (操作):
        let result = fixture.usecase.execute(carol, room("r1"), user("carol")).await;

        // then (期待する結果):
        assert_eq!(result, Err(JoinRoomError::RoomFull(2)));
        assert!(alice_rx.try_recv().is_err());
    }
}
