//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。サーバーを再起動するとルームは全て消えます。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ConnectionId, Peer, RepositoryError, Room, RoomError, RoomId, RoomRepository};

#[derive(Default)]
struct RoomStore {
    rooms: HashMap<RoomId, Room>,
    /// 接続 → 所属ルームの索引
    memberships: HashMap<ConnectionId, RoomId>,
}

/// インメモリ Room Repository 実装
pub struct InMemoryRoomRepository {
    store: Mutex<RoomStore>,
    /// 新しく作るルームの定員（`None` は無制限）
    room_capacity: Option<usize>,
}

impl InMemoryRoomRepository {
    /// 新しい InMemoryRoomRepository を作成
    pub fn new(room_capacity: Option<usize>) -> Self {
        Self {
            store: Mutex::new(RoomStore::default()),
            room_capacity,
        }
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn add_peer(&self, room_id: RoomId, peer: Peer) -> Result<Room, RepositoryError> {
        let mut store = self.store.lock().await;

        if let Some(current) = store.memberships.get(&peer.connection_id) {
            return Err(RepositoryError::AlreadyInRoom(current.as_str().to_string()));
        }

        let connection_id = peer.connection_id;
        let joined_at = peer.joined_at;
        let capacity = self.room_capacity;
        let room = store
            .rooms
            .entry(room_id.clone())
            .or_insert_with(|| Room::with_capacity(room_id.clone(), joined_at, capacity));

        let result = room.add_peer(peer).map(|_| room.clone());
        let room = match result {
            Ok(room) => room,
            Err(e) => {
                // 作成直後に失敗したルームは残さない
                if room.is_empty() {
                    store.rooms.remove(&room_id);
                }
                return Err(match e {
                    RoomError::RoomFull(capacity) => RepositoryError::RoomFull(capacity),
                    RoomError::DuplicatePeer(_) => {
                        RepositoryError::AlreadyInRoom(room_id.as_str().to_string())
                    }
                });
            }
        };

        store.memberships.insert(connection_id, room_id);
        Ok(room)
    }

    async fn remove_peer(&self, connection_id: &ConnectionId) -> Option<(Room, Peer)> {
        let mut store = self.store.lock().await;

        let room_id = store.memberships.remove(connection_id)?;
        let room = store.rooms.get_mut(&room_id)?;
        let peer = room.remove_peer(connection_id)?;
        let snapshot = room.clone();

        if snapshot.is_empty() {
            store.rooms.remove(&room_id);
            tracing::debug!("Room '{}' is empty and was removed", room_id);
        }

        Some((snapshot, peer))
    }

    async fn find_room_of(&self, connection_id: &ConnectionId) -> Option<Room> {
        let store = self.store.lock().await;
        let room_id = store.memberships.get(connection_id)?;
        store.rooms.get(room_id).cloned()
    }

    async fn get_room(&self, room_id: &RoomId) -> Option<Room> {
        let store = self.store.lock().await;
        store.rooms.get(room_id).cloned()
    }

    async fn get_rooms(&self) -> Vec<Room> {
        let store = self.store.lock().await;
        let mut rooms: Vec<Room> = store.rooms.values().cloned().collect();
        rooms.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str()));
        rooms
    }
}
