//! エンティティ定義

use super::{
    error::RoomError,
    value_object::{ConnectionId, Goal, RoomId, Timestamp, UserId},
};

/// ルームに参加している 1 接続
#[derive(Debug, Clone, PartialEq)]
pub struct Peer {
    pub connection_id: ConnectionId,
    pub user_id: UserId,
    pub joined_at: Timestamp,
}

impl Peer {
    pub fn new(connection_id: ConnectionId, user_id: UserId, joined_at: Timestamp) -> Self {
        Self {
            connection_id,
            user_id,
            joined_at,
        }
    }
}

/// シグナリングを中継する単位となるルーム
///
/// 最初の参加で暗黙的に作られ、最後の参加者が抜けると破棄される。
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: RoomId,
    pub peers: Vec<Peer>,
    pub created_at: Timestamp,
    /// `None` は人数無制限
    pub capacity: Option<usize>,
}

impl Room {
    pub fn with_capacity(id: RoomId, created_at: Timestamp, capacity: Option<usize>) -> Self {
        Self {
            id,
            peers: Vec::new(),
            created_at,
            capacity,
        }
    }

    pub fn add_peer(&mut self, peer: Peer) -> Result<(), RoomError> {
        if self.contains(&peer.connection_id) {
            return Err(RoomError::DuplicatePeer(peer.connection_id.to_string()));
        }
        if let Some(capacity) = self.capacity
            && self.peers.len() >= capacity
        {
            return Err(RoomError::RoomFull(capacity));
        }
        self.peers.push(peer);
        Ok(())
    }

    pub fn remove_peer(&mut self, connection_id: &ConnectionId) -> Option<Peer> {
        let index = self
            .peers
            .iter()
            .position(|p| &p.connection_id == connection_id)?;
        Some(self.peers.remove(index))
    }

    pub fn contains(&self, connection_id: &ConnectionId) -> bool {
        self.peers.iter().any(|p| &p.connection_id == connection_id)
    }

    /// 指定した接続以外の参加者
    pub fn other_peers(&self, connection_id: &ConnectionId) -> Vec<Peer> {
        self.peers
            .iter()
            .filter(|p| &p.connection_id != connection_id)
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }
}

/// プラン生成に使うユーザー情報
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub goal: Option<Goal>,
}
