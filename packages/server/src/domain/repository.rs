//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{ConnectionId, Peer, RepositoryError, Room, RoomId, User, UserId};

/// Room Repository trait
///
/// 全ルームのメンバーシップを管理する。1 つの接続が同時に所属できるルームは 1 つだけ。
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// ルームに参加者を追加（ルームがなければ作成）し、参加後のルームを返す
    async fn add_peer(&self, room_id: RoomId, peer: Peer) -> Result<Room, RepositoryError>;

    /// 接続をルームから削除し、削除後のルームと削除した参加者を返す
    ///
    /// 空になったルームはストアから破棄される。どのルームにも属していなければ `None`。
    async fn remove_peer(&self, connection_id: &ConnectionId) -> Option<(Room, Peer)>;

    /// 接続が所属しているルームを取得
    async fn find_room_of(&self, connection_id: &ConnectionId) -> Option<Room>;

    /// ルームを ID で取得
    async fn get_room(&self, room_id: &RoomId) -> Option<Room>;

    /// 全ルームを取得
    async fn get_rooms(&self) -> Vec<Room>;
}

/// User Repository trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, user_id: &UserId) -> Option<User>;
}
