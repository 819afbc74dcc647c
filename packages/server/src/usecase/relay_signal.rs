//! UseCase: シグナリングメッセージの中継
//!
//! 送信元と同じルームにいる他の全メンバーへ、ペイロードを加工せずに転送する。
//! 送信元へのエコーは行わない。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, RelayEvent, RoomRepository, Signal};

use super::error::RelaySignalError;

pub struct RelaySignalUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl RelaySignalUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// シグナルを中継し、転送先の接続 ID を返す
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        signal: Signal,
    ) -> Result<Vec<ConnectionId>, RelaySignalError> {
        let room = self
            .repository
            .find_room_of(connection_id)
            .await
            .ok_or(RelaySignalError::NotInRoom)?;
        let sender = room
            .peers
            .iter()
            .find(|p| &p.connection_id == connection_id)
            .ok_or(RelaySignalError::NotInRoom)?;

        let targets: Vec<ConnectionId> = room
            .other_peers(connection_id)
            .into_iter()
            .map(|p| p.connection_id)
            .collect();
        if targets.is_empty() {
            tracing::debug!("No peers to relay {:?} in room '{}'", signal.kind, room.id);
            return Ok(targets);
        }

        tracing::debug!(
            "Relaying {:?} from '{}' to {} peer(s) in room '{}'",
            signal.kind,
            sender.user_id,
            targets.len(),
            room.id
        );
        let event = RelayEvent::Signal {
            from: sender.user_id.clone(),
            signal,
        };
        self.message_pusher
            .broadcast(targets.clone(), &event)
            .await?;

        Ok(targets)
    }
}
