//! WebSocket signaling message DTOs.
//!
//! Every frame is a JSON object tagged by `type`.

use serde::{Deserialize, Serialize};

/// Message sent by a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum ClientMessage {
    JoinRoom { room_id: String, user_id: String },
    SendOffer { payload: serde_json::Value },
    SendAnswer { payload: serde_json::Value },
    SendIce { payload: serde_json::Value },
}

/// Message sent by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum ServerMessage {
    RoomJoined {
        room_id: String,
        users: Vec<String>,
    },
    UserJoined {
        user_id: String,
    },
    UserDisconnected {
        user_id: String,
    },
    ReceiveOffer {
        from: String,
        payload: serde_json::Value,
    },
    ReceiveAnswer {
        from: String,
        payload: serde_json::Value,
    },
    ReceiveIce {
        from: String,
        payload: serde_json::Value,
    },
    Error {
        message: String,
    },
}
