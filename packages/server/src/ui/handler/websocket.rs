//! WebSocket signaling connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::{sync::mpsc, task::JoinHandle};

use crate::{
    domain::{ClientCommand, ConnectionId},
    infrastructure::dto::websocket::ClientMessage,
    ui::state::AppState,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives messages from the rx channel and pushes them to the WebSocket sender.
///
/// Every event addressed to this connection (relayed signals, membership
/// notifications, rejections) goes through this single writer, so the order in
/// which they were pushed is the order the client sees.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (sender, mut receiver) = socket.split();

    // Create a channel for this connection to receive messages
    let (tx, rx) = mpsc::unbounded_channel();
    let connection_id = state.connect_peer_usecase.execute(tx).await;
    tracing::info!("Connection '{}' opened", connection_id);

    let state_clone = state.clone();

    // Spawn a task to receive frames from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error on '{}': {}", connection_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    tracing::debug!("Received frame from '{}': {}", connection_id, text);
                    handle_frame(&state_clone, connection_id, text.as_str()).await;
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", connection_id);
                    break;
                }
                _ => {}
            }
        }
    });

    // Spawn a task to push events for this connection
    let mut send_task = pusher_loop(rx, sender);

    // If any one of the tasks completes, abort the other
    let reader_finished = tokio::select! {
        _ = &mut recv_task => true,
        _ = &mut send_task => false,
    };
    if reader_finished {
        send_task.abort();
    } else {
        // A join still in flight must not land after the disconnect below.
        abort_and_join(recv_task).await;
    }

    match state.disconnect_peer_usecase.execute(&connection_id).await {
        Some((room, peer)) => tracing::info!(
            "Connection '{}' ({}) closed and left room '{}'",
            connection_id,
            peer.user_id,
            room.id
        ),
        None => tracing::info!("Connection '{}' closed", connection_id),
    }
}

/// Abort a task and wait until it has actually stopped running.
async fn abort_and_join(task: JoinHandle<()>) {
    task.abort();
    let _ = task.await;
}

/// Parse one client frame and dispatch it to the matching usecase.
///
/// Anything that cannot be acted upon is answered with an `error` event to the
/// sender only; the connection stays open.
async fn handle_frame(state: &AppState, connection_id: ConnectionId, text: &str) {
    let command = match parse_command(text) {
        Ok(command) => command,
        Err(reason) => {
            tracing::warn!("Malformed frame from '{}': {}", connection_id, reason);
            reject(state, connection_id, reason).await;
            return;
        }
    };

    match command {
        ClientCommand::JoinRoom { room_id, user_id } => {
            if let Err(e) = state
                .join_room_usecase
                .execute(connection_id, room_id, user_id)
                .await
            {
                tracing::warn!("Join rejected for '{}': {}", connection_id, e);
                reject(state, connection_id, e.to_string()).await;
            }
        }
        ClientCommand::Relay(signal) => {
            if let Err(e) = state
                .relay_signal_usecase
                .execute(&connection_id, signal)
                .await
            {
                tracing::warn!("Relay rejected for '{}': {}", connection_id, e);
                reject(state, connection_id, e.to_string()).await;
            }
        }
    }
}

fn parse_command(text: &str) -> Result<ClientCommand, String> {
    let message: ClientMessage =
        serde_json::from_str(text).map_err(|e| format!("malformed message: {e}"))?;
    ClientCommand::try_from(message).map_err(|e| format!("malformed message: {e}"))
}

async fn reject(state: &AppState, connection_id: ConnectionId, reason: String) {
    if let Err(e) = state.connect_peer_usecase.reject(&connection_id, reason).await {
        tracing::warn!("Failed to deliver error to '{}': {}", connection_id, e);
    }
}
