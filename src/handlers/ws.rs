//! Live update WebSocket

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use tokio::sync::broadcast::error::RecvError;
use uuid::Uuid;

use crate::{AppState, AppResult};
use crate::push::{PushHub, PushMessage};

pub async fn upgrade(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| stream_updates(socket, state.hub))
}

async fn send(socket: &mut WebSocket, message: &PushMessage) -> AppResult<()> {
    let text = serde_json::to_string(message)?;
    socket
        .send(Message::Text(text))
        .await
        .map_err(|e| crate::AppError::InternalError(e.to_string()))
}

/// Send an initial snapshot, then forward hub updates until the client
/// leaves or the hub stops.
async fn stream_updates(mut socket: WebSocket, hub: PushHub) {
    let client_id = Uuid::new_v4();
    let mut updates = hub.subscribe();
    let mut shutdown = hub.shutdown_signal();
    tracing::info!(%client_id, "Live client connected");

    match hub.snapshot() {
        Ok(messages) => {
            for message in &messages {
                if send(&mut socket, message).await.is_err() {
                    tracing::debug!(%client_id, "Client left before initial snapshot");
                    return;
                }
            }
        }
        Err(e) => tracing::error!(%client_id, "Failed to build initial snapshot: {}", e),
    }

    loop {
        tokio::select! {
            update = updates.recv() => match update {
                Ok(message) => {
                    if send(&mut socket, &message).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(%client_id, skipped, "Live client lagging, skipped updates");
                }
                Err(RecvError::Closed) => break,
            },
            incoming = socket.recv() => match incoming {
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                Some(Ok(_)) => {}
            },
            _ = shutdown.recv() => {
                let _ = socket.send(Message::Close(None)).await;
                break;
            }
        }
    }

    tracing::info!(%client_id, "Live client disconnected");
}
