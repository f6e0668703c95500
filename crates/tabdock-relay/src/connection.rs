//! Per-connection handler: classify the peer from its frames, then forward.

use std::net::SocketAddr;

use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;

use crate::frame::{self, FrameKind};
use crate::peers::{PeerStore, Role};

/// Handle a single WebSocket connection.
///
/// A peer has no role until it sends a classifiable frame: the first state
/// payload marks it a bridge, the first command a controller. Keep-alive
/// pings are filtered here and never classify or forward.
pub async fn handle_connection(
    ws: tokio_tungstenite::WebSocketStream<tokio::net::TcpStream>,
    addr: SocketAddr,
    store: PeerStore,
) {
    let (mut sink, mut stream) = ws.split();
    let (tx, mut rx) = mpsc::channel::<String>(256);
    let mut registered: Option<(u64, Role)> = None;

    loop {
        tokio::select! {
            // Frames routed to this peer → its WebSocket.
            Some(msg) = rx.recv() => {
                if sink.send(Message::Text(msg.into())).await.is_err() {
                    break;
                }
            }

            // Frames from this peer → the complementary role.
            frame = stream.next() => {
                match frame {
                    Some(Ok(Message::Text(text))) => {
                        match frame::classify(&text) {
                            FrameKind::Ping => {
                                // Bridge keep-alive; relevant only to the socket itself.
                            }
                            FrameKind::State => {
                                classify_once(&store, &mut registered, Role::Bridge, &tx, addr).await;
                                let from = registered.map(|(id, _)| id);
                                store.forward(Role::Controller, from, &text).await;
                            }
                            FrameKind::Command => {
                                classify_once(&store, &mut registered, Role::Controller, &tx, addr).await;
                                let from = registered.map(|(id, _)| id);
                                let delivered = store.forward(Role::Bridge, from, &text).await;
                                if delivered == 0 {
                                    tracing::debug!(peer = %addr, "No bridge connected for command");
                                }
                            }
                            FrameKind::Unknown => {
                                tracing::warn!(peer = %addr, "Dropping unclassifiable frame");
                            }
                        }
                    }
                    Some(Ok(Message::Ping(data))) => {
                        let _ = sink.send(Message::Pong(data)).await;
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(e)) => {
                        tracing::debug!(peer = %addr, error = %e, "WS error");
                        break;
                    }
                    _ => {}
                }
            }
        }
    }

    if let Some((id, role)) = registered {
        store.unregister(id).await;
        tracing::info!(peer = %addr, role = ?role, "Peer disconnected");
    }
}

/// Assign a role on the first classifiable frame; later frames never change it.
async fn classify_once(
    store: &PeerStore,
    registered: &mut Option<(u64, Role)>,
    role: Role,
    tx: &mpsc::Sender<String>,
    addr: SocketAddr,
) {
    if registered.is_none() {
        let id = store.register(role, tx.clone()).await;
        *registered = Some((id, role));
        tracing::info!(peer = %addr, role = ?role, "Peer classified");
    }
}
