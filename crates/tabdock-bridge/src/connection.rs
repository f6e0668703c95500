//! Background connection loop with fixed-delay auto-reconnect.
//!
//! One task owns the socket. A sibling keep-alive task shares the sink;
//! snapshot pushes and command applications run as spawned tasks, so two
//! pushes triggered in quick succession may land in either order. The peer
//! treats whatever arrives last as current.

use std::sync::Arc;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::sync::{broadcast, mpsc, Mutex, RwLock};
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, warn};

use tabdock_common::{Command, GroupSnapshot, HostError, StatePayload, TabSnapshot};

use crate::dispatch::{self, Applied};
use crate::host::TabHost;
use crate::types::{BridgeCommand, BridgeConfig, BridgeEvent};

type WsSink = futures_util::stream::SplitSink<
    WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>,
    WsMessage,
>;

/// The keep-alive frame. Content-free; it only defeats idle teardown.
pub(crate) const PING_FRAME: &str = r#"{"type":"ping"}"#;

// ---------------------------------------------------------------------------
// Connection Loop
// ---------------------------------------------------------------------------

/// Background task managing the WebSocket connection.
///
/// Runs until the handle sends [`BridgeCommand::Disconnect`] (or is dropped
/// with the host's event channel closed); connect failures, socket errors,
/// and peer closes all lead back to a fixed-delay reconnect.
pub(crate) async fn connection_loop(
    config: BridgeConfig,
    host: Arc<dyn TabHost>,
    connected: Arc<RwLock<bool>>,
    event_tx: mpsc::Sender<BridgeEvent>,
    mut command_rx: mpsc::Receiver<BridgeCommand>,
) {
    loop {
        info!(endpoint = %config.endpoint, "Connecting to peer");

        match tokio::time::timeout(config.connect_timeout, connect_async(&config.endpoint)).await {
            Ok(Ok((ws, _))) => {
                let (sink, mut stream) = ws.split();
                let sink = Arc::new(Mutex::new(sink));
                let pusher = StatePusher {
                    host: Arc::clone(&host),
                    sink: Arc::clone(&sink),
                };

                // Fresh subscription per connection; events raised while
                // disconnected must not replay on reconnect. Taken before
                // `Connected` goes out so nothing published after the
                // announcement can be missed.
                let mut events = host.subscribe();

                // Full snapshot immediately on open.
                pusher.spawn_push();

                let keepalive = tokio::spawn(keepalive_task(
                    Arc::clone(&sink),
                    config.keepalive_interval,
                ));

                *connected.write().await = true;
                let _ = event_tx.send(BridgeEvent::Connected).await;

                let mut shutdown = false;

                loop {
                    tokio::select! {
                        event = events.recv() => match event {
                            Ok(event) => {
                                debug!(?event, "Host event");
                                pusher.spawn_push();
                            }
                            Err(broadcast::error::RecvError::Lagged(missed)) => {
                                // A single full push covers everything missed.
                                debug!(missed, "Host event backlog dropped");
                                pusher.spawn_push();
                            }
                            Err(broadcast::error::RecvError::Closed) => {
                                warn!("Host event channel closed, shutting down bridge");
                                shutdown = true;
                                break;
                            }
                        },

                        cmd = command_rx.recv() => match cmd {
                            Some(BridgeCommand::RequestUpdate) => pusher.spawn_push(),
                            Some(BridgeCommand::Disconnect) | None => {
                                let mut sink = sink.lock().await;
                                let _ = sink.send(WsMessage::Close(None)).await;
                                shutdown = true;
                                break;
                            }
                        },

                        frame = stream.next() => match frame {
                            Some(Ok(WsMessage::Text(text))) => handle_frame(&text, &host, &pusher),
                            Some(Ok(WsMessage::Close(_))) => {
                                info!("Peer closed connection");
                                break;
                            }
                            Some(Ok(_)) => {}
                            Some(Err(e)) => {
                                warn!(error = %e, "WebSocket error");
                                break;
                            }
                            None => break,
                        },
                    }
                }

                keepalive.abort();
                *connected.write().await = false;
                let _ = event_tx.send(BridgeEvent::Disconnected).await;
                if shutdown {
                    return;
                }
            }
            Ok(Err(e)) => {
                warn!(error = %e, "Failed to connect");
                let _ = event_tx
                    .send(BridgeEvent::Error(format!("connection failed: {e}")))
                    .await;
            }
            Err(_elapsed) => {
                warn!(timeout = ?config.connect_timeout, "Connect attempt timed out");
                let _ = event_tx
                    .send(BridgeEvent::Error("connect timed out".to_string()))
                    .await;
            }
        }

        if !wait_reconnect(config.reconnect_delay, &mut command_rx).await {
            return;
        }
    }
}

/// Fixed reconnect delay. State requests arriving while disconnected are
/// dropped, not queued; only `Disconnect` (or a dropped handle) ends the wait
/// early, returning `false`.
async fn wait_reconnect(delay: Duration, command_rx: &mut mpsc::Receiver<BridgeCommand>) -> bool {
    let sleep = tokio::time::sleep(delay);
    tokio::pin!(sleep);
    loop {
        tokio::select! {
            _ = &mut sleep => return true,
            cmd = command_rx.recv() => match cmd {
                Some(BridgeCommand::RequestUpdate) => {
                    debug!("Dropping state request while disconnected");
                }
                Some(BridgeCommand::Disconnect) | None => return false,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Inbound Frames
// ---------------------------------------------------------------------------

/// Parse and dispatch one inbound text frame. Malformed frames are logged
/// and discarded; recognized commands run in their own task so a slow host
/// call never stalls the socket.
fn handle_frame(text: &str, host: &Arc<dyn TabHost>, pusher: &StatePusher) {
    let cmd = match serde_json::from_str::<Command>(text) {
        Ok(cmd) => cmd,
        Err(e) => {
            warn!(error = %e, "Discarding malformed frame");
            return;
        }
    };

    debug!(action = cmd.label(), "Command received");
    let host = Arc::clone(host);
    let pusher = pusher.clone();
    tokio::spawn(async move {
        match dispatch::apply(host.as_ref(), cmd).await {
            Ok(Applied::Done) => {}
            Ok(Applied::StateRequested) => pusher.push().await,
            Err(e) => warn!(action = cmd.label(), error = %e, "Command failed"),
        }
    });
}

// ---------------------------------------------------------------------------
// State Pushes
// ---------------------------------------------------------------------------

/// Queries the host and writes one `StatePayload` frame to the shared sink.
/// Only exists while a connection does, so a push can never outlive the
/// socket it belongs to.
#[derive(Clone)]
struct StatePusher {
    host: Arc<dyn TabHost>,
    sink: Arc<Mutex<WsSink>>,
}

impl StatePusher {
    fn spawn_push(&self) {
        let pusher = self.clone();
        tokio::spawn(async move { pusher.push().await });
    }

    async fn push(&self) {
        let payload = match capture(self.host.as_ref()).await {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "State query failed");
                return;
            }
        };
        let json = match serde_json::to_string(&payload) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "State serialization failed");
                return;
            }
        };
        let mut sink = self.sink.lock().await;
        if let Err(e) = sink.send(WsMessage::Text(json.into())).await {
            debug!(error = %e, "State push failed, connection is going down");
        }
    }
}

/// Re-query live state and build the wire payload. Never cached.
async fn capture(host: &dyn TabHost) -> Result<StatePayload, HostError> {
    let tabs = host.tabs().await?;
    let groups = host.groups().await?;
    Ok(StatePayload {
        tabs: tabs.iter().map(TabSnapshot::from).collect(),
        groups: groups.iter().map(GroupSnapshot::from).collect(),
    })
}

// ---------------------------------------------------------------------------
// Keep-Alive
// ---------------------------------------------------------------------------

async fn keepalive_task<S>(sink: Arc<Mutex<S>>, interval: Duration)
where
    S: futures_util::Sink<WsMessage> + Unpin,
{
    let mut ticker = tokio::time::interval(interval);
    // The first tick completes immediately; the snapshot push owns t=0.
    ticker.tick().await;
    loop {
        ticker.tick().await;
        let mut sink = sink.lock().await;
        if sink.send(WsMessage::Text(PING_FRAME.into())).await.is_err() {
            break;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
