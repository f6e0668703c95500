//! Configuration and event/command enums for the bridge.

use std::time::Duration;

/// Default peer endpoint, shared with the relay's default bind.
pub const DEFAULT_ENDPOINT: &str = "ws://127.0.0.1:8765";

/// Configuration for the bridge connection.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// WebSocket endpoint of the peer.
    pub endpoint: String,
    /// Fixed delay between a close/error and the next connect attempt.
    /// No growth, no jitter.
    pub reconnect_delay: Duration,
    /// Interval between `{"type":"ping"}` keep-alive frames while connected.
    pub keepalive_interval: Duration,
    /// How long a single connect attempt may take before it counts as failed.
    pub connect_timeout: Duration,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            reconnect_delay: Duration::from_millis(2000),
            keepalive_interval: Duration::from_millis(2000),
            connect_timeout: Duration::from_secs(15),
        }
    }
}

/// Events emitted by the bridge to the embedding application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeEvent {
    /// Connection established (a full snapshot push is already in flight).
    Connected,
    /// Connection lost; a reconnect is scheduled unless the bridge was
    /// disconnected explicitly.
    Disconnected,
    /// A connect attempt failed.
    Error(String),
}

/// Commands sent to the connection task from the [`crate::TabBridge`] handle.
#[derive(Debug)]
pub(crate) enum BridgeCommand {
    RequestUpdate,
    Disconnect,
}
