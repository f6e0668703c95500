//! Public handle for the bridge connection.

use std::sync::Arc;

use tokio::sync::{mpsc, RwLock};

use crate::connection::connection_loop;
use crate::host::TabHost;
use crate::types::{BridgeCommand, BridgeConfig, BridgeEvent};

/// Handle for a running bridge.
///
/// All methods are non-blocking and talk to the background connection task.
/// Dropping the handle does not stop the bridge; call [`TabBridge::disconnect`]
/// for an orderly shutdown.
pub struct TabBridge {
    command_tx: mpsc::Sender<BridgeCommand>,
    connected: Arc<RwLock<bool>>,
}

impl TabBridge {
    /// Start the background connection task against `host`.
    /// Returns `(bridge, event_receiver)`.
    pub fn connect(
        config: BridgeConfig,
        host: Arc<dyn TabHost>,
    ) -> (Self, mpsc::Receiver<BridgeEvent>) {
        let (event_tx, event_rx) = mpsc::channel(64);
        let (command_tx, command_rx) = mpsc::channel(16);
        let connected = Arc::new(RwLock::new(false));

        tokio::spawn(connection_loop(
            config,
            host,
            Arc::clone(&connected),
            event_tx,
            command_rx,
        ));

        (
            Self {
                command_tx,
                connected,
            },
            event_rx,
        )
    }

    /// Whether the socket is currently open.
    pub async fn is_connected(&self) -> bool {
        *self.connected.read().await
    }

    /// Ask for an immediate full state push. Dropped silently while
    /// disconnected; never queued.
    pub async fn request_update(&self) {
        let _ = self.command_tx.send(BridgeCommand::RequestUpdate).await;
    }

    /// Close the connection and end the background task. The bridge does not
    /// reconnect after this.
    pub async fn disconnect(&self) {
        let _ = self.command_tx.send(BridgeCommand::Disconnect).await;
    }
}
