//! Registry of connected peers and their roles.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{mpsc, RwLock};

/// Which side of the relay a peer sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Pushes state payloads, receives commands.
    Bridge,
    /// Sends commands, receives state payloads.
    Controller,
}

struct Peer {
    role: Role,
    tx: mpsc::Sender<String>,
}

#[derive(Default)]
struct Inner {
    next_id: u64,
    peers: HashMap<u64, Peer>,
}

/// Shared peer registry. Cheap to clone; all accessors are async.
#[derive(Clone, Default)]
pub struct PeerStore {
    inner: Arc<RwLock<Inner>>,
}

impl PeerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a peer's send channel under `role`, returning its id.
    pub async fn register(&self, role: Role, tx: mpsc::Sender<String>) -> u64 {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let id = inner.next_id;
        inner.peers.insert(id, Peer { role, tx });
        id
    }

    pub async fn unregister(&self, id: u64) {
        self.inner.write().await.peers.remove(&id);
    }

    pub async fn count(&self, role: Role) -> usize {
        self.inner
            .read()
            .await
            .peers
            .values()
            .filter(|peer| peer.role == role)
            .count()
    }

    /// Forward a text frame to every peer of `role` except `from`.
    /// Returns how many peers accepted it; closed channels are skipped (the
    /// owning connection unregisters itself on exit).
    pub async fn forward(&self, role: Role, from: Option<u64>, text: &str) -> usize {
        let targets: Vec<mpsc::Sender<String>> = {
            let inner = self.inner.read().await;
            inner
                .peers
                .iter()
                .filter(|(id, peer)| peer.role == role && Some(**id) != from)
                .map(|(_, peer)| peer.tx.clone())
                .collect()
        };

        let mut delivered = 0;
        for tx in targets {
            if tx.send(text.to_string()).await.is_ok() {
                delivered += 1;
            }
        }
        delivered
    }
}
