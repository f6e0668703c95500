use tokio::sync::broadcast;

use crate::types::{GroupId, TabId};

/// Tab-state mutations a host reports.
///
/// Every variant triggers the same reaction in the bridge (a fresh full
/// snapshot push); the payload exists for logging and for embedders with
/// finer-grained listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabEvent {
    Updated(TabId),
    Removed(TabId),
    Activated(TabId),
    Moved(TabId),
    GroupUpdated(GroupId),
}

/// Broadcast bus host implementations publish [`TabEvent`]s on.
///
/// Subscribers that fall behind lose the oldest events; that is safe here
/// because every event is handled by re-querying full state.
pub struct TabEventBus {
    sender: broadcast::Sender<TabEvent>,
}

impl TabEventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<TabEvent> {
        self.sender.subscribe()
    }

    /// Publish an event, returning the number of live subscribers.
    pub fn publish(&self, event: TabEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for TabEventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
