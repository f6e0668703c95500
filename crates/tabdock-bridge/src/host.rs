//! The tab-management surface the bridge drives.

use async_trait::async_trait;
use tokio::sync::broadcast;

use tabdock_common::{GroupId, GroupState, Result, TabEvent, TabId, TabState};

/// Asynchronous tab-management primitives supplied by the embedding
/// application (a webview shell, a devtools adapter, a test double).
///
/// All mutations are fire-and-forget from the bridge's point of view: a
/// failed call is logged and dropped, never retried, and never reported back
/// to the socket peer.
#[async_trait]
pub trait TabHost: Send + Sync {
    /// All tabs in the current window, in display order.
    async fn tabs(&self) -> Result<Vec<TabState>>;

    /// All tab groups.
    async fn groups(&self) -> Result<Vec<GroupState>>;

    /// A single tab's live state.
    async fn tab(&self, id: TabId) -> Result<TabState>;

    /// Make the tab active in its window.
    async fn activate(&self, id: TabId) -> Result<()>;

    /// Remove the given tabs.
    async fn close(&self, ids: &[TabId]) -> Result<()>;

    /// Duplicate a tab, returning the new tab's id.
    async fn duplicate(&self, id: TabId) -> Result<TabId>;

    async fn set_pinned(&self, id: TabId, pinned: bool) -> Result<()>;

    /// Open a blank tab, returning its id.
    async fn create(&self) -> Result<TabId>;

    /// Add a tab to `group`, or to a freshly created group when `None`.
    /// Returns the group the tab ended up in.
    async fn group(&self, id: TabId, group: Option<GroupId>) -> Result<GroupId>;

    /// Remove a tab from its group.
    async fn ungroup(&self, id: TabId) -> Result<()>;

    /// Subscribe to mutation events. The bridge takes a fresh subscription
    /// per connection, so events raised while disconnected are dropped.
    fn subscribe(&self) -> broadcast::Receiver<TabEvent>;
}
