//! Scripted [`TabHost`] double for dispatch and connection tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::broadcast;

use tabdock_common::{
    GroupId, GroupState, HostError, Result, TabEvent, TabEventBus, TabId, TabState,
};

use crate::host::TabHost;

/// A successful mutation performed against the host, with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HostCall {
    Activate(TabId),
    Close(Vec<TabId>),
    Duplicate(TabId),
    SetPinned(TabId, bool),
    Create,
    Group(TabId, Option<GroupId>),
    Ungroup(TabId),
}

/// Shorthand for an unpinned, inactive, ungrouped tab.
pub(crate) fn tab(id: i64, title: &str) -> TabState {
    TabState {
        id: TabId(id),
        title: title.to_string(),
        active: false,
        pinned: false,
        group: None,
        favicon: None,
    }
}

/// In-memory host that validates targets, records mutations, and lets tests
/// publish mutation events.
pub(crate) struct ScriptedHost {
    tabs: Mutex<Vec<TabState>>,
    groups: Mutex<Vec<GroupState>>,
    calls: Mutex<Vec<HostCall>>,
    queries: AtomicUsize,
    bus: TabEventBus,
}

impl ScriptedHost {
    pub(crate) fn new(tabs: Vec<TabState>, groups: Vec<GroupState>) -> Self {
        Self {
            tabs: Mutex::new(tabs),
            groups: Mutex::new(groups),
            calls: Mutex::new(Vec::new()),
            queries: AtomicUsize::new(0),
            bus: TabEventBus::default(),
        }
    }

    pub(crate) fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of times the bridge queried the tab list.
    pub(crate) fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub(crate) fn tab_ids(&self) -> Vec<TabId> {
        self.tabs.lock().unwrap().iter().map(|t| t.id).collect()
    }

    pub(crate) fn publish(&self, event: TabEvent) {
        self.bus.publish(event);
    }

    fn record(&self, call: HostCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn require_tab(&self, id: TabId) -> Result<TabState> {
        self.tabs
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(HostError::NoSuchTab(id))
    }
}

#[async_trait]
impl TabHost for ScriptedHost {
    async fn tabs(&self) -> Result<Vec<TabState>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok(self.tabs.lock().unwrap().clone())
    }

    async fn groups(&self) -> Result<Vec<GroupState>> {
        Ok(self.groups.lock().unwrap().clone())
    }

    async fn tab(&self, id: TabId) -> Result<TabState> {
        self.require_tab(id)
    }

    async fn activate(&self, id: TabId) -> Result<()> {
        self.require_tab(id)?;
        self.record(HostCall::Activate(id));
        let mut tabs = self.tabs.lock().unwrap();
        for tab in tabs.iter_mut() {
            tab.active = tab.id == id;
        }
        Ok(())
    }

    async fn close(&self, ids: &[TabId]) -> Result<()> {
        for id in ids {
            self.require_tab(*id)?;
        }
        self.record(HostCall::Close(ids.to_vec()));
        self.tabs
            .lock()
            .unwrap()
            .retain(|tab| !ids.contains(&tab.id));
        Ok(())
    }

    async fn duplicate(&self, id: TabId) -> Result<TabId> {
        let mut copy = self.require_tab(id)?;
        self.record(HostCall::Duplicate(id));
        copy.id = TabId(id.0 + 1000);
        copy.active = false;
        let new_id = copy.id;
        self.tabs.lock().unwrap().push(copy);
        Ok(new_id)
    }

    async fn set_pinned(&self, id: TabId, pinned: bool) -> Result<()> {
        self.require_tab(id)?;
        self.record(HostCall::SetPinned(id, pinned));
        let mut tabs = self.tabs.lock().unwrap();
        if let Some(tab) = tabs.iter_mut().find(|t| t.id == id) {
            tab.pinned = pinned;
        }
        Ok(())
    }

    async fn create(&self) -> Result<TabId> {
        self.record(HostCall::Create);
        let mut tabs = self.tabs.lock().unwrap();
        let new_id = TabId(tabs.iter().map(|t| t.id.0).max().unwrap_or(0) + 1);
        tabs.push(tab(new_id.0, ""));
        Ok(new_id)
    }

    async fn group(&self, id: TabId, group: Option<GroupId>) -> Result<GroupId> {
        self.require_tab(id)?;
        self.record(HostCall::Group(id, group));
        let target = group.unwrap_or_else(|| {
            let groups = self.groups.lock().unwrap();
            GroupId(groups.iter().map(|g| g.id.0).max().unwrap_or(0) + 1)
        });
        let mut tabs = self.tabs.lock().unwrap();
        if let Some(tab) = tabs.iter_mut().find(|t| t.id == id) {
            tab.group = Some(target);
        }
        Ok(target)
    }

    async fn ungroup(&self, id: TabId) -> Result<()> {
        self.require_tab(id)?;
        self.record(HostCall::Ungroup(id));
        let mut tabs = self.tabs.lock().unwrap();
        if let Some(tab) = tabs.iter_mut().find(|t| t.id == id) {
            tab.group = None;
        }
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<TabEvent> {
        self.bus.subscribe()
    }
}
