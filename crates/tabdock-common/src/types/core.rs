use serde::{Deserialize, Serialize};
use std::fmt;

use super::GroupColor;

/// Host-assigned tab identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabId(pub i64);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab-{}", self.0)
    }
}

/// Host-assigned tab-group identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(pub i64);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group-{}", self.0)
    }
}

/// Live state of a single tab as reported by the host.
///
/// Carries `pinned`, which the wire snapshot omits; toggle_pin reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabState {
    pub id: TabId,
    pub title: String,
    pub active: bool,
    pub pinned: bool,
    /// `None` for ungrouped tabs.
    pub group: Option<GroupId>,
    pub favicon: Option<String>,
}

/// Live state of a tab group as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupState {
    pub id: GroupId,
    pub title: String,
    pub color: GroupColor,
}
