//! Outbound wire types. One `StatePayload` is the full tab/group state sent
//! as a single text frame; nothing here is persisted or diffed.

use serde::{Deserialize, Serialize};

use super::{GroupColor, GroupId, GroupState, TabId, TabState};

/// Wire form of a single tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSnapshot {
    pub id: TabId,
    pub title: String,
    pub active: bool,
    /// `null` on the wire for ungrouped tabs.
    #[serde(rename = "groupId")]
    pub group_id: Option<GroupId>,
    #[serde(rename = "favIcon")]
    pub fav_icon: Option<String>,
}

impl From<&TabState> for TabSnapshot {
    fn from(tab: &TabState) -> Self {
        Self {
            id: tab.id,
            title: tab.title.clone(),
            active: tab.active,
            group_id: tab.group,
            fav_icon: tab.favicon.clone(),
        }
    }
}

/// Wire form of a single tab group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSnapshot {
    pub id: GroupId,
    pub title: String,
    pub color: GroupColor,
}

impl From<&GroupState> for GroupSnapshot {
    fn from(group: &GroupState) -> Self {
        Self {
            id: group.id,
            title: group.title.clone(),
            color: group.color,
        }
    }
}

/// The full outbound state message, in host-reported order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatePayload {
    pub tabs: Vec<TabSnapshot>,
    pub groups: Vec<GroupSnapshot>,
}
