use serde::{Deserialize, Serialize};

use crate::types::{GroupId, TabId};

/// Every command a peer can send to the bridge.
///
/// Wire form is one JSON object per frame, tagged by `action`, e.g.
/// `{"action":"activate","id":42}`. Actions this build does not recognize
/// parse into [`Command::Unknown`] and are ignored rather than rejected, so
/// newer controllers stay compatible with older bridges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Command {
    Activate {
        id: TabId,
    },
    Close {
        id: TabId,
    },
    Duplicate {
        id: TabId,
    },
    TogglePin {
        id: TabId,
    },
    CloseOthers {
        id: TabId,
    },
    NewTab,
    AddToGroup {
        id: TabId,
        #[serde(rename = "groupId")]
        group_id: GroupId,
    },
    AddToNewGroup {
        id: TabId,
    },
    RemoveFromGroup {
        id: TabId,
    },
    RequestUpdate,
    #[serde(other)]
    Unknown,
}

impl Command {
    /// Wire name of the action, for log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Command::Activate { .. } => "activate",
            Command::Close { .. } => "close",
            Command::Duplicate { .. } => "duplicate",
            Command::TogglePin { .. } => "toggle_pin",
            Command::CloseOthers { .. } => "close_others",
            Command::NewTab => "new_tab",
            Command::AddToGroup { .. } => "add_to_group",
            Command::AddToNewGroup { .. } => "add_to_new_group",
            Command::RemoveFromGroup { .. } => "remove_from_group",
            Command::RequestUpdate => "request_update",
            Command::Unknown => "unknown",
        }
    }
}
