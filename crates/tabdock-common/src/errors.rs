use crate::types::{GroupId, TabId};

/// Errors surfaced by a tab host when a command targets state that no longer
/// exists or the host itself is gone.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("no such tab: {0}")]
    NoSuchTab(TabId),

    #[error("no such group: {0}")]
    NoSuchGroup(GroupId),

    #[error("host unavailable: {0}")]
    Unavailable(String),

    #[error("host error: {0}")]
    Other(String),
}
