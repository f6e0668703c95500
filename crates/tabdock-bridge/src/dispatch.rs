//! Inbound command dispatch: one exhaustive match from [`Command`] to
//! [`TabHost`] calls.

use tabdock_common::{Command, Result, TabId};

use crate::host::TabHost;

/// What the connection task should do after a command was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Applied {
    /// Nothing further; the host will raise events for any visible change.
    Done,
    /// The peer asked for an immediate state push.
    StateRequested,
}

/// Apply a single peer command against the host.
///
/// Host failures (stale target ids, host gone) propagate to the caller,
/// which logs them; there are no retries and nothing is reported back to
/// the peer.
pub(crate) async fn apply(host: &dyn TabHost, cmd: Command) -> Result<Applied> {
    match cmd {
        Command::Activate { id } => host.activate(id).await?,
        Command::Close { id } => host.close(&[id]).await?,
        Command::Duplicate { id } => {
            host.duplicate(id).await?;
        }
        Command::TogglePin { id } => {
            let tab = host.tab(id).await?;
            host.set_pinned(id, !tab.pinned).await?;
        }
        Command::CloseOthers { id } => {
            let others: Vec<TabId> = host
                .tabs()
                .await?
                .into_iter()
                .map(|tab| tab.id)
                .filter(|tab| *tab != id)
                .collect();
            host.close(&others).await?;
        }
        Command::NewTab => {
            host.create().await?;
        }
        Command::AddToGroup { id, group_id } => {
            host.group(id, Some(group_id)).await?;
        }
        Command::AddToNewGroup { id } => {
            host.group(id, None).await?;
        }
        Command::RemoveFromGroup { id } => host.ungroup(id).await?,
        Command::RequestUpdate => return Ok(Applied::StateRequested),
        Command::Unknown => {
            tracing::debug!("Ignoring unrecognized action");
        }
    }
    Ok(Applied::Done)
}
