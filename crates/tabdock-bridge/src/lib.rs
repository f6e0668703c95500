//! Tab bridge: relays live tab/group state to a local WebSocket peer and
//! applies the peer's commands to the tab host.
//!
//! The bridge owns a single outbound connection. On open it pushes a full
//! [`tabdock_common::StatePayload`]; every host mutation event triggers a
//! fresh full push (no diffing, no caching); inbound frames are parsed as
//! [`tabdock_common::Command`]s and dispatched against the [`TabHost`]. On
//! close or error it reconnects after a fixed delay, indefinitely, until the
//! handle's `disconnect()` is called.

mod client;
mod connection;
mod dispatch;
mod host;
mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use client::TabBridge;
pub use host::TabHost;
pub use types::{BridgeConfig, BridgeEvent, DEFAULT_ENDPOINT};
