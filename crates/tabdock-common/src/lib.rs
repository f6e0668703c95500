pub mod commands;
pub mod errors;
pub mod events;
pub mod types;

pub use commands::Command;
pub use errors::HostError;
pub use events::{TabEvent, TabEventBus};
pub use types::{
    GroupColor, GroupId, GroupSnapshot, GroupState, StatePayload, TabId, TabSnapshot, TabState,
};

pub type Result<T> = std::result::Result<T, HostError>;
