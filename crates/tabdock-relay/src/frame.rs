//! Structural frame classification. The relay only needs to know which way
//! a frame flows, not whether its payload is valid; validation stays with
//! the endpoints.

/// What a text frame looks like, by shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// `{"type":"ping"}` keep-alive. Filtered, never forwarded.
    Ping,
    /// A state payload (object with a `tabs` key). Bridge → controllers.
    State,
    /// A command (object with an `action` key). Controller → bridges.
    Command,
    /// Anything else, including non-JSON.
    Unknown,
}

pub fn classify(text: &str) -> FrameKind {
    let value: serde_json::Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(_) => return FrameKind::Unknown,
    };
    let Some(object) = value.as_object() else {
        return FrameKind::Unknown;
    };
    if object.get("type").and_then(|v| v.as_str()) == Some("ping") {
        FrameKind::Ping
    } else if object.contains_key("action") {
        FrameKind::Command
    } else if object.contains_key("tabs") {
        FrameKind::State
    } else {
        FrameKind::Unknown
    }
}
