use serde::{Deserialize, Serialize};

/// The nine Chromium tab-group colors. Wire names are the lowercase strings
/// the browser reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupColor {
    Grey,
    Blue,
    Red,
    Yellow,
    Green,
    Pink,
    Purple,
    Cyan,
    Orange,
}

impl GroupColor {
    pub fn all() -> &'static [GroupColor] {
        &[
            Self::Grey,
            Self::Blue,
            Self::Red,
            Self::Yellow,
            Self::Green,
            Self::Pink,
            Self::Purple,
            Self::Cyan,
            Self::Orange,
        ]
    }

    /// The hex value Chromium renders for this color, for controllers that
    /// draw group headers.
    pub fn as_hex(&self) -> &'static str {
        match self {
            Self::Grey => "#5f6368",
            Self::Blue => "#1a73e8",
            Self::Red => "#d93025",
            Self::Yellow => "#fabb06",
            Self::Green => "#1e8e3e",
            Self::Pink => "#d01884",
            Self::Purple => "#9333e6",
            Self::Cyan => "#12b5cb",
            Self::Orange => "#e8710a",
        }
    }
}
