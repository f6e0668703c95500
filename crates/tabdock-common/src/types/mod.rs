mod color;
mod core;
mod payload;

pub use self::core::*;
pub use color::*;
pub use payload::*;
