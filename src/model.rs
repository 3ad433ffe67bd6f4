mod error;
mod pane;
mod window_level;

#[cfg(test)]
mod tests;

pub use error::{ModelError, Result};
pub use pane::{PaneId, PaneState};
pub use window_level::WindowLevel;
