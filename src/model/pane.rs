use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{ModelError, WindowLevel};

/// One of the two side-by-side display regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaneId {
    Left,
    Right,
}

impl PaneId {
    pub fn as_str(self) -> &'static str {
        match self {
            PaneId::Left => "left",
            PaneId::Right => "right",
        }
    }
}

impl fmt::Display for PaneId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for PaneId {
    type Err = ModelError;

    fn from_str(raw: &str) -> super::Result<Self> {
        match raw {
            "left" => Ok(PaneId::Left),
            "right" => Ok(PaneId::Right),
            other => Err(ModelError::UnknownPane(other.to_string())),
        }
    }
}

/// Per-pane manipulation state.
///
/// Selection is deliberately not part of this record: the controller owns a
/// single `Option<PaneId>`, which makes "at most one pane selected" true by
/// construction.
///
/// Invariant: `saved_window_level.is_some() == inverted`. The snapshot is
/// populated when entering the inverted state and cleared when leaving it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaneState {
    pub inverted: bool,
    pub saved_window_level: Option<WindowLevel>,
    pub active_colormap: Option<String>,
}

impl PaneState {
    pub fn is_default(&self) -> bool {
        !self.inverted && self.saved_window_level.is_none() && self.active_colormap.is_none()
    }
}
