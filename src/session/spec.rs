use serde::{Deserialize, Serialize};

use crate::model::PaneId;
use crate::viewer::RecordingViewer;

use super::{Result, SessionError};

/// A user action against the controller, in the order the UI would emit
/// them. `select` carries the target pane; every manipulation acts on the
/// currently selected pane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Select { pane: PaneId },
    Deselect,
    Zoom,
    FlipHorizontal,
    FlipVertical,
    Rotate,
    Invert,
    Colormap,
    Reset,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Select { .. } => "select",
            Action::Deselect => "deselect",
            Action::Zoom => "zoom",
            Action::FlipHorizontal => "flip_horizontal",
            Action::FlipVertical => "flip_vertical",
            Action::Rotate => "rotate",
            Action::Invert => "invert",
            Action::Colormap => "colormap",
            Action::Reset => "reset",
        }
    }
}

/// How a scripted session materializes one pane's recording surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaneBinding {
    pub pane: PaneId,
    #[serde(default)]
    pub frame: Option<String>,
    #[serde(default = "default_intensity_range")]
    pub intensity_range: (f32, f32),
}

fn default_intensity_range() -> (f32, f32) {
    crate::viewer::DEFAULT_INTENSITY_RANGE
}

impl PaneBinding {
    pub fn with_defaults(pane: PaneId) -> Self {
        Self {
            pane,
            frame: None,
            intensity_range: default_intensity_range(),
        }
    }

    pub fn frame_id(&self) -> String {
        self.frame
            .clone()
            .unwrap_or_else(|| format!("{}-frame-1", self.pane))
    }

    pub fn build_viewer(&self) -> RecordingViewer {
        RecordingViewer::new(self.frame_id(), self.intensity_range)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSpec {
    pub name: Option<String>,
    /// Pane bindings for the recording surfaces; both panes with default
    /// frames and ranges when omitted.
    #[serde(default)]
    pub panes: Vec<PaneBinding>,
    #[serde(default)]
    pub actions: Vec<Action>,
}

impl SessionSpec {
    pub fn validate(&self) -> Result<()> {
        if self.actions.is_empty() {
            return Err(SessionError::Parse(
                "session must include at least one action".to_string(),
            ));
        }
        for (index, binding) in self.panes.iter().enumerate() {
            if self
                .panes
                .iter()
                .skip(index + 1)
                .any(|other| other.pane == binding.pane)
            {
                return Err(SessionError::Parse(format!(
                    "pane `{}` is bound more than once",
                    binding.pane
                )));
            }
            if binding.intensity_range.1 <= binding.intensity_range.0 {
                return Err(SessionError::Parse(format!(
                    "pane `{}` has an empty intensity range",
                    binding.pane
                )));
            }
        }
        Ok(())
    }

    /// The bindings to use for a run: the scripted ones, or both panes with
    /// defaults when the script names none.
    pub fn effective_bindings(&self) -> Vec<PaneBinding> {
        if self.panes.is_empty() {
            vec![
                PaneBinding::with_defaults(PaneId::Left),
                PaneBinding::with_defaults(PaneId::Right),
            ]
        } else {
            self.panes.clone()
        }
    }
}
