use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{PaneState, WindowLevel};

use super::Action;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    pub action: Action,
    pub ok: bool,
    /// Failure description when the action was reported as failed; the
    /// requested visual change simply did not occur.
    pub error: Option<String>,
    pub duration_ms: u128,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaneSnapshot {
    pub selected: bool,
    pub inverted: bool,
    pub saved_window_level: Option<WindowLevel>,
    pub active_colormap: Option<String>,
}

impl PaneSnapshot {
    pub fn from_state(state: &PaneState, selected: bool) -> Self {
        Self {
            selected,
            inverted: state.inverted,
            saved_window_level: state.saved_window_level.clone(),
            active_colormap: state.active_colormap.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub session_name: Option<String>,
    pub steps: Vec<StepReport>,
    pub failed_steps: usize,
    pub final_states: BTreeMap<String, PaneSnapshot>,
}
