use std::collections::BTreeMap;
use std::time::Instant;

use tracing::warn;

use crate::controller::PaneController;
use crate::viewer::PaneViewer;

use super::{Action, PaneSnapshot, Result, SessionReport, SessionSpec, StepReport};

/// Runs a scripted session against an already-bound controller.
///
/// Actions execute strictly in order through one controller, so no two
/// operations ever interleave. A failed action is recorded in the report
/// and execution continues with the next action.
pub fn run_session<V: PaneViewer>(
    spec: &SessionSpec,
    controller: &mut PaneController<V>,
) -> Result<SessionReport> {
    spec.validate()?;

    let mut steps = Vec::with_capacity(spec.actions.len());
    let mut failed_steps = 0;
    for action in &spec.actions {
        let started = Instant::now();
        let outcome = apply_action(controller, action);
        let duration_ms = started.elapsed().as_millis();
        let error = outcome.err().map(|error| error.to_string());
        if let Some(reason) = &error {
            failed_steps += 1;
            warn!(action = action.name(), %reason, "session action failed");
        }
        steps.push(StepReport {
            action: action.clone(),
            ok: error.is_none(),
            error,
            duration_ms,
        });
    }

    let mut final_states = BTreeMap::new();
    for pane in controller.bound_panes() {
        if let Some(state) = controller.pane_state(pane) {
            final_states.insert(
                pane.to_string(),
                PaneSnapshot::from_state(state, controller.is_selected(pane)),
            );
        }
    }

    Ok(SessionReport {
        session_name: spec.name.clone(),
        steps,
        failed_steps,
        final_states,
    })
}

fn apply_action<V: PaneViewer>(
    controller: &mut PaneController<V>,
    action: &Action,
) -> crate::controller::Result<()> {
    match action {
        Action::Select { pane } => controller.select_pane(*pane),
        Action::Deselect => {
            controller.clear_selection();
            Ok(())
        }
        Action::Zoom => controller.zoom(),
        Action::FlipHorizontal => controller.flip_horizontal(),
        Action::FlipVertical => controller.flip_vertical(),
        Action::Rotate => controller.rotate(),
        Action::Invert => controller.toggle_invert(),
        Action::Colormap => controller.cycle_colormap().map(|_| ()),
        Action::Reset => controller.reset(),
    }
}
