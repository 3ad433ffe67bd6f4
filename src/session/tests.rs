use crate::controller::PaneController;
use crate::model::PaneId;
use crate::viewer::RecordingViewer;

use super::{Action, PaneBinding, SessionSpec, load_spec, run_session, save_report};

fn bound_controller(spec: &SessionSpec) -> PaneController<RecordingViewer> {
    let mut controller = PaneController::default();
    for binding in spec.effective_bindings() {
        controller.bind_pane(binding.pane, binding.build_viewer());
    }
    controller
}

#[test]
fn session_executes_actions_in_order() {
    let spec = SessionSpec {
        name: Some("demo".to_string()),
        panes: Vec::new(),
        actions: vec![
            Action::Select {
                pane: PaneId::Left,
            },
            Action::Zoom,
            Action::Colormap,
            Action::Invert,
        ],
    };
    let mut controller = bound_controller(&spec);
    let report = run_session(&spec, &mut controller).expect("session");
    assert_eq!(report.steps.len(), 4);
    assert!(report.steps.iter().all(|step| step.ok));
    assert_eq!(report.failed_steps, 0);

    let left = report.final_states.get("left").expect("left snapshot");
    assert!(left.selected);
    assert!(left.inverted);
    assert!(left.saved_window_level.is_some());
    assert_eq!(left.active_colormap.as_deref(), Some("jet"));
    let right = report.final_states.get("right").expect("right snapshot");
    assert!(!right.selected);
    assert!(right.active_colormap.is_none());
}

#[test]
fn failed_actions_are_recorded_and_execution_continues() {
    let spec = SessionSpec {
        name: None,
        panes: Vec::new(),
        actions: vec![
            // No selection yet: the first zoom must fail with the guard.
            Action::Zoom,
            Action::Select {
                pane: PaneId::Right,
            },
            Action::Zoom,
        ],
    };
    let mut controller = bound_controller(&spec);
    let report = run_session(&spec, &mut controller).expect("session");
    assert_eq!(report.failed_steps, 1);
    assert!(!report.steps[0].ok);
    assert_eq!(
        report.steps[0].error.as_deref(),
        Some("no pane is selected")
    );
    assert!(report.steps[1].ok);
    assert!(report.steps[2].ok);
}

#[test]
fn empty_session_is_rejected() {
    let spec = SessionSpec {
        name: None,
        panes: Vec::new(),
        actions: Vec::new(),
    };
    let mut controller = bound_controller(&spec);
    assert!(run_session(&spec, &mut controller).is_err());
}

#[test]
fn duplicate_pane_bindings_are_rejected() {
    let spec = SessionSpec {
        name: None,
        panes: vec![
            PaneBinding::with_defaults(PaneId::Left),
            PaneBinding::with_defaults(PaneId::Left),
        ],
        actions: vec![Action::Reset],
    };
    assert!(spec.validate().is_err());
}

#[test]
fn spec_round_trips_through_yaml_and_report_through_json() {
    let directory = tempfile::tempdir().expect("tempdir");
    let script_path = directory.path().join("session.yaml");
    std::fs::write(
        &script_path,
        concat!(
            "name: scripted\n",
            "panes:\n",
            "  - pane: left\n",
            "    frame: study-42\n",
            "    intensity_range: [0.0, 255.0]\n",
            "actions:\n",
            "  - action: select\n",
            "    pane: left\n",
            "  - action: colormap\n",
            "  - action: reset\n",
        ),
    )
    .expect("write script");

    let spec = load_spec(&script_path).expect("load spec");
    assert_eq!(spec.name.as_deref(), Some("scripted"));
    assert_eq!(spec.panes.len(), 1);
    assert_eq!(spec.panes[0].frame_id(), "study-42");
    assert_eq!(spec.actions.len(), 3);

    let mut controller = bound_controller(&spec);
    let report = run_session(&spec, &mut controller).expect("session");
    assert_eq!(report.failed_steps, 0);

    let report_path = directory.path().join("report.json");
    save_report(&report_path, &report).expect("save report");
    let raw = std::fs::read_to_string(&report_path).expect("read report");
    let restored: super::SessionReport = serde_json::from_str(&raw).expect("parse report");
    assert_eq!(restored, report);
}

#[test]
fn reset_via_session_clears_colormap_state() {
    let spec = SessionSpec {
        name: None,
        panes: Vec::new(),
        actions: vec![
            Action::Select {
                pane: PaneId::Left,
            },
            Action::Colormap,
            Action::Colormap,
            Action::Reset,
        ],
    };
    let mut controller = bound_controller(&spec);
    let report = run_session(&spec, &mut controller).expect("session");
    let left = report.final_states.get("left").expect("left snapshot");
    assert!(left.active_colormap.is_none());
    assert!(!left.inverted);
    assert!(left.selected);
}
