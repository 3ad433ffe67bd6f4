use super::{PaneId, PaneState, WindowLevel};

#[test]
fn pane_id_parses_and_displays() {
    assert_eq!("left".parse::<PaneId>().expect("left"), PaneId::Left);
    assert_eq!("right".parse::<PaneId>().expect("right"), PaneId::Right);
    assert_eq!(PaneId::Left.to_string(), "left");
    assert!("center".parse::<PaneId>().is_err());
}

#[test]
fn window_level_serializes_untagged() {
    let range = WindowLevel::Range {
        lower: -100.0,
        upper: 300.0,
    };
    let serialized = serde_json::to_string(&range).expect("serialize range");
    assert_eq!(serialized, r#"{"lower":-100.0,"upper":300.0}"#);
    let restored: WindowLevel = serde_json::from_str(&serialized).expect("deserialize range");
    assert_eq!(restored, range);

    let center_width = WindowLevel::CenterWidth {
        center: 40.0,
        width: 400.0,
    };
    let serialized = serde_json::to_string(&center_width).expect("serialize center/width");
    let restored: WindowLevel = serde_json::from_str(&serialized).expect("deserialize");
    assert_eq!(restored, center_width);
}

#[test]
fn window_level_clone_is_deep_equal() {
    let original = WindowLevel::CenterWidth {
        center: 127.5,
        width: 255.0,
    };
    let copy = original.clone();
    assert_eq!(copy, original);
}

#[test]
fn pane_state_defaults_are_clear() {
    let state = PaneState::default();
    assert!(state.is_default());
    assert!(!state.inverted);
    assert!(state.saved_window_level.is_none());
    assert!(state.active_colormap.is_none());
}
