use crate::colormap::TransferFunctionSample;
use crate::model::WindowLevel;

use super::{PaneViewer, RecordingViewer, SpatialTransform, ViewerError};

#[test]
fn detached_viewer_reports_not_ready() {
    let mut viewer = RecordingViewer::detached("frame-1");
    assert!(matches!(viewer.camera(), Err(ViewerError::NotReady(_))));
    assert!(matches!(viewer.render(), Err(ViewerError::NotReady(_))));
    // Calls are still recorded, so tests can assert what was attempted.
    assert_eq!(viewer.calls(), vec!["camera", "render"]);
}

#[test]
fn reload_discards_manipulation_state() {
    let mut viewer = RecordingViewer::new("frame-1", (0.0, 255.0));
    let mut camera = viewer.camera().expect("camera");
    camera.parallel_scale = 0.343;
    viewer.set_camera(&camera).expect("set camera");
    let mut transform = viewer.spatial_transform().expect("transform");
    transform.rotation_deg = 90.0;
    transform.scale[0] = -1.0;
    viewer.set_spatial_transform(&transform).expect("set transform");
    let mut properties = viewer.display_properties().expect("properties");
    properties.invert = true;
    viewer.set_display_properties(&properties).expect("set properties");
    viewer
        .add_color_point(TransferFunctionSample {
            value: 0.0,
            r: 1.0,
            g: 0.0,
            b: 0.0,
        })
        .expect("add point");
    viewer.set_lut_coloring(true).expect("lut on");

    viewer.reload_frame("frame-1").expect("reload");

    assert_eq!(viewer.current_camera().parallel_scale, 1.0);
    assert_eq!(viewer.current_transform(), SpatialTransform::identity());
    assert!(!viewer.current_properties().invert);
    assert!(viewer.color_points().is_empty());
    assert!(!viewer.lut_coloring());
    assert_eq!(viewer.reload_count(), 1);
}

#[test]
fn reload_of_an_unknown_frame_fails() {
    let mut viewer = RecordingViewer::new("frame-1", (0.0, 255.0));
    assert!(matches!(
        viewer.reload_frame("frame-2"),
        Err(ViewerError::FrameUnavailable(id)) if id == "frame-2"
    ));
}

#[test]
fn window_level_round_trips_through_display_properties() {
    let viewer = RecordingViewer::new("frame-1", (0.0, 255.0)).with_window_level(
        WindowLevel::CenterWidth {
            center: 40.0,
            width: 400.0,
        },
    );
    let properties = viewer.display_properties().expect("properties");
    assert_eq!(
        properties.window_level,
        Some(WindowLevel::CenterWidth {
            center: 40.0,
            width: 400.0,
        })
    );
}
