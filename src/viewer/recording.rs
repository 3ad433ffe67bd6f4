use std::cell::RefCell;

use crate::colormap::TransferFunctionSample;
use crate::model::WindowLevel;

use super::api::{CameraState, DisplayProperties, ImageBounds, PaneViewer, SpatialTransform};
use super::{Result, ViewerError};

pub const DEFAULT_INTENSITY_RANGE: (f32, f32) = (0.0, 4095.0);
const DEFAULT_PARALLEL_SCALE: f32 = 1.0;

/// In-memory [`PaneViewer`] that models the engine-side state of one pane
/// and records every adapter call by name. Backs the session runner and the
/// controller tests; stands in for a real rendering surface.
#[derive(Debug)]
pub struct RecordingViewer {
    attached: bool,
    frame_id: String,
    intensity_range: (f32, f32),
    camera: CameraState,
    transform: SpatialTransform,
    bounds: ImageBounds,
    properties: DisplayProperties,
    initial_properties: DisplayProperties,
    color_points: Vec<TransferFunctionSample>,
    lut_coloring: bool,
    render_count: usize,
    reload_count: usize,
    calls: RefCell<Vec<&'static str>>,
}

impl RecordingViewer {
    pub fn new(frame_id: impl Into<String>, intensity_range: (f32, f32)) -> Self {
        let properties = DisplayProperties {
            invert: false,
            window_level: Some(WindowLevel::Range {
                lower: intensity_range.0,
                upper: intensity_range.1,
            }),
            colormap: None,
        };
        Self {
            attached: true,
            frame_id: frame_id.into(),
            intensity_range,
            camera: CameraState {
                parallel_scale: DEFAULT_PARALLEL_SCALE,
            },
            transform: SpatialTransform::identity(),
            bounds: ImageBounds {
                x_min: 0.0,
                x_max: 512.0,
                y_min: 0.0,
                y_max: 512.0,
                z_min: 0.0,
                z_max: 0.0,
            },
            properties: properties.clone(),
            initial_properties: properties,
            color_points: Vec::new(),
            lut_coloring: false,
            render_count: 0,
            reload_count: 0,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// A surface whose engine handle is not attached yet; every adapter call
    /// fails with [`ViewerError::NotReady`].
    pub fn detached(frame_id: impl Into<String>) -> Self {
        let mut viewer = Self::new(frame_id, DEFAULT_INTENSITY_RANGE);
        viewer.attached = false;
        viewer
    }

    pub fn with_window_level(mut self, window_level: WindowLevel) -> Self {
        self.properties.window_level = Some(window_level.clone());
        self.initial_properties.window_level = Some(window_level);
        self
    }

    /// Simulates a viewer that cannot report a window/level at all.
    pub fn without_window_level(mut self) -> Self {
        self.properties.window_level = None;
        self.initial_properties.window_level = None;
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub fn render_count(&self) -> usize {
        self.render_count
    }

    pub fn reload_count(&self) -> usize {
        self.reload_count
    }

    pub fn color_points(&self) -> &[TransferFunctionSample] {
        &self.color_points
    }

    pub fn lut_coloring(&self) -> bool {
        self.lut_coloring
    }

    pub fn current_properties(&self) -> &DisplayProperties {
        &self.properties
    }

    pub fn current_camera(&self) -> CameraState {
        self.camera
    }

    pub fn current_transform(&self) -> SpatialTransform {
        self.transform
    }

    fn record(&self, call: &'static str) -> Result<()> {
        self.calls.borrow_mut().push(call);
        if self.attached {
            Ok(())
        } else {
            Err(ViewerError::NotReady(
                "rendering surface is not attached to the pane",
            ))
        }
    }
}

impl PaneViewer for RecordingViewer {
    fn camera(&self) -> Result<CameraState> {
        self.record("camera")?;
        Ok(self.camera)
    }

    fn set_camera(&mut self, camera: &CameraState) -> Result<()> {
        self.record("set_camera")?;
        self.camera = *camera;
        Ok(())
    }

    fn reset_camera(&mut self) -> Result<()> {
        self.record("reset_camera")?;
        self.camera.parallel_scale = DEFAULT_PARALLEL_SCALE;
        Ok(())
    }

    fn spatial_transform(&self) -> Result<SpatialTransform> {
        self.record("spatial_transform")?;
        Ok(self.transform)
    }

    fn set_spatial_transform(&mut self, transform: &SpatialTransform) -> Result<()> {
        self.record("set_spatial_transform")?;
        self.transform = *transform;
        Ok(())
    }

    fn image_bounds(&self) -> Result<ImageBounds> {
        self.record("image_bounds")?;
        Ok(self.bounds)
    }

    fn display_properties(&self) -> Result<DisplayProperties> {
        self.record("display_properties")?;
        Ok(self.properties.clone())
    }

    fn set_display_properties(&mut self, properties: &DisplayProperties) -> Result<()> {
        self.record("set_display_properties")?;
        self.properties = properties.clone();
        Ok(())
    }

    fn clear_color_points(&mut self) -> Result<()> {
        self.record("clear_color_points")?;
        self.color_points.clear();
        Ok(())
    }

    fn add_color_point(&mut self, sample: TransferFunctionSample) -> Result<()> {
        self.record("add_color_point")?;
        self.color_points.push(sample);
        Ok(())
    }

    fn commit_color_points(&mut self) -> Result<()> {
        self.record("commit_color_points")
    }

    fn set_lut_coloring(&mut self, enabled: bool) -> Result<()> {
        self.record("set_lut_coloring")?;
        self.lut_coloring = enabled;
        Ok(())
    }

    fn intensity_range(&self) -> Result<(f32, f32)> {
        self.record("intensity_range")?;
        Ok(self.intensity_range)
    }

    fn displayed_frame(&self) -> Result<String> {
        self.record("displayed_frame")?;
        Ok(self.frame_id.clone())
    }

    fn reload_frame(&mut self, frame_id: &str) -> Result<()> {
        self.record("reload_frame")?;
        if frame_id != self.frame_id {
            return Err(ViewerError::FrameUnavailable(frame_id.to_string()));
        }
        // A reload discards all engine-side manipulation state.
        self.camera.parallel_scale = DEFAULT_PARALLEL_SCALE;
        self.transform = SpatialTransform::identity();
        self.properties = self.initial_properties.clone();
        self.color_points.clear();
        self.lut_coloring = false;
        self.reload_count += 1;
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        self.record("render")?;
        self.render_count += 1;
        Ok(())
    }
}
