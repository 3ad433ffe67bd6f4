use serde::{Deserialize, Serialize};

use crate::colormap::TransferFunctionSample;
use crate::model::WindowLevel;

use super::Result;

/// Orthographic camera parameters. A smaller parallel scale means a larger
/// on-screen magnification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pub parallel_scale: f32,
}

/// Placement of the rendered surface: transform origin, per-axis scale and
/// rotation about the view-plane normal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpatialTransform {
    pub origin: [f32; 3],
    pub scale: [f32; 3],
    pub rotation_deg: f32,
}

impl SpatialTransform {
    pub fn identity() -> Self {
        Self {
            origin: [0.0; 3],
            scale: [1.0; 3],
            rotation_deg: 0.0,
        }
    }
}

impl Default for SpatialTransform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Axis-aligned bounds of the displayed image in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageBounds {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
    pub z_min: f32,
    pub z_max: f32,
}

impl ImageBounds {
    pub fn center(&self) -> [f32; 3] {
        [
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
            (self.z_min + self.z_max) / 2.0,
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayProperties {
    pub invert: bool,
    pub window_level: Option<WindowLevel>,
    pub colormap: Option<String>,
}

/// Adapter contract for one pane's external rendering surface.
///
/// This is the single well-defined seam to the rendering engine: the
/// manipulation core depends only on this trait and never probes for
/// optional capabilities. None of the setters implicitly redraw; callers
/// must issue [`PaneViewer::render`] for changes to become visible.
pub trait PaneViewer {
    fn camera(&self) -> Result<CameraState>;
    fn set_camera(&mut self, camera: &CameraState) -> Result<()>;
    /// Resets the camera so the displayed frame fits the pane.
    fn reset_camera(&mut self) -> Result<()>;

    fn spatial_transform(&self) -> Result<SpatialTransform>;
    fn set_spatial_transform(&mut self, transform: &SpatialTransform) -> Result<()>;
    fn image_bounds(&self) -> Result<ImageBounds>;

    fn display_properties(&self) -> Result<DisplayProperties>;
    fn set_display_properties(&mut self, properties: &DisplayProperties) -> Result<()>;

    /// Color transfer function slot. `commit_color_points` publishes the
    /// accumulated points to the engine (the "modified" notification).
    fn clear_color_points(&mut self) -> Result<()>;
    fn add_color_point(&mut self, sample: TransferFunctionSample) -> Result<()>;
    fn commit_color_points(&mut self) -> Result<()>;
    /// Switches between lookup-table-driven coloring and native grayscale.
    fn set_lut_coloring(&mut self, enabled: bool) -> Result<()>;

    fn intensity_range(&self) -> Result<(f32, f32)>;

    fn displayed_frame(&self) -> Result<String>;
    /// Reloads a frame from its source, discarding all transform, camera and
    /// display-property state. Implementations over an asynchronous engine
    /// block until the load completes.
    fn reload_frame(&mut self, frame_id: &str) -> Result<()>;

    fn render(&mut self) -> Result<()>;
}
