use serde::{Deserialize, Serialize};

/// Tunables for the pane manipulation operations.
///
/// Zoom steps compose geometrically; the scale bounds keep repeated steps
/// from driving the parallel scale to zero or to infinity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Multiplier applied to the camera parallel scale per zoom step.
    /// 0.7 means roughly 1.43x magnification per invocation.
    pub zoom_step: f32,
    pub min_parallel_scale: f32,
    pub max_parallel_scale: f32,
    /// Rotation applied per rotate invocation, in degrees.
    pub rotation_step_deg: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            zoom_step: 0.7,
            min_parallel_scale: 1e-3,
            max_parallel_scale: 1e4,
            rotation_step_deg: 30.0,
        }
    }
}
