use serde::Serialize;

use super::{ColormapError, Result};

/// One anchor of a transfer function, in the normalized [0, 1] domain.
/// Values between anchors are interpolated by the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ControlPoint {
    pub position: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ControlPoint {
    pub const fn new(position: f32, r: f32, g: f32, b: f32) -> Self {
        Self { position, r, g, b }
    }
}

/// A named colormap: an ordered control-point table spanning [0, 1].
#[derive(Debug, Clone, Serialize)]
pub struct ColormapPreset {
    pub name: &'static str,
    pub points: Vec<ControlPoint>,
}

impl ColormapPreset {
    pub fn new(name: &'static str, points: Vec<ControlPoint>) -> Self {
        Self { name, points }
    }

    /// Checks the structural contract: at least two points, positions
    /// strictly increasing from exactly 0.0 to exactly 1.0, all channel
    /// values inside [0, 1].
    pub fn validate(&self) -> Result<()> {
        if self.points.len() < 2 {
            return self.invalid("fewer than 2 control points");
        }
        if self.points[0].position != 0.0 {
            return self.invalid("first control point is not at position 0.0");
        }
        if self.points[self.points.len() - 1].position != 1.0 {
            return self.invalid("last control point is not at position 1.0");
        }
        for window in self.points.windows(2) {
            if window[1].position <= window[0].position {
                return self.invalid("control point positions are not strictly increasing");
            }
        }
        for point in &self.points {
            let in_unit = |value: f32| (0.0..=1.0).contains(&value);
            if !in_unit(point.r) || !in_unit(point.g) || !in_unit(point.b) {
                return self.invalid("channel value outside [0, 1]");
            }
        }
        Ok(())
    }

    fn invalid(&self, reason: &str) -> Result<()> {
        Err(ColormapError::InvalidPreset {
            name: self.name.to_string(),
            reason: reason.to_string(),
        })
    }
}
