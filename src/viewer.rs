mod api;
mod error;
mod recording;

#[cfg(test)]
mod tests;

pub use api::{CameraState, DisplayProperties, ImageBounds, PaneViewer, SpatialTransform};
pub use error::{Result, ViewerError};
pub use recording::{DEFAULT_INTENSITY_RANGE, RecordingViewer};
