use crate::colormap::ColormapError;
use crate::model::PaneId;
use crate::viewer::ViewerError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ControllerError>;

#[derive(Debug, Error)]
pub enum ControllerError {
    /// Guard precondition: every manipulation requires a selected pane.
    #[error("no pane is selected")]
    NoPaneSelected,

    #[error("pane `{0}` is not bound to a rendering surface")]
    PaneNotBound(PaneId),

    #[error("colormap failure: {0}")]
    Colormap(#[from] ColormapError),

    #[error("viewer failure: {0}")]
    Viewer(#[from] ViewerError),
}
