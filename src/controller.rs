mod config;
mod error;
mod panes;


pub use config::ControllerConfig;
pub use error::{ControllerError, Result};
pub use panes::PaneController;
