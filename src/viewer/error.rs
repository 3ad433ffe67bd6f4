use thiserror::Error;

pub type Result<T> = std::result::Result<T, ViewerError>;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("viewer surface not attached yet: {0}")]
    NotReady(&'static str),

    #[error("viewer is missing a required capability: {0}")]
    CapabilityMissing(&'static str),

    #[error("frame not available: {0}")]
    FrameUnavailable(String),

    #[error("external viewer call failed: {0}")]
    CallFailed(String),
}
