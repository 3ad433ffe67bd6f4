use crate::controller::ControllerError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session specification parse failure: {0}")]
    Parse(String),

    #[error("session I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("session serialization failure: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("session YAML serialization failure: {0}")]
    SerdeYaml(#[from] serde_yaml::Error),

    #[error("controller failure: {0}")]
    Controller(#[from] ControllerError),
}
