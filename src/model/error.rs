use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModelError>;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown pane identifier: {0} (expected `left` or `right`)")]
    UnknownPane(String),
}
