use thiserror::Error;

pub type Result<T> = std::result::Result<T, ColormapError>;

#[derive(Debug, Error)]
pub enum ColormapError {
    #[error("unknown colormap preset: {0}")]
    UnknownPreset(String),

    #[error("invalid intensity range: min {min} must be below max {max}")]
    InvalidIntensityRange { min: f32, max: f32 },

    #[error("invalid preset `{name}`: {reason}")]
    InvalidPreset { name: String, reason: String },
}
