mod catalog;
mod error;
mod preset;
mod transfer;

#[cfg(test)]
mod tests;

pub use catalog::{catalog, next_preset, preset, preset_names};
pub use error::{ColormapError, Result};
pub use preset::{ColormapPreset, ControlPoint};
pub use transfer::{TransferFunctionSample, build_transfer_function};
