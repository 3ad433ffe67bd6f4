use serde::Serialize;

use super::{ColormapError, Result, catalog};

/// A control point rescaled from the normalized domain into a pane's actual
/// data intensity range. Derived fresh for every application; never cached,
/// because the range can differ per loaded frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransferFunctionSample {
    pub value: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Materializes the named preset over `[data_min, data_max]`.
///
/// The endpoint-exact lerp form `min*(1-p) + max*p` guarantees the first and
/// last samples land on `data_min` and `data_max` with no rounding residue.
pub fn build_transfer_function(
    preset_name: &str,
    data_min: f32,
    data_max: f32,
) -> Result<Vec<TransferFunctionSample>> {
    let preset = catalog::preset(preset_name)?;
    if !(data_max > data_min) {
        return Err(ColormapError::InvalidIntensityRange {
            min: data_min,
            max: data_max,
        });
    }
    let samples = preset
        .points
        .iter()
        .map(|control| TransferFunctionSample {
            value: data_min * (1.0 - control.position) + data_max * control.position,
            r: control.r,
            g: control.g,
            b: control.b,
        })
        .collect();
    Ok(samples)
}
