use std::sync::OnceLock;

use super::{ColormapError, ColormapPreset, ControlPoint, Result};

fn point(position: f32, r: f32, g: f32, b: f32) -> ControlPoint {
    ControlPoint::new(position, r, g, b)
}

/// The fixed preset catalog. Order is significant: it is the cycle order of
/// [`next_preset`], and visual output depends on the literal channel values.
fn build_catalog() -> Vec<ColormapPreset> {
    vec![
        ColormapPreset::new(
            "jet",
            vec![
                point(0.0, 0.0, 0.0, 0.5),
                point(0.25, 0.0, 0.5, 1.0),
                point(0.5, 0.0, 1.0, 0.5),
                point(0.75, 1.0, 0.5, 0.0),
                point(1.0, 0.5, 0.0, 0.0),
            ],
        ),
        ColormapPreset::new(
            "hot",
            vec![
                point(0.0, 0.0, 0.0, 0.0),
                point(0.33, 1.0, 0.0, 0.0),
                point(0.66, 1.0, 1.0, 0.0),
                point(1.0, 1.0, 1.0, 1.0),
            ],
        ),
        ColormapPreset::new(
            "plasma",
            vec![
                point(0.0, 0.05, 0.03, 0.5),
                point(0.25, 0.4, 0.0, 0.6),
                point(0.5, 0.6, 0.15, 0.5),
                point(0.75, 0.9, 0.4, 0.2),
                point(1.0, 1.0, 0.9, 0.1),
            ],
        ),
        ColormapPreset::new(
            "viridis",
            vec![
                point(0.0, 0.267, 0.004, 0.329),
                point(0.25, 0.255, 0.255, 0.478),
                point(0.5, 0.164, 0.517, 0.431),
                point(0.75, 0.474, 0.764, 0.176),
                point(1.0, 0.988, 0.992, 0.019),
            ],
        ),
        ColormapPreset::new(
            "magma",
            vec![
                point(0.0, 0.0, 0.0, 0.0),
                point(0.25, 0.3, 0.05, 0.4),
                point(0.5, 0.8, 0.1, 0.4),
                point(0.75, 0.95, 0.45, 0.3),
                point(1.0, 1.0, 1.0, 0.6),
            ],
        ),
        ColormapPreset::new(
            "turbo",
            vec![
                point(0.0, 0.18, 0.0, 0.36),
                point(0.2, 0.0, 0.36, 0.9),
                point(0.4, 0.0, 0.73, 0.53),
                point(0.6, 0.67, 0.85, 0.0),
                point(0.8, 0.97, 0.46, 0.0),
                point(1.0, 0.4, 0.0, 0.0),
            ],
        ),
        ColormapPreset::new(
            "temperature",
            vec![
                point(0.0, 0.0, 0.0, 1.0),
                point(0.5, 1.0, 1.0, 1.0),
                point(1.0, 1.0, 0.0, 0.0),
            ],
        ),
        ColormapPreset::new(
            "perfusion",
            vec![
                point(0.0, 0.0, 0.8, 0.0),
                point(0.5, 0.8, 0.8, 0.0),
                point(1.0, 0.8, 0.0, 0.0),
            ],
        ),
    ]
}

pub fn catalog() -> &'static [ColormapPreset] {
    static CATALOG: OnceLock<Vec<ColormapPreset>> = OnceLock::new();
    CATALOG.get_or_init(build_catalog)
}

pub fn preset_names() -> Vec<&'static str> {
    catalog().iter().map(|preset| preset.name).collect()
}

pub fn preset(name: &str) -> Result<&'static ColormapPreset> {
    catalog()
        .iter()
        .find(|preset| preset.name == name)
        .ok_or_else(|| ColormapError::UnknownPreset(name.to_string()))
}

/// Deterministic successor over the catalog: `None` starts the cycle at the
/// first entry, the last entry wraps to `None` (grayscale), everything else
/// advances one slot. Together with grayscale this is a closed cycle of
/// length 9.
pub fn next_preset(current: Option<&str>) -> Result<Option<&'static str>> {
    let presets = catalog();
    let Some(current) = current else {
        return Ok(Some(presets[0].name));
    };
    let index = presets
        .iter()
        .position(|preset| preset.name == current)
        .ok_or_else(|| ColormapError::UnknownPreset(current.to_string()))?;
    if index + 1 == presets.len() {
        Ok(None)
    } else {
        Ok(Some(presets[index + 1].name))
    }
}
