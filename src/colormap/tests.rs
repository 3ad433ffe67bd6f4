use super::{ColormapError, build_transfer_function, catalog, next_preset, preset, preset_names};

#[test]
fn catalog_has_the_fixed_cycle_order() {
    assert_eq!(
        preset_names(),
        vec![
            "jet",
            "hot",
            "plasma",
            "viridis",
            "magma",
            "turbo",
            "temperature",
            "perfusion",
        ]
    );
}

#[test]
fn every_catalog_preset_validates() {
    for preset in catalog() {
        preset.validate().expect("catalog preset is well formed");
    }
}

#[test]
fn unknown_preset_is_rejected() {
    assert!(matches!(
        preset("infrared"),
        Err(ColormapError::UnknownPreset(name)) if name == "infrared"
    ));
    assert!(matches!(
        next_preset(Some("infrared")),
        Err(ColormapError::UnknownPreset(_))
    ));
}

#[test]
fn cycle_visits_nine_states_and_returns_to_grayscale() {
    let mut current: Option<&str> = None;
    let mut seen = Vec::new();
    for _ in 0..9 {
        current = next_preset(current).expect("catalog member");
        seen.push(current);
    }
    assert_eq!(
        seen,
        vec![
            Some("jet"),
            Some("hot"),
            Some("plasma"),
            Some("viridis"),
            Some("magma"),
            Some("turbo"),
            Some("temperature"),
            Some("perfusion"),
            None,
        ]
    );
    // All nine outputs are distinct before the cycle repeats.
    for (left_index, left) in seen.iter().enumerate() {
        for right in seen.iter().skip(left_index + 1) {
            assert_ne!(left, right);
        }
    }
}

#[test]
fn transfer_function_spans_the_data_range_exactly() {
    for name in preset_names() {
        for (min, max) in [(0.0_f32, 4095.0_f32), (-1024.0, 3071.0), (0.1, 0.3)] {
            let samples = build_transfer_function(name, min, max).expect("samples");
            let preset = preset(name).expect("preset");
            assert_eq!(samples.len(), preset.points.len());
            assert_eq!(samples.first().expect("first").value, min);
            assert_eq!(samples.last().expect("last").value, max);
            for window in samples.windows(2) {
                assert!(window[0].value <= window[1].value);
            }
        }
    }
}

#[test]
fn transfer_function_preserves_channel_values() {
    let samples = build_transfer_function("temperature", 0.0, 100.0).expect("samples");
    assert_eq!(samples[0].value, 0.0);
    assert_eq!((samples[0].r, samples[0].g, samples[0].b), (0.0, 0.0, 1.0));
    assert_eq!(samples[1].value, 50.0);
    assert_eq!((samples[1].r, samples[1].g, samples[1].b), (1.0, 1.0, 1.0));
    assert_eq!(samples[2].value, 100.0);
    assert_eq!((samples[2].r, samples[2].g, samples[2].b), (1.0, 0.0, 0.0));
}

#[test]
fn empty_or_reversed_intensity_range_is_rejected() {
    assert!(matches!(
        build_transfer_function("jet", 10.0, 10.0),
        Err(ColormapError::InvalidIntensityRange { .. })
    ));
    assert!(matches!(
        build_transfer_function("jet", 10.0, -10.0),
        Err(ColormapError::InvalidIntensityRange { .. })
    ));
}
