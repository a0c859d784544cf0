use patina::options::{AccentColor, NeutralColor};
use patina::palette::{SCALE_STEPS, ScaleEntries};
use patina::tokens::color::parse_step;
use strum::IntoEnumIterator;

fn assert_scale_shape(entries: &ScaleEntries) {
    for (index, (key, value)) in entries.iter().enumerate() {
        let step: usize = parse_step(key).unwrap().parse().unwrap();
        assert_eq!(step, index + 1, "key {key} out of order");
        assert!(value.starts_with('#'), "value {value} for {key}");
    }
}

#[test]
fn test_neutral_scales_are_complete() {
    for color in NeutralColor::iter() {
        let scales = color.scales();
        assert_scale_shape(&scales.light);
        assert_scale_shape(&scales.dark);
        assert_scale_shape(&scales.alpha);
        assert_scale_shape(&scales.dark_alpha);
    }
}

#[test]
fn test_accent_scales_are_complete() {
    for color in AccentColor::iter() {
        let scales = color.scales();
        assert_scale_shape(&scales.light);
        assert_scale_shape(&scales.dark);
        assert_scale_shape(&scales.alpha);
        assert_scale_shape(&scales.dark_alpha);
    }
}

#[test]
fn test_alpha_keys_carry_the_variant_marker() {
    for color in NeutralColor::iter() {
        let name = color.to_string();
        for (key, _) in &color.scales().alpha {
            assert!(key.starts_with(&name), "{key}");
            assert!(key.contains('A'), "{key}");
        }
    }
}

#[test]
fn test_olive_endpoints() {
    let scales = NeutralColor::Olive.scales();
    assert_eq!(scales.light[0], ("olive1", "#fcfdfc"));
    assert_eq!(scales.light[SCALE_STEPS - 1], ("olive12", "#1d211c"));
    assert_eq!(scales.dark[0], ("olive1", "#111210"));
}
