use patina::ThemeError;
use patina::options::{AccentColor, NeutralColor, RadiusSize, ResolvedOptions, ThemeOptions};

#[test]
fn test_default_options() {
    let resolved = ResolvedOptions::resolve(&ThemeOptions::default()).unwrap();
    assert_eq!(resolved.prefix, "bw");
    assert_eq!(resolved.scaling, 1.0);
    assert_eq!(resolved.neutral, NeutralColor::Olive);
    assert_eq!(resolved.accent, AccentColor::Lime);
    assert_eq!(resolved.radius, RadiusSize::Lg);
}

#[test]
fn test_partial_override_keeps_other_defaults() {
    let raw = ThemeOptions {
        prefix: Some("ui".to_string()),
        scaling: Some(2.0),
        ..ThemeOptions::default()
    };
    let resolved = ResolvedOptions::resolve(&raw).unwrap();
    assert_eq!(resolved.prefix, "ui");
    assert_eq!(resolved.scaling, 2.0);
    assert_eq!(resolved.neutral, NeutralColor::Olive);
    assert_eq!(resolved.accent, AccentColor::Lime);
    assert_eq!(resolved.radius, RadiusSize::Lg);
}

#[test]
fn test_unrecognized_neutral_fails() {
    let raw = ThemeOptions {
        neutral: Some("teal".to_string()),
        ..ThemeOptions::default()
    };
    let err = ResolvedOptions::resolve(&raw).unwrap_err();
    assert_eq!(
        err,
        ThemeError::UnrecognizedOption {
            field: "neutral",
            value: "teal".to_string(),
        }
    );
}

#[test]
fn test_unrecognized_radius_fails() {
    let raw = ThemeOptions {
        radius: Some("pill".to_string()),
        ..ThemeOptions::default()
    };
    let err = ResolvedOptions::resolve(&raw).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unrecognized value `pill` for theme option `radius`"
    );
}

#[test]
fn test_radius_factors() {
    assert_eq!(RadiusSize::None.factor(), "0");
    assert_eq!(RadiusSize::Sm.factor(), "0.75");
    assert_eq!(RadiusSize::Md.factor(), "1");
    assert_eq!(RadiusSize::Lg.factor(), "1.875");
    assert_eq!(RadiusSize::Full.factor(), "1.5");
}

#[test]
fn test_parse_options_from_toml() {
    let toml_str = r#"
        prefix = "ui"
        radius = "full"
    "#;
    let raw: ThemeOptions = toml::from_str(toml_str).unwrap();
    let resolved = ResolvedOptions::resolve(&raw).unwrap();
    assert_eq!(resolved.prefix, "ui");
    assert_eq!(resolved.radius, RadiusSize::Full);
    assert_eq!(resolved.scaling, 1.0);
}
