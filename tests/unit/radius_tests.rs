use patina::options::RadiusSize;
use patina::tokens::radius::radius_variables;

#[test]
fn test_md_radius() {
    let variables = radius_variables("bw", 1.0, RadiusSize::Md);
    assert_eq!(variables.len(), 8);
    assert_eq!(variables.get("--bw-scaling"), Some("1"));
    assert_eq!(variables.get("--bw-radius-factor"), Some("1"));
    assert_eq!(
        variables.get("--bw-radius-2"),
        Some("calc(4px * var(--bw-scaling) * var(--bw-radius-factor))")
    );
}

#[test]
fn test_none_radius_collapses_all_steps() {
    let variables = radius_variables("bw", 2.0, RadiusSize::None);
    assert_eq!(variables.get("--bw-scaling"), Some("2"));
    assert_eq!(variables.get("--bw-radius-factor"), Some("0"));
    // Every step still references the same factor variable, so factor zero
    // collapses all radii identically.
    for step in 1..=6 {
        let value = variables.get(&format!("--bw-radius-{step}")).unwrap();
        assert!(value.contains("var(--bw-radius-factor)"), "{value}");
    }
}

#[test]
fn test_base_pixel_ladder() {
    let variables = radius_variables("bw", 1.0, RadiusSize::Lg);
    for (step, base) in [(1, 3), (2, 4), (3, 6), (4, 8), (5, 12), (6, 16)] {
        assert_eq!(
            variables.get(&format!("--bw-radius-{step}")),
            Some(format!("calc({base}px * var(--bw-scaling) * var(--bw-radius-factor))").as_str())
        );
    }
}

#[test]
fn test_full_radius_emits_only_the_factor() {
    let variables = radius_variables("bw", 1.0, RadiusSize::Full);
    assert_eq!(variables.len(), 8);
    assert_eq!(variables.get("--bw-radius-factor"), Some("1.5"));
    assert_eq!(variables.get("--bw-radius-full"), None);
}

#[test]
fn test_fractional_scaling_stringified() {
    let variables = radius_variables("ui", 2.5, RadiusSize::Sm);
    assert_eq!(variables.get("--ui-scaling"), Some("2.5"));
    assert_eq!(variables.get("--ui-radius-factor"), Some("0.75"));
}

#[test]
fn test_radius_variables_idempotent() {
    let first = radius_variables("bw", 1.0, RadiusSize::Lg);
    let second = radius_variables("bw", 1.0, RadiusSize::Lg);
    assert_eq!(first, second);
}
