use patina::options::ThemeOptions;
use patina::theme_extension;
use patina::tokens::typography;
use serde_json::json;

#[test]
fn test_palette_color_references() {
    let extend = theme_extension(&ThemeOptions::default()).unwrap();
    assert_eq!(extend["colors"]["black"], "var(--bw-black)");
    assert_eq!(extend["colors"]["neutral"]["5"], "var(--bw-neutral-5)");
    assert_eq!(extend["colors"]["accent"]["12"], "var(--bw-accent-12)");
    assert_eq!(extend["colors"]["neutral"].as_object().unwrap().len(), 12);
}

#[test]
fn test_border_radius_ladder() {
    let extend = theme_extension(&ThemeOptions::default()).unwrap();
    assert_eq!(extend["borderRadius"]["DEFAULT"], "var(--bw-radius-2)");
    assert_eq!(extend["borderRadius"]["sm"], "var(--bw-radius-1)");
    assert_eq!(extend["borderRadius"]["3xl"], "var(--bw-radius-6)");
}

#[test]
fn test_font_sizes() {
    let extend = theme_extension(&ThemeOptions::default()).unwrap();
    assert_eq!(
        extend["fontSize"]["h1"],
        json!(["3.5rem", { "lineHeight": "3.75rem" }])
    );
    assert_eq!(
        extend["fontSize"]["mini"],
        json!(["0.75rem", { "lineHeight": "1.5rem" }])
    );

    let h3 = typography::lookup("h3").unwrap();
    assert_eq!(extend["fontSize"]["h3"][0], h3.size);
}

#[test]
fn test_semantic_aliases() {
    let extend = theme_extension(&ThemeOptions::default()).unwrap();
    assert_eq!(extend["textColor"]["foreground"], "var(--bw-text-color)");
    assert_eq!(extend["textColor"]["muted"], "var(--bw-text-muted)");
    assert_eq!(
        extend["backgroundColor"]["background"],
        "var(--bw-page-background)"
    );
    assert_eq!(extend["borderColor"]["DEFAULT"], "var(--bw-border)");
    assert_eq!(extend["fontFamily"]["sans"][0], "Guminert");
}

#[test]
fn test_extension_honors_prefix() {
    let options = ThemeOptions {
        prefix: Some("ui".to_string()),
        ..ThemeOptions::default()
    };
    let extend = theme_extension(&options).unwrap();
    assert_eq!(extend["colors"]["black"], "var(--ui-black)");
    assert_eq!(extend["borderRadius"]["DEFAULT"], "var(--ui-radius-2)");
}
