use crate::styling::css::CssRule;

/// Layout and visibility helper classes shipped with the theme.
pub fn utilities() -> Vec<CssRule> {
    vec![
        CssRule::new(".wrap")
            .property("width", "100%")
            .property("margin", "0 auto"),
        CssRule::new(".wrap-sm").property("max-width", "48rem"),
        CssRule::new(".wrap-md").property("max-width", "56rem"),
        CssRule::new(".wrap-lg").property("max-width", "80rem"),
        CssRule::new(".wrap-px")
            .property("padding-left", "2rem")
            .property("padding-right", "2rem"),
        CssRule::new(".block-m")
            .property("margin-top", "6rem")
            .property("margin-bottom", "6rem"),
        CssRule::new(".block-p")
            .property("padding-top", "6rem")
            .property("padding-bottom", "6rem"),
        CssRule::new(".align--left")
            .property("margin-right", "auto")
            .property("justify-content", "flex-start"),
        CssRule::new(".align--right")
            .property("margin-left", "auto")
            .property("justify-content", "flex-end"),
        CssRule::new(".align--center")
            .property("margin", "auto")
            .property("justify-content", "center"),
        CssRule::new(".show").property("display", "block"),
        CssRule::new(".hide").property("display", "none"),
        CssRule::new(".card-clip")
            .property("clip-path", "inset(4px round 40px)")
            .child(CssRule::new("&:hover").property("clip-path", "inset(0px round 44px)")),
    ]
}
