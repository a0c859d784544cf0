use crate::styling::css::CssRule;
use crate::tokens::reference;
use crate::tokens::typography::FONT_SIZES;

/// Baseline reset applied before any theming.
pub fn reset() -> Vec<CssRule> {
    vec![
        CssRule::new("*,\n*::before,\n*::after").property("box-sizing", "border-box"),
        CssRule::new("*").property("margin", "0"),
        CssRule::new("html,\nbody")
            .property("height", "100%")
            .property("font-size", "16px"),
        CssRule::new("body")
            .property("line-height", "1.5")
            .property("-webkit-font-smoothing", "antialiased"),
        CssRule::new("img,\npicture,\nvideo,\ncanvas,\nsvg")
            .property("display", "block")
            .property("max-width", "100%"),
        CssRule::new("input,\nbutton,\ntextarea,\nselect").property("font", "inherit"),
        CssRule::new("p,\nh1,\nh2,\nh3,\nh4,\nh5,\nh6").property("overflow-wrap", "break-word"),
        CssRule::new("#root,\n#__next").property("isolation", "isolate"),
    ]
}

/// Global typography: page colors, the heading ladder, paragraph rhythm.
pub fn typography(prefix: &str) -> Vec<CssRule> {
    let mut rules = vec![
        CssRule::new("body")
            .property("background-color", reference(prefix, "page-background"))
            .property("color", reference(prefix, "text-color"))
            .child(
                CssRule::new("&::selection")
                    .property("background-color", reference(prefix, "accent-9"))
                    .property("color", reference(prefix, "black")),
            ),
        CssRule::new("h1,\nh2,\nh3,\nh4,\nh5,\nh6").property("margin-bottom", "2rem"),
    ];

    for entry in FONT_SIZES.iter().filter(|entry| entry.name.starts_with('h')) {
        rules.push(
            CssRule::new(&format!("{},\n.{}", entry.name, entry.name))
                .property("font-size", entry.size)
                .property("line-height", entry.line_height),
        );
    }

    let mini = FONT_SIZES[7];
    rules.push(
        CssRule::new("small,\n.small")
            .property("font-size", mini.size)
            .property("line-height", mini.line_height),
    );

    rules.push(
        CssRule::new("p")
            .property("margin", "2rem 0")
            .child(
                CssRule::new("&:first-child,\n&:last-child")
                    .property("margin-top", "0")
                    .property("margin-bottom", "0"),
            )
            .child(CssRule::new("& + p").property("margin-top", "0")),
    );
    rules.push(CssRule::new("p,\nul,\nol,\nblockquote").property("line-height", "1.5rem"));

    rules
}
