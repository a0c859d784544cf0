//! Framework theme extensions - the `theme.extend` object consumed by the
//! host framework's configuration, serialized as JSON.

use serde_json::{Map, Value, json};

use crate::error::ThemeError;
use crate::options::{ResolvedOptions, ThemeOptions};
use crate::tokens::reference;
use crate::tokens::typography::FONT_SIZES;

/// Steps 1-12 of a palette color as `var()` references keyed by step.
pub fn palette_references(prefix: &str, semantic: &str) -> Value {
    let mut map = Map::new();
    for step in 1..=12 {
        map.insert(
            step.to_string(),
            Value::String(reference(prefix, &format!("{semantic}-{step}"))),
        );
    }
    Value::Object(map)
}

/// Resolve options and build the full `theme.extend` object.
pub fn theme_extension(options: &ThemeOptions) -> Result<Value, ThemeError> {
    let resolved = ResolvedOptions::resolve(options)?;
    let prefix = &resolved.prefix;

    let mut font_size = Map::new();
    for entry in FONT_SIZES {
        font_size.insert(
            entry.name.to_string(),
            json!([entry.size, { "lineHeight": entry.line_height }]),
        );
    }

    Ok(json!({
        "colors": {
            "black": reference(prefix, "black"),
            "neutral": palette_references(prefix, "neutral"),
            "accent": palette_references(prefix, "accent"),
        },
        "textColor": {
            "foreground": reference(prefix, "text-color"),
            "muted": reference(prefix, "text-muted"),
        },
        "borderRadius": {
            "DEFAULT": reference(prefix, "radius-2"),
            "sm": reference(prefix, "radius-1"),
            "md": reference(prefix, "radius-2"),
            "lg": reference(prefix, "radius-3"),
            "xl": reference(prefix, "radius-4"),
            "2xl": reference(prefix, "radius-5"),
            "3xl": reference(prefix, "radius-6"),
        },
        "backgroundColor": {
            "background": reference(prefix, "page-background"),
        },
        "borderColor": {
            "DEFAULT": reference(prefix, "border"),
        },
        "fontFamily": {
            "sans": ["Guminert", "ui-sans-serif", "system-ui", "sans-serif"],
            "title": ["Alternox", "ui-sans-serif", "system-ui", "sans-serif"],
        },
        "fontSize": font_size,
    }))
}
