//! Stylesheet assembly - palette, semantic and radius variables rendered into
//! `:root` / `.dark` blocks along with the base styles and utilities.

use crate::error::ThemeError;
use crate::options::{ResolvedOptions, ThemeOptions};
use crate::styling::css::CssRule;
use crate::tokens::color::scale_variables;
use crate::tokens::radius::radius_variables;
use crate::tokens::{reference, variable};

pub mod base;
pub mod utilities;

/// The palette variable blocks: light scales on `:root`, dark scales on
/// `.dark`, each with the derived black variable (light: neutral step 12,
/// dark: neutral step 1).
pub fn palette_rules(options: &ResolvedOptions) -> Result<Vec<CssRule>, ThemeError> {
    let prefix = &options.prefix;
    let neutral = options.neutral.scales();
    let accent = options.accent.scales();

    let root = CssRule::new(":root")
        .variables(scale_variables(prefix, "neutral", &neutral.light)?)
        .variables(scale_variables(prefix, "neutral-alpha", &neutral.alpha)?)
        .variables(scale_variables(prefix, "accent", &accent.light)?)
        .variables(scale_variables(prefix, "accent-alpha", &accent.alpha)?)
        .property(variable(prefix, "black"), neutral.light[11].1);

    let dark = CssRule::new(".dark")
        .variables(scale_variables(prefix, "neutral", &neutral.dark)?)
        .variables(scale_variables(prefix, "neutral-alpha", &neutral.dark_alpha)?)
        .variables(scale_variables(prefix, "accent", &accent.dark)?)
        .variables(scale_variables(prefix, "accent-alpha", &accent.dark_alpha)?)
        .property(variable(prefix, "black"), neutral.dark[0].1);

    Ok(vec![root, dark])
}

/// Radius variables plus the semantic aliases layered on top of the palette.
pub fn semantic_rules(options: &ResolvedOptions) -> Vec<CssRule> {
    let prefix = &options.prefix;

    let root = CssRule::new(":root")
        .variables(radius_variables(prefix, options.scaling, options.radius))
        .property(variable(prefix, "page-background"), "white")
        .property(variable(prefix, "text-color"), reference(prefix, "neutral-12"))
        .property(variable(prefix, "background"), reference(prefix, "neutral-1"))
        .property(
            variable(prefix, "text-accent-color"),
            reference(prefix, "accent-12"),
        )
        .property(
            variable(prefix, "text-accent-muted"),
            reference(prefix, "accent-10"),
        )
        .property(variable(prefix, "text-muted"), reference(prefix, "neutral-11"))
        .property(variable(prefix, "bg-muted"), reference(prefix, "neutral-3"))
        .property(
            variable(prefix, "bg-muted-hover"),
            reference(prefix, "neutral-4"),
        )
        .property(variable(prefix, "bg-accent"), reference(prefix, "accent-9"))
        .property(
            variable(prefix, "bg-accent-muted"),
            reference(prefix, "accent-alpha-3"),
        )
        .property(
            variable(prefix, "bg-accent-muted-hover"),
            reference(prefix, "accent-alpha-5"),
        )
        .property(variable(prefix, "border"), reference(prefix, "neutral-7"))
        .property(variable(prefix, "ring"), reference(prefix, "accent-8"));

    let dark = CssRule::new(".dark").property(
        variable(prefix, "page-background"),
        reference(prefix, "neutral-1"),
    );

    vec![root, dark]
}

/// Resolve options and render the complete theme stylesheet.
pub fn stylesheet(options: &ThemeOptions) -> Result<String, ThemeError> {
    let resolved = ResolvedOptions::resolve(options)?;

    let mut rules = base::reset();
    rules.extend(palette_rules(&resolved)?);
    rules.extend(semantic_rules(&resolved));
    rules.extend(base::typography(&resolved.prefix));
    rules.extend(utilities::utilities());

    tracing::debug!(
        prefix = %resolved.prefix,
        neutral = %resolved.neutral,
        accent = %resolved.accent,
        rules = rules.len(),
        "rendered theme stylesheet"
    );

    Ok(rules
        .into_iter()
        .map(|rule| rule.render())
        .collect::<Vec<_>>()
        .join("\n"))
}
