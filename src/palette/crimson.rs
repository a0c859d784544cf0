use super::{ScaleEntries, ScaleSet};

const LIGHT: ScaleEntries = [
    ("crimson1", "#fffcfd"),
    ("crimson2", "#fef7f9"),
    ("crimson3", "#ffe9f0"),
    ("crimson4", "#fedce7"),
    ("crimson5", "#facedd"),
    ("crimson6", "#f3bed1"),
    ("crimson7", "#eaacc3"),
    ("crimson8", "#e093b2"),
    ("crimson9", "#e93d82"),
    ("crimson10", "#df3478"),
    ("crimson11", "#cb1d63"),
    ("crimson12", "#621639"),
];

const DARK: ScaleEntries = [
    ("crimson1", "#191114"),
    ("crimson2", "#201318"),
    ("crimson3", "#381525"),
    ("crimson4", "#4d122f"),
    ("crimson5", "#5c1839"),
    ("crimson6", "#6d2545"),
    ("crimson7", "#873356"),
    ("crimson8", "#b0436e"),
    ("crimson9", "#e93d82"),
    ("crimson10", "#ee518a"),
    ("crimson11", "#ff92ad"),
    ("crimson12", "#fdd3e8"),
];

const ALPHA: ScaleEntries = [
    ("crimsonA1", "#ff005503"),
    ("crimsonA2", "#e0004008"),
    ("crimsonA3", "#ff005216"),
    ("crimsonA4", "#f8005123"),
    ("crimsonA5", "#e5004f31"),
    ("crimsonA6", "#d0004b41"),
    ("crimsonA7", "#bf004753"),
    ("crimsonA8", "#b6004a6c"),
    ("crimsonA9", "#e2005bc2"),
    ("crimsonA10", "#d70056cb"),
    ("crimsonA11", "#c4004fe2"),
    ("crimsonA12", "#530026e9"),
];

const DARK_ALPHA: ScaleEntries = [
    ("crimsonA1", "#f4126709"),
    ("crimsonA2", "#f22f7a11"),
    ("crimsonA3", "#fe2a8b2a"),
    ("crimsonA4", "#fd158741"),
    ("crimsonA5", "#fd278f51"),
    ("crimsonA6", "#fe459763"),
    ("crimsonA7", "#fd559b7f"),
    ("crimsonA8", "#fe5b9bab"),
    ("crimsonA9", "#fe418de8"),
    ("crimsonA10", "#ff5693ed"),
    ("crimsonA11", "#ff92ad"),
    ("crimsonA12", "#ffd5eafd"),
];

pub const CRIMSON: ScaleSet = ScaleSet {
    light: LIGHT,
    dark: DARK,
    alpha: ALPHA,
    dark_alpha: DARK_ALPHA,
};
