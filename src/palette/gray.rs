use super::{ScaleEntries, ScaleSet};

const LIGHT: ScaleEntries = [
    ("gray1", "#fcfcfc"),
    ("gray2", "#f9f9f9"),
    ("gray3", "#f0f0f0"),
    ("gray4", "#e8e8e8"),
    ("gray5", "#e0e0e0"),
    ("gray6", "#d9d9d9"),
    ("gray7", "#cecece"),
    ("gray8", "#bbbbbb"),
    ("gray9", "#8d8d8d"),
    ("gray10", "#838383"),
    ("gray11", "#646464"),
    ("gray12", "#202020"),
];

const DARK: ScaleEntries = [
    ("gray1", "#111111"),
    ("gray2", "#191919"),
    ("gray3", "#222222"),
    ("gray4", "#2a2a2a"),
    ("gray5", "#313131"),
    ("gray6", "#3a3a3a"),
    ("gray7", "#484848"),
    ("gray8", "#606060"),
    ("gray9", "#6e6e6e"),
    ("gray10", "#7b7b7b"),
    ("gray11", "#b4b4b4"),
    ("gray12", "#eeeeee"),
];

const ALPHA: ScaleEntries = [
    ("grayA1", "#00000003"),
    ("grayA2", "#00000006"),
    ("grayA3", "#0000000f"),
    ("grayA4", "#00000017"),
    ("grayA5", "#0000001f"),
    ("grayA6", "#00000026"),
    ("grayA7", "#00000031"),
    ("grayA8", "#00000044"),
    ("grayA9", "#00000072"),
    ("grayA10", "#0000007c"),
    ("grayA11", "#0000009b"),
    ("grayA12", "#000000df"),
];

const DARK_ALPHA: ScaleEntries = [
    ("grayA1", "#00000000"),
    ("grayA2", "#ffffff09"),
    ("grayA3", "#ffffff12"),
    ("grayA4", "#ffffff1b"),
    ("grayA5", "#ffffff22"),
    ("grayA6", "#ffffff2c"),
    ("grayA7", "#ffffff3b"),
    ("grayA8", "#ffffff55"),
    ("grayA9", "#ffffff64"),
    ("grayA10", "#ffffff72"),
    ("grayA11", "#ffffffaf"),
    ("grayA12", "#ffffffed"),
];

pub const GRAY: ScaleSet = ScaleSet {
    light: LIGHT,
    dark: DARK,
    alpha: ALPHA,
    dark_alpha: DARK_ALPHA,
};
