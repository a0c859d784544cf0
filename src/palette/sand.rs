use super::{ScaleEntries, ScaleSet};

const LIGHT: ScaleEntries = [
    ("sand1", "#fdfdfc"),
    ("sand2", "#f9f9f8"),
    ("sand3", "#f1f0ef"),
    ("sand4", "#e9e8e6"),
    ("sand5", "#e2e1de"),
    ("sand6", "#dad9d6"),
    ("sand7", "#cfceca"),
    ("sand8", "#bcbbb5"),
    ("sand9", "#8d8d86"),
    ("sand10", "#82827c"),
    ("sand11", "#63635e"),
    ("sand12", "#21201c"),
];

const DARK: ScaleEntries = [
    ("sand1", "#111110"),
    ("sand2", "#191918"),
    ("sand3", "#222221"),
    ("sand4", "#2a2a28"),
    ("sand5", "#31312e"),
    ("sand6", "#3b3a37"),
    ("sand7", "#494844"),
    ("sand8", "#62605b"),
    ("sand9", "#6f6d66"),
    ("sand10", "#7c7b74"),
    ("sand11", "#b5b3ad"),
    ("sand12", "#eeeeec"),
];

const ALPHA: ScaleEntries = [
    ("sandA1", "#55550003"),
    ("sandA2", "#25250007"),
    ("sandA3", "#20100010"),
    ("sandA4", "#1f150019"),
    ("sandA5", "#1f180021"),
    ("sandA6", "#19130029"),
    ("sandA7", "#19140035"),
    ("sandA8", "#1915014a"),
    ("sandA9", "#0f0f0079"),
    ("sandA10", "#0c0c0083"),
    ("sandA11", "#080800a1"),
    ("sandA12", "#060500e3"),
];

const DARK_ALPHA: ScaleEntries = [
    ("sandA1", "#00000000"),
    ("sandA2", "#f4f4f309"),
    ("sandA3", "#f6f6f513"),
    ("sandA4", "#fefef31b"),
    ("sandA5", "#fbfbeb23"),
    ("sandA6", "#fffaed2d"),
    ("sandA7", "#fffbed3c"),
    ("sandA8", "#fff9eb57"),
    ("sandA9", "#fffae965"),
    ("sandA10", "#fffdee73"),
    ("sandA11", "#fffcf4b0"),
    ("sandA12", "#fffffded"),
];

pub const SAND: ScaleSet = ScaleSet {
    light: LIGHT,
    dark: DARK,
    alpha: ALPHA,
    dark_alpha: DARK_ALPHA,
};
