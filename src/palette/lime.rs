use super::{ScaleEntries, ScaleSet};

const LIGHT: ScaleEntries = [
    ("lime1", "#fcfdfa"),
    ("lime2", "#f8faf3"),
    ("lime3", "#eef6d6"),
    ("lime4", "#e2f0bd"),
    ("lime5", "#d3e7a6"),
    ("lime6", "#c2da91"),
    ("lime7", "#abc978"),
    ("lime8", "#8db654"),
    ("lime9", "#bdee63"),
    ("lime10", "#b0e64c"),
    ("lime11", "#5c7c2f"),
    ("lime12", "#37401c"),
];

const DARK: ScaleEntries = [
    ("lime1", "#11130c"),
    ("lime2", "#151a10"),
    ("lime3", "#1f2917"),
    ("lime4", "#29371d"),
    ("lime5", "#334423"),
    ("lime6", "#3d522a"),
    ("lime7", "#496231"),
    ("lime8", "#577538"),
    ("lime9", "#bdee63"),
    ("lime10", "#d4ff70"),
    ("lime11", "#bde56c"),
    ("lime12", "#e3f7ba"),
];

const ALPHA: ScaleEntries = [
    ("limeA1", "#66990005"),
    ("limeA2", "#6b95000c"),
    ("limeA3", "#96c80029"),
    ("limeA4", "#8fc60042"),
    ("limeA5", "#81bb0059"),
    ("limeA6", "#72aa006e"),
    ("limeA7", "#61990087"),
    ("limeA8", "#559200ab"),
    ("limeA9", "#93e4009c"),
    ("limeA10", "#8fdc00b3"),
    ("limeA11", "#375f00d0"),
    ("limeA12", "#1e2900e3"),
];

const DARK_ALPHA: ScaleEntries = [
    ("limeA1", "#11bb0003"),
    ("limeA2", "#78f7000a"),
    ("limeA3", "#9bfd4c1a"),
    ("limeA4", "#a7fe5c29"),
    ("limeA5", "#affe6537"),
    ("limeA6", "#b2fe6d46"),
    ("limeA7", "#b6ff6f57"),
    ("limeA8", "#b6fd6d6c"),
    ("limeA9", "#caff69ed"),
    ("limeA10", "#d4ff70"),
    ("limeA11", "#d1fe77e4"),
    ("limeA12", "#e9febff7"),
];

pub const LIME: ScaleSet = ScaleSet {
    light: LIGHT,
    dark: DARK,
    alpha: ALPHA,
    dark_alpha: DARK_ALPHA,
};
